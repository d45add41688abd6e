use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use super::listener::Listener;
use crate::config::{DemoVariant, PageConfig};
use crate::error::{describe_js, BindError};
use crate::phone::PhoneNumber;
use crate::telemetry::Telemetry;

pub const MODAL_ID: &str = "demoModal";
pub const ACTIVE_CLASS: &str = "active";
pub const PLACEHOLDER_NOTICE: &str =
    "Our live demo line is coming soon! Book a call below and we'll walk you through the AI receptionist.";

/// The dialog as its handlers see it in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    NotBuilt,
    Hidden,
    Visible,
}

/// What an open request has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStep {
    Alert,
    Show { build: bool },
}

impl ModalState {
    pub fn of(node: Option<&Element>) -> Self {
        match node {
            None => ModalState::NotBuilt,
            Some(node) if node.class_list().contains(ACTIVE_CLASS) => ModalState::Visible,
            Some(_) => ModalState::Hidden,
        }
    }

    pub fn open(self, variant: DemoVariant) -> OpenStep {
        match variant {
            DemoVariant::Placeholder => OpenStep::Alert,
            DemoVariant::Modal => OpenStep::Show {
                build: self == ModalState::NotBuilt,
            },
        }
    }

    /// Whether closing touches the page at all.
    pub fn close(self) -> bool {
        self != ModalState::NotBuilt
    }
}

const MIC_ICON: &str = r#"<svg width="40" height="40" viewBox="0 0 24 24" fill="currentColor"><path d="M12 15c1.66 0 3-1.34 3-3V6c0-1.66-1.34-3-3-3S9 4.34 9 6v6c0 1.66 1.34 3 3 3z"/><path d="M17 12c0 2.76-2.24 5-5 5s-5-2.24-5-5H5c0 3.53 2.61 6.43 6 6.92V22h2v-3.08c3.39-.49 6-3.39 6-6.92h-2z"/></svg>"#;
const PHONE_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><path d="M20.01 15.38c-1.23 0-2.42-.2-3.53-.56-.35-.12-.74-.03-1.01.24l-1.57 1.97c-2.83-1.35-5.48-3.9-6.89-6.83l1.95-1.66c.27-.28.35-.67.24-1.02-.37-1.11-.56-2.3-.56-3.53 0-.54-.45-.99-.99-.99H4.19C3.65 3 3 3.24 3 3.99 3 13.28 10.73 21 20.01 21c.71 0 .99-.63.99-1.18v-3.45c0-.54-.45-.99-.99-.99z"/></svg>"#;

/// Inner markup of `#demoModal`. Handlers are attached after insertion.
pub fn modal_markup(line: &PhoneNumber) -> String {
    format!(
        r#"<div class="demo-modal-overlay"></div>
<div class="demo-modal-content">
    <button class="demo-modal-close" type="button" aria-label="Close">&times;</button>
    <div class="demo-modal-header">
        <div class="demo-modal-icon">{mic}</div>
        <h3>Talk to Our AI Receptionist</h3>
        <p>Call now to experience how it handles live roofing inquiries.</p>
    </div>
    <a href="{href}" class="demo-option demo-option-primary">
        {phone}
        <div>
            <strong>Call {display}</strong>
            <span>AI Receptionist Demo</span>
        </div>
    </a>
    <p class="demo-modal-note">Available 24/7. Standard call rates apply.</p>
</div>"#,
        mic = MIC_ICON,
        phone = PHONE_ICON,
        href = line.tel_href(),
        display = line.display(),
    )
}

struct ModalInner {
    window: Window,
    document: Document,
    body: HtmlElement,
    variant: DemoVariant,
    line: PhoneNumber,
    telemetry: Rc<dyn Telemetry>,
    // Handlers on the generated nodes; they only hold weak references back.
    node_listeners: RefCell<Vec<Listener>>,
}

/// The lazily built "talk to the AI receptionist" dialog.
#[derive(Clone)]
pub struct DemoModal {
    inner: Rc<ModalInner>,
}

impl DemoModal {
    pub fn new(
        window: &Window,
        document: &Document,
        body: &HtmlElement,
        config: &PageConfig,
        telemetry: Rc<dyn Telemetry>,
    ) -> Self {
        Self {
            inner: Rc::new(ModalInner {
                window: window.clone(),
                document: document.clone(),
                body: body.clone(),
                variant: config.demo_variant,
                line: config.demo_line.clone(),
                telemetry,
                node_listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn state(&self) -> ModalState {
        ModalState::of(self.inner.node().as_ref())
    }

    pub fn is_visible(&self) -> bool {
        self.state() == ModalState::Visible
    }

    pub fn open(&self) -> Result<(), BindError> {
        self.inner.open()
    }

    pub fn close(&self) -> Result<(), BindError> {
        self.inner.close()
    }

    /// Handlers the page keeps for its own lifetime: the trigger button
    /// and the Escape key.
    pub(crate) fn bind_triggers(&self, trigger: Option<&Element>) -> Result<Vec<Listener>, BindError> {
        let mut listeners = Vec::new();
        if let Some(trigger) = trigger {
            let modal = self.clone();
            listeners.push(Listener::new(trigger, "click", move |_| {
                if let Err(e) = modal.open() {
                    warn!("Could not open demo modal: {}", e);
                }
            })?);
        }
        let modal = self.clone();
        listeners.push(Listener::new(&self.inner.document, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |key| key.key() == "Escape");
            if is_escape && modal.is_visible() {
                if let Err(e) = modal.close() {
                    warn!("Could not close demo modal: {}", e);
                }
            }
        })?);
        Ok(listeners)
    }
}

impl ModalInner {
    fn node(&self) -> Option<Element> {
        self.document.get_element_by_id(MODAL_ID)
    }

    fn open(self: &Rc<Self>) -> Result<(), BindError> {
        let node = self.node();
        match ModalState::of(node.as_ref()).open(self.variant) {
            OpenStep::Alert => {
                self.window.alert_with_message(PLACEHOLDER_NOTICE)?;
            }
            OpenStep::Show { build } => {
                let node = match node {
                    Some(node) if !build => node,
                    _ => self.build()?,
                };
                node.class_list().add_1(ACTIVE_CLASS)?;
                self.body.style().set_property("overflow", "hidden")?;
            }
        }
        Ok(())
    }

    fn close(&self) -> Result<(), BindError> {
        let node = self.node();
        if !ModalState::of(node.as_ref()).close() {
            return Ok(());
        }
        if let Some(node) = node {
            node.class_list().remove_1(ACTIVE_CLASS)?;
            self.body.style().remove_property("overflow")?;
        }
        Ok(())
    }

    fn build(self: &Rc<Self>) -> Result<Element, BindError> {
        let node = self.document.create_element("div")?;
        node.set_id(MODAL_ID);
        node.set_inner_html(&modal_markup(&self.line));
        self.body.append_child(&node)?;

        let mut listeners = Vec::with_capacity(3);
        for selector in [".demo-modal-overlay", ".demo-modal-close"] {
            if let Some(control) = node.query_selector(selector)? {
                let inner = Rc::downgrade(self);
                listeners.push(Listener::new(&control, "click", move |_| close_weak(&inner))?);
            }
        }
        if let Some(call) = node.query_selector(".demo-option-primary")? {
            let inner = Rc::downgrade(self);
            listeners.push(Listener::new(&call, "click", move |_| {
                if let Some(inner) = inner.upgrade() {
                    inner.telemetry.call_clicked();
                }
            })?);
        }
        self.node_listeners.borrow_mut().extend(listeners);

        debug!("Built #{}", MODAL_ID);
        Ok(node)
    }
}

fn close_weak(inner: &Weak<ModalInner>) {
    if let Some(inner) = inner.upgrade() {
        if let Err(e) = inner.close() {
            warn!("Could not close demo modal: {}", e);
        }
    }
}

impl Drop for ModalInner {
    fn drop(&mut self) {
        self.node_listeners.get_mut().clear();
        if let Some(node) = self.node() {
            if node.class_list().contains(ACTIVE_CLASS) {
                if let Err(e) = self.body.style().remove_property("overflow") {
                    warn!("Could not restore page scroll: {}", describe_js(&e));
                }
            }
            node.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ModalState::NotBuilt, OpenStep::Show { build: true })]
    #[case(ModalState::Hidden, OpenStep::Show { build: false })]
    #[case(ModalState::Visible, OpenStep::Show { build: false })]
    fn modal_variant_builds_only_once(#[case] state: ModalState, #[case] expected: OpenStep) {
        assert_eq!(state.open(DemoVariant::Modal), expected);
    }

    #[rstest]
    #[case(ModalState::NotBuilt)]
    #[case(ModalState::Hidden)]
    fn placeholder_variant_always_alerts(#[case] state: ModalState) {
        assert_eq!(state.open(DemoVariant::Placeholder), OpenStep::Alert);
    }

    #[test]
    fn closing_unbuilt_modal_is_a_no_op() {
        assert!(!ModalState::NotBuilt.close());
        assert!(ModalState::Hidden.close());
        assert!(ModalState::Visible.close());
    }

    #[test]
    fn markup_uses_configured_line_without_inline_handlers() {
        let line = PhoneNumber::parse("(518) 351-7231").unwrap();
        let markup = modal_markup(&line);
        assert!(markup.contains(r#"href="tel:+15183517231""#));
        assert!(markup.contains("Call (518) 351-7231"));
        assert!(markup.contains("demo-modal-overlay"));
        assert!(markup.contains("demo-modal-close"));
        assert!(!markup.contains("onclick"));
        assert_eq!(markup.matches("<svg").count(), 2);
    }
}
