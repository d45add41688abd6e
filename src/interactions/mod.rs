//! Behaviour bound onto the rendered landing markup: smooth in-page
//! scrolling, nav restyling on scroll, card reveal, the demo dialog and the
//! booking widget listener.
//!
//! Everything registered by [`PageInteractions::install`] is owned by the
//! returned value. Dropping it unbinds the page.

pub mod anchors;
pub mod booking;
pub mod listener;
pub mod modal;
pub mod nav;
pub mod reveal;

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::PageConfig;
use crate::error::{describe_js, BindError};
use crate::telemetry::Telemetry;
use booking::BookingHook;
use listener::Listener;
use modal::DemoModal;
use nav::NavStyle;
use reveal::RevealAnimator;

pub const HERO_TITLE: &str = ".hero-title";
pub const DEMO_TRIGGER_ID: &str = "playDemoBtn";
pub const CALENDAR_EMBED_ID: &str = "calendarEmbed";

/// DOM handles looked up once and passed to each handler.
#[derive(Debug, Clone)]
pub struct PageBindings {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub nav: Option<HtmlElement>,
    pub hero_title: Option<HtmlElement>,
    pub demo_trigger: Option<Element>,
    pub calendar_embed: Option<Element>,
}

impl PageBindings {
    pub fn resolve(config: &PageConfig) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        let body = document.body().ok_or(BindError::NoBody)?;
        let html = |selector: &str| -> Result<Option<HtmlElement>, BindError> {
            Ok(document
                .query_selector(selector)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
        };
        let nav = html(&config.nav_selector)?;
        let hero_title = html(HERO_TITLE)?;
        Ok(Self {
            demo_trigger: document.get_element_by_id(DEMO_TRIGGER_ID),
            calendar_embed: document.get_element_by_id(CALENDAR_EMBED_ID),
            window,
            document,
            body,
            nav,
            hero_title,
        })
    }
}

/// Everything bound to the page. Lives as long as the landing view.
pub struct PageInteractions {
    modal: DemoModal,
    reveal: Option<RevealAnimator>,
    listeners: Vec<Listener>,
}

impl PageInteractions {
    pub fn install(config: &PageConfig, telemetry: Rc<dyn Telemetry>) -> Result<Self, BindError> {
        let bindings = PageBindings::resolve(config)?;
        let mut listeners = anchors::install(&bindings.document)?;

        match &bindings.nav {
            Some(nav) => listeners.push(nav::install(
                &bindings.window,
                nav,
                NavStyle::from_config(config),
            )?),
            None => debug!("No {} on page, nav styling skipped", config.nav_selector),
        }

        let modal = DemoModal::new(
            &bindings.window,
            &bindings.document,
            &bindings.body,
            config,
            telemetry.clone(),
        );
        listeners.extend(modal.bind_triggers(bindings.demo_trigger.as_ref())?);

        if bindings.calendar_embed.is_some() {
            let hook = BookingHook::new(config.booking_origins.clone(), telemetry);
            listeners.push(booking::install(&bindings.window, hook)?);
        }

        reveal_hero_title(bindings.hero_title.as_ref());

        // Hides cards, so nothing fallible may follow it
        let reveal = RevealAnimator::install(&bindings.document, config)?;

        debug!("Page interactions bound ({} listeners)", listeners.len());
        Ok(Self {
            modal,
            reveal,
            listeners,
        })
    }

    pub fn modal(&self) -> &DemoModal {
        &self.modal
    }

    pub fn reveal(&self) -> Option<&RevealAnimator> {
        self.reveal.as_ref()
    }
}

fn reveal_hero_title(title: Option<&HtmlElement>) {
    if let Some(title) = title {
        if let Err(e) = title.style().set_property("opacity", "1") {
            warn!("Could not show hero title: {}", describe_js(&e));
        }
    }
}
