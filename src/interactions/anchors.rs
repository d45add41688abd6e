use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::listener::Listener;
use crate::error::BindError;

pub const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";

/// The selector an in-page href points at, if it names anything.
/// A bare `#` does not.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Element an anchor points at right now. Invalid selectors count as missing.
fn resolve_target(document: &Document, anchor: &Element) -> Option<Element> {
    let href = anchor.get_attribute("href")?;
    let selector = fragment_selector(&href)?;
    document.query_selector(selector).ok().flatten()
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Swap the jump of every in-page link for a smooth scroll.
pub(crate) fn install(document: &Document) -> Result<Vec<Listener>, BindError> {
    let anchors = document.query_selector_all(IN_PAGE_LINKS)?;
    let mut listeners = Vec::with_capacity(anchors.length() as usize);

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let document = document.clone();
        let link = anchor.clone();
        listeners.push(Listener::new(&anchor, "click", move |event: Event| {
            event.prevent_default();
            match resolve_target(&document, &link) {
                Some(target) => scroll_to(&target),
                None => debug!("Anchor {:?} has no target", link.get_attribute("href")),
            }
        })?);
    }

    debug!("Bound {} in-page links", listeners.len());
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#features", Some("#features"))]
    #[case(" #how-it-works ", Some("#how-it-works"))]
    #[case("#", None)]
    #[case("", None)]
    #[case("/pricing#faq", None)]
    fn extracts_fragment_selectors(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(fragment_selector(href), expected);
    }
}
