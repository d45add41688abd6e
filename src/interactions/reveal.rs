use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::PageConfig;
use crate::error::{describe_js, BindError};

const INDEX_ATTR: &str = "data-reveal-index";

/// Which observed cards have already faded in. Flags only ever go from
/// hidden to revealed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// True only for the entry that flips a card to revealed.
    pub fn record(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if is_intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

fn hide(el: &HtmlElement) -> Result<(), JsValue> {
    set_styles(
        el,
        &[
            ("opacity", "0"),
            ("transform", "translateY(30px)"),
            ("transition", "opacity 0.6s ease, transform 0.6s ease"),
        ],
    )
}

fn show(el: &HtmlElement) -> Result<(), JsValue> {
    set_styles(el, &[("opacity", "1"), ("transform", "translateY(0)")])
}

/// Fades cards in the first time they scroll into view.
pub struct RevealAnimator {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealAnimator {
    /// `None` when the page has no cards to animate.
    pub(crate) fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, BindError> {
        let nodes = document.query_selector_all(&config.reveal_selectors)?;
        let cards: Vec<HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        if cards.is_empty() {
            return Ok(None);
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(cards.len())));
        let callback = {
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(&tracker, &observer, &entry);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        if let Err(e) = observe_all(&observer, &cards) {
            // Cards must not stay hidden without an observer to show them
            observer.disconnect();
            for card in &cards {
                let _ = show(card);
            }
            return Err(e.into());
        }
        debug!("Observing {} cards for reveal", cards.len());

        Ok(Some(Self {
            observer,
            tracker,
            _callback: callback,
        }))
    }

    pub fn tracker(&self) -> RevealTracker {
        self.tracker.borrow().clone()
    }
}

fn observe_all(observer: &IntersectionObserver, cards: &[HtmlElement]) -> Result<(), JsValue> {
    for (index, card) in cards.iter().enumerate() {
        card.set_attribute(INDEX_ATTR, &index.to_string())?;
        hide(card)?;
        observer.observe(card);
    }
    Ok(())
}

fn on_entry(
    tracker: &Rc<RefCell<RevealTracker>>,
    observer: &IntersectionObserver,
    entry: &IntersectionObserverEntry,
) {
    let target: Element = entry.target();
    let Some(index) = target
        .get_attribute(INDEX_ATTR)
        .and_then(|raw| raw.parse::<usize>().ok())
    else {
        return;
    };
    if !tracker.borrow_mut().record(index, entry.is_intersecting()) {
        return;
    }
    // Revealed is terminal
    observer.unobserve(&target);
    if let Some(card) = target.dyn_ref::<HtmlElement>() {
        if let Err(e) = show(card) {
            warn!("Could not reveal card {}: {}", index, describe_js(&e));
        }
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.record(0, false));
        assert!(tracker.record(0, true));
        assert!(!tracker.record(0, false));
        assert!(!tracker.record(0, true));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.record(7, true));
        assert!(!tracker.is_revealed(7));
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn every_card_ends_revealed_in_any_order() {
        let mut tracker = RevealTracker::new(4);
        let events = [(3, true), (1, false), (1, true), (3, false), (0, true), (2, true), (2, false)];
        let flips = events
            .iter()
            .filter(|(i, hit)| tracker.record(*i, *hit))
            .count();
        assert_eq!(flips, 4);
        assert_eq!(tracker.revealed_count(), tracker.len());
    }

    #[test]
    fn empty_page_has_nothing_to_track() {
        let mut tracker = RevealTracker::new(0);
        assert!(tracker.is_empty());
        assert!(!tracker.record(0, true));
        assert!(!RevealTracker::new(3).is_empty());
    }
}
