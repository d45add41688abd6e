use log::warn;
use web_sys::{HtmlElement, Window};

use super::listener::Listener;
use crate::config::PageConfig;
use crate::error::{describe_js, BindError};

/// Background colours for the nav bar on either side of the scroll threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct NavStyle {
    pub threshold_px: f64,
    pub scrolled: String,
    pub top: String,
}

impl NavStyle {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            threshold_px: config.nav_threshold_px,
            scrolled: config.nav_background_scrolled.clone(),
            top: config.nav_background_top.clone(),
        }
    }

    /// Depends on nothing but the current offset.
    pub fn background_for(&self, scroll_y: f64) -> &str {
        if scroll_y > self.threshold_px {
            &self.scrolled
        } else {
            &self.top
        }
    }

    fn apply(&self, window: &Window, nav: &HtmlElement) {
        let scroll_y = match window.scroll_y() {
            Ok(y) => y,
            Err(e) => {
                warn!("Could not read scroll offset: {}", describe_js(&e));
                return;
            }
        };
        if let Err(e) = nav
            .style()
            .set_property("background", self.background_for(scroll_y))
        {
            warn!("Could not restyle nav: {}", describe_js(&e));
        }
    }
}

pub(crate) fn install(
    window: &Window,
    nav: &HtmlElement,
    style: NavStyle,
) -> Result<Listener, BindError> {
    // Match the current position before the first scroll arrives
    style.apply(window, nav);

    let win = window.clone();
    let nav = nav.clone();
    Listener::new(window, "scroll", move |_| style.apply(&win, &nav))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn style() -> NavStyle {
        NavStyle::from_config(&PageConfig::default())
    }

    #[rstest]
    #[case(0.0, "rgba(15, 15, 26, 0.8)")]
    #[case(50.0, "rgba(15, 15, 26, 0.8)")]
    #[case(50.5, "rgba(15, 15, 26, 0.95)")]
    #[case(4000.0, "rgba(15, 15, 26, 0.95)")]
    fn switches_at_threshold(#[case] scroll_y: f64, #[case] expected: &str) {
        assert_eq!(style().background_for(scroll_y), expected);
    }

    #[test]
    fn ignores_history() {
        let style = style();
        let down_then_up: Vec<&str> = [0.0, 120.0, 49.0, 51.0, 10.0]
            .iter()
            .map(|y| style.background_for(*y))
            .collect();
        assert_eq!(
            down_then_up,
            vec![
                style.top.as_str(),
                style.scrolled.as_str(),
                style.top.as_str(),
                style.scrolled.as_str(),
                style.top.as_str(),
            ]
        );
    }
}
