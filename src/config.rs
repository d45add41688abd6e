use std::str::FromStr;

use log::{warn, Level};

use crate::phone::PhoneNumber;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DEMO_LINE: &str = "+15183517231";
pub const REVEAL_SELECTORS: &str = ".problem-card, .feature-card, .step, .testimonial-card";

/// Which demo experience the "play demo" button opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoVariant {
    /// Styled dialog with a tappable call link.
    #[default]
    Modal,
    /// Blocking alert saying the demo line is not live yet.
    Placeholder,
}

impl FromStr for DemoVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modal" => Ok(DemoVariant::Modal),
            "placeholder" | "alert" => Ok(DemoVariant::Placeholder),
            other => Err(format!("unknown demo variant {:?}", other)),
        }
    }
}

/// Which window origins may post booking messages to the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OriginPolicy {
    /// Accept every sender. Only sensible when the embed is trusted.
    #[default]
    AnyOrigin,
    AllowList(Vec<String>),
}

impl OriginPolicy {
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::AnyOrigin => true,
            OriginPolicy::AllowList(origins) => {
                let origin = origin.trim_end_matches('/');
                origins.iter().any(|o| o.trim_end_matches('/') == origin)
            }
        }
    }

    /// Comma separated origins. An empty list means any origin.
    pub fn parse_list(list: &str) -> Self {
        let origins: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            OriginPolicy::AnyOrigin
        } else {
            OriginPolicy::AllowList(origins)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub nav_selector: String,
    pub nav_threshold_px: f64,
    pub nav_background_scrolled: String,
    pub nav_background_top: String,
    pub reveal_selectors: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub demo_variant: DemoVariant,
    pub demo_line: PhoneNumber,
    pub booking_origins: OriginPolicy,
    pub calendar_embed_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_selector: ".nav".to_string(),
            nav_threshold_px: 50.0,
            nav_background_scrolled: "rgba(15, 15, 26, 0.95)".to_string(),
            nav_background_top: "rgba(15, 15, 26, 0.8)".to_string(),
            reveal_selectors: REVEAL_SELECTORS.to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            demo_variant: DemoVariant::Modal,
            demo_line: PhoneNumber::from_known_e164(DEMO_LINE),
            booking_origins: OriginPolicy::AnyOrigin,
            calendar_embed_url: None,
        }
    }
}

impl PageConfig {
    /// Defaults with any `LANDING_*` variables set at build time applied.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(&BuildOverrides::from_build_env())
    }

    pub fn with_overrides(mut self, overrides: &BuildOverrides) -> Self {
        if let Some(raw) = overrides.demo_variant {
            match raw.parse() {
                Ok(variant) => self.demo_variant = variant,
                Err(e) => warn!("Ignoring LANDING_DEMO_VARIANT: {}", e),
            }
        }
        if let Some(raw) = overrides.demo_line {
            match PhoneNumber::parse(raw) {
                Ok(number) => self.demo_line = number,
                Err(e) => warn!("Ignoring LANDING_DEMO_LINE: {}", e),
            }
        }
        if let Some(raw) = overrides.booking_origins {
            self.booking_origins = OriginPolicy::parse_list(raw);
        }
        if let Some(url) = overrides.calendar_embed_url {
            let url = url.trim();
            self.calendar_embed_url = (!url.is_empty()).then(|| url.to_string());
        }
        self
    }
}

/// Raw values baked in at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOverrides {
    pub demo_variant: Option<&'static str>,
    pub demo_line: Option<&'static str>,
    pub booking_origins: Option<&'static str>,
    pub calendar_embed_url: Option<&'static str>,
}

impl BuildOverrides {
    pub fn from_build_env() -> Self {
        Self {
            demo_variant: option_env!("LANDING_DEMO_VARIANT"),
            demo_line: option_env!("LANDING_DEMO_LINE"),
            booking_origins: option_env!("LANDING_BOOKING_ORIGINS"),
            calendar_embed_url: option_env!("LANDING_CALENDAR_URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn defaults_match_the_live_page() {
        let config = PageConfig::default();
        assert_eq!(config.nav_threshold_px, 50.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.demo_variant, DemoVariant::Modal);
        assert_eq!(config.demo_line.display(), "(518) 351-7231");
        assert_eq!(config.booking_origins, OriginPolicy::AnyOrigin);
    }

    #[rstest]
    #[case("modal", DemoVariant::Modal)]
    #[case(" Placeholder ", DemoVariant::Placeholder)]
    #[case("alert", DemoVariant::Placeholder)]
    fn parses_variants(#[case] raw: &str, #[case] expected: DemoVariant) {
        assert_eq!(raw.parse::<DemoVariant>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!("popup".parse::<DemoVariant>().is_err());
    }

    #[test]
    fn allow_list_ignores_trailing_slash() {
        let policy = OriginPolicy::parse_list("https://widgets.example.com/, https://app.example.com");
        assert!(policy.allows("https://widgets.example.com"));
        assert!(policy.allows("https://app.example.com/"));
        assert!(!policy.allows("https://evil.example.net"));
    }

    #[test]
    fn empty_list_means_any_origin() {
        assert_eq!(OriginPolicy::parse_list(" , "), OriginPolicy::AnyOrigin);
        assert!(OriginPolicy::AnyOrigin.allows("null"));
    }

    #[test]
    fn overrides_apply_and_bad_values_keep_defaults() {
        let overrides = BuildOverrides {
            demo_variant: Some("placeholder"),
            demo_line: Some("12"),
            booking_origins: Some("https://widgets.example.com"),
            calendar_embed_url: Some(" https://widgets.example.com/booking "),
        };
        let config = PageConfig::default().with_overrides(&overrides);
        assert_eq!(config.demo_variant, DemoVariant::Placeholder);
        assert_eq!(config.demo_line.e164(), DEMO_LINE);
        assert_eq!(
            config.booking_origins,
            OriginPolicy::AllowList(vec!["https://widgets.example.com".to_string()])
        );
        assert_eq!(
            config.calendar_embed_url.as_deref(),
            Some("https://widgets.example.com/booking")
        );
    }

    #[test]
    fn no_overrides_is_default() {
        let config = PageConfig::default().with_overrides(&BuildOverrides::default());
        assert_eq!(config, PageConfig::default());
    }
}
