//! Runtime Configuration
//!
//! Endpoint address and slider bounds vary per deployment (relative path
//! behind a hosting proxy vs. a local-development address, differing price
//! ceilings), so they are read from `<meta>` tags in the host document
//! instead of being compiled in. Missing or unparsable tags fall back to
//! the defaults below.

use web_sys::Document;

pub const DEFAULT_RECOMMEND_ENDPOINT: &str = "/api/recommend";
pub const DEFAULT_PRICE_MIN: u32 = 0;
pub const DEFAULT_PRICE_MAX: u32 = 5000;
pub const DEFAULT_PRICE_STEP: u32 = 50;
pub const DEFAULT_INITIAL_RANGE: (u32, u32) = (100, 1000);

/// Deployment-specific settings, provided to components via context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the recommendation request is POSTed to.
    pub recommend_endpoint: String,
    /// Lower bound of the price slider.
    pub price_min: u32,
    /// Upper bound of the price slider.
    pub price_max: u32,
    /// Slider step size.
    pub price_step: u32,
    /// Slider position before the user touches it.
    pub initial_range: (u32, u32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recommend_endpoint: DEFAULT_RECOMMEND_ENDPOINT.to_string(),
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            price_step: DEFAULT_PRICE_STEP,
            initial_range: DEFAULT_INITIAL_RANGE,
        }
    }
}

impl AppConfig {
    /// Read overrides from `<meta name="kk-...">` tags in the current
    /// document. Outside a browser this is just the defaults.
    pub fn from_document() -> Self {
        let mut config = Self::default();

        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(endpoint) = meta_content(&doc, "kk-recommend-endpoint") {
                config.recommend_endpoint = endpoint;
            }
            if let Some(min) = meta_content(&doc, "kk-price-min").and_then(|v| v.parse().ok()) {
                config.price_min = min;
            }
            if let Some(max) = meta_content(&doc, "kk-price-max").and_then(|v| v.parse().ok()) {
                config.price_max = max;
            }
            if let Some(step) = meta_content(&doc, "kk-price-step").and_then(|v| v.parse().ok()) {
                config.price_step = step;
            }
        }

        // Inverted slider bounds in the meta tags are a deployment mistake;
        // fall back to the defaults rather than trusting them.
        if config.price_min > config.price_max {
            config.price_min = DEFAULT_PRICE_MIN;
            config.price_max = DEFAULT_PRICE_MAX;
        }

        config.initial_range = clamp_range(config.initial_range, config.price_min, config.price_max);
        config
    }
}

/// Fit a `(low, high)` range into `[min, max]`, keeping `low <= high`.
/// Inverted bounds are swapped, never trusted.
pub fn clamp_range(range: (u32, u32), min: u32, max: u32) -> (u32, u32) {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let low = range.0.clamp(min, max);
    let high = range.1.clamp(min, max);
    (low.min(high), high.max(low))
}

fn meta_content(doc: &Document, name: &str) -> Option<String> {
    doc.query_selector(&format!("meta[name='{name}']"))
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.recommend_endpoint, "/api/recommend");
        assert_eq!(config.price_min, 0);
        assert_eq!(config.price_max, 5000);
        assert_eq!(config.initial_range, (100, 1000));
    }

    #[test]
    fn test_clamp_range_fits_bounds() {
        // A 0..=2000 deployment must pull the initial range inside its ceiling
        assert_eq!(clamp_range((100, 1000), 0, 2000), (100, 1000));
        assert_eq!(clamp_range((100, 3000), 0, 2000), (100, 2000));
        assert_eq!(clamp_range((2500, 3000), 0, 2000), (2000, 2000));
    }

    #[test]
    fn test_clamp_range_tolerates_inverted_bounds() {
        // min > max must not panic; the bounds are read in the saner order
        assert_eq!(clamp_range((100, 1000), 3000, 2000), (2000, 2000));
        assert_eq!(clamp_range((2500, 2800), 3000, 2000), (2500, 2800));
    }
}
