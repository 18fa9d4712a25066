use log::Level;
use serde::Deserialize;
use thiserror::Error;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const THEME_KEY: &str = "theme";

// Timings, all in milliseconds
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const FILTER_REVEAL_MS: u32 = 10;
pub const FILTER_HIDE_MS: u32 = 300;
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const PREFILL_DELAY_MS: u32 = 1_000;
pub const SUCCESS_DISMISS_MS: u32 = 5_000;
pub const BOOKING_DISMISS_MS: u32 = 8_000;
pub const EXIT_ANIMATION_MS: u32 = 500;
pub const SCROLL_THROTTLE_MS: f64 = 100.0;
pub const BUTTON_PRESS_MS: u32 = 150;
pub const LOADED_CLASS_DELAY_MS: u32 = 100;

// Scroll thresholds, in CSS pixels
pub const HEADER_ALLOWANCE_PX: f64 = 100.0;
pub const ANCHOR_OFFSET_PX: f64 = 70.0;
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const BACK_TO_TOP_PX: f64 = 300.0;

const SITE_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("filter list must start with the \"all\" filter")]
    MissingAllFilter,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FilterButton {
    pub tag: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Plan {
    pub title: String,
    pub price: String,
    pub categories: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlanOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactShortcut {
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub tagline: String,
    pub sections: Vec<Section>,
    pub filters: Vec<FilterButton>,
    pub plans: Vec<Plan>,
    pub plan_options: Vec<PlanOption>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<crate::utils::lightbox::GalleryImage>,
    pub contact_shortcut: ContactShortcut,
}

impl ContactShortcut {
    pub fn chat_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&self.message)
        )
    }
}

/// Parses the site content bundled into the binary.
pub fn load_site_content() -> Result<SiteContent, ContentError> {
    parse_site_content(SITE_CONTENT)
}

fn parse_site_content(raw: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_str(raw)?;
    if content.filters.first().map(|f| f.tag.as_str()) != Some(crate::utils::plan_filter::ALL_TAG) {
        return Err(ContentError::MissingAllFilter);
    }
    Ok(content)
}
