use log::warn;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` in index.html that
/// overrides any of the fields below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub messaging_url: String,
    /// Trainer's WhatsApp number, country code first, digits only.
    pub recipient: String,

    pub quote_interval_ms: u32,
    pub submit_delay_ms: u32,
    pub reset_delay_ms: u32,
    pub toast_ms: u32,
    pub toast_exit_ms: u32,

    /// Scroll offset past which the navbar switches to its compact style.
    pub nav_scrolled_at: f64,
    pub section_offset: f64,
    pub reveal_offset: f64,
    /// Height of the fixed navbar, kept clear when jumping to an anchor.
    pub anchor_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Elite Training".to_string(),
            messaging_url: "https://wa.me".to_string(),
            recipient: "573001234567".to_string(),
            quote_interval_ms: 4_000,
            submit_delay_ms: 1_500,
            reset_delay_ms: 2_000,
            toast_ms: 4_000,
            toast_exit_ms: 300,
            nav_scrolled_at: 100.0,
            section_offset: 200.0,
            reveal_offset: 100.0,
            anchor_offset: 70.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Reads the embedded config block, falling back to defaults when it is
/// missing or malformed.
pub fn load() -> SiteConfig {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match embedded {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(&json).unwrap_or_else(|e| {
            warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }),
        _ => SiteConfig::default(),
    }
}
