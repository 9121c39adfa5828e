use log::Level;

pub const BRAND: &str = "KAREL:ENERGY";
pub const LOGO_URL: &str = "https://pub-cdn.sider.ai/u/U0AWH6E9A4X/web-coder/68b87a397b28bae4985adee4/resource/3d45df58-8100-4fab-8476-81563a44392f.png";

pub const CONTACT_EMAIL: &str = "kontakt@karel.energy";
// Inquiries from the contact form go here
pub const INQUIRY_EMAIL: &str = "info@karel-energy.sk";
pub const PHONE_DISPLAY: &str = "042 / 222 00 01";
pub const PHONE_HREF: &str = "tel:+421422220001";

/// Location fragment of the home view under the hash router.
pub const HOME_FRAGMENT: &str = "#/";

pub const SCROLL_POLL_INTERVAL_MS: u32 = 50;
pub const SCROLL_POLL_TIMEOUT_MS: u32 = 2000;

/// Below this intersection ratio a section counts as scrolled away.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

pub const CAROUSEL_AUTOPLAY_MS: u32 = 9000;
pub const CAROUSEL_SWIPE_PX: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn page_title(page: &str) -> String {
    format!("{} | {}", page, BRAND)
}
