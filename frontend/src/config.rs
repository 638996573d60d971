/// Data snapshot fetched once per page load, relative to the page.
pub const SITE_DATA_URL: &str = "site-data.json";

/// Outbound messaging base; the contact number is appended as digits only.
pub const MESSAGING_BASE_URL: &str = "https://wa.me/";

pub const PARTNER_LOGO_PLACEHOLDER: &str = "assets/partner-placeholder.png";
pub const TRACK_IMAGE_PLACEHOLDER: &str = "assets/track-placeholder.jpg";
pub const COACH_PHOTO_PLACEHOLDER: &str = "assets/coach-photo-placeholder.jpg";

pub const DEFAULT_BRAND_NAME: &str = "Coach Academy";

/// Anchor used when no call-to-action target can be derived.
pub const PLACEHOLDER_HREF: &str = "#";
