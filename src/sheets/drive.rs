// ==========================================
// BVCR điện lạnh - media helpers
// ==========================================
// Drive share links → direct-view image URLs, and the base64 data-URL
// encoding used to carry a photo through the write path.
// ==========================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;

/// The three recognized Drive link shapes: `file/d/<id>`,
/// `open?id=<id>`, `id=<id>`.
static DRIVE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:file/d/|open\?id=|id=)([\w-]+)").expect("drive id pattern")
});

/// Direct-view template for an extracted file id.
const DIRECT_VIEW_TEMPLATE: &str = "https://lh3.googleusercontent.com/u/0/d/";

/// Rewrite a Drive share link into a direct image-view URL.
///
/// Links not matching any recognized shape pass through unchanged if
/// they look like URLs at all; anything else is `None`.
pub fn direct_view_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    if let Some(caps) = DRIVE_ID_RE.captures(url) {
        return Some(format!("{}{}=w1600", DIRECT_VIEW_TEMPLATE, &caps[1]));
    }
    if url.starts_with("http") {
        return Some(url.to_string());
    }
    None
}

/// Encode a captured photo as a base64 data URL for the write path.
/// The read path never sees these; it gets Drive links back.
pub fn photo_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
