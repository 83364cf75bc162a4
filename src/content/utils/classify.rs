//! Classification functions for card and slide generation.
//!
//! Everything here is pure and total: no filesystem access, no panics.

use serde::Serialize;

// ============================================================================
// Media Type
// ============================================================================

/// File suffixes rendered with a `<video>` element
pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".mov", ".avi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a filename by its lowercased suffix.
    /// Anything that is not a known video extension is an image.
    pub fn classify(filename: &str) -> MediaKind {
        let lower = filename.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

// ============================================================================
// Badge Text
// ============================================================================

pub const BADGE_LEARN_MORE: &str = "Learn More";
pub const BADGE_VIEW_BADGE: &str = "View Badge";
pub const BADGE_VIEW_PROFILE: &str = "View Profile";
pub const BADGE_VIEW_GITHUB: &str = "View GitHub";
pub const BADGE_SEND_EMAIL: &str = "Send Email";

/// Call-to-action label for a social link, chosen from its href.
///
/// Checked in this order, first match wins:
/// 1. href contains "linkedin" -> "View Profile"
/// 2. href contains "github"   -> "View GitHub"
/// 3. anything else            -> "Send Email"
///
/// A new platform falls through to "Send Email" until it gets its own arm.
pub fn social_badge_text(href: &str) -> &'static str {
    if href.contains("linkedin") {
        BADGE_VIEW_PROFILE
    } else if href.contains("github") {
        BADGE_VIEW_GITHUB
    } else {
        BADGE_SEND_EMAIL
    }
}

// ============================================================================
// Links and Asset Paths
// ============================================================================

/// Card and citation links must be absolute http(s) URLs or `mailto:` links
pub fn is_accepted_href(href: &str) -> bool {
    let href = href.trim();
    let rest = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))
        .or_else(|| href.strip_prefix("mailto:"));
    matches!(rest, Some(r) if !r.is_empty())
}

/// URL prefix the static file service is mounted on
pub const STATIC_URL: &str = "/static";

/// Marker meaning "sibling folder of the default one"
const PARENT_MARKER: &str = "../";

/// Resolve a raw asset reference to a static URL.
///
/// `../<dir>/<file>` resolves under `/static/images/<dir>/<file>`; a bare
/// filename resolves under `/static/<default_dir>/<file>`. Pure string
/// rewriting: whether the file exists is the static server's problem.
pub fn resolve_asset(raw: &str, default_dir: &str) -> String {
    match raw.strip_prefix(PARENT_MARKER) {
        Some(sibling) => format!("{}/images/{}", STATIC_URL, sibling),
        None => format!("{}/{}/{}", STATIC_URL, default_dir, raw),
    }
}

/// Logos live in `images/logos`
pub fn logo_src(raw: &str) -> String {
    resolve_asset(raw, "images/logos")
}

/// Slide media: videos and images have separate content folders
pub fn slide_media_src(raw: &str) -> String {
    match MediaKind::classify(raw) {
        MediaKind::Video => resolve_asset(raw, "videos/content"),
        MediaKind::Image => resolve_asset(raw, "images/content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions_classify_as_video() {
        for name in ["a.mp4", "b.webm", "c.mov", "d.avi", "bell.MP4", "CLIP.WebM", "x.y.Mov"] {
            assert_eq!(MediaKind::classify(name), MediaKind::Video, "{}", name);
        }
    }

    #[test]
    fn test_everything_else_is_image() {
        for name in ["a.png", "b.jpg", "c.svg", "mp4", "video.mp4.png", "", "noext", ".mp", "movie.mov "] {
            assert_eq!(MediaKind::classify(name), MediaKind::Image, "{:?}", name);
        }
    }

    #[test]
    fn test_classification_ignores_case() {
        for name in ["beat-cancer-bell.mp4", "photo.jpeg", "clip.avi", "../logos/logo-york-u.png"] {
            assert_eq!(
                MediaKind::classify(name),
                MediaKind::classify(&name.to_uppercase()),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_social_badge_fallthrough_order() {
        assert_eq!(social_badge_text("https://www.linkedin.com/in/someone/"), "View Profile");
        assert_eq!(social_badge_text("https://github.com/someone"), "View GitHub");
        assert_eq!(social_badge_text("mailto:someone@example.com"), "Send Email");
        // linkedin is checked before github
        assert_eq!(social_badge_text("https://linkedin.com/?ref=github"), "View Profile");
        assert_eq!(social_badge_text("https://mastodon.social/@someone"), "Send Email");
    }

    #[test]
    fn test_accepted_hrefs() {
        assert!(is_accepted_href("https://www.yorku.ca/"));
        assert!(is_accepted_href("http://example.com"));
        assert!(is_accepted_href("mailto:alan@me2u.space"));
        assert!(!is_accepted_href(""));
        assert!(!is_accepted_href("#"));
        assert!(!is_accepted_href("https://"));
        assert!(!is_accepted_href("/connect"));
    }

    #[test]
    fn test_asset_resolution() {
        assert_eq!(logo_src("logo-html.svg"), "/static/images/logos/logo-html.svg");
        assert_eq!(slide_media_src("linkedin-post.png"), "/static/images/content/linkedin-post.png");
        assert_eq!(slide_media_src("beat-cancer-bell.mp4"), "/static/videos/content/beat-cancer-bell.mp4");
        assert_eq!(slide_media_src("../logos/logo-york-u.png"), "/static/images/logos/logo-york-u.png");
        assert_eq!(logo_src("../google-cloud/cloud-run.png"), "/static/images/google-cloud/cloud-run.png");
    }
}
