pub mod classify;

pub use classify::{is_accepted_href, logo_src, slide_media_src, social_badge_text, MediaKind};
