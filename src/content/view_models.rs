//! View Models for page templates
//!
//! Typed records the askama templates consume. They are built fresh for
//! every request and thrown away after rendering.

use serde::Serialize;

use crate::content::types::{ContentError, FooterLink, NavLink, RecordKind, SiteMeta, TechBadge, TechCategory};
use crate::content::utils::classify::{is_accepted_href, logo_src, MediaKind};

// ============================================================================
// Layout presets
// ============================================================================

pub const BASE_CONTAINER: &str = "container py-4 px-2 md:px-8 mx-auto";
pub const WIDTH_SMALL: &str = "max-w-[1100px]";
pub const WIDTH_MEDIUM: &str = "max-w-6xl";
pub const WIDTH_LARGE: &str = "max-w-4xl xl:max-w-5xl";
pub const FADE_ANIMATION: &str = "animate-fade-in";
pub const PAGE_TITLE_CLASSES: &str = "text-3xl font-bold mb-8 animate-fade-in";
pub const DEFAULT_GRID_CLASS: &str = "row row-cols-1 row-cols-md-3 g-4";
pub const ERROR_CONTAINER: &str = "flex justify-center items-center min-h-[70vh]";

/// Default card styling when a card does not override it
pub const DEFAULT_CARD_CLASS: &str = "card rounded-4 bg-dark text-white h-100 hover-shadow";

/// Carousel auto-advance interval
pub const CAROUSEL_INTERVAL_MS: u32 = 20_000;

/// Title and container classes shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub title: String,
    pub content_class: String,
    pub fade_in: &'static str,
    pub title_class: &'static str,
}

impl PageLayout {
    pub fn new(title: &str, max_width: &str) -> Self {
        Self {
            title: title.to_string(),
            content_class: format!("{} {}", BASE_CONTAINER, max_width),
            fade_in: FADE_ANIMATION,
            title_class: PAGE_TITLE_CLASSES,
        }
    }

    pub fn card_grid(title: &str) -> Self {
        Self::new(title, WIDTH_MEDIUM)
    }

    pub fn carousel(title: &str) -> Self {
        Self::new(title, WIDTH_SMALL)
    }

    pub fn horizontal_card(title: &str) -> Self {
        Self::new(title, WIDTH_LARGE)
    }

    pub fn error(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content_class: ERROR_CONTAINER.to_string(),
            fade_in: FADE_ANIMATION,
            title_class: PAGE_TITLE_CLASSES,
        }
    }
}

/// Per-page render payload: layout plus one body shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext<T> {
    pub layout: PageLayout,
    pub content: T,
}

// ============================================================================
// Cards
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    pub href: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub badge_text: Option<String>,
    pub card_class: String,
}

impl CardViewModel {
    /// Build a card, rejecting an empty title or an unusable href.
    /// `logo` is a raw logo filename, resolved to its static URL here.
    pub fn new(
        kind: RecordKind,
        href: &str,
        logo: &str,
        logo_alt: &str,
        title: &str,
    ) -> Result<Self, ContentError> {
        if title.trim().is_empty() {
            return Err(ContentError::invalid(kind, href, "card title is empty"));
        }
        if !is_accepted_href(href) {
            return Err(ContentError::invalid(
                kind,
                title,
                format!("href '{}' must be an absolute URL or mailto: link", href),
            ));
        }
        if logo.trim().is_empty() {
            return Err(ContentError::invalid(kind, title, "card has no logo"));
        }
        Ok(Self {
            href: href.to_string(),
            logo_src: logo_src(logo),
            logo_alt: logo_alt.to_string(),
            title: title.to_string(),
            subtitle: None,
            badge_text: None,
            card_class: DEFAULT_CARD_CLASS.to_string(),
        })
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge_text = Some(badge.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.card_class = class.to_string();
        self
    }

    /// `mailto:` cards open the mail client instead of a new tab
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardGrid {
    pub cards: Vec<CardViewModel>,
    pub grid_class: &'static str,
}

/// One headed group of cards on the tech stack page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSection {
    pub category: TechCategory,
    pub heading: &'static str,
    pub cards: Vec<CardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechStack {
    pub frontend: CardSection,
    pub backend: CardSection,
    pub infra: CardSection,
    pub grid_class: &'static str,
}

impl TechStack {
    /// Sections in display order
    pub fn sections(&self) -> [&CardSection; 3] {
        [&self.frontend, &self.backend, &self.infra]
    }
}

// ============================================================================
// Slides
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub src: String,
    pub kind: MediaKind,
}

impl Media {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub media: Media,
    pub alt: String,
    pub title: String,
    pub text: String,
    pub highlight: Option<String>,
    /// Empty when the slide has no citations
    pub sources1: Vec<SourceLink>,
    pub sources2: Vec<SourceLink>,
}

impl Slide {
    /// Body text split on blank lines
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub carousel_id: &'static str,
    pub slides: Vec<Slide>,
    pub interval_ms: u32,
}

// ============================================================================
// Home and landing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroCard {
    pub image_src: String,
    pub image_alt: String,
    pub card_title: String,
    pub card_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub button_class: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Landing {
    pub subtitle: &'static str,
    pub domain_text: &'static str,
    pub portfolio_url: &'static str,
    pub cards: Vec<LandingCard>,
    pub professional_title: &'static str,
    pub professional_description: &'static str,
    pub tech_badges: &'static [TechBadge],
}

// ============================================================================
// Site chrome
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLinkView {
    pub href: &'static str,
    pub logo_src: String,
    pub label: &'static str,
}

/// Navigation, footer and meta data injected into every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteChrome {
    pub app_name: String,
    pub nav_links: Vec<NavLink>,
    pub footer_links: Vec<FooterLinkView>,
    pub meta: SiteMeta,
}

impl SiteChrome {
    pub fn new(app_name: &str, nav: &[NavLink], footer: &[FooterLink], meta: &SiteMeta) -> Self {
        Self {
            app_name: app_name.to_string(),
            nav_links: nav.to_vec(),
            footer_links: footer
                .iter()
                .map(|f| FooterLinkView {
                    href: f.href,
                    logo_src: logo_src(f.logo),
                    label: f.label,
                })
                .collect(),
            meta: meta.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_rejects_empty_title_and_bad_href() {
        assert!(CardViewModel::new(RecordKind::Technology, "https://a.dev", "l.png", "alt", "  ").is_err());
        assert!(CardViewModel::new(RecordKind::Technology, "", "l.png", "alt", "Title").is_err());
        assert!(CardViewModel::new(RecordKind::Technology, "#", "l.png", "alt", "Title").is_err());
        assert!(CardViewModel::new(RecordKind::Technology, "https://a.dev", "", "alt", "Title").is_err());
    }

    #[test]
    fn test_card_defaults() {
        let card = CardViewModel::new(RecordKind::SocialLink, "mailto:a@b.c", "logo-gmail.png", "Gmail", "Email")
            .unwrap()
            .with_subtitle("")
            .with_badge("Send Email");
        assert_eq!(card.logo_src, "/static/images/logos/logo-gmail.png");
        assert_eq!(card.subtitle, None);
        assert_eq!(card.badge_text.as_deref(), Some("Send Email"));
        assert_eq!(card.card_class, DEFAULT_CARD_CLASS);
        assert!(!card.opens_new_tab());
    }

    #[test]
    fn test_card_class_override() {
        let card = CardViewModel::new(RecordKind::Technology, "https://tokio.rs/", "logo-tokio.svg", "Tokio", "Tokio")
            .unwrap()
            .with_class("card rounded-4 bg-secondary h-100");
        assert_eq!(card.card_class, "card rounded-4 bg-secondary h-100");
        assert!(card.opens_new_tab());
    }

    #[test]
    fn test_slide_paragraphs() {
        let slide = Slide {
            media: Media { src: "/static/images/content/a.png".into(), kind: MediaKind::Image },
            alt: "a".into(),
            title: "A".into(),
            text: "First.\n\nSecond.\n\n\n\nThird.".into(),
            highlight: None,
            sources1: vec![],
            sources2: vec![],
        };
        assert_eq!(slide.paragraphs(), vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_layout_presets() {
        let grid = PageLayout::card_grid("Education");
        assert_eq!(grid.content_class, format!("{} {}", BASE_CONTAINER, WIDTH_MEDIUM));
        let hero = PageLayout::horizontal_card("Home");
        assert!(hero.content_class.ends_with(WIDTH_LARGE));
        assert_eq!(PageLayout::error("Not Found").content_class, ERROR_CONTAINER);
    }
}
