//! Content record types.
//!
//! Every record is plain static data. Records are defined once in
//! `registry` and only ever read after that.

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Which registry table a record lives in (used in error messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Institution,
    EducationProgram,
    Certification,
    Technology,
    SocialLink,
    Slide,
    LandingCard,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Institution => "institution",
            RecordKind::EducationProgram => "education program",
            RecordKind::Certification => "certification",
            RecordKind::Technology => "technology",
            RecordKind::SocialLink => "social link",
            RecordKind::Slide => "slide",
            RecordKind::LandingCard => "landing card",
        };
        f.write_str(name)
    }
}

/// Content composition failures. These are data-entry bugs, never user errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("unknown {kind} key '{key}'")]
    NotFound { kind: RecordKind, key: String },

    #[error("invalid {kind} '{key}': {reason}")]
    InvalidRecord {
        kind: RecordKind,
        key: String,
        reason: String,
    },
}

impl ContentError {
    pub fn not_found(kind: RecordKind, key: &str) -> Self {
        ContentError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn invalid(kind: RecordKind, key: &str, reason: impl Into<String>) -> Self {
        ContentError::InvalidRecord {
            kind,
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// School or college that appears on the education page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub alt: &'static str,
}

/// A program or course taken at an institution.
/// `institution` must name an `Institution::key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationProgram {
    pub institution: &'static str,
    pub program: &'static str,
    pub years: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub key: &'static str,
    /// Issuing organisation, shown under the short title
    pub issuer: &'static str,
    pub short_title: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub alt: &'static str,
}

/// Tech stack section a technology belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Infra,
}

impl TechCategory {
    /// Display order on the tech stack page
    pub const ALL: [TechCategory; 3] = [
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::Infra,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Infra => "Infrastructure & DevOps",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Infra => "infra",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technology {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub alt: &'static str,
    pub category: TechCategory,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub alt: &'static str,
    pub description: &'static str,
}

/// (url, label) citation shown under a slide
pub type SourceRef = (&'static str, &'static str);

/// Narrative carousel entry before media resolution.
///
/// `media` is a bare filename in the content folder, or `../<dir>/<file>`
/// for an asset in a sibling image folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    pub media: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub highlight: Option<&'static str>,
    pub sources1: &'static [SourceRef],
    pub sources2: &'static [SourceRef],
}

/// Home page introduction card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRecord {
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechBadge {
    pub name: &'static str,
    pub class: &'static str,
}

/// Which landing-page URL a call-to-action card points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingTarget {
    Portfolio,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingCardRecord {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub button_class: &'static str,
    pub target: LandingTarget,
}

/// Custom-domain landing page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingRecord {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub portfolio_url: &'static str,
    pub contact_url: &'static str,
    pub domain_text: &'static str,
    pub professional_title: &'static str,
    pub professional_description: &'static str,
    pub tech_badges: &'static [TechBadge],
    pub cards: &'static [LandingCardRecord],
}

impl LandingRecord {
    pub fn url_for(&self, target: LandingTarget) -> &'static str {
        match target {
            LandingTarget::Portfolio => self.portfolio_url,
            LandingTarget::Contact => self.contact_url,
        }
    }
}

/// One navigation menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// One footer link with its logo filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub href: &'static str,
    pub logo: &'static str,
    pub label: &'static str,
}

/// `<head>` meta data shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    pub site_title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub keywords: &'static str,
}
