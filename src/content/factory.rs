//! Card/Slide Factory
//!
//! Pure record -> view model conversions. Each card kind gets its badge text
//! here so composers never pick labels themselves.

use crate::content::types::*;
use crate::content::utils::classify::{
    is_accepted_href, slide_media_src, social_badge_text, resolve_asset, MediaKind,
    BADGE_LEARN_MORE, BADGE_VIEW_BADGE,
};
use crate::content::view_models::{CardViewModel, HeroCard, Media, Slide, SourceLink};

/// Education card: program title, "<institution> • <years>" subtitle
pub fn education_card(
    program: &EducationProgram,
    institution: &Institution,
) -> Result<CardViewModel, ContentError> {
    let card = CardViewModel::new(
        RecordKind::EducationProgram,
        institution.url,
        institution.logo,
        institution.alt,
        program.program,
    )?
    .with_subtitle(&format!("{} • {}", institution.name, program.years))
    .with_badge(BADGE_LEARN_MORE);
    Ok(card)
}

pub fn certification_card(cert: &Certification) -> Result<CardViewModel, ContentError> {
    Ok(CardViewModel::new(
        RecordKind::Certification,
        cert.url,
        cert.logo,
        cert.alt,
        cert.short_title,
    )?
    .with_subtitle(cert.issuer)
    .with_badge(BADGE_VIEW_BADGE))
}

pub fn technology_card(tech: &Technology) -> Result<CardViewModel, ContentError> {
    Ok(
        CardViewModel::new(RecordKind::Technology, tech.url, tech.logo, tech.alt, tech.name)?
            .with_subtitle(tech.description)
            .with_badge(BADGE_LEARN_MORE),
    )
}

pub fn social_card(link: &SocialLink) -> Result<CardViewModel, ContentError> {
    Ok(
        CardViewModel::new(RecordKind::SocialLink, link.url, link.logo, link.alt, link.name)?
            .with_subtitle(link.description)
            .with_badge(social_badge_text(link.url)),
    )
}

pub fn source_links(sources: &[SourceRef]) -> Result<Vec<SourceLink>, ContentError> {
    sources
        .iter()
        .map(|&(href, label)| {
            if !is_accepted_href(href) {
                return Err(ContentError::invalid(
                    RecordKind::Slide,
                    label,
                    format!("citation href '{}' is not absolute", href),
                ));
            }
            Ok(SourceLink {
                href: href.to_string(),
                label: label.to_string(),
            })
        })
        .collect()
}

/// Resolve a slide's media path and classify it.
/// Media type comes from the raw filename's extension.
pub fn slide(record: &SlideRecord) -> Result<Slide, ContentError> {
    if record.title.trim().is_empty() {
        return Err(ContentError::invalid(RecordKind::Slide, record.media, "slide title is empty"));
    }
    Ok(Slide {
        media: Media {
            src: slide_media_src(record.media),
            kind: MediaKind::classify(record.media),
        },
        alt: record.alt.to_string(),
        title: record.title.to_string(),
        text: record.text.to_string(),
        highlight: record.highlight.map(str::to_string),
        sources1: source_links(record.sources1)?,
        sources2: source_links(record.sources2)?,
    })
}

pub fn hero_card(record: &HeroRecord) -> HeroCard {
    HeroCard {
        image_src: resolve_asset(record.image, "images/content"),
        image_alt: record.alt.to_string(),
        card_title: record.title.to_string(),
        card_text: record.text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::registry::ContentRegistry;

    #[test]
    fn test_badge_text_by_record_kind() {
        let registry = ContentRegistry::builtin();

        let cert = certification_card(&registry.certifications[0]).unwrap();
        assert_eq!(cert.badge_text.as_deref(), Some("View Badge"));

        let tech = technology_card(&registry.technologies[0]).unwrap();
        assert_eq!(tech.badge_text.as_deref(), Some("Learn More"));

        let program = &registry.programs[0];
        let inst = registry.institution(program.institution).unwrap();
        let edu = education_card(program, inst).unwrap();
        assert_eq!(edu.badge_text.as_deref(), Some("Learn More"));
        assert_eq!(edu.subtitle.as_deref(), Some("York University • 2005 - 2010"));

        let badges: Vec<String> = registry
            .social_links
            .iter()
            .map(|l| social_card(l).unwrap().badge_text.unwrap())
            .collect();
        assert_eq!(badges, vec!["View Profile", "View GitHub", "Send Email"]);
    }

    #[test]
    fn test_factory_is_idempotent() {
        let registry = ContentRegistry::builtin();
        let tech = &registry.technologies[3];
        assert_eq!(technology_card(tech).unwrap(), technology_card(tech).unwrap());

        let record = &registry.achievements[1];
        assert_eq!(slide(record).unwrap(), slide(record).unwrap());
    }

    #[test]
    fn test_slide_media_resolution() {
        let registry = ContentRegistry::builtin();
        let slides: Vec<Slide> = registry.achievements.iter().map(|r| slide(r).unwrap()).collect();

        assert_eq!(slides[0].media.kind, MediaKind::Image);
        assert_eq!(slides[1].media.kind, MediaKind::Video);
        assert_eq!(slides[1].media.src, "/static/videos/content/beat-cancer-bell.mp4");
        assert_eq!(slides[3].media.src, "/static/images/logos/logo-york-u.png");

        assert_eq!(slides[1].sources1.len(), 2);
        assert_eq!(slides[1].sources2.len(), 3);
        assert!(slides[1].highlight.is_some());
        assert!(slides[2].sources2.is_empty());
    }

    #[test]
    fn test_slide_rejects_relative_citation() {
        static BAD: &[SourceRef] = &[("/local/page", "Local")];
        let record = SlideRecord {
            media: "x.png",
            alt: "x",
            title: "X",
            text: "x",
            highlight: None,
            sources1: BAD,
            sources2: &[],
        };
        assert!(slide(&record).is_err());
    }

    #[test]
    fn test_hero_card() {
        let hero = hero_card(&ContentRegistry::builtin().home);
        assert_eq!(hero.image_src, "/static/images/content/cartoonized-alan-smith.png");
        assert_eq!(hero.card_title, "Welcome to My Portfolio");
    }
}
