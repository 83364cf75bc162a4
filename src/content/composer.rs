//! Page Composer
//!
//! One function per page. Each walks the registry in table order, runs the
//! factory and wraps the result in its layout. Output depends only on the
//! registry snapshot, so repeated calls produce identical contexts.

use crate::content::factory;
use crate::content::registry::ContentRegistry;
use crate::content::types::{ContentError, TechCategory};
use crate::content::view_models::*;

pub const ACHIEVEMENTS_CAROUSEL_ID: &str = "achievementsCarousel";
pub const IRL_CAROUSEL_ID: &str = "irlCarousel";

pub fn home_page(registry: &ContentRegistry) -> PageContext<HeroCard> {
    PageContext {
        layout: PageLayout::horizontal_card("Home"),
        content: factory::hero_card(&registry.home),
    }
}

/// Fails on the first program whose institution key is unknown.
pub fn education_page(registry: &ContentRegistry) -> Result<PageContext<CardGrid>, ContentError> {
    let cards = registry
        .programs
        .iter()
        .map(|program| {
            let institution = registry.institution(program.institution)?;
            factory::education_card(program, institution)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(card_grid("Education", cards))
}

pub fn certifications_page(registry: &ContentRegistry) -> Result<PageContext<CardGrid>, ContentError> {
    let cards = registry
        .certifications
        .iter()
        .map(factory::certification_card)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(card_grid("Certifications", cards))
}

pub fn connect_page(registry: &ContentRegistry) -> Result<PageContext<CardGrid>, ContentError> {
    let cards = registry
        .social_links
        .iter()
        .map(factory::social_card)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(card_grid("Connect", cards))
}

/// Three sections, frontend/backend/infra, each in registry order.
pub fn techstack_page(registry: &ContentRegistry) -> Result<PageContext<TechStack>, ContentError> {
    let section = |category: TechCategory| -> Result<CardSection, ContentError> {
        let cards = registry
            .technologies_in(category)
            .map(factory::technology_card)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CardSection {
            category,
            heading: category.heading(),
            cards,
        })
    };

    Ok(PageContext {
        layout: PageLayout::card_grid("Portfolio Tech Stack"),
        content: TechStack {
            frontend: section(TechCategory::Frontend)?,
            backend: section(TechCategory::Backend)?,
            infra: section(TechCategory::Infra)?,
            grid_class: DEFAULT_GRID_CLASS,
        },
    })
}

pub fn achievements_page(registry: &ContentRegistry) -> Result<PageContext<Carousel>, ContentError> {
    carousel("Achievements", ACHIEVEMENTS_CAROUSEL_ID, &registry.achievements)
}

pub fn irl_page(registry: &ContentRegistry) -> Result<PageContext<Carousel>, ContentError> {
    carousel("IRL", IRL_CAROUSEL_ID, &registry.irl)
}

pub fn landing_page(registry: &ContentRegistry) -> PageContext<Landing> {
    let landing = &registry.landing;
    let cards = landing
        .cards
        .iter()
        .map(|card| LandingCard {
            icon: card.icon,
            title: card.title,
            description: card.description,
            button_text: card.button_text,
            button_class: card.button_class,
            url: landing.url_for(card.target),
        })
        .collect();

    PageContext {
        layout: PageLayout::horizontal_card(landing.title),
        content: Landing {
            subtitle: landing.subtitle,
            domain_text: landing.domain_text,
            portfolio_url: landing.portfolio_url,
            cards,
            professional_title: landing.professional_title,
            professional_description: landing.professional_description,
            tech_badges: landing.tech_badges,
        },
    }
}

fn card_grid(title: &str, cards: Vec<CardViewModel>) -> PageContext<CardGrid> {
    PageContext {
        layout: PageLayout::card_grid(title),
        content: CardGrid {
            cards,
            grid_class: DEFAULT_GRID_CLASS,
        },
    }
}

fn carousel(
    title: &str,
    carousel_id: &'static str,
    records: &[crate::content::types::SlideRecord],
) -> Result<PageContext<Carousel>, ContentError> {
    let slides = records
        .iter()
        .map(factory::slide)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PageContext {
        layout: PageLayout::carousel(title),
        content: Carousel {
            carousel_id,
            slides,
            interval_ms: CAROUSEL_INTERVAL_MS,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{EducationProgram, RecordKind};
    use std::collections::HashSet;

    #[test]
    fn test_techstack_partitions_technologies() {
        let registry = ContentRegistry::builtin();
        let page = techstack_page(&registry).unwrap();
        let stack = &page.content;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut total = 0;
        for section in stack.sections() {
            for card in &section.cards {
                assert!(seen.insert(card.title.as_str()), "{} appears twice", card.title);
                total += 1;
            }
        }
        assert_eq!(total, registry.technologies.len());
        let all: HashSet<&str> = registry.technologies.iter().map(|t| t.name).collect();
        assert_eq!(seen, all);

        // Membership follows each record's static category
        for tech in &registry.technologies {
            let section = match tech.category {
                TechCategory::Frontend => &stack.frontend,
                TechCategory::Backend => &stack.backend,
                TechCategory::Infra => &stack.infra,
            };
            assert!(section.cards.iter().any(|c| c.title == tech.name));
        }
    }

    #[test]
    fn test_techstack_sections_follow_category_order() {
        let page = techstack_page(&ContentRegistry::builtin()).unwrap();
        let categories: Vec<TechCategory> = page.content.sections().iter().map(|s| s.category).collect();
        assert_eq!(categories, TechCategory::ALL.to_vec());
        for section in page.content.sections() {
            assert_eq!(section.heading, section.category.heading());
            assert!(!section.cards.is_empty(), "{} section is empty", section.category.as_str());
        }
    }

    #[test]
    fn test_education_resolves_every_institution() {
        let registry = ContentRegistry::builtin();
        let page = education_page(&registry).unwrap();
        assert_eq!(page.content.cards.len(), registry.programs.len());
        for (card, program) in page.content.cards.iter().zip(&registry.programs) {
            let inst = registry.institution(program.institution).unwrap();
            assert_eq!(card.title, program.program);
            assert_eq!(card.href, inst.url);
        }
    }

    #[test]
    fn test_education_fails_on_unknown_institution() {
        let mut registry = ContentRegistry::builtin();
        registry.programs.insert(
            2,
            EducationProgram {
                institution: "missing_school",
                program: "Ghost Course",
                years: "1999",
            },
        );
        let err = education_page(&registry).unwrap_err();
        assert_eq!(
            err,
            ContentError::NotFound {
                kind: RecordKind::Institution,
                key: "missing_school".to_string(),
            }
        );
    }

    #[test]
    fn test_certifications_output_is_stable() {
        let registry = ContentRegistry::builtin();
        let first = serde_json::to_string(&certifications_page(&registry).unwrap()).unwrap();
        let second = serde_json::to_string(&certifications_page(&registry).unwrap()).unwrap();
        assert_eq!(first, second);

        let titles: Vec<String> = certifications_page(&registry)
            .unwrap()
            .content
            .cards
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles[0], "Associate Cloud Engineer");
        assert_eq!(titles[4], "Terraform Associate");
    }

    #[test]
    fn test_carousels() {
        let registry = ContentRegistry::builtin();
        let achievements = achievements_page(&registry).unwrap();
        assert_eq!(achievements.content.carousel_id, "achievementsCarousel");
        assert_eq!(achievements.content.slides.len(), 4);
        assert_eq!(achievements.content.interval_ms, 20_000);

        let irl = irl_page(&registry).unwrap();
        assert_eq!(irl.content.carousel_id, "irlCarousel");
        assert_eq!(irl.content.slides[1].title, "Valley of Fire Wedding");
    }

    #[test]
    fn test_landing_cards_resolve_urls() {
        let page = landing_page(&ContentRegistry::builtin());
        let urls: Vec<&str> = page.content.cards.iter().map(|c| c.url).collect();
        assert_eq!(
            urls,
            vec!["https://portfolio.me2u.space/", "https://portfolio.me2u.space/connect"]
        );
        assert_eq!(page.content.tech_badges.len(), 3);
    }

    #[test]
    fn test_connect_page() {
        let page = connect_page(&ContentRegistry::builtin()).unwrap();
        assert_eq!(page.layout.title, "Connect");
        assert_eq!(page.content.cards[2].href, "mailto:alan@me2u.space");
    }
}
