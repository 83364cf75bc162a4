// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::response::Html;

use crate::content::composer;
use crate::content::view_models::{
    CardGrid, Carousel, HeroCard, Landing, PageContext, SiteChrome, TechStack,
};
use crate::server::{AppError, AppState};
use crate::web::routes::Page;

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub chrome: &'a SiteChrome,
    pub page: PageContext<HeroCard>,
}

/// Education, certifications and connect
#[derive(Template)]
#[template(path = "pages/card_grid.html")]
pub struct CardGridTemplate<'a> {
    pub chrome: &'a SiteChrome,
    pub page: PageContext<CardGrid>,
}

#[derive(Template)]
#[template(path = "pages/techstack.html")]
pub struct TechStackTemplate<'a> {
    pub chrome: &'a SiteChrome,
    pub page: PageContext<TechStack>,
}

/// Achievements and IRL
#[derive(Template)]
#[template(path = "pages/carousel.html")]
pub struct CarouselTemplate<'a> {
    pub chrome: &'a SiteChrome,
    pub page: PageContext<Carousel>,
}

#[derive(Template)]
#[template(path = "pages/landing.html")]
pub struct LandingTemplate<'a> {
    pub chrome: &'a SiteChrome,
    pub page: PageContext<Landing>,
}

// ============================================================================
// Rendering
// ============================================================================

/// Compose and render one page. Composition errors surface as 500s.
pub fn render_page(state: &AppState, page: Page) -> Result<Html<String>, AppError> {
    let chrome = state.chrome.as_ref();
    let registry = state.registry.as_ref();

    let html = match page {
        Page::Home => HomeTemplate {
            chrome,
            page: composer::home_page(registry),
        }
        .render()?,
        Page::Education => CardGridTemplate {
            chrome,
            page: composer::education_page(registry)?,
        }
        .render()?,
        Page::Certifications => CardGridTemplate {
            chrome,
            page: composer::certifications_page(registry)?,
        }
        .render()?,
        Page::Connect => CardGridTemplate {
            chrome,
            page: composer::connect_page(registry)?,
        }
        .render()?,
        Page::TechStack => TechStackTemplate {
            chrome,
            page: composer::techstack_page(registry)?,
        }
        .render()?,
        Page::Achievements => CarouselTemplate {
            chrome,
            page: composer::achievements_page(registry)?,
        }
        .render()?,
        Page::Irl => CarouselTemplate {
            chrome,
            page: composer::irl_page(registry)?,
        }
        .render()?,
        Page::Landing => LandingTemplate {
            chrome,
            page: composer::landing_page(registry),
        }
        .render()?,
    };

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::web::routes::ROUTES;

    fn state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    #[test]
    fn test_every_route_renders() {
        let state = state();
        for route in ROUTES {
            let Html(body) = render_page(&state, route.page).unwrap();
            assert!(body.contains("<nav"), "{} is missing the nav bar", route.path);
            assert!(body.contains("</html>"));
        }
    }

    #[test]
    fn test_card_grid_renders_badges_and_mailto() {
        let Html(body) = render_page(&state(), Page::Connect).unwrap();
        assert!(body.contains("View Profile"));
        assert!(body.contains("View GitHub"));
        assert!(body.contains("href=\"mailto:alan@me2u.space\""));
    }

    #[test]
    fn test_carousel_renders_video_and_sources() {
        let Html(body) = render_page(&state(), Page::Achievements).unwrap();
        assert!(body.contains("id=\"achievementsCarousel\""));
        assert!(body.contains("data-bs-interval=\"20000\""));
        assert!(body.contains("<video"));
        assert!(body.contains("/static/videos/content/beat-cancer-bell.mp4"));
    }

    #[test]
    fn test_techstack_renders_sections_in_order() {
        let Html(body) = render_page(&state(), Page::TechStack).unwrap();
        let frontend = body.find("Frontend").unwrap();
        let backend = body.find("Backend").unwrap();
        let infra = body.find("Infrastructure &amp; DevOps").unwrap();
        assert!(frontend < backend && backend < infra);
    }

    #[test]
    fn test_broken_registry_is_a_content_error() {
        let mut registry = crate::content::ContentRegistry::builtin();
        registry.programs[0].institution = "nowhere";
        let state = AppState {
            registry: std::sync::Arc::new(registry),
            ..state()
        };
        assert!(matches!(
            render_page(&state, Page::Education),
            Err(AppError::Content(_))
        ));
    }
}
