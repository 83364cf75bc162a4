// Route table: one GET path -> one page composer -> one template

use crate::content::registry::LANDING_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Education,
    Certifications,
    TechStack,
    Achievements,
    Irl,
    Connect,
    Landing,
}

impl Page {
    /// Template file under `templates/`
    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "pages/home.html",
            Page::Education | Page::Certifications | Page::Connect => "pages/card_grid.html",
            Page::TechStack => "pages/techstack.html",
            Page::Achievements | Page::Irl => "pages/carousel.html",
            Page::Landing => "pages/landing.html",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

pub static ROUTES: &[Route] = &[
    Route { path: "/", page: Page::Home },
    Route { path: "/home", page: Page::Home },
    Route { path: "/education", page: Page::Education },
    Route { path: "/certifications", page: Page::Certifications },
    Route { path: "/techstack", page: Page::TechStack },
    Route { path: "/achievements", page: Page::Achievements },
    Route { path: "/irl", page: Page::Irl },
    Route { path: "/connect", page: Page::Connect },
    Route { path: LANDING_PATH, page: Page::Landing },
];
