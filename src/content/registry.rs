//! Content Registry
//!
//! Canonical portfolio records, embedded as static tables. Table order is
//! display order: composers walk these slices front to back.
//!
//! `ContentRegistry` owns a copy of the tables so alternate snapshots can be
//! built for tests; the server builds exactly one (`ContentRegistry::builtin`)
//! and shares it read-only.

use serde::Serialize;

use crate::content::types::*;
use crate::content::utils::classify::is_accepted_href;

// ============================================================================
// EMBEDDED CONTENT DATA
// ============================================================================

/// Path of the custom-domain landing route
pub const LANDING_PATH: &str = "/me2u-place";

static INSTITUTIONS: &[Institution] = &[
    Institution { key: "york_university", name: "York University", url: "https://www.yorku.ca/", logo: "logo-york-u.png", alt: "York University logo" },
    Institution { key: "george_brown", name: "George Brown College", url: "https://www.georgebrown.ca/", logo: "logo-george-brown-college.svg", alt: "George Brown College logo" },
    Institution { key: "humber_college", name: "Humber College", url: "https://humber.ca/", logo: "logo-humber-college.svg", alt: "Humber College logo" },
    Institution { key: "centennial_college", name: "Centennial College", url: "https://www.centennialcollege.ca/", logo: "logo-centennial-college.jpg", alt: "Centennial College logo" },
    Institution { key: "seneca_polytechnic", name: "Seneca Polytechnic", url: "https://www.senecapolytechnic.ca/home.html", logo: "logo-seneca.png", alt: "Seneca Polytechnic logo" },
];

static EDUCATION_PROGRAMS: &[EducationProgram] = &[
    EducationProgram { institution: "york_university", program: "Kinesiology, B.A. Specialized Honours", years: "2005 - 2010" },
    EducationProgram { institution: "george_brown", program: "Sport Marketing and Event Management, Certificate", years: "2010 - 2011" },
    EducationProgram { institution: "george_brown", program: "Introduction to Web Design and Development, Course", years: "2012" },
    EducationProgram { institution: "george_brown", program: "Web Page I – XHTML, Course", years: "2013" },
    EducationProgram { institution: "george_brown", program: "Web Page II – JavaScript/jQuery, Course", years: "2013" },
    EducationProgram { institution: "centennial_college", program: "Introduction to Unix/Linux, Course", years: "2015" },
    EducationProgram { institution: "humber_college", program: "Red Hat Enterprise Linux System Admin, Course", years: "2015" },
    EducationProgram { institution: "seneca_polytechnic", program: "Introduction to Databases", years: "2017" },
    EducationProgram { institution: "george_brown", program: "Foundations of PHP, Course", years: "2017" },
    EducationProgram { institution: "york_university", program: "Full-Stack Web Development, Certificate", years: "2018 - 2019" },
];

static CERTIFICATIONS: &[Certification] = &[
    Certification {
        key: "gcp_associate",
        issuer: "Google Cloud",
        short_title: "Associate Cloud Engineer",
        url: "https://www.credly.com/badges/acc75311-8a96-48e5-be8f-c928c9d52ca3",
        logo: "logo-gcp-associate-engineer.png",
        alt: "Google Cloud Associate Cloud Engineer",
    },
    Certification {
        key: "gcp_architect",
        issuer: "Google Cloud",
        short_title: "Professional Cloud Architect",
        url: "https://www.credly.com/badges/85110e1e-ea27-4687-9080-f83eed5694a0",
        logo: "logo-gcp-professional-architect.png",
        alt: "Google Cloud Professional Cloud Architect",
    },
    Certification {
        key: "gcp_devops",
        issuer: "Google Cloud",
        short_title: "Professional Cloud DevOps Engineer",
        url: "https://www.credly.com/badges/9543b3ca-8ec4-4ca6-aa7b-b68853078cd9/public_url",
        logo: "logo-gcp-devops-engineer-certification.png",
        alt: "Google Cloud DevOps Engineer",
    },
    Certification {
        key: "aws_practitioner",
        issuer: "Amazon Web Services",
        short_title: "Certified Cloud Practitioner",
        url: "https://www.credly.com/badges/5f4be6a1-71e2-48dc-8b6e-7fbcf26163f9",
        logo: "logo-aws-certified-cloud-practitioner.png",
        alt: "AWS Cloud Practitioner",
    },
    Certification {
        key: "terraform_associate",
        issuer: "HashiCorp",
        short_title: "Terraform Associate",
        url: "https://www.credly.com/badges/cdd46167-59b6-46be-9abd-29eebf7db00e",
        logo: "logo-terraform.png",
        alt: "HashiCorp Terraform Associate",
    },
];

static TECHNOLOGIES: &[Technology] = &[
    // Frontend
    Technology { key: "html5", name: "HTML5", url: "https://developer.mozilla.org/en-US/docs/Web/HTML", logo: "logo-html.svg", alt: "HTML5", category: TechCategory::Frontend, description: "Markup Language" },
    Technology { key: "css3", name: "CSS3", url: "https://developer.mozilla.org/en-US/docs/Web/CSS", logo: "logo-css.svg", alt: "CSS3", category: TechCategory::Frontend, description: "Stylesheet Language" },
    Technology { key: "javascript", name: "JavaScript", url: "https://developer.mozilla.org/en-US/docs/Web/JavaScript", logo: "logo-js.svg", alt: "JavaScript", category: TechCategory::Frontend, description: "Programming Language" },
    Technology { key: "bootstrap", name: "Bootstrap", url: "https://getbootstrap.com", logo: "logo-bootstrap.png", alt: "Bootstrap Logo", category: TechCategory::Frontend, description: "Responsive, mobile-first front-end web development framework." },
    Technology { key: "tailwindcss", name: "Tailwind CSS", url: "https://tailwindcss.com/", logo: "logo-tailwindcss.png", alt: "Tailwind CSS Logo", category: TechCategory::Frontend, description: "Utility-first CSS framework for rapid UI development." },
    // Backend
    Technology { key: "rust", name: "Rust", url: "https://www.rust-lang.org/", logo: "logo-rust.svg", alt: "Rust", category: TechCategory::Backend, description: "Programming Language" },
    Technology { key: "axum", name: "Axum", url: "https://github.com/tokio-rs/axum", logo: "logo-axum.png", alt: "Axum", category: TechCategory::Backend, description: "Web Framework" },
    Technology { key: "askama", name: "Askama", url: "https://github.com/djc/askama", logo: "logo-askama.svg", alt: "Askama", category: TechCategory::Backend, description: "Template Engine" },
    Technology { key: "tokio", name: "Tokio", url: "https://tokio.rs/", logo: "logo-tokio.svg", alt: "Tokio", category: TechCategory::Backend, description: "Async Runtime" },
    Technology { key: "toml", name: "TOML", url: "https://toml.io/en/", logo: "logo-toml.png", alt: "TOML Logo", category: TechCategory::Backend, description: "Tom's Obvious, Minimal Language for config files." },
    // Infrastructure & DevOps
    Technology { key: "docker", name: "Docker", url: "https://www.docker.com/", logo: "logo-docker-mark-blue.png", alt: "Docker", category: TechCategory::Infra, description: "Containerization" },
    Technology { key: "kubernetes", name: "Kubernetes", url: "https://kubernetes.io/", logo: "logo-kubernetes-logo-without-workmark.png", alt: "Kubernetes", category: TechCategory::Infra, description: "Container Orchestration" },
    Technology { key: "terraform", name: "Terraform", url: "https://www.terraform.io/", logo: "logo-terraform.png", alt: "Terraform", category: TechCategory::Infra, description: "IaC Tool" },
    Technology { key: "github", name: "GitHub", url: "https://github.com", logo: "logo-github.png", alt: "GitHub", category: TechCategory::Infra, description: "Source Code Hosting & Collaboration" },
    Technology { key: "github_actions", name: "GitHub Actions", url: "https://github.com/features/actions", logo: "logo-github-actions.png", alt: "GitHub Actions", category: TechCategory::Infra, description: "CI/CD" },
    Technology { key: "terragrunt", name: "Terragrunt", url: "https://terragrunt.gruntwork.io/", logo: "logo-terragrunt.png", alt: "Terragrunt", category: TechCategory::Infra, description: "IaC Wrapper" },
    Technology { key: "yamlscript", name: "Yamlscript", url: "https://yamlscript.org", logo: "logo-yamlscript.svg", alt: "Yamlscript", category: TechCategory::Infra, description: "YAML-based Scripting Language" },
    Technology { key: "cloud_run", name: "Google Cloud Run", url: "https://cloud.google.com/run", logo: "logo-gcp-cloud-run.png", alt: "Cloud Run", category: TechCategory::Infra, description: "Serverless Platform" },
];

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { key: "linkedin", name: "LinkedIn", url: "https://www.linkedin.com/in/alan-smith-ca/", logo: "logo-linkedin.png", alt: "LinkedIn Logo", description: "Connect with me on LinkedIn" },
    SocialLink { key: "github", name: "GitHub", url: "https://github.com/SmithAndGiggles", logo: "logo-github.png", alt: "GitHub Logo", description: "See my projects on GitHub" },
    SocialLink { key: "email", name: "Email", url: "mailto:alan@me2u.space", logo: "logo-gmail.png", alt: "Gmail Logo", description: "Email me!" },
];

// Citations shared between slides
const CANCER_SOCIETY: SourceRef = ("https://cancer.ca/en/cancer-information/cancer-types/acute-myeloid-leukemia-aml/statistics", "Canadian Cancer Society");
const ALBERTA_HEALTH: SourceRef = ("https://www.albertahealthservices.ca/assets/info/hp/cancer/if-hp-cancer-guide-lyhe008-apl.pdf", "Alberta Health Services");
const LEUKEMIA_SOCIETY: SourceRef = ("https://www.bloodcancers.ca/sites/default/files/2023-02/LSC22103_LLS1001E_AML%20Brochure_E_m4.pdf", "Leukemia & Lymphoma Society");
const BIOMEDCENTRAL: SourceRef = ("https://bmccancer.biomedcentral.com/articles/10.1186/s12885-023-10612-z", "BioMed Central");
const DONKEY_SANCTUARY: SourceRef = ("https://www.thedonkeysanctuary.ca", "More about the DSC");
const YORK_ACE: SourceRef = ("https://news.yorku.ca/2005/05/30/york-u-honours-2005-ace-graduates-with-5000-scholarships/", "Read full article here");
const LINKEDIN_GENAI_POST: SourceRef = ("https://www.linkedin.com/feed/update/urn:li:activity:7285343139874140160", "Full LinkedIn post here");
const TORONTO_DEVOPS_MEETUP: SourceRef = ("https://www.meetup.com/toronto-enterprise-devops-user-group/", "Toronto Enterprise DevOps Group on Meetup");
const VALLEY_OF_FIRE: SourceRef = ("https://parks.nv.gov/parks/valley-of-fire", "Valley of Fire State Park");

static ACHIEVEMENT_SLIDES: &[SlideRecord] = &[
    SlideRecord {
        media: "linkedin-onix-genai-post.png",
        alt: "LinkedIn Onix GenAI Post",
        title: "LinkedIn Onix GenAI Post",
        text: "We're proud to announce that Onix has achieved the Google Cloud Generative AI – Services Specialization as part of the Google Cloud Partner Advantage program! This recognition highlights our expertise in designing, deploying, and scaling generative AI solutions that drive real business transformation.\n\nOnix now holds 8 Google Cloud specializations, demonstrating our commitment to delivering solutions that help businesses use AI to improve productivity, efficiency, and creativity.",
        highlight: None,
        sources1: &[LINKEDIN_GENAI_POST],
        sources2: &[],
    },
    SlideRecord {
        media: "beat-cancer-bell.mp4",
        alt: "Beat cancer bell ringing ceremony",
        title: "Acute Promyelocytic Leukemia (APL) Journey",
        text: "Acute promyelocytic leukemia (APL) is a rare subtype of acute myeloid leukemia (AML) in Canada. Based on national statistics, around 1,160 Canadians were diagnosed with AML in 2019, and with APL making up approximately 5–10% of these cases, it's estimated that 58 to 116 new APL cases occur each year.",
        highlight: Some("While APL is rare, it's one of the most treatable types of leukemia. Thanks to modern therapies, remission rates exceed 90%, and 5-year overall survival ranges from 80% to 90%, giving patients real hope for recovery."),
        sources1: &[CANCER_SOCIETY, ALBERTA_HEALTH],
        sources2: &[ALBERTA_HEALTH, LEUKEMIA_SOCIETY, BIOMEDCENTRAL],
    },
    SlideRecord {
        media: "donkey-santuary-5k-alan.jpg",
        alt: "Alan completing 5K run at Donkey Sanctuary",
        title: "Donkey Sanctuary 5K",
        text: "I underwent intense chemotherapy treatments, six days a week, four weeks on and four weeks off, after a near-death experience in the ICU shortly following my diagnosis. Between October 2022 and June 2023, the teams at Princess Margaret and Mount Sinai worked tirelessly to help me reach remission.\n\nGetting through this experience remains one of the most meaningful achievements of my life. Here's a photo from a 5K run I completed at The Donkey Sanctuary of Canada. After spending weeks unable to walk, crossing that finish line was proof of progress and of how far I've come.",
        highlight: None,
        sources1: &[DONKEY_SANCTUARY],
        sources2: &[],
    },
    SlideRecord {
        media: "../logos/logo-york-u.png",
        alt: "York University ACE program logo",
        title: "York University ACE Graduate and Scholarship Recipient",
        text: "On Tuesday, May 31, 2005, the York University/Westview Partnership and the York University Faculty Association Trust co-hosted a gala celebration honouring 25 graduates of York's Advance Credit Experience (ACE) Project. The program gives secondary students at Westview Centennial Secondary School and Emery Collegiate Institute firsthand exposure to post-secondary education before they graduate from high school.\n\nThe top four graduates of ACE are eligible for scholarships to York worth up to $5,000. Last year's scholarship recipients are: Mohammed Ahmad, Claudine Reid, Ladonna Taylor and Alan Smith.",
        highlight: None,
        sources1: &[YORK_ACE],
        sources2: &[],
    },
];

static IRL_SLIDES: &[SlideRecord] = &[
    SlideRecord {
        media: "ingy-dot-net.jpg",
        alt: "Ingy döt Net at a meetup",
        title: "Met the creator of YAML Script",
        text: "Met the creator of YAML at the Toronto Enterprise DevOps Group (Meetup). Learned how YS (YAML Script) brings real programming features right into YAML files, like variables, functions, and reusing code, while keeping everything readable.\n\nToronto Enterprise DevOps Group is for people in the GTA interested in DevOps practices, automation, and modern infrastructure. All experience levels welcome.",
        highlight: None,
        sources1: &[TORONTO_DEVOPS_MEETUP],
        sources2: &[],
    },
    SlideRecord {
        media: "valley-of-fire-wedding.jpg",
        alt: "Wedding photo at Valley of Fire",
        title: "Valley of Fire Wedding",
        text: "After being together for 13 years (2009–2022), we finally tied the knot! We both love visiting Vegas and years ago, we drove out to the Valley of Fire and thought it would be amazing to get married there. In 2022, we made it happen with a ceremony surrounded by the red rocks.",
        highlight: None,
        sources1: &[VALLEY_OF_FIRE],
        sources2: &[],
    },
    SlideRecord {
        media: "pacman-tattoo.jpg",
        alt: "Pacman tattoo",
        title: "Pacman Tattoo",
        text: "I have a few 'nerdy' tattoos, and Pacman is a fun addition to the collection. The circular scar on my arm is from a PICC line used during chemo, but I decided to give it a new meaning. Now, Pacman lives there, turning a medical reminder into something playful.",
        highlight: None,
        sources1: &[],
        sources2: &[],
    },
];

static HOME: HeroRecord = HeroRecord {
    image: "cartoonized-alan-smith.png",
    alt: "Cartoonized Alan Smith",
    title: "Welcome to My Portfolio",
    text: "Hi, I'm Alan Smith, a technology enthusiast, lifelong learner, and problem solver. This website is a showcase of my journey, projects, and achievements. Explore my work, discover my story, and check out the certifications page. I'm hoping to have more badges there soon!",
};

static LANDING: LandingRecord = LandingRecord {
    title: "Welcome to me2u.place",
    subtitle: "Alan Smith - Portfolio & Professional Experience",
    portfolio_url: "https://portfolio.me2u.space/",
    contact_url: "https://portfolio.me2u.space/connect",
    domain_text: "This domain redirects to my main portfolio at",
    professional_title: "Cloud & DevOps Engineer",
    professional_description: "Specializing in Google Cloud Platform, Terraform, Kubernetes, and modern DevOps practices",
    tech_badges: &[
        TechBadge { name: "GCP", class: "bg-primary" },
        TechBadge { name: "Terraform", class: "bg-secondary" },
        TechBadge { name: "Kubernetes", class: "bg-info" },
    ],
    cards: &[
        LandingCardRecord {
            icon: "fas fa-user-tie fa-3x text-primary mb-3",
            title: "Portfolio",
            description: "Explore my professional journey, skills, and achievements",
            button_text: "View Portfolio",
            button_class: "btn btn-primary",
            target: LandingTarget::Portfolio,
        },
        LandingCardRecord {
            icon: "fas fa-envelope fa-3x text-success mb-3",
            title: "Contact",
            description: "Get in touch for opportunities and collaborations",
            button_text: "Contact Me",
            button_class: "btn btn-success",
            target: LandingTarget::Contact,
        },
    ],
};

static NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/education", icon: "fas fa-graduation-cap", label: "EDUCATION" },
    NavLink { href: "/certifications", icon: "fas fa-certificate", label: "CERTIFICATIONS" },
    NavLink { href: "/achievements", icon: "fas fa-trophy", label: "ACHIEVEMENTS" },
    NavLink { href: "/techstack", icon: "fas fa-laptop-code", label: "PORTFOLIO TECH STACK" },
    NavLink { href: "/irl", icon: "fas fa-users", label: "IRL" },
    NavLink { href: "/connect", icon: "fas fa-link", label: "CONNECT" },
];

static FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { href: "https://www.linkedin.com/in/alan-smith-ca/", logo: "logo-linkedin.png", label: "LinkedIn" },
    FooterLink { href: "https://github.com/SmithAndGiggles", logo: "logo-github-dark.png", label: "GitHub" },
];

static META: SiteMeta = SiteMeta {
    site_title: "Alan Smith - Portfolio",
    description: "Professional portfolio showcasing cloud engineering, full-stack development, and technical achievements.",
    author: "Alan Smith",
    keywords: "cloud engineer, full-stack developer, GCP, Rust, DevOps",
};

// ============================================================================
// Registry
// ============================================================================

/// Snapshot of all portfolio content.
///
/// Fields are public so tests can build alternate snapshots; the running
/// server never mutates its instance.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    pub institutions: Vec<Institution>,
    pub programs: Vec<EducationProgram>,
    pub certifications: Vec<Certification>,
    pub technologies: Vec<Technology>,
    pub social_links: Vec<SocialLink>,
    pub achievements: Vec<SlideRecord>,
    pub irl: Vec<SlideRecord>,
    pub home: HeroRecord,
    pub landing: LandingRecord,
    pub nav_links: Vec<NavLink>,
    pub footer_links: Vec<FooterLink>,
    pub meta: SiteMeta,
}

/// Record counts reported at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub institutions: usize,
    pub programs: usize,
    pub certifications: usize,
    pub technologies: usize,
    pub social_links: usize,
    pub slides: usize,
}

impl ContentRegistry {
    /// The portfolio's own content
    pub fn builtin() -> Self {
        Self {
            institutions: INSTITUTIONS.to_vec(),
            programs: EDUCATION_PROGRAMS.to_vec(),
            certifications: CERTIFICATIONS.to_vec(),
            technologies: TECHNOLOGIES.to_vec(),
            social_links: SOCIAL_LINKS.to_vec(),
            achievements: ACHIEVEMENT_SLIDES.to_vec(),
            irl: IRL_SLIDES.to_vec(),
            home: HOME.clone(),
            landing: LANDING.clone(),
            nav_links: NAV_LINKS.to_vec(),
            footer_links: FOOTER_LINKS.to_vec(),
            meta: META.clone(),
        }
    }

    pub fn institution(&self, key: &str) -> Result<&Institution, ContentError> {
        self.institutions
            .iter()
            .find(|i| i.key == key)
            .ok_or_else(|| ContentError::not_found(RecordKind::Institution, key))
    }

    pub fn certification(&self, key: &str) -> Result<&Certification, ContentError> {
        self.certifications
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| ContentError::not_found(RecordKind::Certification, key))
    }

    pub fn technology(&self, key: &str) -> Result<&Technology, ContentError> {
        self.technologies
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| ContentError::not_found(RecordKind::Technology, key))
    }

    pub fn social_link(&self, key: &str) -> Result<&SocialLink, ContentError> {
        self.social_links
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| ContentError::not_found(RecordKind::SocialLink, key))
    }

    /// Technologies in one category, in registry order
    pub fn technologies_in(&self, category: TechCategory) -> impl Iterator<Item = &Technology> {
        self.technologies.iter().filter(move |t| t.category == category)
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            institutions: self.institutions.len(),
            programs: self.programs.len(),
            certifications: self.certifications.len(),
            technologies: self.technologies.len(),
            social_links: self.social_links.len(),
            slides: self.achievements.len() + self.irl.len(),
        }
    }

    /// Check cross references and required fields.
    ///
    /// Run once at startup; any error here is a data-entry bug and must stop
    /// the process before it serves traffic.
    pub fn validate(&self) -> Result<(), ContentError> {
        for inst in &self.institutions {
            check_linked(RecordKind::Institution, inst.key, inst.name, inst.url, inst.logo)?;
        }
        for program in &self.programs {
            self.institution(program.institution)?;
            if program.program.trim().is_empty() {
                return Err(ContentError::invalid(
                    RecordKind::EducationProgram,
                    program.institution,
                    "empty program name",
                ));
            }
        }
        for cert in &self.certifications {
            check_linked(RecordKind::Certification, cert.key, cert.short_title, cert.url, cert.logo)?;
        }
        for tech in &self.technologies {
            check_linked(RecordKind::Technology, tech.key, tech.name, tech.url, tech.logo)?;
        }
        for link in &self.social_links {
            check_linked(RecordKind::SocialLink, link.key, link.name, link.url, link.logo)?;
        }
        for slide in self.achievements.iter().chain(self.irl.iter()) {
            if slide.title.trim().is_empty() || slide.media.trim().is_empty() {
                return Err(ContentError::invalid(
                    RecordKind::Slide,
                    slide.media,
                    "slide needs a title and a media file",
                ));
            }
        }
        for card in self.landing.cards {
            if !is_accepted_href(self.landing.url_for(card.target)) {
                return Err(ContentError::invalid(
                    RecordKind::LandingCard,
                    card.title,
                    "landing URL is not absolute",
                ));
            }
        }
        Ok(())
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_linked(
    kind: RecordKind,
    key: &str,
    title: &str,
    href: &str,
    logo: &str,
) -> Result<(), ContentError> {
    if title.trim().is_empty() {
        return Err(ContentError::invalid(kind, key, "empty title"));
    }
    if logo.trim().is_empty() {
        return Err(ContentError::invalid(kind, key, "missing logo"));
    }
    if !is_accepted_href(href) {
        return Err(ContentError::invalid(
            kind,
            key,
            format!("href '{}' must be an absolute URL or mailto: link", href),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_validates() {
        ContentRegistry::builtin().validate().expect("builtin content should be valid");
    }

    #[test]
    fn test_institution_lookup() {
        let registry = ContentRegistry::builtin();
        let york = registry.institution("york_university").unwrap();
        assert_eq!(york.name, "York University");

        let err = registry.institution("hogwarts").unwrap_err();
        assert_eq!(err, ContentError::not_found(RecordKind::Institution, "hogwarts"));
    }

    #[test]
    fn test_other_lookups() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.certification("aws_practitioner").unwrap().issuer, "Amazon Web Services");
        assert_eq!(registry.technology("docker").unwrap().category, TechCategory::Infra);
        assert_eq!(registry.social_link("email").unwrap().url, "mailto:alan@me2u.space");
        assert!(registry.technology("cobol").is_err());
    }

    #[test]
    fn test_keys_are_unique() {
        let registry = ContentRegistry::builtin();
        let mut keys: Vec<&str> = registry.technologies.iter().map(|t| t.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total, "technology keys must be unique");
    }

    #[test]
    fn test_category_enumeration_keeps_insertion_order() {
        let registry = ContentRegistry::builtin();
        let frontend: Vec<&str> = registry
            .technologies_in(TechCategory::Frontend)
            .map(|t| t.key)
            .collect();
        assert_eq!(frontend, vec!["html5", "css3", "javascript", "bootstrap", "tailwindcss"]);
    }

    #[test]
    fn test_validate_rejects_dangling_institution() {
        let mut registry = ContentRegistry::builtin();
        registry.programs.push(EducationProgram {
            institution: "unknown_school",
            program: "Underwater Basket Weaving",
            years: "2020",
        });
        let err = registry.validate().unwrap_err();
        assert!(matches!(err, ContentError::NotFound { kind: RecordKind::Institution, .. }));
    }

    #[test]
    fn test_validate_rejects_relative_href() {
        let mut registry = ContentRegistry::builtin();
        registry.technologies[0].url = "docs/html";
        assert!(matches!(
            registry.validate(),
            Err(ContentError::InvalidRecord { kind: RecordKind::Technology, .. })
        ));
    }

    #[test]
    fn test_stats() {
        let stats = ContentRegistry::builtin().stats();
        assert_eq!(stats.programs, 10);
        assert_eq!(stats.certifications, 5);
        assert_eq!(stats.slides, 7);
    }
}
