//! Site content
//!
//! Everything the pages display comes from a [`Content`] value: either the
//! built-in [`Content::reference`] copy or a TOML file read by
//! [`load_content`]. The renderers only iterate these lists; the one rule
//! enforced here is that the testimonial carousel has at least one slide.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::page::{Page, Route};

/// A labelled navigation target (nav items, buttons, quick links)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub target: Route,
}

impl Cta {
    pub fn new(label: impl Into<String>, target: impl Into<Route>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub highlight: String,
    pub intro: String,
    pub primary: Cta,
    pub secondary: Cta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    /// Icon name understood by the renderer
    pub icon: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub image: String,
    pub target: Route,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub title: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub primary: Cta,
    pub secondary: Cta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub headline: String,
    pub story: Vec<String>,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub category: String,
    pub author: String,
    pub excerpt: String,
    pub image: String,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub client: String,
    pub category: String,
    pub image: String,
    pub summary: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub address: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub socials: Vec<SocialLink>,
    pub quick_links: Vec<Cta>,
    pub copyright: String,
}

/// All static content for the site
///
/// Missing fields in a content file fall back to the reference copy, so a
/// file may override only the sections it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub brand: String,
    pub nav: Vec<Cta>,
    pub nav_cta: Cta,
    pub hero: Hero,
    pub clients: Vec<String>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub call_to_action: CallToAction,
    pub about: About,
    pub team: Vec<TeamMember>,
    pub pricing: Vec<PricingTier>,
    pub blog_posts: Vec<BlogPost>,
    pub case_study: CaseStudy,
    pub contact: ContactInfo,
    pub footer: Footer,
}

impl Default for Content {
    fn default() -> Self {
        Self::reference()
    }
}

impl Content {
    /// Check the invariants the renderers rely on
    pub fn validate(&self) -> Result<()> {
        if self.testimonials.is_empty() {
            return Err(Error::content_invalid(
                "at least one testimonial is required",
            ));
        }
        Ok(())
    }

    /// Number of carousel slides (always >= 1 for validated content)
    pub fn slide_count(&self) -> usize {
        self.testimonials.len()
    }

    /// Blog post shown by a blog post page, if the content has one
    pub fn blog_post(&self, page: Page) -> Option<&BlogPost> {
        page.blog_post_index()
            .and_then(|index| self.blog_posts.get(index))
    }

    /// The built-in qdigital. site copy
    pub fn reference() -> Self {
        Self {
            brand: "qdigital.".to_string(),
            nav: vec![
                Cta::new("Home", Page::Home),
                Cta::new("About", Page::About),
                Cta::new("Services", Page::Services),
                Cta::new("Portfolio", Page::Portfolio),
                Cta::new("Team", Page::Team),
                Cta::new("Pricing", Page::Pricing),
                Cta::new("Blog", Page::Blog),
                Cta::new("Contact", Page::Contact),
            ],
            nav_cta: Cta::new("Start Project", Page::Contact),
            hero: Hero {
                badge: "We're accepting new projects".to_string(),
                title: "Digital Excellence".to_string(),
                highlight: "Reimagined".to_string(),
                intro: "We are qdigital, a collective of designers and developers dedicated to creating future-proof digital experiences that captivate and convert.".to_string(),
                primary: Cta::new("Explore Our Services", Page::Services),
                secondary: Cta::new("View Our Work", Page::Portfolio),
            },
            clients: ["Google", "Microsoft", "Amazon", "Netflix", "Spotify", "Airbnb"]
                .into_iter()
                .map(String::from)
                .collect(),
            services: vec![
                service(
                    "UI/UX Design",
                    "Crafting intuitive and engaging user interfaces that lead to seamless user experiences.",
                    "layers",
                    "violet",
                ),
                service(
                    "Web Development",
                    "Building robust, scalable, and high-performance websites and web applications from the ground up.",
                    "code",
                    "sky",
                ),
                service(
                    "Brand Strategy",
                    "Developing a cohesive brand identity and strategy that truly resonates with your audience.",
                    "sparkles",
                    "amber",
                ),
                service(
                    "Digital Marketing",
                    "Implementing data-driven strategies to boost your online presence and drive measurable growth.",
                    "globe",
                    "rose",
                ),
            ],
            projects: vec![
                project(
                    "Nexus UI/UX Design",
                    "UI/UX Design",
                    "https://images.unsplash.com/photo-1549495759-992a06511a7c?q=80&w=2670&auto=format&fit=crop",
                    Page::CaseStudy,
                ),
                project(
                    "Project Genesis Branding",
                    "Brand Identity",
                    "https://images.unsplash.com/photo-1579783900882-c2057d9b936f?q=80&w=2670&auto=format&fit=crop",
                    Page::Portfolio,
                ),
                project(
                    "Aura E-commerce Platform",
                    "Web Development",
                    "https://images.unsplash.com/photo-1582213782179-e0d5333bb203?q=80&w=2670&auto=format&fit=crop",
                    Page::Portfolio,
                ),
                project(
                    "Stratosphere Mobile App",
                    "UI/UX Design",
                    "https://images.unsplash.com/photo-1629864299981-d13028d68966?q=80&w=2670&auto=format&fit=crop",
                    Page::Portfolio,
                ),
                project(
                    "Orion Marketing Campaign",
                    "Digital Marketing",
                    "https://images.unsplash.com/photo-1550547660-f9479e0f3938?q=80&w=2670&auto=format&fit=crop",
                    Page::Portfolio,
                ),
                project(
                    "Equinox SaaS Solution",
                    "Web Development",
                    "https://images.unsplash.com/photo-1620242250109-0d29d3c50965?q=80&w=2670&auto=format&fit=crop",
                    Page::Portfolio,
                ),
            ],
            stats: vec![
                stat("150+", "Projects Completed"),
                stat("95%", "Client Satisfaction"),
                stat("50+", "Team Members"),
                stat("12+", "Years Experience"),
            ],
            testimonials: vec![
                Testimonial {
                    text: "qdigital's work is simply outstanding. They turned our vague ideas into a stunning and highly functional website that exceeded all our expectations.".to_string(),
                    author: "Jane Doe".to_string(),
                    title: "CEO, Innovate Solutions".to_string(),
                    avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=2587&auto=format&fit=crop".to_string(),
                },
                Testimonial {
                    text: "The team is incredibly talented and professional. Their dedication to our project and attention to detail resulted in a product we are truly proud of.".to_string(),
                    author: "John Smith".to_string(),
                    title: "Founder, Apex Corp".to_string(),
                    avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=2670&auto=format&fit=crop".to_string(),
                },
                Testimonial {
                    text: "Our new platform has seen a remarkable increase in user engagement since its launch. The design is beautiful and the performance is flawless.".to_string(),
                    author: "Emily Chen".to_string(),
                    title: "Marketing Director, Global Ventures".to_string(),
                    avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=2670&auto=format&fit=crop".to_string(),
                },
            ],
            call_to_action: CallToAction {
                title: "Ready to Create Something Amazing?".to_string(),
                body: "Let's discuss your vision and turn it into a powerful digital reality. Our team is ready to help you succeed.".to_string(),
                primary: Cta::new("Start Your Project", Page::Contact),
                secondary: Cta::new("Learn More", Page::Services),
            },
            about: About {
                headline: "A studio built around craft".to_string(),
                story: vec![
                    "qdigital started as three freelancers sharing a desk in San Francisco. Twelve years later we are a team of fifty designers, engineers and strategists.".to_string(),
                    "We still work the way we did on day one: small senior teams, close collaboration with our clients, and a stubborn focus on the details.".to_string(),
                ],
                values: vec![
                    value("Craft", "We sweat the details so our clients' users never have to."),
                    value("Candour", "Clear communication and honest estimates, every week of the project."),
                    value("Curiosity", "New tools and ideas are tested in the open before they reach client work."),
                ],
            },
            team: vec![
                member("Alex Rivera", "Founder & Creative Director", "Leads the studio's design practice and every brand engagement."),
                member("Priya Nair", "Head of Engineering", "Keeps our platforms fast, accessible and maintainable."),
                member("Marcus Lee", "Lead Product Designer", "Turns research into interfaces people enjoy using."),
                member("Sofia Rossi", "Strategy Director", "Connects brand, product and growth into a single plan."),
            ],
            pricing: vec![
                PricingTier {
                    name: "Starter".to_string(),
                    price: "$4,900".to_string(),
                    period: "per project".to_string(),
                    description: "A polished marketing site for new ventures.".to_string(),
                    features: strings(&["Up to 5 pages", "Responsive design", "Basic SEO setup", "2 revision rounds"]),
                    highlighted: false,
                },
                PricingTier {
                    name: "Growth".to_string(),
                    price: "$12,900".to_string(),
                    period: "per project".to_string(),
                    description: "Design system and web app for scaling teams.".to_string(),
                    features: strings(&["Up to 20 pages", "Custom design system", "CMS integration", "Analytics dashboard", "4 revision rounds"]),
                    highlighted: true,
                },
                PricingTier {
                    name: "Enterprise".to_string(),
                    price: "Custom".to_string(),
                    period: "retainer".to_string(),
                    description: "A dedicated team embedded with yours.".to_string(),
                    features: strings(&["Unlimited scope", "Dedicated squad", "Priority support", "Quarterly strategy reviews"]),
                    highlighted: false,
                },
            ],
            blog_posts: vec![
                post(
                    "Designing for the Next Decade",
                    "March 12, 2024",
                    "Design",
                    "Alex Rivera",
                    "Why future-proof design starts with systems, not screens.",
                    &[
                        "Trends come and go, but systems endure. A good design system lets a product evolve without losing its identity.",
                        "We start every engagement by mapping the primitives: type, colour, spacing and motion. Screens come later.",
                    ],
                ),
                post(
                    "Performance Is a Feature",
                    "April 2, 2024",
                    "Development",
                    "Priya Nair",
                    "How we keep page loads under a second on every project.",
                    &[
                        "Users notice speed before they notice anything else. We budget performance the same way we budget time.",
                        "Every build is measured in CI, and regressions block the release just like a failing test.",
                    ],
                ),
                post(
                    "Brand Strategy in Practice",
                    "May 18, 2024",
                    "Strategy",
                    "Sofia Rossi",
                    "Turning a positioning statement into a brand people remember.",
                    &[
                        "A brand is a promise kept over and over. Strategy decides which promise; design makes it visible.",
                        "Our workshops end with a one-page brand brief that every later decision can be tested against.",
                    ],
                ),
            ],
            case_study: CaseStudy {
                title: "Nexus UI/UX Design".to_string(),
                client: "Nexus Labs".to_string(),
                category: "UI/UX Design".to_string(),
                image: "https://images.unsplash.com/photo-1549495759-992a06511a7c?q=80&w=2670&auto=format&fit=crop".to_string(),
                summary: "A complete redesign of the Nexus analytics suite, from research to a shipped design system.".to_string(),
                challenge: "Nexus had grown feature by feature, and new users were lost within minutes of signing up.".to_string(),
                solution: "We rebuilt the information architecture around the three jobs users actually came to do and delivered a component library the Nexus team now owns.".to_string(),
                results: vec![
                    stat("3x", "Faster onboarding"),
                    stat("42%", "Fewer support tickets"),
                    stat("4.8", "App store rating"),
                ],
            },
            contact: ContactInfo {
                intro: "Tell us about your project and we'll get back to you within one business day.".to_string(),
                email: "hello@qdigital.com".to_string(),
                phone: "+1 (415) 555-0134".to_string(),
                address: strings(&["123 Digital Street", "San Francisco, CA 94103"]),
            },
            footer: Footer {
                blurb: "We are a creative agency specializing in web design, development, and digital strategy. We help brands succeed in the digital world.".to_string(),
                socials: vec![
                    social("Twitter", "https://twitter.com/qdigital"),
                    social("LinkedIn", "https://linkedin.com/company/qdigital"),
                    social("Dribbble", "https://dribbble.com/qdigital"),
                    social("GitHub", "https://github.com/qdigital"),
                ],
                quick_links: vec![
                    Cta::new("About Us", Page::About),
                    Cta::new("Our Services", Page::Services),
                    Cta::new("Portfolio", Page::Portfolio),
                    Cta::new("Contact Us", Page::Contact),
                ],
                copyright: "© 2024 qdigital. All rights reserved.".to_string(),
            },
        }
    }
}

/// Load content from a TOML file and validate it
pub fn load_content(path: &Path) -> Result<Content> {
    if !path.exists() {
        return Err(Error::content_not_found(path));
    }
    let raw = std::fs::read_to_string(path)?;
    let content: Content = toml::from_str(&raw)?;
    content.validate()?;
    tracing::debug!(
        "Loaded content from {:?} ({} testimonials, {} blog posts)",
        path,
        content.testimonials.len(),
        content.blog_posts.len()
    );
    Ok(content)
}

// ─────────────────────────────────────────────────────────────────
// Reference content helpers
// ─────────────────────────────────────────────────────────────────

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn service(title: &str, description: &str, icon: &str, accent: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        accent: accent.to_string(),
    }
}

fn project(title: &str, category: &str, image: &str, target: Page) -> Project {
    Project {
        title: title.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        target: target.into(),
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn value(title: &str, description: &str) -> Value {
    Value {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn member(name: &str, role: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        photo: String::new(),
    }
}

fn post(
    title: &str,
    date: &str,
    category: &str,
    author: &str,
    excerpt: &str,
    body: &[&str],
) -> BlogPost {
    BlogPost {
        title: title.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        excerpt: excerpt.to_string(),
        image: String::new(),
        body: strings(body),
    }
}

fn social(name: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reference_content_is_valid() {
        let content = Content::reference();
        assert!(content.validate().is_ok());
        assert_eq!(content.slide_count(), 3);
        assert_eq!(content.nav.len(), 8);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.blog_posts.len(), 3);
    }

    #[test]
    fn test_only_first_project_links_to_case_study() {
        let content = Content::reference();
        assert_eq!(content.projects[0].target, Route::Page(Page::CaseStudy));
        assert!(content.projects[1..]
            .iter()
            .all(|p| p.target == Route::Page(Page::Portfolio)));
    }

    #[test]
    fn test_empty_testimonials_rejected() {
        let mut content = Content::reference();
        content.testimonials.clear();
        let err = content.validate().unwrap_err();
        assert!(matches!(err, Error::ContentInvalid { .. }));
    }

    #[test]
    fn test_blog_post_lookup() {
        let content = Content::reference();
        assert_eq!(
            content.blog_post(Page::BlogPostTwo).map(|p| p.title.as_str()),
            Some("Performance Is a Feature")
        );
        assert!(content.blog_post(Page::Blog).is_none());
    }

    #[test]
    fn test_load_content_missing_file() {
        let temp = tempdir().unwrap();
        let err = load_content(&temp.path().join("content.toml")).unwrap_err();
        assert!(matches!(err, Error::ContentNotFound { .. }));
    }

    #[test]
    fn test_load_content_partial_override() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("content.toml");
        std::fs::write(
            &path,
            r#"
brand = "acme."

[[testimonials]]
text = "Great."
author = "A. Person"
title = "CTO, Somewhere"
avatar = ""
"#,
        )
        .unwrap();

        let content = load_content(&path).unwrap();
        assert_eq!(content.brand, "acme.");
        assert_eq!(content.slide_count(), 1);
        // Untouched sections keep the reference copy
        assert_eq!(content.services.len(), 4);
    }

    #[test]
    fn test_load_content_rejects_empty_testimonials() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("content.toml");
        std::fs::write(&path, "testimonials = []\n").unwrap();

        let err = load_content(&path).unwrap_err();
        assert!(matches!(err, Error::ContentInvalid { .. }));
    }

    #[test]
    fn test_load_content_accepts_unknown_targets() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("content.toml");
        std::fs::write(
            &path,
            r#"
nav_cta = { label = "Hire us", target = "hire-us" }
"#,
        )
        .unwrap();

        let content = load_content(&path).unwrap();
        assert_eq!(content.nav_cta.target, Route::NotFound("hire-us".to_string()));
    }

    #[test]
    fn test_load_content_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("content.toml");
        std::fs::write(&path, "brand = [").unwrap();

        assert!(matches!(load_content(&path), Err(Error::Toml(_))));
    }
}
