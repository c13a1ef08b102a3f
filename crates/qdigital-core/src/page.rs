//! Page identifiers and routes
//!
//! [`Page`] is the closed set of pages the site can render. [`Route`] is what
//! navigation actually stores: any identifier is accepted, and the ones that
//! do not name a [`Page`] become [`Route::NotFound`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the site's pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    CaseStudy,
    Team,
    Pricing,
    Blog,
    BlogPostOne,
    BlogPostTwo,
    BlogPostThree,
    Contact,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Page; 12] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Portfolio,
        Page::CaseStudy,
        Page::Team,
        Page::Pricing,
        Page::Blog,
        Page::BlogPostOne,
        Page::BlogPostTwo,
        Page::BlogPostThree,
        Page::Contact,
    ];

    /// Stable identifier used by navigation controls, the CLI and headless commands
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Portfolio => "portfolio",
            Page::CaseStudy => "case-study",
            Page::Team => "team",
            Page::Pricing => "pricing",
            Page::Blog => "blog",
            Page::BlogPostOne => "blog-post-1",
            Page::BlogPostTwo => "blog-post-2",
            Page::BlogPostThree => "blog-post-3",
            Page::Contact => "contact",
        }
    }

    /// Index into the blog post list for the blog post pages
    pub fn blog_post_index(&self) -> Option<usize> {
        match self {
            Page::BlogPostOne => Some(0),
            Page::BlogPostTwo => Some(1),
            Page::BlogPostThree => Some(2),
            _ => None,
        }
    }

    /// Blog post page for a zero-based post index
    pub fn for_blog_post(index: usize) -> Option<Page> {
        match index {
            0 => Some(Page::BlogPostOne),
            1 => Some(Page::BlogPostTwo),
            2 => Some(Page::BlogPostThree),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when an identifier does not name a [`Page`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page: {}", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// The current navigation target
///
/// Navigation never fails: identifiers outside [`Page::ALL`] are kept verbatim
/// and render the not-found view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Page(Page),
    NotFound(String),
}

impl Route {
    /// Resolve an identifier. Total: unknown identifiers become `NotFound`.
    pub fn parse(id: &str) -> Route {
        match id.parse::<Page>() {
            Ok(page) => Route::Page(page),
            Err(UnknownPage(id)) => Route::NotFound(id),
        }
    }

    /// The identifier this route was created from
    pub fn id(&self) -> &str {
        match self {
            Route::Page(page) => page.id(),
            Route::NotFound(id) => id,
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Page(page) => Some(*page),
            Route::NotFound(_) => None,
        }
    }

    pub fn is(&self, page: Page) -> bool {
        self.page() == Some(page)
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Page(Page::Home)
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        Route::Page(page)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Route::parse(&id))
    }
}
