//! Display instructions
//!
//! Pages are rendered into a [`ViewTree`]: a renderer-agnostic tree of
//! [`Node`]s saying *what* to show. Interactive nodes carry the [`Control`]
//! they trigger, so a renderer can turn a selection back into an action
//! without knowing anything about pages.

use serde::Serialize;

use crate::content::{Cta, Testimonial};
use crate::page::Route;

/// An action a user can trigger from the rendered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Control {
    Navigate(Route),
    ToggleMobileMenu,
    CarouselPrev,
    CarouselNext,
    CarouselToggleAutoPlay,
    CarouselJump(usize),
}

impl From<&Cta> for Control {
    fn from(cta: &Cta) -> Self {
        Control::Navigate(cta.target.clone())
    }
}

/// A single display instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Titled block grouping related content
    Section {
        eyebrow: Option<String>,
        title: Option<String>,
        subtitle: Option<String>,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// Small pill label
    Badge {
        text: String,
    },
    Image {
        src: String,
        alt: String,
    },
    /// Prominent call to action
    Button {
        label: String,
        control: Control,
    },
    /// Inline text link
    Link {
        label: String,
        control: Control,
    },
    Grid {
        columns: u8,
        children: Vec<Node>,
    },
    Card {
        title: String,
        subtitle: Option<String>,
        body: Option<String>,
        badge: Option<String>,
        image: Option<String>,
        control: Option<Control>,
    },
    Stat {
        value: String,
        label: String,
    },
    List {
        items: Vec<String>,
    },
    /// The testimonial carousel; the live slide index comes from carousel state
    Testimonials {
        slides: Vec<Testimonial>,
    },
    NotFound {
        requested: String,
    },
}

impl Node {
    pub fn section(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Section {
            eyebrow: None,
            title: Some(title.into()),
            subtitle: None,
            children,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph { text: text.into() }
    }

    pub fn badge(text: impl Into<String>) -> Self {
        Node::Badge { text: text.into() }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Node::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn button(cta: &Cta) -> Self {
        Node::Button {
            label: cta.label.clone(),
            control: cta.into(),
        }
    }

    pub fn link(cta: &Cta) -> Self {
        Node::Link {
            label: cta.label.clone(),
            control: cta.into(),
        }
    }

    pub fn grid(columns: u8, children: Vec<Node>) -> Self {
        Node::Grid { columns, children }
    }

    pub fn stat(value: impl Into<String>, label: impl Into<String>) -> Self {
        Node::Stat {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn list(items: Vec<String>) -> Self {
        Node::List { items }
    }

    /// Visit this node and its descendants depth-first
    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        match self {
            Node::Section { children, .. } | Node::Grid { children, .. } => {
                for child in children {
                    child.walk(visit);
                }
            }
            _ => {}
        }
    }

    fn push_controls(&self, out: &mut Vec<Control>) {
        match self {
            Node::Button { control, .. } | Node::Link { control, .. } => out.push(control.clone()),
            Node::Card {
                control: Some(control),
                ..
            } => out.push(control.clone()),
            Node::Testimonials { slides } => {
                out.push(Control::CarouselPrev);
                out.push(Control::CarouselToggleAutoPlay);
                out.push(Control::CarouselNext);
                out.extend((0..slides.len()).map(Control::CarouselJump));
            }
            _ => {}
        }
    }
}

/// Rendered page: a title plus the display instructions for the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    pub route: Route,
    pub title: String,
    pub nodes: Vec<Node>,
}

impl ViewTree {
    pub fn new(route: Route, title: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            route,
            title: title.into(),
            nodes,
        }
    }

    /// All interactive controls, in document order
    pub fn controls(&self) -> Vec<Control> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.walk(&mut |n| n.push_controls(&mut out));
        }
        out
    }

    /// Whether this is the not-found fallback view
    pub fn is_not_found(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, Node::NotFound { .. }))
    }

    /// Whether the tree contains the testimonial carousel
    pub fn has_carousel(&self) -> bool {
        self.find(|node| matches!(node, Node::Testimonials { .. }))
            .is_some()
    }

    /// First node (depth-first) matching a predicate
    pub fn find(&self, mut predicate: impl FnMut(&Node) -> bool) -> Option<&Node> {
        let mut found = None;
        for node in &self.nodes {
            node.walk(&mut |n| {
                if found.is_none() && predicate(n) {
                    found = Some(n);
                }
            });
        }
        found
    }

    /// Whether any heading, paragraph, title or label contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.find(|node| node_text(node).iter().any(|t| t.contains(needle)))
            .is_some()
    }
}

fn node_text(node: &Node) -> Vec<&str> {
    match node {
        Node::Section {
            eyebrow,
            title,
            subtitle,
            ..
        } => [eyebrow, title, subtitle]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect(),
        Node::Heading { text, .. } | Node::Paragraph { text } | Node::Badge { text } => {
            vec![text.as_str()]
        }
        Node::Button { label, .. } | Node::Link { label, .. } => vec![label.as_str()],
        Node::Card {
            title,
            subtitle,
            body,
            badge,
            ..
        } => std::iter::once(title)
            .chain([subtitle, body, badge].into_iter().flatten())
            .map(String::as_str)
            .collect(),
        Node::Stat { value, label } => vec![value.as_str(), label.as_str()],
        Node::List { items } => items.iter().map(String::as_str).collect(),
        Node::Testimonials { slides } => slides
            .iter()
            .flat_map(|s| [s.text.as_str(), s.author.as_str()])
            .collect(),
        Node::NotFound { requested } => vec![requested.as_str()],
        Node::Image { alt, .. } => vec![alt.as_str()],
        Node::Grid { .. } => Vec::new(),
    }
}
