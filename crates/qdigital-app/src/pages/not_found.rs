//! Fallback view for unknown routes

use qdigital_core::{Cta, Node, Page, Route, ViewTree};

pub(super) fn render(route: Route, requested: &str) -> ViewTree {
    ViewTree::new(
        route,
        "Page not found",
        vec![
            Node::NotFound {
                requested: requested.to_string(),
            },
            Node::heading(1, "404"),
            Node::paragraph("The page you are looking for doesn't exist or has been moved."),
            Node::button(&Cta::new("Back to Home", Page::Home)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_requested_id() {
        let view = render(Route::parse("careers"), "careers");
        assert!(view.is_not_found());
        assert_eq!(view.route.id(), "careers");
        assert!(view.contains_text("careers"));
    }
}
