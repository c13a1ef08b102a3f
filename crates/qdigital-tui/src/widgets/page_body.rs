//! Page body: flattens the page and footer trees into scrollable lines

use qdigital_app::pages::CarouselView;
use qdigital_app::AppView;
use qdigital_core::Node;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::carousel::testimonial_lines;
use super::text::wrap;
use crate::theme::styles;

/// Columns per nesting level
const INDENT: usize = 2;

/// Flattened body ready for a scrolling `Paragraph`
#[derive(Debug, Default)]
pub struct BodyLines {
    pub lines: Vec<Line<'static>>,
    /// Line holding the focused control, if one is focused
    pub focused_line: Option<usize>,
}

/// Build the body lines for `view` at `width` columns.
///
/// Controls are counted in the same depth-first order as
/// [`AppView::controls`], so `view.focus` highlights the matching line.
pub fn build(view: &AppView, width: u16) -> BodyLines {
    let mut builder = Builder {
        width: usize::from(width).max(10),
        lines: Vec::new(),
        control: 0,
        focus: view.focus,
        focused_line: None,
        carousel: view.carousel,
    };

    builder.heading(1, &view.page.title, 0);
    builder.blank();
    for node in &view.page.nodes {
        builder.node(node, 0);
    }

    builder.blank();
    builder.rule();
    for node in &view.footer.nodes {
        builder.node(node, 0);
    }

    BodyLines {
        lines: builder.lines,
        focused_line: builder.focused_line,
    }
}

struct Builder {
    width: usize,
    lines: Vec<Line<'static>>,
    /// Index of the next control in document order
    control: usize,
    focus: Option<usize>,
    focused_line: Option<usize>,
    carousel: Option<CarouselView>,
}

impl Builder {
    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Section {
                eyebrow,
                title,
                subtitle,
                children,
            } => {
                if let Some(eyebrow) = eyebrow {
                    let eyebrow = Span::styled(eyebrow.to_uppercase(), styles::accent_bold());
                    self.push(depth, vec![eyebrow]);
                }
                if let Some(title) = title {
                    self.heading(2, title, depth);
                }
                if let Some(subtitle) = subtitle {
                    self.wrapped(subtitle, styles::text_secondary(), depth);
                }
                for child in children {
                    self.node(child, depth + usize::from(title.is_some()));
                }
                self.blank();
            }
            Node::Heading { level, text } => self.heading(*level, text, depth),
            Node::Paragraph { text } => self.wrapped(text, styles::text_primary(), depth),
            Node::Badge { text } => {
                let badge = Span::styled(format!(" {text} "), styles::badge());
                self.push(depth, vec![badge]);
            }
            Node::Image { alt, .. } => {
                self.wrapped(&format!("▣ {alt}"), styles::text_muted(), depth);
            }
            Node::Button { label, .. } => {
                let style = self.control_style(styles::button());
                self.wrapped_control(&format!("[ {label} → ]"), style, depth);
            }
            Node::Link { label, .. } => {
                let style = self.control_style(styles::link());
                self.wrapped_control(label, style, depth);
            }
            Node::Grid { children, .. } => {
                if children.iter().all(|c| matches!(c, Node::Stat { .. })) {
                    self.stats_row(children, depth);
                } else {
                    for child in children {
                        self.node(child, depth);
                    }
                }
            }
            Node::Card {
                title,
                subtitle,
                body,
                badge,
                image,
                control,
            } => {
                if control.is_some() {
                    let style = self.control_style(styles::heading(3));
                    self.wrapped_control(&format!("■ {title} →"), style, depth);
                } else {
                    self.wrapped(&format!("■ {title}"), styles::heading(3), depth);
                }
                if let Some(badge) = badge {
                    self.push(
                        depth + 1,
                        vec![Span::styled(format!(" {badge} "), styles::badge())],
                    );
                }

                if let Some(subtitle) = subtitle {
                    self.wrapped(subtitle, styles::accent(), depth + 1);
                }
                if let Some(image) = image {
                    self.wrapped(&format!("▣ {image}"), styles::text_muted(), depth + 1);
                }
                if let Some(body) = body {
                    for paragraph in body.lines() {
                        self.wrapped(paragraph, styles::text_secondary(), depth + 1);
                    }
                }
                self.blank();
            }
            Node::Stat { .. } => {
                self.stats_row(std::slice::from_ref(node), depth);
            }
            Node::List { items } => {
                for item in items {
                    self.wrapped(&format!("• {item}"), styles::text_primary(), depth);
                }
            }
            Node::Testimonials { slides } => {
                let width = self.width.saturating_sub(depth * INDENT).max(10);
                let (lines, focused) =
                    testimonial_lines(slides, self.carousel, width, self.control, self.focus);
                let base = self.lines.len();
                for line in lines {
                    self.push(depth, line.spans);
                }
                if let Some(offset) = focused {
                    self.focused_line = Some(base + offset);
                }
                self.control += 3 + slides.len();
            }
            Node::NotFound { requested } => {
                self.wrapped(
                    &format!("No page named \"{requested}\"."),
                    styles::paused(),
                    depth,
                );
            }
        }
    }

    /// Render stats side by side, or one per line when they do not fit
    fn stats_row(&mut self, stats: &[Node], depth: usize) {
        let stats: Vec<(&String, &String)> = stats
            .iter()
            .filter_map(|node| match node {
                Node::Stat { value, label } => Some((value, label)),
                _ => None,
            })
            .collect();

        let separator = "  │  ";
        let row_width: usize = stats
            .iter()
            .map(|(value, label)| value.width() + 1 + label.width())
            .sum::<usize>()
            + separator.width() * stats.len().saturating_sub(1);
        let fits = row_width <= self.width.saturating_sub(depth * INDENT);

        let stat_spans = |value: &String, label: &String| {
            vec![
                Span::styled(value.clone(), styles::accent_bold()),
                Span::raw(" "),
                Span::styled(label.clone(), styles::text_secondary()),
            ]
        };

        if !fits {
            for (value, label) in stats {
                self.push(depth, stat_spans(value, label));
            }
            return;
        }

        let mut spans = Vec::new();
        for (value, label) in stats {
            if !spans.is_empty() {
                spans.push(Span::styled(separator, styles::text_muted()));
            }
            spans.extend(stat_spans(value, label));
        }
        if !spans.is_empty() {
            self.push(depth, spans);
        }
    }

    fn heading(&mut self, level: u8, text: &str, depth: usize) {
        self.wrapped(text, styles::heading(level), depth);
    }

    fn wrapped(&mut self, text: &str, style: Style, depth: usize) {
        let width = self.width.saturating_sub(depth * INDENT).max(1);
        for row in wrap(text, width) {
            self.push(depth, vec![Span::styled(row, style)]);
        }
    }

    fn control_style(&self, base: Style) -> Style {
        if self.focus == Some(self.control) {
            base.patch(styles::focused())
        } else {
            base
        }
    }

    /// Push the (wrapped) text of one control and advance the control counter
    fn wrapped_control(&mut self, text: &str, style: Style, depth: usize) {
        if self.focus == Some(self.control) {
            self.focused_line = Some(self.lines.len());
        }
        self.control += 1;
        self.wrapped(text, style, depth);
    }

    fn push(&mut self, depth: usize, mut spans: Vec<Span<'static>>) {
        if depth > 0 {
            spans.insert(0, Span::raw(" ".repeat(depth * INDENT)));
        }
        self.lines.push(Line::from(spans));
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            return;
        }
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        self.lines.push(Line::from(Span::styled(
            "─".repeat(self.width),
            styles::text_muted(),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdigital_app::{render_app, AppState, Message};
    use qdigital_core::Page;

    fn text(body: &BodyLines) -> Vec<String> {
        body.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn state_on(page: Page) -> AppState {
        let mut state = AppState::default();
        let _ = qdigital_app::handler::update(&mut state, Message::Navigate(page.into()));
        state
    }

    #[test]
    fn test_home_body_has_sections_and_footer() {
        let state = AppState::default();
        let body = build(&render_app(&state), 80);
        let lines = text(&body);

        assert!(lines.iter().any(|l| l.contains("What Our Partners Say")));
        assert!(lines.iter().any(|l| l.contains("Quick Links")));
        assert!(lines.iter().any(|l| l.contains("[◀ prev]")));
        assert_eq!(body.focused_line, None);
    }

    #[test]
    fn test_lines_fit_width() {
        use unicode_width::UnicodeWidthStr;

        let state = state_on(Page::About);
        let body = build(&render_app(&state), 40);
        for line in text(&body) {
            assert!(line.width() <= 40, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_focus_marks_matching_control_line() {
        let mut state = AppState::default();
        state.focus = Some(0);
        let view = render_app(&state);
        let body = build(&view, 80);

        let line = body.focused_line.expect("focused line");
        let label = match view.focused_control() {
            Some(qdigital_core::Control::Navigate(route)) => route,
            other => panic!("unexpected control {other:?}"),
        };
        assert_eq!(label, Page::Services.into());
        assert!(text(&body)[line].contains("Explore Our Services"));
    }

    #[test]
    fn test_focus_counts_footer_controls() {
        let mut state = state_on(Page::About);
        let view = render_app(&state);
        let last = view.controls().len() - 1;
        state.focus = Some(last);

        let body = build(&render_app(&state), 80);
        let line = body.focused_line.expect("focused footer line");
        // Footer sits after the rule
        let rule = text(&body)
            .iter()
            .position(|l| l.starts_with('─'))
            .expect("rule");
        assert!(line > rule);
    }

    #[test]
    fn test_not_found_body() {
        let mut state = AppState::default();
        let _ = qdigital_app::handler::update(
            &mut state,
            Message::Navigate(qdigital_core::Route::parse("nowhere")),
        );
        let body = build(&render_app(&state), 80);
        assert!(text(&body)
            .iter()
            .any(|l| l.contains("No page named \"nowhere\"")));
    }
}
