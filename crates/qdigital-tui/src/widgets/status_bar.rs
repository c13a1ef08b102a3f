//! Key hint bar

use qdigital_app::AppView;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct StatusBar<'a> {
    view: &'a AppView,
}

impl<'a> StatusBar<'a> {
    pub fn new(view: &'a AppView) -> Self {
        Self { view }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.view.navbar.menu.open {
            &[("↑↓", "move"), ("enter", "open"), ("esc", "close")]
        } else if self.view.carousel.is_some() {
            &[
                ("1-8", "pages"),
                ("tab", "focus"),
                ("←→", "slides"),
                ("space", "play/pause"),
                ("j/k", "scroll"),
                ("q", "quit"),
            ]
        } else {
            &[
                ("1-8", "pages"),
                ("tab", "focus"),
                ("j/k", "scroll"),
                ("m", "menu"),
                ("q", "quit"),
            ]
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key}"), styles::accent_bold()));
            spans.push(Span::styled(format!(" {action} "), styles::text_muted()));
        }

        if let Some(carousel) = self.view.carousel {
            let (label, style) = if carousel.auto_playing {
                ("● playing", styles::playing())
            } else {
                ("❚❚ paused", styles::paused())
            };
            spans.push(Span::styled(format!("  {label}"), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
