//! Mobile menu dropdown

use qdigital_app::pages::MobileMenu;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::theme::styles;

pub struct MobileMenuWidget<'a> {
    menu: &'a MobileMenu,
}

impl<'a> MobileMenuWidget<'a> {
    pub fn new(menu: &'a MobileMenu) -> Self {
        Self { menu }
    }
}

impl Widget for MobileMenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.menu.open || area.is_empty() {
            return;
        }

        Clear.render(area, buf);

        let last = self.menu.entries.len().saturating_sub(1);
        let lines: Vec<Line> = self
            .menu
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                // The trailing entry is the call to action
                let base = if index == last {
                    styles::accent_bold()
                } else {
                    styles::text_primary()
                };
                let style = if index == self.menu.cursor {
                    base.patch(styles::focused())
                } else {
                    base
                };
                let marker = if index == self.menu.cursor { "▸ " } else { "  " };
                Line::from(Span::styled(format!("{marker}{}", entry.label), style))
            })
            .collect();

        Paragraph::new(lines)
            .block(styles::glass_block(true).title(" Menu "))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdigital_app::{render_app, AppState};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &AppState) -> String {
        let view = render_app(state);
        let backend = TestBackend::new(28, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MobileMenuWidget::new(&view.navbar.menu), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_closed_menu_draws_nothing() {
        let content = rendered(&AppState::default());
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_open_menu_lists_entries_and_cursor() {
        let mut state = AppState::default();
        state.nav.toggle_mobile_menu();
        state.menu_cursor = 2;

        let content = rendered(&state);
        assert!(content.contains("Menu"));
        assert!(content.contains("Home"));
        assert!(content.contains("Start Project"));
        assert!(content.contains("▸ Services"));
    }
}
