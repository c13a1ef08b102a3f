//! Navbar widget: brand, numbered nav items, CTA and menu indicator

use qdigital_app::pages::NavBar;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct NavBarWidget<'a> {
    navbar: &'a NavBar,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(navbar: &'a NavBar) -> Self {
        Self { navbar }
    }

    fn line(&self) -> Line<'static> {
        let navbar = self.navbar;
        let mut spans = vec![
            Span::styled(navbar.brand.clone(), styles::brand()),
            Span::raw("  "),
        ];

        for (index, item) in navbar.items.iter().enumerate() {
            let style = if item.active {
                styles::nav_active()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!("{}", index + 1), styles::text_muted()));
            spans.push(Span::styled(format!(" {} ", item.label), style));
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" [c] {} ", navbar.cta.label), styles::button()));

        let menu = if navbar.menu.open { " [m] ✕" } else { " [m] ☰" };
        spans.push(Span::styled(menu, styles::accent()));

        Line::from(spans)
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.line();
        if self.navbar.scrolled {
            Paragraph::new(line).render(area, buf);
        } else {
            Paragraph::new(line)
                .block(styles::glass_block(false))
                .render(area, buf);
        }
    }
}
