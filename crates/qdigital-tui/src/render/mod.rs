//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use qdigital_app::AppView;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;
use crate::viewport::PageViewport;

/// Render the complete UI (View function in TEA)
///
/// Only the viewport is mutated: it learns the body and screen sizes and
/// scrolls a newly focused control into view.
pub fn view(frame: &mut Frame, view: &AppView, viewport: &mut PageViewport) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, view.navbar.scrolled);

    frame.render_widget(widgets::NavBarWidget::new(&view.navbar), areas.navbar);

    let body = widgets::build_body(view, areas.body.width.saturating_sub(2));
    let content_height = u16::try_from(body.lines.len()).unwrap_or(u16::MAX);
    viewport.update_size(content_height, areas.body.height);
    viewport.follow_focus(view.focus, body.focused_line);

    let paragraph = Paragraph::new(body.lines)
        .block(Block::default().padding(ratatui::widgets::Padding::horizontal(1)))
        .scroll((viewport.offset(), 0));
    frame.render_widget(paragraph, areas.body);

    if view.navbar.menu.open {
        let menu_area = layout::mobile_menu(areas.navbar, area, view.navbar.menu.entries.len());
        frame.render_widget(widgets::MobileMenuWidget::new(&view.navbar.menu), menu_area);
    }

    frame.render_widget(widgets::StatusBar::new(view), areas.status);
}
