use super::*;
use qdigital_app::{render_app, AppState, Message};
use qdigital_core::{Page, Route};
use ratatui::{backend::TestBackend, Terminal};

fn draw(state: &AppState, viewport: &mut PageViewport, width: u16, height: u16) -> String {
    let app_view = render_app(state);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view(frame, &app_view, viewport))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn navigate(state: &mut AppState, route: Route) {
    let _ = qdigital_app::handler::update(state, Message::Navigate(route));
}

#[test]
fn test_home_frame() {
    let state = AppState::default();
    let mut viewport = PageViewport::default();
    let content = draw(&state, &mut viewport, 160, 40);

    assert!(content.contains("qdigital."));
    assert!(content.contains("Home"));
    assert!(content.contains("playing"));
}

#[test]
fn test_each_page_renders_its_title() {
    for page in Page::ALL {
        let mut state = AppState::default();
        navigate(&mut state, page.into());
        let title = qdigital_app::render_page(state.current_route(), &state.content).title;

        let mut viewport = PageViewport::default();
        let content = draw(&state, &mut viewport, 160, 40);
        assert!(content.contains(&title), "{page} frame missing {title:?}");
    }
}

#[test]
fn test_not_found_frame() {
    let mut state = AppState::default();
    navigate(&mut state, Route::parse("missing-page"));

    let mut viewport = PageViewport::default();
    let content = draw(&state, &mut viewport, 120, 30);
    assert!(content.contains("Page not found"));
    assert!(content.contains("missing-page"));
}

#[test]
fn test_viewport_learns_body_size() {
    let state = AppState::default();
    let mut viewport = PageViewport::default();
    draw(&state, &mut viewport, 120, 24);

    // Home is far taller than one screen
    viewport.scroll_to_bottom();
    assert!(viewport.offset() > 0);
}

#[test]
fn test_scrolled_body_shows_footer() {
    let state = AppState::default();
    let mut viewport = PageViewport::default();
    draw(&state, &mut viewport, 120, 24);
    viewport.scroll_to_bottom();

    let content = draw(&state, &mut viewport, 120, 24);
    assert!(content.contains("All rights reserved"));
}

#[test]
fn test_open_menu_overlay() {
    let mut state = AppState::default();
    state.nav.toggle_mobile_menu();

    let mut viewport = PageViewport::default();
    let content = draw(&state, &mut viewport, 120, 24);
    assert!(content.contains("Menu"));
    assert!(content.contains("▸ Home"));
}

#[test]
fn test_focus_scrolls_into_view() {
    let mut state = AppState::default();
    let mut viewport = PageViewport::default();
    draw(&state, &mut viewport, 120, 24);
    assert_eq!(viewport.offset(), 0);

    let last = render_app(&state).controls().len() - 1;
    state.focus = Some(last);
    draw(&state, &mut viewport, 120, 24);
    assert!(viewport.offset() > 0);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = AppState::default();
    state.nav.toggle_mobile_menu();
    let mut viewport = PageViewport::default();
    draw(&state, &mut viewport, 12, 4);
}
