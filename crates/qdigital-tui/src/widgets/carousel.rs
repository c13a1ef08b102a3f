//! Testimonial carousel lines

use qdigital_app::pages::CarouselView;
use qdigital_core::Testimonial;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::text::wrap;
use crate::theme::styles;

/// Number of transport controls before the dot controls
const TRANSPORT_CONTROLS: usize = 3;

/// Lines for the carousel plus the index of the line holding a focused
/// control, if any.
///
/// `first_control` is the document-order index of the carousel's first
/// control (prev); toggle, next and one dot per slide follow it.
pub fn testimonial_lines(
    slides: &[Testimonial],
    carousel: Option<CarouselView>,
    width: usize,
    first_control: usize,
    focus: Option<usize>,
) -> (Vec<Line<'static>>, Option<usize>) {
    let (current, auto_playing) = carousel
        .map(|c| (c.current_slide, c.auto_playing))
        .unwrap_or((0, false));

    let mut lines = Vec::new();
    if let Some(slide) = slides.get(current) {
        let quote = format!("\u{201c}{}\u{201d}", slide.text);
        for row in wrap(&quote, width) {
            lines.push(Line::from(Span::styled(
                row,
                styles::text_primary().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("— {}", slide.author), styles::accent_bold()),
            Span::styled(format!(", {}", slide.title), styles::text_secondary()),
        ]));
    }
    lines.push(Line::default());

    let is_focused = |offset: usize| focus == Some(first_control + offset);
    let control = |label: String, offset: usize| {
        let style = if is_focused(offset) {
            styles::button().patch(styles::focused())
        } else {
            styles::badge()
        };
        Span::styled(label, style)
    };

    let (toggle_label, mode_style) = if auto_playing {
        ("[❚❚ pause]", styles::playing())
    } else {
        ("[▶ play]", styles::paused())
    };

    let mut spans = vec![
        control("[◀ prev]".to_string(), 0),
        Span::raw(" "),
        control(toggle_label.to_string(), 1),
        Span::raw(" "),
        control("[next ▶]".to_string(), 2),
        Span::raw("   "),
    ];
    for index in 0..slides.len() {
        let dot = if index == current { "●" } else { "○" };
        let offset = TRANSPORT_CONTROLS + index;
        let style = if is_focused(offset) {
            styles::focused()
        } else if index == current {
            styles::accent()
        } else {
            styles::text_muted()
        };
        spans.push(Span::styled(dot.to_string(), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" {}/{}", current + 1, slides.len()),
        mode_style,
    ));

    let controls_line = lines.len();
    lines.push(Line::from(spans));

    let focus_in_carousel = focus.is_some_and(|f| {
        f >= first_control && f < first_control + TRANSPORT_CONTROLS + slides.len()
    });
    let focused_line = focus_in_carousel.then_some(controls_line);

    (lines, focused_line)
}

#[cfg(test)]
fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides() -> Vec<Testimonial> {
        ["Jane", "John", "Emily"]
            .iter()
            .map(|name| Testimonial {
                text: format!("{name} loved it"),
                author: name.to_string(),
                title: "CEO".to_string(),
                avatar: String::new(),
            })
            .collect()
    }

    fn view(current_slide: usize, auto_playing: bool) -> Option<CarouselView> {
        Some(CarouselView {
            current_slide,
            len: 3,
            auto_playing,
        })
    }

    #[test]
    fn test_shows_current_slide() {
        let (lines, _) = testimonial_lines(&slides(), view(1, true), 60, 0, None);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert!(text[0].contains("John loved it"));
        assert!(text[1].contains("— John"));
        assert!(text.last().unwrap().contains("2/3"));
        assert!(text.last().unwrap().contains("pause"));
    }

    #[test]
    fn test_paused_shows_play() {
        let (lines, _) = testimonial_lines(&slides(), view(0, false), 60, 0, None);
        assert!(line_text(lines.last().unwrap()).contains("[▶ play]"));
    }

    #[test]
    fn test_focus_reports_controls_line() {
        let (lines, focused) = testimonial_lines(&slides(), view(0, true), 60, 10, Some(14));
        assert_eq!(focused, Some(lines.len() - 1));

        let (_, focused) = testimonial_lines(&slides(), view(0, true), 60, 10, Some(16));
        assert_eq!(focused, None);
    }
}
