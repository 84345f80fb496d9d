//! Status bar: what the mounted pattern is rendering with, and how often.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::patterns::Mode;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ?: Help │ q: Quit ";

/// `(label, value)` pairs shown for the current app state.
///
/// Instance count and transform only matter to the prop-getter pattern, so
/// they are left out for the others.
pub fn status_fields(app: &App) -> Vec<(&'static str, String)> {
    let options = app.options();
    let mut fields = vec![("presenter", options.presenter.as_str().to_string())];
    if app.mode() == Mode::CompInjectionOnEach {
        fields.push(("instances", options.instances.to_string()));
        fields.push(("transform", options.transform.as_str().to_string()));
    }
    fields.push(("renders", app.renders().to_string()));
    fields
}

pub fn widget(app: &App) -> Paragraph<'static> {
    let label_style = Style::default().fg(HEADER_SEPARATOR);
    let value_style = Style::default().fg(HEADER_TEXT);

    let mut spans = vec![Span::raw(" ")];
    for (idx, (label, value)) in status_fields(app).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", label_style));
        }
        spans.push(Span::styled(format!("{label}: "), label_style));
        spans.push(Span::styled(value, value_style));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title_bottom(Line::from(Span::styled(HINTS, label_style.add_modifier(Modifier::DIM))).right_aligned())
            .title_top(
                Line::from(Span::styled(format!(" v{VERSION} "), Style::default().fg(ACCENT)))
                    .right_aligned(),
            ),
    )
}
