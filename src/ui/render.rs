use crate::patterns::Mode;
use crate::ui::app::{App, PopupKind};
use crate::ui::body::view_lines;
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.mode()), header_area);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(app), body);
    frame.render_widget(footer::widget(app), footer_area);

    if let Some(PopupKind::Help) = app.popup_kind() {
        let area = centered_rect(70, 70, body);
        frame.render_widget(Clear, area);
        frame.render_widget(help_widget(app), area);
    }
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            app.mode().description(),
            Style::default().fg(HEADER_SEPARATOR),
        )),
        Line::from(""),
    ];
    let focused = (!app.show_popup()).then(|| app.focused_control());
    lines.extend(view_lines(app.view(), focused));

    if let Some(error) = app.last_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Config error: {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", app.mode()),
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn help_widget(app: &App) -> Paragraph<'static> {
    let current = app.mode();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Config (r reloads): ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(app.config_path().display().to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
    ];
    for (idx, mode) in Mode::ALL.iter().enumerate() {
        let mut title = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if *mode == current {
            title = title.fg(ACCENT);
        }
        lines.push(Line::from(Span::styled(format!("{}. {}", idx + 1, mode), title)));
        lines.push(Line::from(mode.description()));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Switching mode unmounts the current pattern, so its counter restarts at 0.",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Patterns ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    )
}
