use crate::patterns::Mode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Mode tabs, numbered the way the `1`-`4` keys select them.
    pub fn widget(&self, current: Mode) -> Tabs<'static> {
        let titles = Mode::ALL.iter().enumerate().map(|(idx, mode)| {
            Line::from(vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(HEADER_SEPARATOR)),
                Span::styled(mode.as_str(), Style::default().fg(HEADER_TEXT)),
            ])
        });

        Tabs::new(titles)
            .select(current.index())
            .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
