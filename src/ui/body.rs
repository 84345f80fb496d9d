//! Turns a rendered `ViewNode` tree into styled terminal lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, VALUE_TEXT};
use crate::view::ViewNode;

/// Lines for `view`, highlighting the `focused`-th button.
///
/// Buttons are numbered in the same pre-order as `ViewNode::press_index`, so
/// the highlighted button is the one Enter activates.
pub fn view_lines(view: &ViewNode, focused: Option<usize>) -> Vec<Line<'static>> {
    let mut builder = LineBuilder {
        focused,
        next_button: 0,
        lines: Vec::new(),
    };
    builder.block(view, 0);
    builder.lines
}

struct LineBuilder {
    focused: Option<usize>,
    next_button: usize,
    lines: Vec<Line<'static>>,
}

impl LineBuilder {
    fn block(&mut self, node: &ViewNode, depth: usize) {
        let indent = "  ".repeat(depth);
        match node {
            ViewNode::Group { label, children } => {
                self.lines.push(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(
                        label.clone(),
                        Style::default()
                            .fg(HEADER_SEPARATOR)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
                for child in children {
                    self.block(child, depth + 1);
                }
            }
            other => {
                let mut spans = vec![Span::raw(indent)];
                self.inline(other, &mut spans);
                self.lines.push(Line::from(spans));
            }
        }
    }

    fn inline(&mut self, node: &ViewNode, spans: &mut Vec<Span<'static>>) {
        match node {
            ViewNode::Text { text } => {
                spans.push(Span::styled(text.clone(), Style::default().fg(HEADER_TEXT)));
            }
            ViewNode::Value { value } => {
                spans.push(Span::styled(
                    value.to_string(),
                    Style::default().fg(VALUE_TEXT).add_modifier(Modifier::BOLD),
                ));
            }
            ViewNode::Button { label, .. } => {
                let index = self.next_button;
                self.next_button += 1;
                let style = if self.focused == Some(index) {
                    Style::default()
                        .fg(ACCENT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(ACCENT)
                };
                spans.push(Span::styled(format!("[ {label} ]"), style));
            }
            ViewNode::Row { children } => {
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        spans.push(Span::raw(" "));
                    }
                    self.inline(child, spans);
                }
            }
            ViewNode::Group { label, children } => {
                spans.push(Span::styled(
                    format!("{label}:"),
                    Style::default().fg(HEADER_SEPARATOR),
                ));
                for child in children {
                    spans.push(Span::raw(" "));
                    self.inline(child, spans);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterProps;
    use crate::presenter::{Component, Counter};

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn group_children_are_indented() {
        let view = ViewNode::group("outer", vec![Counter.render(&CounterProps::detached(3))]);
        let lines = view_lines(&view, None);
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts, vec!["outer", "  [ - ] 3 [ + ]"]);
    }

    #[test]
    fn only_the_focused_button_is_reversed() {
        let view = ViewNode::row(vec![
            Counter.render(&CounterProps::detached(0)),
            Counter.render(&CounterProps::detached(0)),
        ]);
        let lines = view_lines(&view, Some(2));
        let reversed: Vec<String> = lines[0]
            .spans
            .iter()
            .filter(|span| span.style.add_modifier.contains(Modifier::REVERSED))
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(reversed, vec!["[ - ]"]);
    }
}
