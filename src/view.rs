//! Output of a render pass.
//!
//! A `ViewNode` tree is what presentation components and adapters return. It
//! is inert data apart from the button handlers, which makes it easy to draw
//! (see `ui::body`), print, serialize and poke at in tests.

use serde::Serialize;

use crate::callback::Callback;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    /// Static text.
    Text { text: String },
    /// A counter value as displayed to the user.
    Value { value: i64 },
    /// An interactive control.
    Button {
        label: String,
        #[serde(skip)]
        on_press: Callback,
    },
    /// Children laid out side by side.
    Row { children: Vec<ViewNode> },
    /// Children stacked under a heading.
    Group {
        label: String,
        children: Vec<ViewNode>,
    },
}

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn value(value: i64) -> Self {
        Self::Value { value }
    }

    pub fn button(label: impl Into<String>, on_press: Callback) -> Self {
        Self::Button {
            label: label.into(),
            on_press,
        }
    }

    pub fn row(children: Vec<ViewNode>) -> Self {
        Self::Row { children }
    }

    pub fn group(label: impl Into<String>, children: Vec<ViewNode>) -> Self {
        Self::Group {
            label: label.into(),
            children,
        }
    }

    fn children(&self) -> &[ViewNode] {
        match self {
            Self::Row { children } | Self::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Every displayed counter value, in document order.
    pub fn displayed_values(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.walk(&mut |node| {
            if let Self::Value { value } = node {
                values.push(*value);
            }
        });
        values
    }

    /// Labels of every button, in document order.
    pub fn button_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.walk(&mut |node| {
            if let Self::Button { label, .. } = node {
                labels.push(label.as_str());
            }
        });
        labels
    }

    pub fn button_count(&self) -> usize {
        self.button_labels().len()
    }

    /// Simulate activating the `index`-th button. Returns false when there is
    /// no such button.
    pub fn press_index(&self, index: usize) -> bool {
        let mut seen = 0;
        let mut target = None;
        self.walk(&mut |node| {
            if let Self::Button { on_press, .. } = node {
                if seen == index && target.is_none() {
                    target = Some(on_press.clone());
                }
                seen += 1;
            }
        });
        match target {
            Some(callback) => {
                callback.emit();
                true
            }
            None => false,
        }
    }

    /// Simulate activating the first button with the given label.
    pub fn press(&self, label: &str) -> bool {
        match self.button_labels().iter().position(|l| *l == label) {
            Some(index) => self.press_index(index),
            None => false,
        }
    }

    /// Single-line-per-row plain text rendering.
    pub fn to_plain(&self) -> String {
        let mut lines = Vec::new();
        self.plain_lines(0, &mut lines);
        lines.join("\n")
    }

    fn plain_lines(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Group { label, children } => {
                lines.push(format!("{indent}{label}"));
                for child in children {
                    child.plain_lines(depth + 1, lines);
                }
            }
            other => lines.push(format!("{indent}{}", other.inline())),
        }
    }

    /// Inline text of a non-group node.
    pub fn inline(&self) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Value { value } => value.to_string(),
            Self::Button { label, .. } => format!("[{label}]"),
            Self::Row { children } => children
                .iter()
                .map(ViewNode::inline)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Group { label, .. } => label.clone(),
        }
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a ViewNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}
