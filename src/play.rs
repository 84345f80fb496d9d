//! Headless driver: feed `+`/`-` steps to mounted adapters and record what
//! each render displays.

use serde::Serialize;
use thiserror::Error;

use crate::patterns::{mount, Mode, PatternOptions};
use crate::presenter::{DECREMENT_LABEL, INCREMENT_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

impl Step {
    fn label(self) -> &'static str {
        match self {
            Step::Increment => INCREMENT_LABEL,
            Step::Decrement => DECREMENT_LABEL,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("invalid step '{step}' at position {position} (expected '+' or '-')")]
    InvalidStep { step: char, position: usize },

    #[error("'{mode}' rendered no '{label}' button")]
    MissingControl { mode: Mode, label: &'static str },
}

/// Parse a step script. Whitespace is ignored; positions are 1-based char
/// offsets into the original string.
pub fn parse_steps(script: &str) -> Result<Vec<Step>, PlayError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(index, ch)| match ch {
            '+' => Ok(Step::Increment),
            '-' => Ok(Step::Decrement),
            other => Err(PlayError::InvalidStep {
                step: other,
                position: index + 1,
            }),
        })
        .collect()
}

/// Displayed values of every render in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub mode: Mode,
    /// One entry per render: the initial one, then one after each step.
    pub renders: Vec<Vec<i64>>,
}

impl Transcript {
    /// `mode: 0 1 2` with comma-joined values for multi-instance renders.
    pub fn to_line(&self) -> String {
        let renders: Vec<String> = self
            .renders
            .iter()
            .map(|values| {
                values
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        format!("{}: {}", self.mode, renders.join(" "))
    }
}

/// Mount `mode`, render, then press the matching control for every step.
///
/// Interaction always goes through the first rendered button with the step's
/// label, exactly as a user would.
pub fn play(mode: Mode, options: &PatternOptions, steps: &[Step]) -> Result<Transcript, PlayError> {
    let mut adapter = mount(mode, options);
    let mut view = adapter.render();
    let mut renders = vec![view.displayed_values()];

    for step in steps {
        if !view.press(step.label()) {
            return Err(PlayError::MissingControl {
                mode,
                label: step.label(),
            });
        }
        view = adapter.render();
        renders.push(view.displayed_values());
    }

    tracing::debug!(%mode, steps = steps.len(), "play finished");
    Ok(Transcript { mode, renders })
}
