use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four delivery patterns, by their stable names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    RenderProp,
    CompInjection,
    CompInjectionOnEach,
    #[default]
    Hook,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::RenderProp,
        Mode::CompInjection,
        Mode::CompInjectionOnEach,
        Mode::Hook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::RenderProp => "render-prop",
            Mode::CompInjection => "comp-injection",
            Mode::CompInjectionOnEach => "comp-injection-on-each",
            Mode::Hook => "hook",
        }
    }

    /// Position in [`Mode::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Mode {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Mode {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// One-paragraph explanation shown in the help popup.
    pub fn description(self) -> &'static str {
        match self {
            Mode::RenderProp => {
                "The owner keeps the counter and calls a render function with \
                 {value, increment, decrement}. It never names a presenter."
            }
            Mode::CompInjection => {
                "The owner keeps the counter and receives a presenter component \
                 as configuration, rendering it with the current props."
            }
            Mode::CompInjectionOnEach => {
                "Like component injection, but renders several instances. Each \
                 index runs through a prop-getter that may customise a copy of \
                 the shared props."
            }
            Mode::Hook => {
                "A reusable use_counter hook stores the counter in the calling \
                 component's scope; the caller forwards the props to a presenter."
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected render-prop, comp-injection, comp-injection-on-each or hook)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        }
        assert!("render_prop".parse::<Mode>().is_err());
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Mode::Hook.next(), Mode::RenderProp);
        assert_eq!(Mode::RenderProp.prev(), Mode::Hook);
        assert_eq!(Mode::CompInjection.next(), Mode::CompInjectionOnEach);
    }

    #[test]
    fn serde_uses_kebab_names() {
        let json = serde_json::to_string(&Mode::CompInjectionOnEach).unwrap();
        assert_eq!(json, "\"comp-injection-on-each\"");
    }
}
