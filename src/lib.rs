//! Four ways to share one piece of stateful interaction logic (a counter)
//! with a stateless presentation component:
//!
//! - a reusable hook ([`patterns::use_counter`]),
//! - a render callback ([`patterns::RenderPropCounter`]),
//! - component injection ([`patterns::InjectedCounter`]),
//! - component injection with a per-instance prop-getter
//!   ([`patterns::InjectedEachCounter`]).
//!
//! The [`ui`] module is a terminal shell for switching between them; [`play`]
//! drives them headlessly.

pub mod callback;
pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod patterns;
pub mod play;
pub mod presenter;
pub mod scope;
pub mod shutdown;
pub mod ui;
pub mod view;
