#![forbid(unsafe_code)]

//! Stateful session layer for the Law of Averages calculator.
//!
//! [`session::Session`] owns the engine's funnel counts and configuration
//! and applies discrete user decisions to them, Elm-style: the
//! presentation layer turns button presses and dialog results into
//! [`session::SessionMsg`] values, the session mutates state and
//! recomputes the derived numbers, and the presentation layer renders the
//! fresh [`session::Derived`] snapshot. Modal dialogs live entirely on the
//! presentation side; the session only ever sees the resolved decision
//! (`None` for a cancelled dialog, which changes nothing).
//!
//! [`settings`] loads the starting [`loa_engine::Config`] from a TOML or
//! JSON file, with validation.

pub mod session;
pub mod settings;

pub use session::{Derived, EditField, HurdleSetup, Session, SessionMsg};
pub use settings::SettingsError;
