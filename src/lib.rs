//! Flip-dot clock (workspace facade crate).
//!
//! Drives a two-unit 14x28 Alfa-Zeta XY5 flip-dot display over a serial
//! link, or draws the same frames in a terminal. The implementation lives in
//! dedicated crates under `crates/`; this package re-exports them as
//! `flipdot_clock::{core,serial,term,types}` and adds what the binary needs.

pub mod config;
pub mod logger;
pub mod output;

pub use flipdot_core as core;
pub use flipdot_serial as serial;
pub use flipdot_term as term;
pub use flipdot_types as types;

pub use config::{Mode, RunConfig};
pub use output::Output;
