//! habitforge - local weekly habit tracker
//!
//! The core is two stateless facades over a durable key-value store: an
//! account store (credential registry + session) and a habit store (the
//! active user's habit list with day toggling and streak computation).
//! The CLI in [`cli`] is the presentation boundary; it validates input
//! formats and renders state, nothing more.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

pub use error::{HfError, Result};
