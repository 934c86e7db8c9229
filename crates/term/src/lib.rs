//! Terminal presentation layer for the Dutch pay calculator.
//!
//! This crate provides:
//! - Line command parsing into calculator actions
//! - Text and JSON rendering of reports
//! - One-shot request builders for the command line
//! - Interactive sessions over any reader/writer pair

pub mod command;
pub mod oneshot;
pub mod render;
pub mod session;

pub use command::{Command, parse_simple_command, parse_split_command};
pub use oneshot::{SimpleRequest, SplitRequest};
pub use render::Renderer;
pub use session::{Session, SessionMode, SessionSummary};
