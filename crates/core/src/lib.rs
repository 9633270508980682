//! Core types for chief
//!
//! Domain records, the workspace and intent classifiers, document chunking and
//! environment-driven configuration shared by every other crate.

mod calendar;
mod chunking;
mod config;
pub mod constants;
mod contact;
mod conversation;
mod credential;
mod document;
mod env_config;
mod error;
mod intent;
mod json_utils;
mod notes;
mod workspace;

pub use calendar::*;
pub use chunking::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use conversation::*;
pub use credential::*;
pub use document::*;
pub use env_config::*;
pub use error::*;
pub use intent::*;
pub use json_utils::*;
pub use notes::*;
pub use workspace::*;
