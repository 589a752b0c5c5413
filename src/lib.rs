//! Personal calendar event manager library
//!
//! This library provides the in-memory event store, filter/search engine,
//! and edit-session state machine behind a single-user calendar view, plus
//! the CLI that drives them.

mod app;
mod auth;
mod cli;
mod config;
mod errors;
mod event;
mod filter;
mod session;
mod store;
mod types;

// Re-export key components
pub use app::*;
pub use auth::*;
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use event::*;
pub use filter::*;
pub use session::*;
pub use store::*;
pub use types::*;
