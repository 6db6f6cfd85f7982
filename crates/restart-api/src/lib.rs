//! Restart-api: HTTP API layer for Restart
//!
//! Serves the connection widget and the lock creation form as JSON views,
//! plus the single page that renders them.

pub mod dto;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, SubmitError};
