//! Web layer for the court search service.
//!
//! Provides HTTP endpoints for finding the courts that serve a postcode.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
