//! Web layer for the metro route planner.
//!
//! Provides JSON endpoints for listing networks and stations and for
//! finding routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
