//! REST API Bindings
//!
//! Client for the task service, with operations organized by domain.

mod client;
mod error;
mod auth;
mod tasks;

#[cfg(test)]
pub mod mock;

pub use client::*;
pub use error::ApiError;
pub use auth::*;
pub use tasks::*;
