//! Recruitment API: wire models, error taxonomy, the HTTP client and the
//! request manager that runs calls in the background.

pub mod client;
pub mod error;
pub mod manager;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use manager::RequestManager;
pub use models::{Candidature, LoginCredentials, Position, Registration};
