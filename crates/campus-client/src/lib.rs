//! Typed HTTP client for the Campus learning-management API
//!
//! # Example
//!
//! ```rust,no_run
//! use campus_client::{ApiClient, ClientConfig, Session, SessionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // One store, shared by everything that needs the session
//! let store = SessionStore::new();
//! let client = ApiClient::new(ClientConfig::default(), store.clone());
//!
//! // Sign in: the store is written by the caller, never by the client
//! let tokens = client.login("amara", "hunter2").await?;
//! store.set(Session::from_tokens(tokens)?);
//!
//! // From here on every request carries the bearer token
//! let courses = client.list_my_courses().await?;
//! # Ok(())
//! # }
//! ```

pub mod claims;
pub mod client;
pub mod error;
pub mod session;
pub mod types;

// Re-export main types
pub use claims::AccessClaims;
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use session::{Role, Session, SessionStore};
pub use types::*;
