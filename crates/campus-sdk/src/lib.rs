//! Campus SDK - client-side flows for the Campus learning platform
//!
//! Everything between the wire and the screen: the access-control guard,
//! sign-in/sign-out (the only session store writers), the certificate
//! lifecycle, progress aggregation, and per-role dashboard controllers.
//! Front ends render controller state and route through the guard; they
//! never talk to the network directly.
//!
//! # Example
//!
//! ```rust,no_run
//! use campus_client::{ApiClient, ClientConfig, SessionStore};
//! use campus_sdk::{auth, authorize_route, Decision, Route};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SessionStore::new();
//! let client = ApiClient::new(ClientConfig::default(), store.clone());
//!
//! // Sign in; the session store is written exactly once
//! let signed_in = auth::sign_in(&client, "amara", "hunter2").await?;
//!
//! // Route through the guard before rendering anything protected
//! match authorize_route(signed_in.landing, &store) {
//!     Decision::Allow => { /* render the dashboard */ }
//!     Decision::Redirect(route) => println!("redirected to {route}"),
//! }
//! # Ok(())
//! # }
//! ```

// Sign-in, registration, sign-out
pub mod auth;

// Certificate lifecycle and public verification
pub mod certificate;

// Per-role dashboard controllers
pub mod dashboard;

// Error types
pub mod error;

// Role gate and route table
pub mod guard;

// Completion percentages and reconciliation
pub mod progress;

// View lifetimes for late results
pub mod scope;

// Re-export guard types
pub use guard::{authorize, authorize_route, Decision, Route};

// Re-export flow types
pub use auth::SignedIn;
pub use certificate::{CertificateFile, CertificateStage, VerificationOutcome};
pub use progress::MarkOutcome;

// Re-export controllers
pub use dashboard::admin::{AdminDashboard, ChapterManager};
pub use dashboard::mentor::{AssignOutcome, MentorDashboard};
pub use dashboard::student::{CourseDetail, StudentDashboard};

// Re-export error types
pub use error::{Result, SdkError};

// Re-export scope types
pub use scope::{ScopeTicket, ViewScope};

// Re-export the wire crate for front ends
pub use campus_client::types;
pub use campus_client::{ApiClient, ApiError, ClientConfig, Role, Session, SessionStore};
