//! Campus Portal - terminal front end for the Campus LMS
//!
//! The binary wires a [`campus_sdk::ApiClient`] to a set of line-oriented
//! screens. All state lives in the SDK controllers; the screens only
//! prompt, print, and route through the access guard.
//!
//! ## Screens
//!
//! - **Entry**: sign-in, registration, public certificate verification
//! - **Admin**: accounts, courses, chapter and lesson authoring, rosters
//! - **Mentor**: student roster, course assignment, chapter authoring
//! - **Student**: enrolled courses, lesson completion, certificate download

pub mod config;
pub mod prompt;
pub mod screens;

pub use config::Args;
pub use screens::run;
