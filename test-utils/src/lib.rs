//! Clearingway Test Utils
//!
//! Provides shared testing utilities for the clearingway bot.
//!
//! # Overview
//!
//! - **serenity**: Factories building decoded Discord interactions from JSON
//! - **fixture**: Canned FFLogs response bodies for mock servers and mock clients
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture::fflogs::encounter_rankings, serenity::create_test_command_interaction};
//!
//! #[tokio::test]
//! async fn reports_clear() {
//!     let interaction = create_test_command_interaction("getclears", vec![]);
//!     let rankings = encounter_rankings(Some(5.0));
//!     // ...
//! }
//! ```

pub mod fixture;
pub mod serenity;
