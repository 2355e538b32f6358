//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating Serenity structs for
//! testing purposes. The factories deserialize JSON, simulating what Discord's
//! gateway would deliver, so the resulting values are indistinguishable from
//! real events.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_command_interaction, integer_option};
//!
//! #[tokio::test]
//! async fn dispatches_getclears() {
//!     let interaction = create_test_command_interaction(
//!         "getclears",
//!         vec![integer_option("lodestone_id", 12345)],
//!     );
//!
//!     // Hand the interaction to the dispatcher...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `interaction::create_test_command_interaction` - Slash command invocations
//! - `interaction::create_test_autocomplete_interaction` - Autocomplete requests

pub mod interaction;

// Re-export commonly used functions for convenience
pub use interaction::{
    create_test_autocomplete_interaction, create_test_command_interaction, integer_option,
    string_option, TEST_INTERACTION_ID, TEST_INTERACTION_TOKEN,
};
