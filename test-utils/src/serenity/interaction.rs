//! Test factory for creating Serenity Interaction objects.
//!
//! Interactions are created by deserializing JSON shaped like the payloads
//! Discord delivers over the gateway, so the decoded values behave exactly like
//! real ones (resolved options, reply token, interaction kind).

use serenity::all::Interaction;
use serde_json::{json, Value};

/// Interaction ID used by every factory in this module.
pub const TEST_INTERACTION_ID: u64 = 1000000000000000001;

/// Interaction token used by every factory in this module.
pub const TEST_INTERACTION_TOKEN: &str = "test-interaction-token";

/// Discord's interaction type for an application command invocation.
const COMMAND_TYPE: u8 = 2;
/// Discord's interaction type for an autocomplete request.
const AUTOCOMPLETE_TYPE: u8 = 4;

/// Creates an integer command option for use with the interaction factories.
///
/// # Arguments
/// - `name` - Option name as declared in the command metadata
/// - `value` - Integer value supplied by the user
pub fn integer_option(name: &str, value: i64) -> Value {
    json!({
        "name": name,
        "type": 4,
        "value": value,
    })
}

/// Creates a string command option for use with the interaction factories.
pub fn string_option(name: &str, value: &str) -> Value {
    json!({
        "name": name,
        "type": 3,
        "value": value,
    })
}

/// Creates a test slash command interaction.
///
/// # Arguments
/// - `name` - Name of the invoked command
/// - `options` - Options supplied by the user, see [`integer_option`] and [`string_option`]
///
/// # Returns
/// - `Interaction::Command` - A decoded application command interaction
///
/// # Panics
/// - If the JSON cannot be deserialized into an Interaction (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::interaction::{create_test_command_interaction, integer_option};
///
/// let interaction = create_test_command_interaction(
///     "getclears",
///     vec![integer_option("lodestone_id", 12345), integer_option("encounter_id", 1000)],
/// );
/// ```
pub fn create_test_command_interaction(name: &str, options: Vec<Value>) -> Interaction {
    create_test_interaction(COMMAND_TYPE, name, options)
}

/// Creates a test autocomplete interaction.
///
/// Autocomplete requests share the application command payload shape but are a
/// different interaction kind, which makes them convenient for exercising code
/// paths that must only accept command invocations.
pub fn create_test_autocomplete_interaction(name: &str, options: Vec<Value>) -> Interaction {
    create_test_interaction(AUTOCOMPLETE_TYPE, name, options)
}

fn create_test_interaction(kind: u8, name: &str, options: Vec<Value>) -> Interaction {
    serde_json::from_value(json!({
        "id": TEST_INTERACTION_ID.to_string(),
        "application_id": "2000000000000000002",
        "type": kind,
        "data": {
            "id": "3000000000000000003",
            "name": name,
            "type": 1,
            "options": options,
        },
        "channel_id": "4000000000000000004",
        "user": {
            "id": "5000000000000000005",
            "username": "tester",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "token": TEST_INTERACTION_TOKEN,
        "version": 1,
        "locale": "en-US",
        "entitlements": [],
        "authorizing_integration_owners": {},
        "attachment_size_limit": 26214400,
    }))
    .expect("Failed to create test interaction - invalid JSON structure")
}
