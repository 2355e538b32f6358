//! Discord bot integration.
//!
//! The bot connects to the Discord gateway through serenity and reacts to two
//! events: `ready`, which publishes the registered slash commands, and
//! `interaction_create`, which hands each interaction to the dispatcher. Serenity
//! runs every event on its own task, so the handler only holds shared,
//! thread-safe state.
//!
//! # Gateway Intents
//!
//! Interactions are delivered regardless of intents; only `GUILDS` is requested
//! so the cache knows which guilds the bot is in.

pub mod handler;
pub mod start;
