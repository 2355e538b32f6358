//! Integrations with services outside Discord.

pub mod fflogs;
