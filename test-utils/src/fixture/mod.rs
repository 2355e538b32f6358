//! Canned response bodies for external services.

pub mod fflogs;
