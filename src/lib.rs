//! Plutox API — Shared Library
//!
//! Backs two serverless endpoints that turn free text into structured
//! decisions with an LLM:
//! - `/api/organize` turns a brain dump into a decision structure.
//! - `/api/freeze` commits a structured decision to one option.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod recovery;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
