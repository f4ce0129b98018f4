//! Lumina Gemini - Content Generator integration for the Lumina study planner
//!
//! Wraps the Gemini generateContent REST API behind three operations:
//! schema-constrained plan drafts, tone-adjusted study content, and
//! educational diagrams.

mod client;
mod content;
mod error;
mod planner;

pub use client::GeminiClient;
pub use content::{ContentFormat, GeneratedImage};
pub use error::{Error, Result};
