//! Lumina Core - Core library for the Lumina study planner
//!
//! This crate owns the study-plan domain model, the Plan Store (the
//! durable mirror of application state), plain-text export, and the
//! configuration and secrets layers.

pub mod config;
pub mod error;
pub mod export;
pub mod plan;
pub mod secrets;
pub mod settings;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{export_file_name, export_plan};
pub use plan::{today_stats, PlanDraft, StudyDay, StudyPlan, StudyTask, TodayStats};
pub use secrets::Secrets;
pub use settings::{AiTone, Theme, UserSettings};
pub use store::PlanStore;
