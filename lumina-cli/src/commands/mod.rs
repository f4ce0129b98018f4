//! CLI command implementations

pub mod plan;
pub mod settings;
pub mod today;
pub mod tools;

pub use plan::PlanArgs;
pub use settings::SettingsArgs;
pub use today::TodayArgs;
pub use tools::{ExplainArgs, NotesArgs, QuizArgs};
