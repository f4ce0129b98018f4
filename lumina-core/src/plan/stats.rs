//! Cross-plan daily progress
//!
//! Scans every plan's days for entries dated today and measures completion
//! against the user's daily task target rather than against today's task
//! count, matching the dashboard's "Today's Performance" card.

use chrono::NaiveDate;

use crate::plan::StudyPlan;
use crate::settings::UserSettings;

/// Aggregate task counts for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayStats {
    /// Tasks scheduled today across all plans
    pub todays_tasks: usize,
    /// Of those, how many are completed
    pub completed_todays_tasks: usize,
    /// Completed tasks relative to the daily target, rounded to nearest
    /// percent. Not clamped, so a user past their target sees >100.
    pub percent: u32,
}

/// Compute today's task stats across all plans.
///
/// Day dates are matched by string prefix against `today` in ISO form, so
/// both plain dates and full timestamps stored by the generator match.
/// The percentage is 0 when today has no tasks or the target is 0.
pub fn today_stats(plans: &[StudyPlan], settings: &UserSettings, today: NaiveDate) -> TodayStats {
    let prefix = today.format("%Y-%m-%d").to_string();

    let mut todays_tasks = 0;
    let mut completed_todays_tasks = 0;

    for plan in plans {
        for day in &plan.days {
            if day.date.starts_with(&prefix) {
                todays_tasks += day.tasks.len();
                completed_todays_tasks += day.tasks.iter().filter(|t| t.completed).count();
            }
        }
    }

    let percent = if todays_tasks == 0 || settings.daily_target_tasks == 0 {
        0
    } else {
        ((completed_todays_tasks as f64 / settings.daily_target_tasks as f64) * 100.0).round()
            as u32
    };

    TodayStats {
        todays_tasks,
        completed_todays_tasks,
        percent,
    }
}
