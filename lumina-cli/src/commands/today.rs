//! Today's performance readout

use chrono::Local;
use clap::Args;
use lumina_core::today_stats;

use crate::app::App;

/// Show today's task progress against the daily target
#[derive(Args, Debug)]
pub struct TodayArgs {}

impl TodayArgs {
    /// Execute the today command
    pub fn execute(&self, app: &App) -> anyhow::Result<()> {
        let settings = app.settings();
        let stats = today_stats(app.plans(), settings, Local::now().date_naive());

        println!("Today's Performance");
        println!(
            "Goal: {} tasks • {}h study",
            settings.daily_target_tasks, settings.daily_target_hours
        );
        println!();
        println!(
            "Completed today: {} / {} ({}%)",
            stats.completed_todays_tasks, settings.daily_target_tasks, stats.percent
        );
        println!("Scheduled today: {} task(s)", stats.todays_tasks);

        if !app.plans().is_empty() {
            println!();
            println!("Active plans: {}", app.plans().len());
            println!("Next exam: {}", app.plans()[0].exam_date);
        }

        Ok(())
    }
}
