//! Plain-text plan export
//!
//! Fixed header block followed by one section per day, matching the
//! download format of the web app.

use chrono::DateTime;

use crate::plan::StudyPlan;

/// Render a plan as plain text
pub fn export_plan(plan: &StudyPlan) -> String {
    let mut content = String::new();

    content.push_str("LUMINA STUDY PLAN\n");
    content.push_str(&format!("Subjects: {}\n", plan.subjects.join(", ")));
    content.push_str(&format!("Exam Date: {}\n", plan.exam_date));
    content.push_str(&format!("Generated on: {}\n", created_date(plan)));
    content.push_str("------------------------------------------\n\n");

    for day in &plan.days {
        content.push_str(&format!("DAY {} ({})\n", day.day_number, day.date));
        content.push_str(&format!("Focus: {}\n", day.focus_area));
        for task in &day.tasks {
            let mark = if task.completed { 'X' } else { ' ' };
            content.push_str(&format!("- [{}] {} ({})\n", mark, task.title, task.duration));
            if let Some(description) = &task.description {
                content.push_str(&format!("  Note: {}\n", description));
            }
        }
        content.push('\n');
    }

    content
}

/// Suggested file name for an exported plan
pub fn export_file_name(plan: &StudyPlan) -> String {
    let short_id: String = plan.id.chars().take(8).collect();
    format!("Lumina_Study_Plan_{}.txt", short_id)
}

/// Date portion of the creation timestamp, falling back to the raw string
fn created_date(plan: &StudyPlan) -> String {
    DateTime::parse_from_rfc3339(&plan.created_at)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| plan.created_at.clone())
}
