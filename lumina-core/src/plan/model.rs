//! Plan data model
//!
//! Serialized field names are camelCase so stored records keep the shape
//! the web app persisted to localStorage.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single actionable study item with a duration estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTask {
    /// Task identifier, unique within its day
    pub id: String,
    /// Task title
    pub title: String,
    /// Free-form duration label (e.g. "45 min"), never parsed
    pub duration: String,
    /// Optional note shown under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag, the only field that mutates after creation
    #[serde(default)]
    pub completed: bool,
}

/// One calendar day's slice of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDay {
    /// 1-based day number, unique within a plan and contiguous from 1
    pub day_number: u32,
    /// ISO-8601 date string
    pub date: String,
    /// Focus area for the day
    pub focus_area: String,
    /// Ordered task list
    pub tasks: Vec<StudyTask>,
}

/// A generated multi-day study schedule ahead of an exam date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    /// Globally unique id, assigned when the draft is accepted
    pub id: String,
    /// Subjects covered by the plan
    pub subjects: Vec<String>,
    /// ISO-8601 exam date
    pub exam_date: String,
    /// Daily study hours the plan was generated for
    pub daily_hours: f64,
    /// Ordered day schedule
    pub days: Vec<StudyDay>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl StudyPlan {
    /// Return a copy of this plan with exactly one task's `completed` flag
    /// flipped. When no task matches `(day_number, task_id)` the plan is
    /// returned unchanged.
    pub fn with_task_toggled(&self, day_number: u32, task_id: &str) -> StudyPlan {
        let mut plan = self.clone();
        for day in &mut plan.days {
            if day.day_number == day_number {
                for task in &mut day.tasks {
                    if task.id == task_id {
                        task.completed = !task.completed;
                    }
                }
            }
        }
        plan
    }

    /// Count completed and total tasks across all days
    pub fn task_counts(&self) -> (usize, usize) {
        let total = self.days.iter().map(|d| d.tasks.len()).sum();
        let completed = self
            .days
            .iter()
            .map(|d| d.tasks.iter().filter(|t| t.completed).count())
            .sum();
        (completed, total)
    }

    /// Overall completion as an integer percentage, rounded to nearest.
    /// 0 for a plan with no tasks.
    pub fn progress(&self) -> u8 {
        let (completed, total) = self.task_counts();
        if total == 0 {
            return 0;
        }
        ((completed as f64 / total as f64) * 100.0).round() as u8
    }

    /// Whether a `(day_number, task_id)` pair exists in this plan
    pub fn has_task(&self, day_number: u32, task_id: &str) -> bool {
        self.days
            .iter()
            .filter(|d| d.day_number == day_number)
            .any(|d| d.tasks.iter().any(|t| t.id == task_id))
    }
}

/// A plan as returned by the generator: no id or creation timestamp yet,
/// and task completion not meaningful until the draft is accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    pub subjects: Vec<String>,
    pub exam_date: String,
    pub daily_hours: f64,
    pub days: Vec<StudyDay>,
}

impl PlanDraft {
    /// Promote the draft to a full plan: assign a fresh id, stamp the
    /// creation time, and reset every task to incomplete
    pub fn into_plan(self) -> StudyPlan {
        let mut days = self.days;
        for day in &mut days {
            for task in &mut day.tasks {
                task.completed = false;
            }
        }

        StudyPlan {
            id: Uuid::new_v4().to_string(),
            subjects: self.subjects,
            exam_date: self.exam_date,
            daily_hours: self.daily_hours,
            days,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, completed: bool) -> StudyTask {
        StudyTask {
            id: id.to_string(),
            title: format!("Task {}", id),
            duration: "45 min".to_string(),
            description: None,
            completed,
        }
    }

    fn sample_plan() -> StudyPlan {
        StudyPlan {
            id: "plan-1".to_string(),
            subjects: vec!["Chemistry".to_string()],
            exam_date: "2026-09-01".to_string(),
            daily_hours: 4.0,
            days: vec![StudyDay {
                day_number: 1,
                date: "2026-08-07".to_string(),
                focus_area: "Atomic Structure".to_string(),
                tasks: vec![task("t1", false), task("t2", false)],
            }],
            created_at: "2026-08-07T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_toggle_flips_exactly_one_task() {
        let plan = sample_plan();
        let toggled = plan.with_task_toggled(1, "t1");

        assert!(toggled.days[0].tasks[0].completed);
        assert!(!toggled.days[0].tasks[1].completed);
        assert_eq!(toggled.progress(), 50);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let plan = sample_plan();
        let twice = plan.with_task_toggled(1, "t1").with_task_toggled(1, "t1");
        assert_eq!(twice, plan);
    }

    #[test]
    fn test_toggle_unknown_pair_returns_unchanged() {
        let plan = sample_plan();
        assert_eq!(plan.with_task_toggled(2, "t1"), plan);
        assert_eq!(plan.with_task_toggled(1, "missing"), plan);
    }

    #[test]
    fn test_progress_empty_plan_is_zero() {
        let mut plan = sample_plan();
        plan.days.clear();
        assert_eq!(plan.progress(), 0);

        plan.days.push(StudyDay {
            day_number: 1,
            date: "2026-08-07".to_string(),
            focus_area: "Empty".to_string(),
            tasks: vec![],
        });
        assert_eq!(plan.progress(), 0);
    }

    #[test]
    fn test_progress_rounds_to_nearest() {
        let mut plan = sample_plan();
        plan.days[0].tasks = vec![task("a", true), task("b", false), task("c", false)];
        // 1/3 -> 33%
        assert_eq!(plan.progress(), 33);

        plan.days[0].tasks = vec![task("a", true), task("b", true), task("c", false)];
        // 2/3 -> 67%
        assert_eq!(plan.progress(), 67);
    }

    #[test]
    fn test_progress_bounds() {
        let mut plan = sample_plan();
        assert_eq!(plan.progress(), 0);

        for t in &mut plan.days[0].tasks {
            t.completed = true;
        }
        assert_eq!(plan.progress(), 100);
    }

    #[test]
    fn test_has_task() {
        let plan = sample_plan();
        assert!(plan.has_task(1, "t1"));
        assert!(!plan.has_task(1, "t3"));
        assert!(!plan.has_task(2, "t1"));
    }

    #[test]
    fn test_draft_into_plan_assigns_identity() {
        let draft = PlanDraft {
            subjects: vec!["Physics".to_string()],
            exam_date: "2026-10-01".to_string(),
            daily_hours: 3.0,
            days: vec![StudyDay {
                day_number: 1,
                date: "2026-08-07".to_string(),
                focus_area: "Mechanics".to_string(),
                tasks: vec![task("t1", true)],
            }],
        };

        let plan = draft.into_plan();
        assert!(!plan.id.is_empty());
        assert!(!plan.created_at.is_empty());
        // Completion is reset regardless of what the generator sent
        assert!(!plan.days[0].tasks[0].completed);
    }

    #[test]
    fn test_draft_plans_get_distinct_ids() {
        let draft = PlanDraft {
            subjects: vec![],
            exam_date: "2026-10-01".to_string(),
            daily_hours: 2.0,
            days: vec![],
        };
        let a = draft.clone().into_plan();
        let b = draft.into_plan();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"examDate\""));
        assert!(json.contains("\"dailyHours\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"dayNumber\""));
        assert!(json.contains("\"focusArea\""));
    }

    #[test]
    fn test_task_description_omitted_when_absent() {
        let json = serde_json::to_string(&task("t1", false)).unwrap();
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_draft_parses_without_completed_field() {
        let json = r#"{
            "subjects": ["Calculus"],
            "examDate": "2026-09-15",
            "dailyHours": 4,
            "days": [{
                "dayNumber": 1,
                "date": "2026-08-07",
                "focusArea": "Limits",
                "tasks": [{"id": "t1", "title": "Read chapter 1", "duration": "1 hour"}]
            }]
        }"#;

        let draft: PlanDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.days[0].tasks[0].id, "t1");
        assert!(!draft.days[0].tasks[0].completed);
        assert_eq!(draft.days[0].tasks[0].description, None);
    }
}
