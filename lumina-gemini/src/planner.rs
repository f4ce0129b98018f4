//! Study plan generation
//!
//! One schema-constrained generateContent call per plan. The response is
//! parsed into a [`PlanDraft`]; assigning identity and resetting completion
//! is the caller's job via [`PlanDraft::into_plan`].

use lumina_core::PlanDraft;
use serde_json::json;
use tracing::info;

use crate::client::{GeminiClient, GenerateContentRequest};
use crate::{Error, Result};

impl GeminiClient {
    /// Generate a study plan draft for the given subjects
    ///
    /// Fails with a content error when the model returns no usable payload
    /// or a structure that does not match the draft shape. No retry; no
    /// partial result is retained.
    pub async fn generate_plan(
        &self,
        subjects: &str,
        exam_date: &str,
        daily_hours: f64,
    ) -> Result<PlanDraft> {
        let prompt = plan_prompt(subjects, exam_date, daily_hours);
        let request = GenerateContentRequest::text(prompt).with_json_schema(plan_schema());

        let response = self.generate(self.text_model(), &request).await?;
        let text = response.first_text().ok_or(Error::EmptyResponse)?;

        let draft = parse_draft(&text)?;
        info!(
            days = draft.days.len(),
            subjects = %draft.subjects.join(", "),
            "Generated study plan draft"
        );

        Ok(draft)
    }
}

/// Parse the model's JSON payload into a draft
fn parse_draft(text: &str) -> Result<PlanDraft> {
    serde_json::from_str(text).map_err(|e| Error::InvalidPlan(e.to_string()))
}

fn plan_prompt(subjects: &str, exam_date: &str, daily_hours: f64) -> String {
    format!(
        "You are an expert AI study planner. Create a detailed, realistic, and balanced \
         study plan for the following subjects: {subjects}. \n\
         The exam date is {exam_date}. The student can study {daily_hours} hours per day.\n\
         \n\
         Instructions:\n\
         1. Distribute subjects evenly across available days starting from today until the day before the exam.\n\
         2. Each day should have 2-4 specific tasks.\n\
         3. Include time for revision and active recall.\n\
         4. Break topics into small, achievable goals."
    )
}

/// Response schema for the draft shape: subjects, exam date, daily hours,
/// and the day/task tree. Task ids come back from the model and are only
/// required to be unique within their day.
fn plan_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "subjects": { "type": "ARRAY", "items": { "type": "STRING" } },
            "examDate": { "type": "STRING" },
            "dailyHours": { "type": "NUMBER" },
            "days": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dayNumber": { "type": "INTEGER" },
                        "date": { "type": "STRING" },
                        "focusArea": { "type": "STRING" },
                        "tasks": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "id": { "type": "STRING" },
                                    "title": { "type": "STRING" },
                                    "duration": { "type": "STRING" },
                                    "description": { "type": "STRING" }
                                },
                                "required": ["id", "title", "duration"]
                            }
                        }
                    },
                    "required": ["dayNumber", "date", "focusArea", "tasks"]
                }
            }
        },
        "required": ["subjects", "examDate", "dailyHours", "days"]
    })
}
