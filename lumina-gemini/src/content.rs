//! Study content and diagram generation
//!
//! Free-form prompt/response calls used by the resource tools: notes,
//! quizzes, in-depth explanations, and educational diagrams.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use lumina_core::AiTone;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info, warn};

use crate::client::{GeminiClient, GenerateContentRequest};
use crate::Result;

/// Kind of study content to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Structured Markdown study notes
    #[default]
    Notes,
    /// Five-question practice quiz with answers
    Quiz,
    /// In-depth concept explanation
    Explanation,
}

impl ContentFormat {
    /// Get the short name for this format
    pub fn name(&self) -> &'static str {
        match self {
            ContentFormat::Notes => "notes",
            ContentFormat::Quiz => "quiz",
            ContentFormat::Explanation => "explanation",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ContentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notes" => Ok(ContentFormat::Notes),
            "quiz" => Ok(ContentFormat::Quiz),
            "explanation" | "explain" => Ok(ContentFormat::Explanation),
            _ => Err(format!("Unknown content format: {}", s)),
        }
    }
}

/// A generated diagram: decoded bytes plus the mime type the model declared
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl GeminiClient {
    /// Generate study content for a topic in the requested format and tone
    ///
    /// Returns an empty string when the model sends no text back.
    pub async fn generate_content(
        &self,
        topic: &str,
        format: ContentFormat,
        tone: AiTone,
    ) -> Result<String> {
        let prompt = content_prompt(topic, format, tone);
        let request = GenerateContentRequest::text(prompt);

        let response = self.generate(self.text_model(), &request).await?;
        let text = response.first_text().unwrap_or_default();

        info!(topic = %topic, format = %format, chars = text.len(), "Generated study content");
        Ok(text)
    }

    /// Generate an educational diagram for a topic
    ///
    /// Returns `None` when the call fails or the response carries no image
    /// part; image failures are logged, never propagated.
    pub async fn generate_image(&self, topic: &str) -> Option<GeneratedImage> {
        let prompt = format!(
            "A clean, educational diagram explaining {topic}. \
             Simple labels, white background, scientific style. Visual clarity."
        );
        let request = GenerateContentRequest::text(prompt);

        let response = match self.generate(self.image_model(), &request).await {
            Ok(response) => response,
            Err(e) => {
                error!(topic = %topic, error = %e, "Image generation failed");
                return None;
            }
        };

        let inline = response.first_inline_data()?;
        match BASE64.decode(&inline.data) {
            Ok(bytes) => Some(GeneratedImage {
                mime_type: inline.mime_type.clone(),
                bytes,
            }),
            Err(e) => {
                warn!(topic = %topic, error = %e, "Image payload was not valid base64");
                None
            }
        }
    }
}

/// Tone instruction prepended to tone-aware prompts
fn tone_instruction(tone: AiTone) -> &'static str {
    match tone {
        AiTone::Creative => {
            "Use vivid analogies, creative metaphors, and visual language. \
             Structure with storytelling elements where appropriate."
        }
        AiTone::Simplified => {
            "Use the Feynman Technique. Explain like the user is 5. \
             Focus on first principles and core logic. Avoid jargon."
        }
        AiTone::Academic => {
            "Use formal academic terminology, precise definitions, and \
             comprehensive detail suitable for higher education."
        }
    }
}

fn content_prompt(topic: &str, format: ContentFormat, tone: AiTone) -> String {
    let tone_line = tone_instruction(tone);

    match format {
        ContentFormat::Notes => format!(
            "{tone_line}\nGenerate structured study notes for the topic: {topic}. \
             Use Markdown with clear headings, bullet points, and bold terms."
        ),
        ContentFormat::Quiz => format!(
            "Generate a 5-question practice quiz for the topic: {topic}. \
             Include a mix of MCQs and short answers. Provide answers at the end."
        ),
        ContentFormat::Explanation => {
            format!("{tone_line}\nExplain the concept of {topic} in depth.")
        }
    }
}
