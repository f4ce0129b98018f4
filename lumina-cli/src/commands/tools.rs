//! Resource tools: smart notes, quiz generator, and the visual deep dive

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use lumina_core::{AiTone, Config};
use lumina_gemini::{ContentFormat, GeminiClient};

use crate::app::App;

/// Generate structured study notes for a topic
#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Topic or syllabus text
    pub topic: String,

    /// Override the configured AI tone (academic, creative, simplified)
    #[arg(long)]
    pub tone: Option<AiTone>,
}

impl NotesArgs {
    /// Execute the notes command
    pub async fn execute(&self, app: &App, config: &Config) -> anyhow::Result<()> {
        let text =
            generate(app, config, &self.topic, ContentFormat::Notes, self.tone).await?;
        println!("{}", text);
        Ok(())
    }
}

/// Generate a practice quiz for a topic
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Topic to be quizzed on
    pub topic: String,

    /// Override the configured AI tone (academic, creative, simplified)
    #[arg(long)]
    pub tone: Option<AiTone>,
}

impl QuizArgs {
    /// Execute the quiz command
    pub async fn execute(&self, app: &App, config: &Config) -> anyhow::Result<()> {
        let text = generate(app, config, &self.topic, ContentFormat::Quiz, self.tone).await?;
        println!("{}", text);
        Ok(())
    }
}

/// Explain a concept in depth, optionally with a diagram
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Concept to explain
    pub topic: String,

    /// Override the configured AI tone (academic, creative, simplified)
    #[arg(long)]
    pub tone: Option<AiTone>,

    /// Also generate an educational diagram and write it to this path
    #[arg(long)]
    pub diagram: Option<PathBuf>,
}

impl ExplainArgs {
    /// Execute the explain command
    pub async fn execute(&self, app: &App, config: &Config) -> anyhow::Result<()> {
        let topic = validated_topic(&self.topic)?;
        let tone = self.tone.unwrap_or(app.settings().ai_tone);
        let client = GeminiClient::new(&config.generator)?;

        match &self.diagram {
            None => {
                let text = client
                    .generate_content(topic, ContentFormat::Explanation, tone)
                    .await?;
                println!("{}", text);
            }
            Some(path) => {
                // Text and image are requested together and applied together
                let (text, image) = tokio::join!(
                    client.generate_content(topic, ContentFormat::Explanation, tone),
                    client.generate_image(topic),
                );

                println!("{}", text?);
                println!();

                match image {
                    Some(image) => {
                        std::fs::write(path, &image.bytes)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        println!(
                            "Wrote diagram ({}, {} bytes) to {}",
                            image.mime_type,
                            image.bytes.len(),
                            path.display()
                        );
                    }
                    None => println!("No diagram was generated for this topic."),
                }
            }
        }

        Ok(())
    }
}

async fn generate(
    app: &App,
    config: &Config,
    topic: &str,
    format: ContentFormat,
    tone: Option<AiTone>,
) -> anyhow::Result<String> {
    let topic = validated_topic(topic)?;
    let tone = tone.unwrap_or(app.settings().ai_tone);

    let client = GeminiClient::new(&config.generator)?;
    let text = client.generate_content(topic, format, tone).await?;
    Ok(text)
}

fn validated_topic(topic: &str) -> anyhow::Result<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        bail!("Topic must not be empty");
    }
    Ok(topic)
}
