//! Plan management commands

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use lumina_core::{export_plan, Config, StudyPlan};
use lumina_gemini::GeminiClient;

use crate::app::App;

/// Plan management commands
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommand,
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Generate a new study plan
    New {
        /// Subjects or topics to cover (e.g. "Organic Chemistry, Calculus II")
        #[arg(short, long)]
        subjects: String,

        /// Exam date (YYYY-MM-DD)
        #[arg(short, long)]
        exam_date: String,

        /// Daily study hours (1-12)
        #[arg(long, default_value_t = 4.0)]
        hours: f64,
    },

    /// List all plans
    #[command(visible_alias = "ls")]
    List,

    /// Show a plan's full day-by-day schedule
    Show {
        /// Plan id (or unique prefix)
        id: String,
    },

    /// Toggle a task's completion state
    Toggle {
        /// Plan id (or unique prefix)
        id: String,

        /// Day number within the plan
        #[arg(short, long)]
        day: u32,

        /// Task id within the day
        #[arg(short, long)]
        task: String,
    },

    /// Export a plan as plain text
    Export {
        /// Plan id (or unique prefix)
        id: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all plans
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, app: &mut App, config: &Config) -> anyhow::Result<()> {
        match &self.command {
            PlanCommand::New {
                subjects,
                exam_date,
                hours,
            } => new_plan(app, config, subjects, exam_date, *hours).await,
            PlanCommand::List => {
                list_plans(app);
                Ok(())
            }
            PlanCommand::Show { id } => {
                let plan = app.find_plan(id)?;
                print_plan(plan);
                Ok(())
            }
            PlanCommand::Toggle { id, day, task } => toggle_task(app, id, *day, task),
            PlanCommand::Export { id, output } => export(app, id, output.as_deref()),
            PlanCommand::Clear { yes } => clear_plans(app, *yes),
        }
    }
}

async fn new_plan(
    app: &mut App,
    config: &Config,
    subjects: &str,
    exam_date: &str,
    hours: f64,
) -> anyhow::Result<()> {
    let subjects = subjects.trim();
    if subjects.is_empty() {
        bail!("Subjects must not be empty");
    }

    let date = NaiveDate::parse_from_str(exam_date, "%Y-%m-%d")
        .with_context(|| format!("Exam date '{}' is not a valid YYYY-MM-DD date", exam_date))?;
    if date < Local::now().date_naive() {
        bail!("Exam date {} is in the past", exam_date);
    }

    if !(1.0..=12.0).contains(&hours) {
        bail!("Daily hours must be between 1 and 12");
    }

    let client = GeminiClient::new(&config.generator)?;

    println!("Generating study plan for: {}", subjects);
    println!("This can take a little while...");
    println!();

    let draft = client.generate_plan(subjects, exam_date, hours).await?;
    let plan = draft.into_plan();

    app.insert_plan(plan.clone())?;

    println!("Created plan {}", short_id(&plan));
    println!();
    print_plan(&plan);

    Ok(())
}

fn list_plans(app: &App) {
    if app.plans().is_empty() {
        println!("No plans yet. Create one with `lumina plan new`.");
        return;
    }

    println!(
        "{:<10} {:<34} {:<12} {:>4} {:>9}",
        "ID", "SUBJECTS", "EXAM", "DAYS", "PROGRESS"
    );

    for plan in app.plans() {
        let mut subjects = plan.subjects.join(", ");
        if subjects.chars().count() > 32 {
            subjects = subjects.chars().take(31).collect();
            subjects.push('…');
        }

        println!(
            "{:<10} {:<34} {:<12} {:>4} {:>8}%",
            short_id(plan),
            subjects,
            plan.exam_date,
            plan.days.len(),
            plan.progress()
        );
    }
}

fn print_plan(plan: &StudyPlan) {
    let (completed, total) = plan.task_counts();

    println!("{}", plan.subjects.join(" & "));
    println!(
        "Exam on {} • {}h daily • {} days • {}% complete ({}/{} tasks)",
        plan.exam_date,
        plan.daily_hours,
        plan.days.len(),
        plan.progress(),
        completed,
        total
    );
    println!();

    for day in &plan.days {
        let done = day.tasks.iter().filter(|t| t.completed).count();
        println!(
            "Day {} ({}) — {} [{}/{}]",
            day.day_number,
            day.date,
            day.focus_area,
            done,
            day.tasks.len()
        );

        for task in &day.tasks {
            let mark = if task.completed { "X" } else { " " };
            println!("  [{}] {}  {} ({})", mark, task.id, task.title, task.duration);
            if let Some(description) = &task.description {
                println!("        {}", description);
            }
        }
        println!();
    }
}

fn toggle_task(app: &mut App, id: &str, day: u32, task: &str) -> anyhow::Result<()> {
    let plan_id = app.find_plan(id)?.id.clone();
    let applied = app.toggle_task(&plan_id, day, task)?;

    if applied {
        let plan = app.find_plan(&plan_id)?;
        let state = if plan
            .days
            .iter()
            .find(|d| d.day_number == day)
            .and_then(|d| d.tasks.iter().find(|t| t.id == task))
            .map(|t| t.completed)
            .unwrap_or(false)
        {
            "completed"
        } else {
            "not completed"
        };
        println!(
            "Task {} on day {} is now {}. Plan progress: {}%",
            task,
            day,
            state,
            plan.progress()
        );
    } else {
        println!("No task '{}' on day {} — plan unchanged.", task, day);
    }

    Ok(())
}

fn export(app: &App, id: &str, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let plan = app.find_plan(id)?;
    let text = export_plan(plan);

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported plan {} to {}", short_id(plan), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

fn clear_plans(app: &mut App, yes: bool) -> anyhow::Result<()> {
    if app.plans().is_empty() {
        println!("No plans to delete.");
        return Ok(());
    }

    if !yes {
        print!(
            "Delete all {} plan(s)? This cannot be undone. [y/N] ",
            app.plans().len()
        );
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    app.clear_plans()?;
    println!("All plans deleted.");
    Ok(())
}

fn short_id(plan: &StudyPlan) -> String {
    plan.id.chars().take(8).collect()
}
