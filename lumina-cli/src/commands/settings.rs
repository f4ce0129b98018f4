//! Settings commands
//!
//! Settings are overwritten wholesale: `set` loads the current record,
//! changes one field, and persists the whole record.

use anyhow::{bail, Context};
use clap::{Args, Subcommand};

use crate::app::App;

/// Settings commands
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show current settings
    Show,

    /// Change one setting
    ///
    /// Field names match the keys in settings.json: theme, emailReminders,
    /// emailAddress, pushNotifications, dailyTargetHours, dailyTargetTasks,
    /// aiTone
    Set {
        /// Field to change
        field: String,

        /// New value
        value: String,
    },
}

impl SettingsArgs {
    /// Execute the settings command
    pub fn execute(&self, app: &mut App) -> anyhow::Result<()> {
        match &self.command {
            SettingsCommand::Show => {
                show(app);
                Ok(())
            }
            SettingsCommand::Set { field, value } => set(app, field, value),
        }
    }
}

fn show(app: &App) {
    let settings = app.settings();

    println!("Lumina Settings");
    println!("===============");
    println!();
    println!("  theme:              {}", settings.theme);
    println!("  emailReminders:     {}", settings.email_reminders);
    println!(
        "  emailAddress:       {}",
        if settings.email_address.is_empty() {
            "(not set)"
        } else {
            &settings.email_address
        }
    );
    println!("  pushNotifications:  {}", settings.push_notifications);
    println!("  dailyTargetHours:   {}", settings.daily_target_hours);
    println!("  dailyTargetTasks:   {}", settings.daily_target_tasks);
    println!("  aiTone:             {}", settings.ai_tone);
}

fn set(app: &mut App, field: &str, value: &str) -> anyhow::Result<()> {
    let mut settings = app.settings().clone();

    match field {
        "theme" => {
            settings.theme = value.parse().map_err(anyhow::Error::msg)?;
        }
        "emailReminders" => {
            settings.email_reminders = parse_bool(field, value)?;
        }
        "emailAddress" => {
            if !value.is_empty() && !value.contains('@') {
                bail!("'{}' does not look like an email address", value);
            }
            settings.email_address = value.to_string();
        }
        "pushNotifications" => {
            settings.push_notifications = parse_bool(field, value)?;
        }
        "dailyTargetHours" => {
            settings.daily_target_hours = value
                .parse()
                .with_context(|| format!("'{}' is not a number", value))?;
        }
        "dailyTargetTasks" => {
            settings.daily_target_tasks = value
                .parse()
                .with_context(|| format!("'{}' is not a whole number", value))?;
        }
        "aiTone" => {
            settings.ai_tone = value.parse().map_err(anyhow::Error::msg)?;
        }
        other => bail!(
            "Unknown setting '{}'. Valid fields: theme, emailReminders, emailAddress, \
             pushNotifications, dailyTargetHours, dailyTargetTasks, aiTone",
            other
        ),
    }

    app.update_settings(settings)?;
    println!("Updated {}.", field);
    Ok(())
}

fn parse_bool(field: &str, value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => bail!("'{}' must be true or false, got '{}'", field, value),
    }
}
