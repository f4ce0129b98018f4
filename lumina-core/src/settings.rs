//! User settings
//!
//! A flat configuration record read alongside the plan collection.
//! Overwritten wholesale on every change and persisted immediately.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Voice used for generated study content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiTone {
    /// Formal terminology and comprehensive detail
    #[default]
    Academic,
    /// Vivid analogies and storytelling elements
    Creative,
    /// Feynman-style first-principles explanations
    Simplified,
}

impl AiTone {
    /// Get all available tones
    pub fn all() -> &'static [AiTone] {
        &[AiTone::Academic, AiTone::Creative, AiTone::Simplified]
    }

    /// Get the short name for this tone
    pub fn name(&self) -> &'static str {
        match self {
            AiTone::Academic => "academic",
            AiTone::Creative => "creative",
            AiTone::Simplified => "simplified",
        }
    }
}

impl fmt::Display for AiTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AiTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "academic" => Ok(AiTone::Academic),
            "creative" => Ok(AiTone::Creative),
            "simplified" => Ok(AiTone::Simplified),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}

/// User-facing application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Color theme
    pub theme: Theme,
    /// Whether email reminders are enabled
    pub email_reminders: bool,
    /// Address email reminders go to
    pub email_address: String,
    /// Whether push notifications are enabled
    pub push_notifications: bool,
    /// Daily study-hour goal shown on the dashboard
    pub daily_target_hours: f64,
    /// Daily task goal that today's progress is measured against
    pub daily_target_tasks: u32,
    /// Voice used for generated content
    pub ai_tone: AiTone,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            email_reminders: false,
            email_address: String::new(),
            push_notifications: true,
            daily_target_hours: 4.0,
            daily_target_tasks: 3,
            ai_tone: AiTone::Academic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = UserSettings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.email_reminders);
        assert!(settings.push_notifications);
        assert_eq!(settings.daily_target_hours, 4.0);
        assert_eq!(settings.daily_target_tasks, 3);
        assert_eq!(settings.ai_tone, AiTone::Academic);
    }

    #[test]
    fn test_tone_from_str() {
        assert_eq!("academic".parse::<AiTone>().unwrap(), AiTone::Academic);
        assert_eq!("Creative".parse::<AiTone>().unwrap(), AiTone::Creative);
        assert_eq!("SIMPLIFIED".parse::<AiTone>().unwrap(), AiTone::Simplified);
        assert!("casual".parse::<AiTone>().is_err());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&UserSettings::default()).unwrap();
        assert!(json.contains("\"emailReminders\""));
        assert!(json.contains("\"dailyTargetTasks\""));
        assert!(json.contains("\"aiTone\":\"academic\""));
        assert!(json.contains("\"theme\":\"light\""));
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let json = r#"{"theme":"dark","dailyTargetTasks":5}"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.daily_target_tasks, 5);
        // Untouched fields keep their defaults
        assert_eq!(settings.daily_target_hours, 4.0);
        assert_eq!(settings.ai_tone, AiTone::Academic);
    }
}
