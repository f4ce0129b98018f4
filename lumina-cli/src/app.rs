//! Application state
//!
//! One [`App`] value owns the in-memory plan collection and settings for
//! the lifetime of a command, and is the only writer: every mutation goes
//! through a Plan Store operation and persists the full next state before
//! returning.

use anyhow::bail;
use lumina_core::{Config, PlanStore, StudyPlan, UserSettings};

/// Owns application state and its durable mirror
pub struct App {
    store: PlanStore,
    plans: Vec<StudyPlan>,
    settings: UserSettings,
}

impl App {
    /// Load state from the configured data directory
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let store = PlanStore::new(config.data_dir()?);
        let plans = store.load_plans();
        let settings = store.load_settings();

        tracing::debug!(plans = plans.len(), "Loaded application state");

        Ok(Self {
            store,
            plans,
            settings,
        })
    }

    /// The plan collection, most recently created first
    pub fn plans(&self) -> &[StudyPlan] {
        &self.plans
    }

    /// Current user settings
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// The underlying store (for reporting file locations)
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Insert a newly generated plan at the front of the collection
    pub fn insert_plan(&mut self, plan: StudyPlan) -> anyhow::Result<()> {
        self.plans.insert(0, plan);
        self.store.replace_all(&self.plans)?;
        Ok(())
    }

    /// Flip one task's completion state and persist
    ///
    /// Returns whether a task actually matched; an unknown pair leaves the
    /// collection unchanged apart from being rewritten as-is.
    pub fn toggle_task(
        &mut self,
        plan_id: &str,
        day_number: u32,
        task_id: &str,
    ) -> anyhow::Result<bool> {
        let Some(pos) = self.plans.iter().position(|p| p.id == plan_id) else {
            bail!("No plan with id {}", plan_id);
        };

        let applied = self.plans[pos].has_task(day_number, task_id);
        let updated = self.plans[pos].with_task_toggled(day_number, task_id);
        self.plans[pos] = updated;
        self.store.replace_all(&self.plans)?;

        Ok(applied)
    }

    /// Delete every plan
    pub fn clear_plans(&mut self) -> anyhow::Result<()> {
        self.plans.clear();
        self.store.replace_all(&self.plans)?;
        Ok(())
    }

    /// Overwrite settings wholesale and persist
    pub fn update_settings(&mut self, settings: UserSettings) -> anyhow::Result<()> {
        self.store.save_settings(&settings)?;
        self.settings = settings;
        Ok(())
    }

    /// Resolve a plan by id or unique id prefix
    pub fn find_plan(&self, id: &str) -> anyhow::Result<&StudyPlan> {
        let matches: Vec<&StudyPlan> = self
            .plans
            .iter()
            .filter(|p| p.id.starts_with(id))
            .collect();

        match matches.len() {
            0 => bail!("No plan found with id '{}'. Run `lumina plan list`.", id),
            1 => Ok(matches[0]),
            n => {
                let ids: Vec<&str> = matches.iter().map(|p| p.id.as_str()).collect();
                bail!("Plan id '{}' is ambiguous ({} matches): {}", id, n, ids.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::config::StorageConfig;
    use lumina_core::{StudyDay, StudyTask};
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        Config {
            storage: StorageConfig {
                data_dir: Some(dir.path().to_path_buf()),
            },
            ..Config::default()
        }
    }

    fn plan(id: &str) -> StudyPlan {
        StudyPlan {
            id: id.to_string(),
            subjects: vec!["Statistics".to_string()],
            exam_date: "2026-09-10".to_string(),
            daily_hours: 2.0,
            days: vec![StudyDay {
                day_number: 1,
                date: "2026-08-07".to_string(),
                focus_area: "Distributions".to_string(),
                tasks: vec![StudyTask {
                    id: "t1".to_string(),
                    title: "Normal curve practice".to_string(),
                    duration: "30 min".to_string(),
                    description: None,
                    completed: false,
                }],
            }],
            created_at: "2026-08-07T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_insert_prepends_and_persists() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let mut app = App::open(&config).unwrap();
        app.insert_plan(plan("first")).unwrap();
        app.insert_plan(plan("second")).unwrap();

        assert_eq!(app.plans()[0].id, "second");
        assert_eq!(app.plans()[1].id, "first");

        // A fresh App sees the same state
        let reloaded = App::open(&config).unwrap();
        assert_eq!(reloaded.plans().len(), 2);
        assert_eq!(reloaded.plans()[0].id, "second");
    }

    #[test]
    fn test_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let mut app = App::open(&config).unwrap();
        app.insert_plan(plan("p1")).unwrap();

        assert!(app.toggle_task("p1", 1, "t1").unwrap());

        let reloaded = App::open(&config).unwrap();
        assert!(reloaded.plans()[0].days[0].tasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_task_reports_unapplied() {
        let dir = TempDir::new().unwrap();
        let mut app = App::open(&test_config(&dir)).unwrap();
        app.insert_plan(plan("p1")).unwrap();

        assert!(!app.toggle_task("p1", 9, "t1").unwrap());
        assert!(!app.plans()[0].days[0].tasks[0].completed);
    }

    #[test]
    fn test_clear_plans() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let mut app = App::open(&config).unwrap();
        app.insert_plan(plan("p1")).unwrap();
        app.clear_plans().unwrap();

        assert!(app.plans().is_empty());
        assert!(App::open(&config).unwrap().plans().is_empty());
    }

    #[test]
    fn test_find_plan_by_prefix() {
        let dir = TempDir::new().unwrap();
        let mut app = App::open(&test_config(&dir)).unwrap();
        app.insert_plan(plan("abc-123")).unwrap();
        app.insert_plan(plan("abd-456")).unwrap();

        assert_eq!(app.find_plan("abc").unwrap().id, "abc-123");
        assert!(app.find_plan("ab").is_err()); // ambiguous
        assert!(app.find_plan("zzz").is_err()); // missing
    }

    #[test]
    fn test_update_settings_persists() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let mut app = App::open(&config).unwrap();
        let mut settings = app.settings().clone();
        settings.daily_target_tasks = 9;
        app.update_settings(settings).unwrap();

        assert_eq!(App::open(&config).unwrap().settings().daily_target_tasks, 9);
    }
}
