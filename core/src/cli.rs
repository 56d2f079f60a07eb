// core/src/cli.rs
use std::time::Duration;

use crate::activities::{Running, Swimming, Walking, Workout};
use crate::config::{ConfigError, OutputFormat, ReportConfig};
use crate::report::TrainingReport;
use crate::training::CaloriesCalculator;

/// De tre referanseøktene: svømming, gåing, løping.
pub fn demo_workouts() -> Vec<Workout> {
    vec![
        Swimming::new("Swimming", 2000, Duration::from_secs(90 * 60), 85.0, 50, 40).into(),
        Walking::new("Walking", 20000, Duration::from_secs((3 * 60 + 45) * 60), 85.0, 185.0).into(),
        Running::new("Running", 5000, Duration::from_secs(30 * 60), 85.0).into(),
    ]
}

/// Tekstblokker etterfulgt av en blank linje hver, eller en JSON-liste.
pub fn render_reports(workouts: &[Workout], config: &ReportConfig) -> Result<String, ConfigError> {
    let reports: Vec<TrainingReport> = workouts.iter().map(|w| w.training_info()).collect();

    match config.format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| format!("{}\n", r.format(config.locale)))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&reports)? + "\n"),
    }
}
