pub mod activities;
pub mod cli;
pub mod config;
pub mod report;
pub mod training;

pub use activities::{Running, Swimming, Walking, Workout};
pub use cli::{demo_workouts, render_reports};
pub use config::{load_config, save_config, ConfigError, OutputFormat, ReportConfig};
pub use report::{read_data, Locale, TrainingReport};
pub use training::{CaloriesCalculator, Training};
