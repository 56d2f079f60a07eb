use std::path::PathBuf;

use clap::Parser;
use trainsum_core::{demo_workouts, load_config, render_reports, Locale, OutputFormat};

/// Skriver distanse, snittfart og kalorier for referanseøktene.
#[derive(Parser)]
#[command(name = "trainsum", version, about = "Training summaries for running, walking and swimming")]
struct Cli {
    /// JSON-konfig (locale, format). Mangler filen brukes default.
    #[arg(short, long, default_value = "trainsum.json")]
    config: PathBuf,

    /// Språk for ledetekster: en | ru
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Utdata: text | json
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    print!("{}", render_reports(&demo_workouts(), &config)?);
    Ok(())
}
