// core/src/report.rs
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::training::{minutes, CaloriesCalculator};

/// Oppsummering av én økt. Bygges på nytt for hver spørring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub training_type: String,
    #[serde(rename = "duration_min", with = "minutes")]
    pub duration: Duration,
    /// km
    pub distance: f64,
    /// km/t
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "ru", alias = "russian")]
    Russian,
}

/// Ledetekster for tekstrapporten.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub training_type: &'static str,
    pub duration: &'static str,
    pub minutes: &'static str,
    pub distance: &'static str,
    pub km: &'static str,
    pub speed: &'static str,
    pub kmh: &'static str,
    pub calories: &'static str,
}

const EN_LABELS: Labels = Labels {
    training_type: "Activity type",
    duration: "Duration",
    minutes: "min",
    distance: "Distance",
    km: "km.",
    speed: "Avg. speed",
    kmh: "km/h",
    calories: "Calories burned",
};

const RU_LABELS: Labels = Labels {
    training_type: "Тип тренировки",
    duration: "Длительность",
    minutes: "мин",
    distance: "Дистанция",
    km: "км.",
    speed: "Ср. скорость",
    kmh: "км/ч",
    calories: "Потрачено ккал",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::English => &EN_LABELS,
            Self::Russian => &RU_LABELS,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

impl TrainingReport {
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }

    /// Fast tekstblokk: type, minutter (rå float), km/km/t/kcal med 2 desimaler.
    pub fn format(&self, locale: Locale) -> String {
        let l = locale.labels();
        format!(
            "{}: {}\n{}: {} {}\n{}: {:.2} {}\n{}: {:.2} {}\n{}: {:.2}\n",
            l.training_type,
            self.training_type,
            l.duration,
            self.duration_minutes(),
            l.minutes,
            l.distance,
            self.distance,
            l.km,
            l.speed,
            self.speed,
            l.kmh,
            l.calories,
            self.calories,
        )
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Locale::English))
    }
}

/// Bygg rapport via aktivitetens egne overstyringer og formater den.
pub fn read_data(training: &dyn CaloriesCalculator, locale: Locale) -> String {
    training.training_info().format(locale)
}
