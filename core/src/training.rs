// core/src/training.rs
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::report::TrainingReport;

pub const M_IN_KM: f64 = 1000.0;      // meter per kilometer
pub const MIN_IN_HOURS: f64 = 60.0;   // minutter per time
pub const LEN_STEP: f64 = 0.65;       // lengde på ett skritt (m)
pub const CM_IN_M: f64 = 100.0;       // centimeter per meter

/// Felles rådata for én gjennomført økt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    /// Visningsnavn, f.eks. "Running"
    pub training_type: String,
    /// Antall repetisjoner (skritt, eller tak ved svømming)
    pub action: u32,
    /// Lengde per repetisjon i meter
    pub len_step: f64,
    #[serde(rename = "duration_min", with = "minutes")]
    pub duration: Duration,
    /// Kroppsvekt i kg
    pub weight: f64,
}

impl Training {
    pub fn new(
        training_type: impl Into<String>,
        action: u32,
        len_step: f64,
        duration: Duration,
        weight: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            action,
            len_step,
            duration,
            weight,
        }
    }

    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }

    #[inline]
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }

    /// Distanse (km) = repetisjoner * steglengde / m_per_km
    pub fn distance(&self) -> f64 {
        f64::from(self.action) * self.len_step / M_IN_KM
    }

    /// Snittfart (km/t) for løping og gåing. 0.0 ved varighet 0.
    pub fn mean_speed(&self) -> f64 {
        let hours = self.duration_hours();
        if hours == 0.0 {
            return division_by_zero(&self.training_type, "mean speed");
        }
        self.distance() / hours
    }
}

/// Logger en advarsel og gir 0.0 i stedet for en udefinert verdi.
pub(crate) fn division_by_zero(training_type: &str, quantity: &str) -> f64 {
    log::warn!("{training_type}: division by zero while computing {quantity}");
    0.0
}

/// Felles grensesnitt for Running, Walking og Swimming.
///
/// `training_info` går alltid via `self.mean_speed()` og `self.calories()`,
/// så en aktivitet som overstyrer farten får den brukt i både rapport og kalorier.
pub trait CaloriesCalculator {
    fn training(&self) -> &Training;

    fn calories(&self) -> f64;

    fn distance(&self) -> f64 {
        self.training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.training().mean_speed()
    }

    fn training_info(&self) -> TrainingReport {
        let t = self.training();
        TrainingReport {
            training_type: t.training_type.clone(),
            duration: t.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

/// Varighet som flyttall-minutter i JSON.
pub(crate) mod minutes {
    use std::time::Duration;

    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(d.as_secs_f64() / 60.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let min = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(min * 60.0)
            .map_err(|e| D::Error::custom(format!("invalid duration {min} min: {e}")))
    }
}
