// core/src/activities.rs
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::training::{
    division_by_zero, CaloriesCalculator, Training, CM_IN_M, LEN_STEP, MIN_IN_HOURS, M_IN_KM,
};

// ---------- Løping ----------
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

// ---------- Gåing ----------
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
pub const KMH_IN_MSEC: f64 = 0.278;

// ---------- Svømming ----------
pub const SWIMMING_LEN_STEP: f64 = 1.38;                 // lengde på ett tak (m)
pub const SWIMMING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const SWIMMING_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub training: Training,
}

impl Running {
    pub fn new(training_type: impl Into<String>, action: u32, duration: Duration, weight: f64) -> Self {
        Self {
            training: Training::new(training_type, action, LEN_STEP, duration, weight),
        }
    }
}

impl CaloriesCalculator for Running {
    fn training(&self) -> &Training {
        &self.training
    }

    /// ((18 * snittfart + 1.79) * vekt / m_per_km * timer * min_per_time)
    fn calories(&self) -> f64 {
        let t = &self.training;
        let hours = t.duration_hours();
        if hours == 0.0 {
            return division_by_zero(&t.training_type, "calories");
        }
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT) * t.weight
            / M_IN_KM
            * hours
            * MIN_IN_HOURS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walking {
    pub training: Training,
    /// Høyde i cm. 0 gir 0 kalorier.
    pub height: f64,
}

impl Walking {
    pub fn new(
        training_type: impl Into<String>,
        action: u32,
        duration: Duration,
        weight: f64,
        height: f64,
    ) -> Self {
        Self {
            training: Training::new(training_type, action, LEN_STEP, duration, weight),
            height,
        }
    }
}

impl CaloriesCalculator for Walking {
    fn training(&self) -> &Training {
        &self.training
    }

    /// ((0.035 * vekt + (fart_m_s^2 / høyde_m) * 0.029 * vekt) * timer * min_per_time)
    fn calories(&self) -> f64 {
        let t = &self.training;
        // Farten regnes ut før høydesjekken; ved varighet 0 logges det derfor også her.
        let speed_m_per_s = self.mean_speed() * KMH_IN_MSEC;

        if self.height == 0.0 {
            return division_by_zero(&t.training_type, "calories");
        }

        (CALORIES_WEIGHT_MULTIPLIER * t.weight
            + (speed_m_per_s.powi(2) / (self.height / CM_IN_M))
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * t.weight)
            * t.duration_hours()
            * MIN_IN_HOURS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub training: Training,
    /// Bassenglengde i meter
    pub length_pool: u32,
    /// Antall ganger bassenget er krysset
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(
        training_type: impl Into<String>,
        action: u32,
        duration: Duration,
        weight: f64,
        length_pool: u32,
        count_pool: u32,
    ) -> Self {
        Self {
            training: Training::new(training_type, action, SWIMMING_LEN_STEP, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl CaloriesCalculator for Swimming {
    fn training(&self) -> &Training {
        &self.training
    }

    // distance() er bevisst den generiske (tak * taklengde), mens farten bruker bassenget.

    /// bassenglengde * kryssinger / m_per_km / timer
    fn mean_speed(&self) -> f64 {
        let t = &self.training;
        let hours = t.duration_hours();
        if hours == 0.0 {
            return division_by_zero(&t.training_type, "mean speed");
        }
        f64::from(self.length_pool) * f64::from(self.count_pool) / M_IN_KM / hours
    }

    /// (snittfart + 1.1) * 2 * vekt * timer
    fn calories(&self) -> f64 {
        let t = &self.training;
        (self.mean_speed() + SWIMMING_CALORIES_MEAN_SPEED_SHIFT)
            * SWIMMING_CALORIES_WEIGHT_MULTIPLIER
            * t.weight
            * t.duration_hours()
    }
}

/// Én økt av vilkårlig type, for lister og JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn CaloriesCalculator {
        match self {
            Self::Running(r) => r,
            Self::Walking(w) => w,
            Self::Swimming(s) => s,
        }
    }
}

impl CaloriesCalculator for Workout {
    fn training(&self) -> &Training {
        self.inner().training()
    }

    fn calories(&self) -> f64 {
        self.inner().calories()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn training_info(&self) -> crate::report::TrainingReport {
        self.inner().training_info()
    }
}

impl From<Running> for Workout {
    fn from(r: Running) -> Self {
        Self::Running(r)
    }
}

impl From<Walking> for Workout {
    fn from(w: Walking) -> Self {
        Self::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(s: Swimming) -> Self {
        Self::Swimming(s)
    }
}
