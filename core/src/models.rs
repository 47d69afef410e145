use serde::{Deserialize, Serialize};

use crate::dispatch::WorkoutCode;
use crate::training::{Training, MIN_IN_HOUR, M_IN_KM};
use crate::types::WorkoutSummary;

// Løp
const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

// Sportsgange
const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278; // km/t → m/s
const CM_IN_M: f64 = 100.0;

// Svømming
const CALORIES_SWIM_SHIFT: f64 = 1.1;
const CALORIES_SWIM_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub action: u32,   // antall skritt
    pub duration: f64, // timer
    pub weight: f64,   // kg
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self { action, duration, weight }
    }
}

impl Training for Running {
    const NAME: &'static str = "Running";

    fn action(&self) -> u32 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn get_spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub height: f64, // cm
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self { action, duration, weight, height }
    }
}

impl Training for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn action(&self) -> u32 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn get_spent_calories(&self) -> f64 {
        let speed_ms = self.get_mean_speed() * KMH_IN_MSEC;
        (CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_ms.powi(2) / (self.height / CM_IN_M)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight)
            * (self.duration * MIN_IN_HOUR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub action: u32,      // antall tak
    pub duration: f64,
    pub weight: f64,
    pub length_pool: f64, // meter
    pub count_pool: u32,  // antall bassenglengder
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self { action, duration, weight, length_pool, count_pool }
    }
}

impl Training for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn action(&self) -> u32 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    /// Fart fra bassenglengder, ikke fra antall tak.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + CALORIES_SWIM_SHIFT)
            * CALORIES_SWIM_MULTIPLIER
            * self.weight
            * self.duration
    }
}

/// Én økt etter dispatch – statisk valgt variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Run,
            Workout::SportsWalking(_) => WorkoutCode::Walk,
            Workout::Swimming(_) => WorkoutCode::Swim,
        }
    }

    pub fn get_distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_distance(),
            Workout::SportsWalking(w) => w.get_distance(),
            Workout::Swimming(w) => w.get_distance(),
        }
    }

    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_mean_speed(),
            Workout::SportsWalking(w) => w.get_mean_speed(),
            Workout::Swimming(w) => w.get_mean_speed(),
        }
    }

    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.get_spent_calories(),
            Workout::SportsWalking(w) => w.get_spent_calories(),
            Workout::Swimming(w) => w.get_spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> WorkoutSummary {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self { Workout::Running(w) }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self { Workout::SportsWalking(w) }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self { Workout::Swimming(w) }
}
