use std::fmt;

use serde::{Deserialize, Serialize};

/// Ferdig beregnet oppsummering av én treningsøkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub training_type: String,
    pub duration: f64, // timer
    pub distance: f64, // km
    pub speed: f64,    // km/t
    pub calories: f64, // kcal
}

impl WorkoutSummary {
    /// Meldingen som skrives ut per økt, alle tall med tre desimaler.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
