// core/src/training.rs
use crate::types::WorkoutSummary;

pub const M_IN_KM: f64 = 1000.0;     // meter per km
pub const MIN_IN_HOUR: f64 = 60.0;   // minutter per time
pub const LEN_STEP_DEFAULT: f64 = 0.65; // skrittlengde løp/gange (m)

/// Felles kontrakt for alle treningstyper.
///
/// Distanse og snittfart har standardformler basert på `LEN_STEP`;
/// kaloriformelen må hver type levere selv.
pub trait Training {
    /// Visningsnavn i rapporten.
    const NAME: &'static str;
    /// Distanse per handling (skritt/tak) i meter.
    const LEN_STEP: f64 = LEN_STEP_DEFAULT;

    fn action(&self) -> u32;
    /// Varighet i timer.
    fn duration(&self) -> f64;
    /// Vekt i kg.
    fn weight(&self) -> f64;

    /// Distanse i km.
    fn get_distance(&self) -> f64 {
        f64::from(self.action()) * Self::LEN_STEP / M_IN_KM
    }

    /// Snittfart i km/t. Varighet 0 gir inf/NaN, ingen sjekk.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.duration()
    }

    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> WorkoutSummary {
        WorkoutSummary {
            training_type: Self::NAME.to_string(),
            duration: self.duration(),
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}
