use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::WorkoutError;
use crate::models::{Running, SportsWalking, Swimming, Workout};

/// Tre-bokstavs kode fra sensorpakken. Kun eksakt match, store bokstaver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swim,
    Run,
    Walk,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [WorkoutCode::Swim, WorkoutCode::Run, WorkoutCode::Walk];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swim => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Walk => "WLK",
        }
    }

    /// Antall posisjonelle verdier varianten tar imot.
    pub fn arity(self) -> usize {
        match self {
            WorkoutCode::Run => 3,
            WorkoutCode::Walk => 4,
            WorkoutCode::Swim => 5,
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swim),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Walk),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }
}

/// Rå pakke slik den kommer fra sensoren: kode + posisjonelle verdier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "type")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self { workout_type: workout_type.into(), data: data.into() }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.workout_type, &self.data)
    }
}

fn to_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}

/// Velg riktig treningstype for koden og bygg den fra verdiene i deklarert rekkefølge.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let code = workout_type.parse::<WorkoutCode>().map_err(|e| {
        warn!("rejected workout package with code {workout_type:?}");
        e
    })?;

    if data.len() != code.arity() {
        return Err(WorkoutError::Arity {
            code: code.as_str().to_string(),
            expected: code.arity(),
            got: data.len(),
        });
    }

    let action = to_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match code {
        WorkoutCode::Run => Running::new(action, duration, weight).into(),
        WorkoutCode::Walk => SportsWalking::new(action, duration, weight, data[3]).into(),
        WorkoutCode::Swim => {
            let count_pool = to_count("count_pool", data[4])?;
            Swimming::new(action, duration, weight, data[3], count_pool).into()
        }
    };

    debug!("dispatched {code} package: {workout:?}");
    Ok(workout)
}

// Tuple-form: ["RUN", [15000, 1, 75]]
#[derive(Debug, Deserialize)]
struct PackageTuple(String, Vec<f64>);

// Prøv OBJECT først, deretter tuple
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Object(Package),
    Tuple(PackageTuple),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Object(p) => p,
            PackageIn::Tuple(PackageTuple(workout_type, data)) => Package { workout_type, data },
        }
    }
}

/// Les en JSON-liste med pakker (objekt- eller tuple-form). Feil peker på stien i JSON.
pub fn parse_packages_json(json: &str) -> Result<Vec<Package>, WorkoutError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let raw: Vec<PackageIn> = spte::deserialize(&mut de)
        .map_err(|e| WorkoutError::Json(format!("{} at {}", e.inner(), e.path())))?;
    de.end().map_err(|e| WorkoutError::Json(e.to_string()))?;
    Ok(raw.into_iter().map(Package::from).collect())
}

pub fn read_packages_json(json: &str) -> Result<Vec<Workout>, WorkoutError> {
    parse_packages_json(json)?.iter().map(Package::read).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_sensitive() {
        assert!("RUN".parse::<WorkoutCode>().is_ok());
        assert!("run".parse::<WorkoutCode>().is_err());
        assert!("RU".parse::<WorkoutCode>().is_err());
        assert!("RUNN".parse::<WorkoutCode>().is_err());
    }

    #[test]
    fn code_roundtrips_through_str() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.as_str().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn fractional_action_is_rejected() {
        let err = read_package("RUN", &[1.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidCount { field: "action", .. }));
    }

    #[test]
    fn negative_lap_count_is_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidCount { field: "count_pool", .. }));
    }
}
