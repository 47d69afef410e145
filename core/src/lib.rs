pub mod cli;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod storage;
pub mod training;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use dispatch::{parse_packages_json, read_package, read_packages_json, Package, WorkoutCode};
pub use error::WorkoutError;
pub use models::{Running, SportsWalking, Swimming, Workout};
pub use storage::load_packages;
pub use training::Training;
pub use types::WorkoutSummary;
