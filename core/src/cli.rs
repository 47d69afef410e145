use log::debug;

use crate::dispatch::Package;
use crate::error::WorkoutError;
use crate::types::WorkoutSummary;

/// Innebygde demo-pakker, kjøres i denne rekkefølgen.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn summarize_all(packages: &[Package]) -> Result<Vec<WorkoutSummary>, WorkoutError> {
    packages
        .iter()
        .map(|p| -> Result<WorkoutSummary, WorkoutError> {
            let summary = p.read()?.show_training_info();
            debug!("{} summary: {summary:?}", p.workout_type);
            Ok(summary)
        })
        .collect()
}

pub fn report_lines(packages: &[Package]) -> Result<Vec<String>, WorkoutError> {
    Ok(summarize_all(packages)?
        .iter()
        .map(WorkoutSummary::get_message)
        .collect())
}

/// Skriver én linje per pakke til stdout.
pub fn print_report(packages: &[Package]) -> Result<(), WorkoutError> {
    for line in report_lines(packages)? {
        println!("{line}");
    }
    Ok(())
}
