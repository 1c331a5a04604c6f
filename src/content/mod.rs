//! Content domain: data-driven locomotion tuning loaded from RON.

mod loader;
mod validation;

pub use loader::{TUNING_SCHEMA_VERSION, TuningFile, TuningLoadError, load_tuning, parse_tuning};
pub use validation::{TuningValidationError, validate_tuning};

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::movement::LocomotionTuning;

/// Where the tuning file lives, relative to the working directory
#[derive(Resource, Debug, Clone)]
pub struct TuningSource {
    pub path: PathBuf,
}

impl Default for TuningSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/data/locomotion.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningSource>()
            .init_resource::<LocomotionTuning>()
            .add_systems(Startup, load_tuning_at_startup);
    }
}

/// Loads and validates the tuning file, keeping defaults on any failure.
pub fn load_validated_tuning(path: &Path) -> Option<LocomotionTuning> {
    let tuning = match load_tuning(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; keeping default locomotion tuning", e);
            return None;
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            error!("Locomotion tuning: {}", error);
        }
        warn!(
            "{} invalid value(s) in {}; keeping default locomotion tuning",
            errors.len(),
            path.display()
        );
        return None;
    }

    Some(tuning)
}

fn load_tuning_at_startup(source: Res<TuningSource>, mut tuning: ResMut<LocomotionTuning>) {
    if let Some(loaded) = load_validated_tuning(&source.path) {
        info!("Loaded locomotion tuning from {}", source.path.display());
        *tuning = loaded;
    }
}
