//! Loader for the controller RON file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::validation::validate_controller_file;
use crate::movement::ControllerTuning;

/// Location of the controller tunables, relative to the working directory.
pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate controller tunables from RON source.
/// `file_name` is only used for error messages.
pub fn parse_controller_file(
    contents: &str,
    file_name: &str,
) -> Result<ControllerFile, ContentLoadError> {
    let file: ControllerFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let errors = validate_controller_file(&file);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid controller config {}: {}", file_name, e);
        }
        return Err(ContentLoadError {
            file: file_name.to_string(),
            message: errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        });
    }

    Ok(file)
}

/// Read, parse, and validate a controller file from disk.
pub fn load_controller_file(path: &Path) -> Result<ControllerFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_file(&contents, &file_name)
}

/// Startup system: installs `ControllerTuning` or aborts startup.
/// Bad configuration is fatal; there is no runtime fallback to defaults.
pub fn load_controller_config(mut commands: Commands) -> Result {
    let file = load_controller_file(Path::new(CONTROLLER_CONFIG_PATH)).inspect_err(|e| {
        error!("{}", e);
    })?;

    let tuning = ControllerTuning::from(&file.controller);
    info!(
        "Loaded controller config v{}: move_speed={}, jump_power={}, coyote={}s, cane_force={}",
        file.schema_version,
        tuning.move_speed,
        tuning.jump_power,
        tuning.coyote_duration,
        tuning.cane_jump_force
    );

    commands.insert_resource(tuning);
    Ok(())
}
