//! sf-project: preset documents, validation and input bookkeeping.

pub mod field_usage;
pub mod schema;
pub mod steam_rate;
pub mod validate;

use std::path::Path;

use sf_engine::{CommonData, SteamRateCase};
use sf_tables::{FhvTcdTable, SteamTable};
use tracing::debug;

pub use field_usage::{
    FieldCheck, FieldRange, FieldUsage, ModelCompleteness, ModelFieldCheck, ReportItem,
    check_model_completeness, common_data_field_usage, required_fields_for,
    required_fields_for_all_items, required_fields_for_item_a, validate_all_model_fields,
    validate_fields_for_calculation,
};
pub use schema::*;
pub use steam_rate::{SteamRateValidation, sync_steam_rate_units, validate_steam_rate};
pub use validate::{ValidationError, validate_common_data, validate_preset, validate_preset_data};

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown preset: {id}")]
    UnknownPreset { id: String },

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const BUILTIN_PRESETS: [&str; 1] = [include_str!("../presets/serigado-iv.yaml")];

pub fn load_yaml(path: &Path) -> ProjectResult<Preset> {
    let content = std::fs::read_to_string(path)?;
    let preset: Preset = serde_yaml::from_str(&content)?;
    validate_preset(&preset)?;
    Ok(preset)
}

pub fn save_yaml(path: &Path, preset: &Preset) -> ProjectResult<()> {
    validate_preset(preset)?;
    let content = serde_yaml::to_string(preset)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Preset> {
    let content = std::fs::read_to_string(path)?;
    let preset: Preset = serde_json::from_str(&content)?;
    validate_preset(&preset)?;
    Ok(preset)
}

pub fn save_json(path: &Path, preset: &Preset) -> ProjectResult<()> {
    validate_preset(preset)?;
    let content = serde_json::to_string_pretty(preset)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(FileFormat::Yaml)
            }
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Load and validate a preset, choosing the format from the extension.
pub fn load_preset(path: &Path) -> ProjectResult<Preset> {
    match FileFormat::from_path(path)? {
        FileFormat::Yaml => load_yaml(path),
        FileFormat::Json => load_json(path),
    }
}

pub fn save_preset(path: &Path, preset: &Preset) -> ProjectResult<()> {
    match FileFormat::from_path(path)? {
        FileFormat::Yaml => save_yaml(path, preset),
        FileFormat::Json => save_json(path, preset),
    }
}

/// Parse a preset without validating it, for inspecting incomplete documents.
pub fn read_preset(path: &Path) -> ProjectResult<Preset> {
    let content = std::fs::read_to_string(path)?;
    let preset = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(preset)
}

pub fn builtin_presets() -> ProjectResult<Vec<Preset>> {
    BUILTIN_PRESETS
        .iter()
        .map(|src| Ok(serde_yaml::from_str(src)?))
        .collect()
}

pub fn builtin_preset(id: &str) -> ProjectResult<Preset> {
    builtin_presets()?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProjectError::UnknownPreset { id: id.to_string() })
}

/// The preset flagged as default, or the first one.
pub fn default_preset() -> ProjectResult<Preset> {
    let presets = builtin_presets()?;
    let index = presets.iter().position(|p| p.is_default).unwrap_or(0);
    presets
        .into_iter()
        .nth(index)
        .ok_or_else(|| ProjectError::UnknownPreset {
            id: "default".to_string(),
        })
}

impl PresetData {
    /// Engine inputs for this preset.
    pub fn engine_inputs(&self) -> (CommonData, Vec<SteamRateCase>) {
        (self.common.to_common_data(), self.cases.clone())
    }

    /// Apply [`sync_steam_rate_units`] to every case.
    pub fn sync_rates(&mut self) {
        for case in &mut self.cases {
            let synced = sync_steam_rate_units(case);
            if synced != *case {
                debug!(
                    from_bbl = case.rate_bbl_per_day,
                    to_bbl = synced.rate_bbl_per_day,
                    "steam rate synchronised"
                );
            }
            *case = synced;
        }
    }
}

/// Load a saturated-steam table from a YAML or JSON list of rows.
pub fn load_steam_table(path: &Path) -> ProjectResult<SteamTable> {
    let content = std::fs::read_to_string(path)?;
    let table = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(table)
}

/// Load an fhv–t_cd table from a YAML or JSON list of rows.
pub fn load_fhv_tcd_table(path: &Path) -> ProjectResult<FhvTcdTable> {
    let content = std::fs::read_to_string(path)?;
    let table = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(table)
}
