//! Preset validation: presence, physical ranges and rate cases.

use crate::field_usage::{FieldRange, field_range};
use crate::schema::{CommonDataDef, Preset, PresetData};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("Preset has no steam rate cases")]
    NoCases,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_preset(preset: &Preset) -> Result<(), ValidationError> {
    if preset.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: preset.version,
        });
    }
    validate_preset_data(&preset.data)
}

/// Every common-data field present and in range, and at least one valid case.
pub fn validate_preset_data(data: &PresetData) -> Result<(), ValidationError> {
    validate_common_data(&data.common)?;

    if data.cases.is_empty() {
        return Err(ValidationError::NoCases);
    }
    for (i, case) in data.cases.iter().enumerate() {
        check_positive(format!("cases[{i}].rateBblPerDay"), case.rate_bbl_per_day)?;
        if let Some(tons) = case.rate_tons_per_day {
            check_positive(format!("cases[{i}].rateTonsPerDay"), tons)?;
        }
    }
    Ok(())
}

pub fn validate_common_data(common: &CommonDataDef) -> Result<(), ValidationError> {
    for field in CommonDataDef::KEYS {
        let value = common
            .get(field)
            .ok_or(ValidationError::MissingField { field })?;
        let range = field_range(field).unwrap_or(FieldRange::Any);
        check_range(field, value, range)?;
    }
    Ok(())
}

fn check_range(field: &str, value: f64, range: FieldRange) -> Result<(), ValidationError> {
    let invalid = |reason| ValidationError::InvalidValue {
        field: field.to_string(),
        value,
        reason,
    };
    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }
    match range {
        FieldRange::Fraction if !(0.0..=1.0).contains(&value) => Err(invalid("must be in [0, 1]")),
        FieldRange::Positive if value <= 0.0 => Err(invalid("must be positive")),
        _ => Ok(()),
    }
}

fn check_positive(field: String, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        })
    }
}
