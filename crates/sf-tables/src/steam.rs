//! Saturated-steam table: enthalpies at a given pressure or temperature.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TableError, TableResult};
use crate::interp::{self, Bracket};
use crate::steam_data::SATURATED_STEAM;

/// One row of the saturated-steam table (English units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturatedSteamEntry {
    /// Saturation temperature, °F
    pub temperature_f: f64,
    /// Saturation pressure, psia
    pub pressure_psia: f64,
    /// Saturated liquid enthalpy, Btu/lb
    pub hf: f64,
    /// Latent heat of vaporization, Btu/lb
    pub hfg: f64,
    /// Saturated vapor enthalpy, Btu/lb
    pub hg: f64,
}

/// Saturation properties returned by a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteamProperties {
    pub temperature_f: f64,
    pub pressure_psia: f64,
    pub hf: f64,
    pub hfg: f64,
    pub hg: f64,
    /// True only when the value came from between two rows.
    pub interpolated: bool,
}

/// Saturated-steam table ordered by temperature (and therefore pressure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SaturatedSteamEntry>", into = "Vec<SaturatedSteamEntry>")]
pub struct SteamTable {
    entries: Cow<'static, [SaturatedSteamEntry]>,
}

impl SteamTable {
    /// Exact-match window for pressure queries, psia.
    pub const PRESSURE_TOLERANCE: f64 = 1e-4;
    /// Exact-match window for temperature queries, °F.
    pub const TEMPERATURE_TOLERANCE: f64 = 1e-3;

    const NAME: &'static str = "saturated_steam";

    /// Built-in table, 32–640 °F.
    pub fn standard() -> Self {
        Self {
            entries: Cow::Borrowed(SATURATED_STEAM),
        }
    }

    /// Build a table from caller rows. Both key columns must be strictly increasing.
    pub fn from_entries(entries: Vec<SaturatedSteamEntry>) -> TableResult<Self> {
        interp::validate_keys(Self::NAME, "temperature_f", entries.iter().map(|e| e.temperature_f))?;
        interp::validate_keys(Self::NAME, "pressure_psia", entries.iter().map(|e| e.pressure_psia))?;
        interp::validate_finite(
            Self::NAME,
            entries.iter().map(|e| e.hf + e.hfg + e.hg),
        )?;
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    pub fn entries(&self) -> &[SaturatedSteamEntry] {
        &self.entries
    }

    /// (min, max) pressure covered, psia.
    pub fn pressure_range(&self) -> (f64, f64) {
        let rows = self.entries();
        (rows[0].pressure_psia, rows[rows.len() - 1].pressure_psia)
    }

    /// (min, max) temperature covered, °F.
    pub fn temperature_range(&self) -> (f64, f64) {
        let rows = self.entries();
        (rows[0].temperature_f, rows[rows.len() - 1].temperature_f)
    }

    /// Saturation properties at `pressure_psia`.
    pub fn by_pressure(&self, pressure_psia: f64) -> SteamProperties {
        let bracket = interp::locate(
            self.entries(),
            |e| e.pressure_psia,
            pressure_psia,
            Self::PRESSURE_TOLERANCE,
        );
        if bracket.is_clamped() {
            let (min, max) = self.pressure_range();
            warn!(
                pressure_psia,
                min, max, "steam table pressure outside range; clamped to boundary row"
            );
        }
        self.properties(bracket)
    }

    /// Saturation properties at `temperature_f`.
    pub fn by_temperature(&self, temperature_f: f64) -> SteamProperties {
        let bracket = interp::locate(
            self.entries(),
            |e| e.temperature_f,
            temperature_f,
            Self::TEMPERATURE_TOLERANCE,
        );
        if bracket.is_clamped() {
            let (min, max) = self.temperature_range();
            warn!(
                temperature_f,
                min, max, "steam table temperature outside range; clamped to boundary row"
            );
        }
        self.properties(bracket)
    }

    /// Wet-steam enthalpy at `temperature_f` and vapor mass fraction `quality`: hf + q·hfg.
    pub fn enthalpy_at_temperature(&self, temperature_f: f64, quality: f64) -> f64 {
        let p = self.by_temperature(temperature_f);
        p.hf + quality * p.hfg
    }

    fn properties(&self, bracket: Bracket) -> SteamProperties {
        let rows = self.entries();
        let col = |f: fn(&SaturatedSteamEntry) -> f64| interp::resolve(rows, bracket, f);
        SteamProperties {
            temperature_f: col(|e| e.temperature_f),
            pressure_psia: col(|e| e.pressure_psia),
            hf: col(|e| e.hf),
            hfg: col(|e| e.hfg),
            hg: col(|e| e.hg),
            interpolated: bracket.is_interpolated(),
        }
    }
}

impl TryFrom<Vec<SaturatedSteamEntry>> for SteamTable {
    type Error = TableError;

    fn try_from(entries: Vec<SaturatedSteamEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<SteamTable> for Vec<SaturatedSteamEntry> {
    fn from(table: SteamTable) -> Self {
        table.entries.into_owned()
    }
}

impl Default for SteamTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Wet-steam enthalpy from the saturated liquid and vapor enthalpies:
/// (1 − q)·H_L + q·H_v.
#[inline]
pub fn steam_enthalpy(quality: f64, h_liquid: f64, h_vapor: f64) -> f64 {
    (1.0 - quality) * h_liquid + quality * h_vapor
}
