//! Mandl–Volek correlation table: fhv → dimensionless critical time t_cd.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TableError, TableResult};
use crate::fhv_tcd_data::FHV_TCD;
use crate::interp;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FhvTcdEntry {
    pub fhv: f64,
    pub tcd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TcdLookup {
    pub tcd: f64,
    pub interpolated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FhvTcdEntry>", into = "Vec<FhvTcdEntry>")]
pub struct FhvTcdTable {
    entries: Cow<'static, [FhvTcdEntry]>,
}

impl FhvTcdTable {
    pub const FHV_TOLERANCE: f64 = 1e-4;

    const NAME: &'static str = "fhv_tcd";

    pub fn standard() -> Self {
        Self {
            entries: Cow::Borrowed(FHV_TCD),
        }
    }

    pub fn from_entries(entries: Vec<FhvTcdEntry>) -> TableResult<Self> {
        interp::validate_keys(Self::NAME, "fhv", entries.iter().map(|e| e.fhv))?;
        interp::validate_finite(Self::NAME, entries.iter().map(|e| e.tcd))?;
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    pub fn entries(&self) -> &[FhvTcdEntry] {
        &self.entries
    }

    pub fn fhv_range(&self) -> (f64, f64) {
        let rows = self.entries();
        (rows[0].fhv, rows[rows.len() - 1].fhv)
    }

    pub fn tcd_by_fhv(&self, fhv: f64) -> TcdLookup {
        let rows = self.entries();
        let bracket = interp::locate(rows, |e| e.fhv, fhv, Self::FHV_TOLERANCE);
        if bracket.is_clamped() {
            let (min, max) = self.fhv_range();
            warn!(fhv, min, max, "fhv outside correlation range; clamped to boundary row");
        }
        TcdLookup {
            tcd: interp::resolve(rows, bracket, |e| e.tcd),
            interpolated: bracket.is_interpolated(),
        }
    }
}

impl TryFrom<Vec<FhvTcdEntry>> for FhvTcdTable {
    type Error = TableError;

    fn try_from(entries: Vec<FhvTcdEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<FhvTcdTable> for Vec<FhvTcdEntry> {
    fn from(table: FhvTcdTable) -> Self {
        table.entries.into_owned()
    }
}

impl Default for FhvTcdTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_well_formed() {
        let table = FhvTcdTable::from_entries(FhvTcdTable::standard().entries().to_vec()).unwrap();
        for pair in table.entries().windows(2) {
            assert!(pair[1].tcd > pair[0].tcd);
        }
    }

    #[test]
    fn exact_fhv_returns_stored_tcd() {
        let hit = FhvTcdTable::standard().tcd_by_fhv(0.572416);
        assert!(!hit.interpolated);
        assert_eq!(hit.tcd, 1.0);
    }

    #[test]
    fn interior_fhv_interpolates() {
        let hit = FhvTcdTable::standard().tcd_by_fhv(0.55054);
        assert!(hit.interpolated);
        assert!(hit.tcd > 0.8 && hit.tcd < 0.9);
        assert!((hit.tcd - 0.85417).abs() < 1e-3);
    }

    #[test]
    fn outside_range_clamps() {
        let table = FhvTcdTable::standard();
        assert_eq!(table.tcd_by_fhv(-0.5).tcd, 0.0);
        let top = table.tcd_by_fhv(0.99);
        assert_eq!(top.tcd, 100.0);
        assert!(!top.interpolated);
    }
}
