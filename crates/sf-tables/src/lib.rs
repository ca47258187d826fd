//! sf-tables: static reference datasets for the steamflood engine.
//!
//! Provides:
//! - Saturated-steam properties (hf, hfg, hg) looked up by pressure or temperature
//! - The Mandl–Volek fhv → t_cd correlation
//! - A shared clamped linear-interpolation contract (`interp`)
//!
//! Tables are immutable once built. The standard datasets borrow `'static`
//! data; custom datasets are validated on construction (non-empty, finite,
//! strictly increasing keys) and then behave identically.

pub mod error;
pub mod fhv_tcd;
pub mod interp;
pub mod steam;

mod fhv_tcd_data;
mod steam_data;

pub use error::{TableError, TableResult};
pub use fhv_tcd::{FhvTcdEntry, FhvTcdTable, TcdLookup};
pub use interp::{Bracket, lerp, locate, resolve};
pub use steam::{SaturatedSteamEntry, SteamProperties, SteamTable, steam_enthalpy};

/// Both reference datasets the engine reads from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    pub steam: SteamTable,
    pub fhv_tcd: FhvTcdTable,
}

impl ReferenceTables {
    pub fn standard() -> Self {
        Self {
            steam: SteamTable::standard(),
            fhv_tcd: FhvTcdTable::standard(),
        }
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}
