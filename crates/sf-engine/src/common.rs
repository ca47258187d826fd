//! Engine input records.

use serde::{Deserialize, Serialize};
use sf_core::bbl_per_day_to_metric_tons_per_day;

use crate::error::{EngineError, EngineResult};

/// Reservoir, fluid and process parameters shared by every rate case.
///
/// Units are oilfield units: °F, psia, ft, Btu/lb, Btu/(ft³·°F),
/// Btu/(ft·h·°F), lb/ft³. A field that was never supplied is carried as NaN
/// and rejected by the pipeline when it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommonData {
    /// Steam generator efficiency E_b
    pub eb: f64,
    /// Boiler feed-water temperature T_b
    pub tb: f64,
    /// Steam temperature T_s
    pub ts: f64,
    /// Original reservoir temperature T_r
    pub tr: f64,
    /// Steam injection pressure P_s
    pub ps: f64,
    /// Thermal conductivity of the adjacent layers K_2
    pub k2: f64,
    /// Volumetric heat capacity of the steam zone (M1)
    pub rho1_c1: f64,
    /// Volumetric heat capacity of the adjacent layers (M2)
    pub rho2_c2: f64,
    /// Injection period, years
    pub t_years: f64,
    /// Initial oil saturation
    pub so: f64,
    /// Residual oil saturation in the steam zone
    pub sor: f64,
    /// Oil specific gravity
    pub gamma_o: f64,
    /// Porosity
    pub phi: f64,
    /// Net thickness
    pub zn: f64,
    /// Gross thickness
    pub zt: f64,
    /// Steam quality at the sandface
    pub fsd: f64,
    /// Steam quality at the boiler outlet
    pub fsb: f64,
    /// Latent heat of vaporization at T_s
    pub lv: f64,
    /// Water density
    pub rho_w: f64,
    /// Water enthalpy at T_s
    pub cw_ts: f64,
    /// Water enthalpy at T_r
    pub cw_tr: f64,
    /// Water enthalpy at T_b
    pub cw_tb: f64,
    /// Reference injected pore-volume fraction
    pub f_pv_ref: f64,
}

impl CommonData {
    /// α2 = K2 / ρ2C2, thermal diffusivity of the adjacent layers, ft²/h.
    pub fn alpha2(&self) -> f64 {
        self.k2 / self.rho2_c2
    }

    pub fn injection_hours(&self) -> f64 {
        sf_core::years_to_hours(self.t_years)
    }

    /// Fail with [`EngineError::MissingInput`] on the first absent field.
    pub fn require(&self, fields: &[(&'static str, f64)]) -> EngineResult<()> {
        for &(field, value) in fields {
            if !value.is_finite() {
                return Err(EngineError::MissingInput { field });
            }
        }
        Ok(())
    }
}

/// One injection-rate scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamRateCase {
    /// Cold-water-equivalent rate, bbl/day
    pub rate_bbl_per_day: f64,
    /// Same rate in metric tons/day, when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_tons_per_day: Option<f64>,
}

impl SteamRateCase {
    pub fn from_bbl_per_day(rate_bbl_per_day: f64) -> Self {
        Self {
            rate_bbl_per_day,
            rate_tons_per_day: None,
        }
    }

    /// The supplied t/d rate, or the one derived from bbl/d.
    pub fn tons_per_day(&self) -> f64 {
        self.rate_tons_per_day
            .unwrap_or_else(|| bbl_per_day_to_metric_tons_per_day(self.rate_bbl_per_day))
    }
}
