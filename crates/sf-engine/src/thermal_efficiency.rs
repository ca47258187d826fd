//! Myhill–Stegemeier thermal efficiency.

use serde::Serialize;
use sf_core::guarded_div;

use crate::common::CommonData;
use crate::special::g_td;

/// 4·(M2/M1)²·α2/h², the factor converting hours to dimensionless time for
/// a layer of thickness `h`.
pub fn time_scale_factor(m1: f64, m2: f64, alpha2: f64, h: f64) -> f64 {
    let ratio = m2 / m1;
    4.0 * ratio * ratio * (alpha2 / (h * h))
}

/// t_d = 4·(M2/M1)²·(α2/h²)·t.
pub fn dimensionless_time(m1: f64, m2: f64, alpha2: f64, h: f64, t_hours: f64) -> f64 {
    time_scale_factor(m1, m2, alpha2, h) * t_hours
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalEfficiency {
    pub t_dimensionless: f64,
    pub g_td: f64,
    /// E_t = G(t_d)/t_d
    pub efficiency: f64,
}

/// Thermal efficiency over the injection period, using gross thickness z_t.
///
/// Values already computed upstream are used as given.
pub fn thermal_efficiency(
    common: &CommonData,
    t_dimensionless: Option<f64>,
    g: Option<f64>,
) -> ThermalEfficiency {
    let td = t_dimensionless.unwrap_or_else(|| {
        dimensionless_time(
            common.rho1_c1,
            common.rho2_c2,
            common.alpha2(),
            common.zt,
            common.injection_hours(),
        )
    });
    let g = g.unwrap_or_else(|| g_td(td));
    ThermalEfficiency {
        t_dimensionless: td,
        g_td: g,
        efficiency: guarded_div(g, td),
    }
}
