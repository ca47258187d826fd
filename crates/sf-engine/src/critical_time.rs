//! Mandl–Volek critical time.
//!
//! The primary path computes fhv directly from the steam enthalpies and reads
//! t_cd from the correlation table. Bisection on G1 is kept as a diagnostic
//! (`cross_check`); it never feeds the reported result.

use serde::Serialize;
use sf_core::{DAYS_PER_YEAR, HOURS_PER_DAY, guarded_div, relative_error};
use sf_tables::{ReferenceTables, steam_enthalpy};
use tracing::warn;

use crate::common::CommonData;
use crate::special::g1;
use crate::thermal_efficiency::time_scale_factor;

/// Upper end of the t_cd search interval.
pub const TCD_MAX: f64 = 100.0;
pub const BISECTION_TOLERANCE: f64 = 1e-6;
pub const BISECTION_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalTimeResult {
    pub critical_time_years: f64,
    pub critical_time_days: f64,
    pub critical_time_hours: f64,
    /// 1 − f_sd·L_v / H_s,eff
    pub g1_value: f64,
    pub fhv: f64,
    pub tcd_from_table: f64,
    pub alpha2: f64,
    /// Hours → t_cd factor using net thickness.
    pub factor: f64,
    /// Effective steam enthalpy H_s − h_res, Btu/lb
    pub steam_enthalpy_effective: f64,
    /// fhv fell between two correlation rows.
    pub interpolation_used: bool,
}

/// Critical time for `common`. Independent of injection rate.
pub fn critical_time(common: &CommonData, tables: &ReferenceTables) -> CriticalTimeResult {
    let alpha2 = common.alpha2();

    let at_pressure = tables.steam.by_pressure(common.ps);
    let h_liquid = at_pressure.hf;
    let h_vapor = at_pressure.hg;
    let hs = steam_enthalpy(common.fsd, h_liquid, h_vapor);
    let h_res = tables.steam.by_temperature(common.tr).hf;
    let hs_eff = hs - h_res;

    let g1_value = if hs_eff > 0.0 {
        1.0 - guarded_div(common.fsd * common.lv, hs_eff)
    } else {
        0.0
    };
    let fhv = guarded_div(common.fsd * (h_vapor - h_liquid), hs_eff);

    let lookup = tables.fhv_tcd.tcd_by_fhv(fhv);

    let factor = time_scale_factor(common.rho1_c1, common.rho2_c2, alpha2, common.zn);
    let hours = guarded_div(lookup.tcd, factor);
    let days = hours / HOURS_PER_DAY;

    CriticalTimeResult {
        critical_time_years: days / DAYS_PER_YEAR,
        critical_time_days: days,
        critical_time_hours: hours,
        g1_value,
        fhv,
        tcd_from_table: lookup.tcd,
        alpha2,
        factor,
        steam_enthalpy_effective: hs_eff,
        interpolation_used: lookup.interpolated,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bisection {
    pub tcd: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Solve G1(t_cd) = `target` on [0, 100].
///
/// A target at or below 0 is the zeroed degenerate G1 and returns 0; a
/// target at or above 1 returns the top of the interval.
pub fn solve_tcd_bisection(target: f64) -> Bisection {
    if target <= 0.0 {
        return Bisection {
            tcd: 0.0,
            iterations: 0,
            converged: true,
        };
    }
    if target >= 1.0 {
        return Bisection {
            tcd: TCD_MAX,
            iterations: 0,
            converged: true,
        };
    }

    let (mut lo, mut hi) = (0.0_f64, TCD_MAX);
    for iter in 1..=BISECTION_MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if g1(mid) > target {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < BISECTION_TOLERANCE {
            return Bisection {
                tcd: 0.5 * (lo + hi),
                iterations: iter,
                converged: true,
            };
        }
    }

    warn!(target, lo, hi, "G1 bisection did not converge");
    Bisection {
        tcd: 0.5 * (lo + hi),
        iterations: BISECTION_MAX_ITERATIONS,
        converged: false,
    }
}

/// Agreement between the table path and the bisection path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalTimeCrossCheck {
    pub tcd_from_table: f64,
    pub tcd_bisection: f64,
    /// 1 − G1(t_cd bisection), the fhv implied by the bisection root.
    pub fhv_from_bisection: f64,
    /// t_cd read from the table at `fhv_from_bisection`.
    pub tcd_table_at_bisection_fhv: f64,
    pub relative_difference: f64,
    pub bisection: Bisection,
}

pub fn cross_check(result: &CriticalTimeResult, tables: &ReferenceTables) -> CriticalTimeCrossCheck {
    let bisection = solve_tcd_bisection(result.g1_value);
    let fhv_from_bisection = 1.0 - g1(bisection.tcd);
    let via_table = tables.fhv_tcd.tcd_by_fhv(fhv_from_bisection);
    CriticalTimeCrossCheck {
        tcd_from_table: result.tcd_from_table,
        tcd_bisection: bisection.tcd,
        fhv_from_bisection,
        tcd_table_at_bisection_fhv: via_table.tcd,
        relative_difference: relative_error(bisection.tcd, result.tcd_from_table),
        bisection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serigado;

    #[test]
    fn serigado_critical_time() {
        let r = critical_time(&serigado(), &ReferenceTables::standard());
        assert!((r.g1_value - 0.449_827).abs() < 1e-5);
        assert!((r.fhv - 0.550_543).abs() < 1e-5);
        assert!(r.interpolation_used);
        assert!((r.tcd_from_table - 0.854_168).abs() < 1e-5);
        assert!((r.factor - 2.968_46e-5).abs() < 1e-9);
        assert!((r.critical_time_hours - 28_774.79).abs() < 0.5);
        assert!((r.critical_time_days - r.critical_time_hours / 24.0).abs() < 1e-9);
        assert!((r.critical_time_years - 3.284_79).abs() < 1e-4);
        assert!((r.alpha2 - 1.2 / 33.0).abs() < 1e-15);
    }

    #[test]
    fn uses_net_thickness() {
        let tables = ReferenceTables::standard();
        let base = critical_time(&serigado(), &tables);
        let mut thick = serigado();
        thick.zn *= 2.0;
        let r = critical_time(&thick, &tables);
        assert!((r.critical_time_hours - 4.0 * base.critical_time_hours).abs() < 1e-6);

        let mut gross = serigado();
        gross.zt *= 2.0;
        assert_eq!(critical_time(&gross, &tables), base);
    }

    #[test]
    fn non_positive_effective_enthalpy_zeroes_g1_and_fhv() {
        let mut common = serigado();
        common.fsd = 0.0;
        common.ps = 0.5;
        common.tr = 600.0;
        let r = critical_time(&common, &ReferenceTables::standard());
        assert!(r.steam_enthalpy_effective <= 0.0);
        assert_eq!(r.g1_value, 0.0);
        assert_eq!(r.fhv, 0.0);
        assert_eq!(r.tcd_from_table, 0.0);
        assert_eq!(r.critical_time_hours, 0.0);
    }

    #[test]
    fn degenerate_factor_gives_zero_time() {
        let mut common = serigado();
        common.k2 = 0.0;
        let r = critical_time(&common, &ReferenceTables::standard());
        assert_eq!(r.factor, 0.0);
        assert_eq!(r.critical_time_hours, 0.0);
        assert_eq!(r.critical_time_years, 0.0);
    }

    #[test]
    fn bisection_bounds() {
        assert_eq!(solve_tcd_bisection(0.0).tcd, 0.0);
        assert_eq!(solve_tcd_bisection(-0.2).tcd, 0.0);
        assert_eq!(solve_tcd_bisection(1.0).tcd, TCD_MAX);
        assert_eq!(solve_tcd_bisection(1.5).tcd, TCD_MAX);
        assert_eq!(solve_tcd_bisection(0.0).iterations, 0);
    }

    #[test]
    fn bisection_inverts_g1() {
        for tcd in [0.05, 0.85, 3.0, 40.0] {
            let b = solve_tcd_bisection(g1(tcd));
            assert!(b.converged);
            assert!(b.iterations <= BISECTION_MAX_ITERATIONS);
            assert!((b.tcd - tcd).abs() < 1e-5, "tcd={tcd} got {}", b.tcd);
        }
    }

    #[test]
    fn table_and_bisection_agree_for_serigado() {
        let tables = ReferenceTables::standard();
        let r = critical_time(&serigado(), &tables);
        let check = cross_check(&r, &tables);
        assert!((check.tcd_bisection - 0.850_366).abs() < 1e-5);
        assert!(check.relative_difference < 0.01);
        assert!((check.tcd_table_at_bisection_fhv - check.tcd_bisection).abs() < 0.01);
    }
}
