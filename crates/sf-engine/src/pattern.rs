//! Injection pattern sizing from cold-water-equivalent volumes.
//!
//! The first case fixes the pattern area through the reference pore-volume
//! fraction; every case is then expressed as the pore-volume fraction it
//! injects into that pattern.

use serde::Serialize;
use sf_core::{FT3_PER_BBL, ensure_positive, guarded_div, years_to_days};

use crate::common::{CommonData, SteamRateCase};
use crate::error::{EngineError, EngineResult};

pub const FT2_PER_ACRE: f64 = 43_560.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseInjection {
    pub case_name: String,
    /// Cold-water-equivalent volume injected over the period, bbl
    pub cwe_volume_bbl: f64,
    pub cwe_volume_ft3: f64,
    /// Injected pore volumes in the reference pattern
    pub pore_volume_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSummary {
    pub pattern_area_ft2: f64,
    pub pattern_area_acres: f64,
    pub cases: Vec<CaseInjection>,
}

pub fn pattern_summary(common: &CommonData, cases: &[SteamRateCase]) -> EngineResult<PatternSummary> {
    common.require(&[
        ("tYears", common.t_years),
        ("fPVRef", common.f_pv_ref),
        ("zn", common.zn),
        ("phi", common.phi),
    ])?;
    let reference = cases.first().ok_or(EngineError::EmptyCases)?;
    for case in cases {
        ensure_positive(case.rate_bbl_per_day, "rate_bbl_per_day")?;
    }

    let days = years_to_days(common.t_years);
    let volume_ft3 = |case: &SteamRateCase| case.rate_bbl_per_day * days * FT3_PER_BBL;

    let pattern_area = guarded_div(volume_ft3(reference), common.f_pv_ref * common.zn * common.phi);
    let pore_volume = pattern_area * common.zn * common.phi;

    let cases = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let ft3 = volume_ft3(case);
            CaseInjection {
                case_name: format!("Case {}", i + 1),
                cwe_volume_bbl: ft3 / FT3_PER_BBL,
                cwe_volume_ft3: ft3,
                pore_volume_fraction: guarded_div(ft3, pore_volume),
            }
        })
        .collect();

    Ok(PatternSummary {
        pattern_area_ft2: pattern_area,
        pattern_area_acres: pattern_area / FT2_PER_ACRE,
        cases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serigado;

    #[test]
    fn reference_case_reproduces_reference_fraction() {
        let cases = [
            SteamRateCase::from_bbl_per_day(565.0),
            SteamRateCase::from_bbl_per_day(755.0),
        ];
        let summary = pattern_summary(&serigado(), &cases).unwrap();

        assert!((summary.cases[0].cwe_volume_bbl - 565.0 * 912.5).abs() < 1e-6);
        assert!((summary.cases[0].pore_volume_fraction - 0.54).abs() < 1e-12);
        assert!((summary.cases[1].pore_volume_fraction - 0.54 * 755.0 / 565.0).abs() < 1e-12);

        let expected_area = 565.0 * 912.5 * 5.615 / (0.54 * 66.0 * 0.24);
        assert!((summary.pattern_area_ft2 - expected_area).abs() < 1e-6);
        assert!((summary.pattern_area_acres - expected_area / 43_560.0).abs() < 1e-9);
    }

    #[test]
    fn empty_cases_rejected() {
        assert_eq!(pattern_summary(&serigado(), &[]), Err(EngineError::EmptyCases));
    }

    #[test]
    fn zero_reference_fraction_degrades_to_zero() {
        let mut common = serigado();
        common.f_pv_ref = 0.0;
        let summary = pattern_summary(&common, &[SteamRateCase::from_bbl_per_day(565.0)]).unwrap();
        assert_eq!(summary.pattern_area_ft2, 0.0);
        assert_eq!(summary.cases[0].pore_volume_fraction, 0.0);
    }
}
