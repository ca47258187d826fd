//! Per-case pipeline: enthalpies → heat rate → heated area → energy split →
//! steam volume → oil ratios → energy balance.

use rayon::prelude::*;
use serde::Serialize;
use sf_core::{FT3_PER_BBL, HOURS_PER_DAY, LB_PER_BBL_WATER, ensure_positive, guarded_div};
use sf_tables::{ReferenceTables, steam_enthalpy};
use tracing::{debug, info};

use crate::common::{CommonData, SteamRateCase};
use crate::critical_time::{CriticalTimeResult, critical_time};
use crate::error::{EngineError, EngineResult};
use crate::special::g_td;
use crate::thermal_efficiency::{dimensionless_time, thermal_efficiency};

/// Whether each steam-table lookup had to interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterpolationFlags {
    /// H_L / H_v at injection pressure
    pub pressure: bool,
    /// h_res at reservoir temperature
    pub temperature: bool,
}

/// Everything computed for one rate case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaCalculationResult {
    pub case_name: String,
    pub rate_bbl_per_day: f64,
    pub rate_tons_per_day: f64,

    // Enthalpies, Btu/lb
    pub h_liquid: f64,
    pub h_vapor: f64,
    pub enthalpy_steam: f64,
    pub enthalpy_reservoir_from_table: f64,
    /// H_s − h_res, heat carried per pound injected
    pub ho_enthalpy: f64,

    pub delta_t: f64,
    pub mass_rate_lb_per_day: f64,
    pub mass_rate_lb_per_hour: f64,
    pub heat_rate_btu_per_hour: f64,
    pub injection_hours: f64,

    pub alpha2: f64,
    pub t_dimensionless: f64,
    pub gtd: f64,

    // A
    pub area_heated_ft2: f64,
    // B
    pub critical_time: CriticalTimeResult,
    // C
    pub thermal_efficiency: f64,
    // D: heat injected, retained and lost to adjacent layers
    pub total_heat_btu: f64,
    pub stored_heat_btu: f64,
    pub lost_heat_btu: f64,
    // E
    pub steam_volume_required_ft3: f64,
    pub steam_volume_required_bbl: f64,
    // F
    pub oil_produced_np_bbl: f64,
    pub oil_steam_ratio_fos: f64,
    // G
    pub equivalent_oil_steam_ratio_fose: f64,
    // H
    pub oil_enthalpy_btu_per_bbl: f64,
    pub oil_energy_btu: f64,
    pub boiler_energy_btu: f64,
    pub energy_balance_index: f64,

    pub interpolation_used: InterpolationFlags,
}

impl AreaCalculationResult {
    /// Q_stored + Q_lost − Q_total; zero up to rounding.
    pub fn heat_balance_residual(&self) -> f64 {
        self.stored_heat_btu + self.lost_heat_btu - self.total_heat_btu
    }
}

/// Fields the heated-area calculation cannot do without.
fn required_fields(common: &CommonData) -> [(&'static str, f64); 9] {
    [
        ("tYears", common.t_years),
        ("Ts", common.ts),
        ("Tr", common.tr),
        ("zt", common.zt),
        ("rho1C1", common.rho1_c1),
        ("Ps", common.ps),
        ("fsd", common.fsd),
        ("K2", common.k2),
        ("rho2C2", common.rho2_c2),
    ]
}

/// Oil enthalpy per barrel from specific gravity, Btu/bbl.
pub fn oil_enthalpy_per_bbl(gamma_o: f64) -> f64 {
    13.1 + 5600.0 * gamma_o
}

/// Run the pipeline for `case`; `index` is zero-based and only used for naming.
pub fn calculate_case(
    common: &CommonData,
    case: &SteamRateCase,
    index: usize,
    tables: &ReferenceTables,
) -> EngineResult<AreaCalculationResult> {
    common.require(&required_fields(common))?;
    ensure_positive(case.rate_bbl_per_day, "rate_bbl_per_day")?;

    let t_hours = common.injection_hours();
    let delta_t = common.ts - common.tr;

    let at_pressure = tables.steam.by_pressure(common.ps);
    let h_liquid = at_pressure.hf;
    let h_vapor = at_pressure.hg;
    let hs = steam_enthalpy(common.fsd, h_liquid, h_vapor);

    let at_reservoir = tables.steam.by_temperature(common.tr);
    let h_res = at_reservoir.hf;
    let ho_enthalpy = hs - h_res;

    let mass_rate_lb_per_day = case.rate_bbl_per_day * LB_PER_BBL_WATER;
    let mass_rate_lb_per_hour = mass_rate_lb_per_day / HOURS_PER_DAY;
    let heat_rate = mass_rate_lb_per_hour * ho_enthalpy;

    let m1 = common.rho1_c1;
    let m2 = common.rho2_c2;
    let alpha2 = common.alpha2();
    let td = dimensionless_time(m1, m2, alpha2, common.zt, t_hours);
    let gtd = g_td(td);
    let et = thermal_efficiency(common, Some(td), Some(gtd)).efficiency;

    let area = guarded_div(heat_rate * m1 * common.zt, 4.0 * alpha2 * m2 * m2 * delta_t) * gtd;

    let total_heat = heat_rate * t_hours;
    let stored_heat = et * total_heat;
    let lost_heat = total_heat - stored_heat;

    let enthalpy_bracket = (common.cw_ts - common.cw_tr) + common.fsd * common.lv;
    let steam_volume_ft3 = if et > 0.0 && enthalpy_bracket > 0.0 {
        (m1 * area * common.zt * delta_t) / (common.rho_w * enthalpy_bracket * et)
    } else {
        0.0
    };
    let steam_volume_bbl = steam_volume_ft3 / FT3_PER_BBL;

    let oil_produced = area * common.zn * common.phi * (common.so - common.sor) / FT3_PER_BBL;
    let fos = guarded_div(oil_produced, steam_volume_bbl);

    let boiler_bracket = (common.cw_ts - common.cw_tb) + common.fsb * common.lv;
    let fose = guarded_div(1000.0 * fos, boiler_bracket);

    let oil_enthalpy = oil_enthalpy_per_bbl(common.gamma_o);
    let oil_energy = oil_produced * oil_enthalpy;
    let boiler_energy = guarded_div(total_heat, common.eb);
    let energy_balance_index = guarded_div(oil_energy, boiler_energy);

    let critical = critical_time(common, tables);

    let case_name = format!("Case {}", index + 1);
    debug!(
        case = %case_name,
        rate_bbl_per_day = case.rate_bbl_per_day,
        area_ft2 = area,
        thermal_efficiency = et,
        critical_time_days = critical.critical_time_days,
        "steam rate case calculated"
    );

    Ok(AreaCalculationResult {
        case_name,
        rate_bbl_per_day: case.rate_bbl_per_day,
        rate_tons_per_day: case.tons_per_day(),
        h_liquid,
        h_vapor,
        enthalpy_steam: hs,
        enthalpy_reservoir_from_table: h_res,
        ho_enthalpy,
        delta_t,
        mass_rate_lb_per_day,
        mass_rate_lb_per_hour,
        heat_rate_btu_per_hour: heat_rate,
        injection_hours: t_hours,
        alpha2,
        t_dimensionless: td,
        gtd,
        area_heated_ft2: area,
        critical_time: critical,
        thermal_efficiency: et,
        total_heat_btu: total_heat,
        stored_heat_btu: stored_heat,
        lost_heat_btu: lost_heat,
        steam_volume_required_ft3: steam_volume_ft3,
        steam_volume_required_bbl: steam_volume_bbl,
        oil_produced_np_bbl: oil_produced,
        oil_steam_ratio_fos: fos,
        equivalent_oil_steam_ratio_fose: fose,
        oil_enthalpy_btu_per_bbl: oil_enthalpy,
        oil_energy_btu: oil_energy,
        boiler_energy_btu: boiler_energy,
        energy_balance_index,
        interpolation_used: InterpolationFlags {
            pressure: at_pressure.interpolated,
            temperature: at_reservoir.interpolated,
        },
    })
}

/// One result per case, in input order. Fails on an empty list or on the
/// first case that cannot be calculated.
pub fn calculate_all_cases(
    common: &CommonData,
    cases: &[SteamRateCase],
    tables: &ReferenceTables,
) -> EngineResult<Vec<AreaCalculationResult>> {
    if cases.is_empty() {
        return Err(EngineError::EmptyCases);
    }
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| calculate_case(common, case, i, tables))
        .collect()
}

/// Same contract as [`calculate_all_cases`], with cases spread over the rayon pool.
pub fn calculate_all_cases_parallel(
    common: &CommonData,
    cases: &[SteamRateCase],
    tables: &ReferenceTables,
) -> EngineResult<Vec<AreaCalculationResult>> {
    if cases.is_empty() {
        return Err(EngineError::EmptyCases);
    }
    info!(cases = cases.len(), "calculating steam rate cases in parallel");
    cases
        .par_iter()
        .enumerate()
        .map(|(i, case)| calculate_case(common, case, i, tables))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serigado;

    #[test]
    fn case_names_are_one_based() {
        let tables = ReferenceTables::standard();
        let cases = [
            SteamRateCase::from_bbl_per_day(565.0),
            SteamRateCase::from_bbl_per_day(755.0),
        ];
        let results = calculate_all_cases(&serigado(), &cases, &tables).unwrap();
        assert_eq!(results[0].case_name, "Case 1");
        assert_eq!(results[1].case_name, "Case 2");
    }

    #[test]
    fn tons_are_derived_when_absent() {
        let tables = ReferenceTables::standard();
        let r = calculate_case(&serigado(), &SteamRateCase::from_bbl_per_day(565.0), 0, &tables)
            .unwrap();
        assert!((r.rate_tons_per_day - 89.698).abs() < 1e-3);

        let given = SteamRateCase {
            rate_bbl_per_day: 565.0,
            rate_tons_per_day: Some(89.7),
        };
        let r = calculate_case(&serigado(), &given, 0, &tables).unwrap();
        assert_eq!(r.rate_tons_per_day, 89.7);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let tables = ReferenceTables::standard();
        let mut common = serigado();
        common.ps = f64::NAN;
        let err = calculate_case(&common, &SteamRateCase::from_bbl_per_day(565.0), 0, &tables)
            .unwrap_err();
        assert_eq!(err, EngineError::MissingInput { field: "Ps" });
    }

    #[test]
    fn optional_fields_do_not_block_area() {
        let tables = ReferenceTables::standard();
        let mut common = serigado();
        common.tb = f64::NAN;
        let r = calculate_case(&common, &SteamRateCase::from_bbl_per_day(565.0), 0, &tables)
            .unwrap();
        assert!(r.area_heated_ft2 > 0.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let tables = ReferenceTables::standard();
        let cases: Vec<_> = (1..=16)
            .map(|i| SteamRateCase::from_bbl_per_day(100.0 * i as f64))
            .collect();
        let seq = calculate_all_cases(&serigado(), &cases, &tables).unwrap();
        let par = calculate_all_cases_parallel(&serigado(), &cases, &tables).unwrap();
        assert_eq!(seq, par);
    }
}
