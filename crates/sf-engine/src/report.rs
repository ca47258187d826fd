//! SI view of the headline results.

use serde::Serialize;
use sf_core::si;

use crate::area::AreaCalculationResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiCaseSummary {
    pub case_name: String,
    pub rate_tons_per_day: f64,
    pub area_heated_m2: f64,
    pub critical_time_days: f64,
    pub thermal_efficiency: f64,
    pub total_heat_j: f64,
    pub stored_heat_j: f64,
    pub lost_heat_j: f64,
    pub steam_volume_required_m3: f64,
    pub oil_produced_m3: f64,
    pub oil_steam_ratio_fos: f64,
    pub energy_balance_index: f64,
}

impl From<&AreaCalculationResult> for SiCaseSummary {
    fn from(r: &AreaCalculationResult) -> Self {
        Self {
            case_name: r.case_name.clone(),
            rate_tons_per_day: r.rate_tons_per_day,
            area_heated_m2: si::square_meters(r.area_heated_ft2),
            critical_time_days: r.critical_time.critical_time_days,
            thermal_efficiency: r.thermal_efficiency,
            total_heat_j: si::joules(r.total_heat_btu),
            stored_heat_j: si::joules(r.stored_heat_btu),
            lost_heat_j: si::joules(r.lost_heat_btu),
            steam_volume_required_m3: si::cubic_meters_from_ft3(r.steam_volume_required_ft3),
            oil_produced_m3: si::cubic_meters_from_bbl(r.oil_produced_np_bbl),
            oil_steam_ratio_fos: r.oil_steam_ratio_fos,
            energy_balance_index: r.energy_balance_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::calculate_case;
    use crate::common::SteamRateCase;
    use crate::testing::serigado;
    use sf_tables::ReferenceTables;

    #[test]
    fn dimensionless_quantities_pass_through() {
        let r = calculate_case(
            &serigado(),
            &SteamRateCase::from_bbl_per_day(565.0),
            0,
            &ReferenceTables::standard(),
        )
        .unwrap();
        let s = SiCaseSummary::from(&r);
        assert_eq!(s.thermal_efficiency, r.thermal_efficiency);
        assert_eq!(s.oil_steam_ratio_fos, r.oil_steam_ratio_fos);
        assert!((s.area_heated_m2 / r.area_heated_ft2 - 0.092_903_04).abs() < 1e-9);
        assert!(s.total_heat_j > r.total_heat_btu * 1055.0);
    }
}
