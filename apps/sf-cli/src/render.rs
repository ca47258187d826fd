//! Report assembly and plain-text rendering for the `run` command.

use serde::Serialize;
use sf_core::{UnitSystem, si};
use sf_engine::{AreaCalculationResult, CriticalTimeCrossCheck, PatternSummary, SiCaseSummary};
use sf_project::ReportItem;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CaseRows {
    Field(Vec<AreaCalculationResult>),
    Si(Vec<SiCaseSummary>),
}

/// Serializable run output for `--format json|yaml`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub preset: String,
    pub units: UnitSystem,
    pub items: Vec<ReportItem>,
    pub cases: CaseRows,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_time_cross_check: Option<CriticalTimeCrossCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternSummary>,
}

impl RunReport {
    pub fn new(
        preset: &str,
        units: UnitSystem,
        items: &[ReportItem],
        results: &[AreaCalculationResult],
    ) -> Self {
        let cases = match units {
            UnitSystem::Field => CaseRows::Field(results.to_vec()),
            UnitSystem::Si => CaseRows::Si(results.iter().map(SiCaseSummary::from).collect()),
        };
        Self {
            preset: preset.to_string(),
            units,
            items: items.to_vec(),
            cases,
            critical_time_cross_check: None,
            pattern: None,
        }
    }
}

fn fmt_value(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "n/a".to_string()
    }
}

fn push_line(out: &mut String, item: ReportItem, label: &str, value: String, unit: &str) {
    out.push_str(&format!("  {item:?}  {label:<28} {value:>16} {unit}\n"));
}

fn push_item(out: &mut String, r: &AreaCalculationResult, item: ReportItem, units: UnitSystem) {
    let si_units = units == UnitSystem::Si;
    match item {
        ReportItem::A => {
            let (v, u) = if si_units {
                (si::square_meters(r.area_heated_ft2), "m²")
            } else {
                (r.area_heated_ft2, "ft²")
            };
            push_line(out, item, item.title(), fmt_value(v, 2), u);
        }
        ReportItem::B => {
            let ct = &r.critical_time;
            push_line(out, item, item.title(), fmt_value(ct.critical_time_days, 2), "days");
            push_line(out, item, "  (years)", fmt_value(ct.critical_time_years, 4), "yr");
        }
        ReportItem::C => {
            push_line(out, item, item.title(), fmt_value(r.thermal_efficiency, 6), "");
        }
        ReportItem::D => {
            let (total, stored, lost, u) = if si_units {
                (
                    si::joules(r.total_heat_btu),
                    si::joules(r.stored_heat_btu),
                    si::joules(r.lost_heat_btu),
                    "J",
                )
            } else {
                (r.total_heat_btu, r.stored_heat_btu, r.lost_heat_btu, "Btu")
            };
            push_line(out, item, "Heat injected", fmt_value(total, 0), u);
            push_line(out, item, "Heat stored", fmt_value(stored, 0), u);
            push_line(out, item, item.title(), fmt_value(lost, 0), u);
        }
        ReportItem::E => {
            if si_units {
                let m3 = si::cubic_meters_from_ft3(r.steam_volume_required_ft3);
                push_line(out, item, item.title(), fmt_value(m3, 2), "m³");
            } else {
                push_line(
                    out,
                    item,
                    item.title(),
                    fmt_value(r.steam_volume_required_bbl, 2),
                    "bbl",
                );
                push_line(out, item, "", fmt_value(r.steam_volume_required_ft3, 2), "ft³");
            }
        }
        ReportItem::F => {
            let (np, u) = if si_units {
                (si::cubic_meters_from_bbl(r.oil_produced_np_bbl), "m³")
            } else {
                (r.oil_produced_np_bbl, "bbl")
            };
            push_line(out, item, "Oil produced Np", fmt_value(np, 2), u);
            push_line(out, item, item.title(), fmt_value(r.oil_steam_ratio_fos, 6), "");
        }
        ReportItem::G => {
            push_line(
                out,
                item,
                item.title(),
                fmt_value(r.equivalent_oil_steam_ratio_fose, 6),
                "",
            );
        }
        ReportItem::H => {
            push_line(out, item, item.title(), fmt_value(r.energy_balance_index, 8), "");
        }
    }
}

/// Plain-text report, one block per case.
pub fn render_text(report: &RunReport, results: &[AreaCalculationResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Preset: {}\n", report.preset));

    for r in results {
        out.push_str(&format!(
            "\n{} ({} bbl/d, {} t/d)\n",
            r.case_name,
            fmt_value(r.rate_bbl_per_day, 1),
            fmt_value(r.rate_tons_per_day, 3)
        ));
        for &item in &report.items {
            push_item(&mut out, r, item, report.units);
        }
        if r.interpolation_used.pressure || r.interpolation_used.temperature {
            out.push_str("  (steam table values interpolated)\n");
        }
    }

    if let Some(cc) = &report.critical_time_cross_check {
        out.push_str(&format!(
            "\nCritical time cross-check: t_cd table {} vs bisection {} ({} iterations, rel. diff {})\n",
            fmt_value(cc.tcd_from_table, 6),
            fmt_value(cc.tcd_bisection, 6),
            cc.bisection.iterations,
            fmt_value(cc.relative_difference, 6)
        ));
    }

    if let Some(p) = &report.pattern {
        out.push_str(&format!(
            "\nPattern area: {} ft² ({} acres)\n",
            fmt_value(p.pattern_area_ft2, 0),
            fmt_value(p.pattern_area_acres, 2)
        ));
        for c in &p.cases {
            out.push_str(&format!(
                "  {}: {} bbl CWE injected, {} PV\n",
                c.case_name,
                fmt_value(c.cwe_volume_bbl, 0),
                fmt_value(c.pore_volume_fraction, 4)
            ));
        }
    }

    out
}
