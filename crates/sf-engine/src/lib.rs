//! sf-engine: analytical steamflood performance.
//!
//! Provides:
//! - Special functions erfc, G(t_d) and G1(t_cd)
//! - Thermal efficiency (Myhill–Stegemeier)
//! - Critical time (Mandl–Volek) with a bisection cross-check
//! - The per-case heated-area pipeline (Marx–Langenheim) and batch runners
//! - Pattern sizing and an SI summary of results
//!
//! Every function is a pure function of its inputs and the reference tables.
//!
//! # Example
//!
//! ```no_run
//! use sf_engine::{CommonData, SteamRateCase, calculate_all_cases};
//! use sf_tables::ReferenceTables;
//!
//! # fn run(common: CommonData) -> sf_engine::EngineResult<()> {
//! let tables = ReferenceTables::standard();
//! let cases = [SteamRateCase::from_bbl_per_day(565.0)];
//! for r in calculate_all_cases(&common, &cases, &tables)? {
//!     println!("{}: {:.0} ft²", r.case_name, r.area_heated_ft2);
//! }
//! # Ok(())
//! # }
//! ```

pub mod area;
pub mod common;
pub mod critical_time;
pub mod error;
pub mod pattern;
pub mod report;
pub mod special;
pub mod thermal_efficiency;

pub use area::{
    AreaCalculationResult, InterpolationFlags, calculate_all_cases, calculate_all_cases_parallel,
    calculate_case,
};
pub use common::{CommonData, SteamRateCase};
pub use critical_time::{
    Bisection, CriticalTimeCrossCheck, CriticalTimeResult, critical_time, cross_check,
    solve_tcd_bisection,
};
pub use error::{EngineError, EngineResult};
pub use pattern::{CaseInjection, PatternSummary, pattern_summary};
pub use report::SiCaseSummary;
pub use special::{erfc, g1, g_td};
pub use thermal_efficiency::{ThermalEfficiency, dimensionless_time, thermal_efficiency};
