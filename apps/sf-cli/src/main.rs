use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use sf_core::{
    UnitSystem, bbl_per_day_to_metric_tons_per_day, bbl_per_day_to_short_tons_per_day,
    metric_tons_per_day_to_bbl_per_day, short_tons_per_day_to_bbl_per_day,
    validate_bbl_to_tons_conversion,
};
use sf_engine::{
    SteamRateCase, calculate_all_cases, calculate_all_cases_parallel, cross_check, pattern_summary,
};
use sf_project::{
    Preset, ReportItem, builtin_preset, builtin_presets, check_model_completeness, default_preset,
    load_fhv_tcd_table, load_preset, load_steam_table, read_preset, save_preset,
    validate_fields_for_calculation, validate_steam_rate,
};
use sf_tables::{FhvTcdTable, ReferenceTables, SteamTable};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod render;

use error::{CliError, CliResult};
use render::{RunReport, render_text};

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(
    about = "Steamflood CLI - heated area, thermal efficiency and critical time",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a preset file (all fields present and in range)
    Validate {
        /// Path to the preset YAML or JSON file
        preset_path: PathBuf,
    },
    /// Calculate every steam rate case of a preset
    Run(RunArgs),
    /// List built-in presets
    Presets,
    /// Write a built-in preset to a YAML or JSON file
    ExportPreset {
        /// Built-in preset ID
        id: String,
        /// Output path; the extension selects the format
        output: PathBuf,
    },
    /// Convert a steam rate between bbl/d (cold water equivalent) and t/d
    Convert {
        /// Rate to convert
        value: f64,
        /// Unit of VALUE
        #[arg(long, value_enum, default_value_t = RateUnit::Bbl)]
        from: RateUnit,
        /// Use short tons (2000 lb) instead of metric tons
        #[arg(long)]
        short_tons: bool,
        /// Check VALUE against this rate in the other unit
        #[arg(long)]
        against: Option<f64>,
    },
    /// Look up reference table values
    #[command(subcommand)]
    Lookup(LookupCommands),
    /// Report which fields a preset is missing for the requested items
    Check {
        /// Path to the preset YAML or JSON file
        preset_path: PathBuf,
        /// Report items to check (A-H, comma separated); all when omitted
        #[arg(long, value_delimiter = ',')]
        items: Vec<ReportItem>,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Preset file to run (YAML or JSON)
    #[arg(long, conflicts_with = "preset")]
    file: Option<PathBuf>,
    /// Built-in preset ID; the default preset when neither is given
    #[arg(long)]
    preset: Option<String>,
    /// Replace the preset's cases with these rates, bbl/d (repeatable)
    #[arg(long = "rate")]
    rates: Vec<f64>,
    /// Report items to print (A-H, comma separated); all when omitted
    #[arg(long, value_delimiter = ',')]
    items: Vec<ReportItem>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, value_enum, default_value_t = Units::Field)]
    units: Units,
    /// Calculate cases in parallel
    #[arg(long)]
    parallel: bool,
    /// Custom saturated-steam table (YAML or JSON list of rows)
    #[arg(long)]
    steam_table: Option<PathBuf>,
    /// Custom fhv-t_cd table (YAML or JSON list of rows)
    #[arg(long)]
    fhv_table: Option<PathBuf>,
    /// Compare the table t_cd against a bisection solve of G1
    #[arg(long)]
    cross_check: bool,
    /// Include the pattern-area summary
    #[arg(long)]
    pattern: bool,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum LookupCommands {
    /// Saturated properties at a pressure, psia
    SteamPressure {
        pressure_psia: f64,
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Saturated properties at a temperature, °F
    SteamTemperature {
        temperature_f: f64,
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Dimensionless critical time for a hot-water fraction
    Fhv {
        fhv: f64,
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Units {
    Field,
    Si,
}

impl From<Units> for UnitSystem {
    fn from(u: Units) -> Self {
        match u {
            Units::Field => UnitSystem::Field,
            Units::Si => UnitSystem::Si,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RateUnit {
    /// Barrels per day
    Bbl,
    /// Tons per day
    Tons,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { preset_path } => cmd_validate(&preset_path),
        Commands::Run(args) => cmd_run(&args),
        Commands::Presets => cmd_presets(),
        Commands::ExportPreset { id, output } => cmd_export_preset(&id, &output),
        Commands::Convert {
            value,
            from,
            short_tons,
            against,
        } => {
            cmd_convert(value, from, short_tons, against);
            Ok(())
        }
        Commands::Lookup(lookup) => cmd_lookup(&lookup),
        Commands::Check { preset_path, items } => cmd_check(&preset_path, &items),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(preset_path: &Path) -> CliResult<()> {
    println!("Validating preset: {}", preset_path.display());
    let preset = load_preset(preset_path)?;
    for (i, case) in preset.data.cases.iter().enumerate() {
        let check = validate_steam_rate(case);
        for e in &check.errors {
            println!("  Case {}: {}", i + 1, e);
        }
    }
    println!("✓ Preset is valid: {} ({} cases)", preset.name, preset.data.cases.len());
    Ok(())
}

fn resolve_preset(file: Option<&Path>, id: Option<&str>) -> CliResult<Preset> {
    let preset = match (file, id) {
        (Some(path), _) => read_preset(path)?,
        (None, Some(id)) => builtin_preset(id)?,
        (None, None) => default_preset()?,
    };
    debug!(id = %preset.id, name = %preset.name, "preset resolved");
    Ok(preset)
}

fn load_tables(steam: Option<&Path>, fhv: Option<&Path>) -> CliResult<ReferenceTables> {
    let steam = match steam {
        Some(path) => {
            info!(path = %path.display(), "loading custom steam table");
            load_steam_table(path)?
        }
        None => SteamTable::standard(),
    };
    let fhv_tcd = match fhv {
        Some(path) => {
            info!(path = %path.display(), "loading custom fhv-t_cd table");
            load_fhv_tcd_table(path)?
        }
        None => FhvTcdTable::standard(),
    };
    Ok(ReferenceTables { steam, fhv_tcd })
}

fn requested_items(items: &[ReportItem]) -> Vec<ReportItem> {
    if items.is_empty() {
        ReportItem::ALL.to_vec()
    } else {
        let mut items = items.to_vec();
        items.sort();
        items.dedup();
        items
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_run(args: &RunArgs) -> CliResult<()> {
    let mut preset = resolve_preset(args.file.as_deref(), args.preset.as_deref())?;
    if !args.rates.is_empty() {
        preset.data.cases = args
            .rates
            .iter()
            .map(|&r| SteamRateCase::from_bbl_per_day(r))
            .collect();
    }

    for (i, case) in preset.data.cases.iter().enumerate() {
        let check = validate_steam_rate(case);
        if !check.valid {
            return Err(CliError::InvalidRate {
                case: format!("Case {}", i + 1),
                message: check.errors.join("; "),
            });
        }
    }
    preset.data.sync_rates();

    let items = requested_items(&args.items);
    let fields = validate_fields_for_calculation(&preset.data, &items);
    if !fields.valid {
        return Err(CliError::MissingFields {
            items: join(&items),
            fields: fields.missing_fields.join(", "),
        });
    }
    if !fields.unused_fields.is_empty() {
        debug!(unused = %fields.unused_fields.join(", "), "fields not read by requested items");
    }

    let tables = load_tables(args.steam_table.as_deref(), args.fhv_table.as_deref())?;
    let (common, cases) = preset.data.engine_inputs();
    let results = if args.parallel {
        calculate_all_cases_parallel(&common, &cases, &tables)?
    } else {
        calculate_all_cases(&common, &cases, &tables)?
    };

    let units = UnitSystem::from(args.units);
    let mut report = RunReport::new(&preset.name, units, &items, &results);
    if args.cross_check {
        if let Some(first) = results.first() {
            let cc = cross_check(&first.critical_time, &tables);
            if !cc.bisection.converged {
                warn!("critical time bisection did not converge");
            }
            report.critical_time_cross_check = Some(cc);
        }
    }
    if args.pattern {
        report.pattern = Some(pattern_summary(&common, &cases)?);
    }

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report, &results),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            println!("✓ Report written: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn cmd_presets() -> CliResult<()> {
    let presets = builtin_presets()?;
    println!("Built-in presets:");
    for p in presets {
        let marker = if p.is_default { " (default)" } else { "" };
        println!(
            "  {} - {}{} ({} cases)",
            p.id,
            p.name,
            marker,
            p.data.cases.len()
        );
        if !p.description.is_empty() {
            println!("      {}", p.description);
        }
    }
    Ok(())
}

fn cmd_export_preset(id: &str, output: &Path) -> CliResult<()> {
    let preset = builtin_preset(id)?;
    save_preset(output, &preset)?;
    println!("✓ Exported {} to {}", preset.id, output.display());
    Ok(())
}

fn cmd_convert(value: f64, from: RateUnit, short_tons: bool, against: Option<f64>) {
    let ton_label = if short_tons { "short t/d" } else { "t/d" };
    let (bbl, tons) = match (from, short_tons) {
        (RateUnit::Bbl, false) => (value, bbl_per_day_to_metric_tons_per_day(value)),
        (RateUnit::Bbl, true) => (value, bbl_per_day_to_short_tons_per_day(value)),
        (RateUnit::Tons, false) => (metric_tons_per_day_to_bbl_per_day(value), value),
        (RateUnit::Tons, true) => (short_tons_per_day_to_bbl_per_day(value), value),
    };
    println!("{bbl:.3} bbl/d = {tons:.3} {ton_label}");

    if let Some(other) = against {
        let (bbl, tons) = match from {
            RateUnit::Bbl => (value, other),
            RateUnit::Tons => (other, value),
        };
        let consistent = if short_tons {
            (bbl_per_day_to_short_tons_per_day(bbl) - tons).abs() <= 0.1
        } else {
            validate_bbl_to_tons_conversion(bbl, tons, 0.1)
        };
        if consistent {
            println!("✓ {bbl} bbl/d and {tons} {ton_label} agree");
        } else {
            println!("✗ {bbl} bbl/d and {tons} {ton_label} disagree by more than 0.1 t/d");
        }
    }
}

fn cmd_lookup(lookup: &LookupCommands) -> CliResult<()> {
    match lookup {
        LookupCommands::SteamPressure {
            pressure_psia,
            table,
        } => {
            let tables = load_tables(table.as_deref(), None)?;
            let p = tables.steam.by_pressure(*pressure_psia);
            println!(
                "P = {:.4} psia  T = {:.2} °F  hf = {:.3}  hfg = {:.3}  hg = {:.3} Btu/lb{}",
                p.pressure_psia,
                p.temperature_f,
                p.hf,
                p.hfg,
                p.hg,
                if p.interpolated { "  (interpolated)" } else { "" }
            );
        }
        LookupCommands::SteamTemperature {
            temperature_f,
            table,
        } => {
            let tables = load_tables(table.as_deref(), None)?;
            let p = tables.steam.by_temperature(*temperature_f);
            println!(
                "T = {:.2} °F  P = {:.4} psia  hf = {:.3}  hfg = {:.3}  hg = {:.3} Btu/lb{}",
                p.temperature_f,
                p.pressure_psia,
                p.hf,
                p.hfg,
                p.hg,
                if p.interpolated { "  (interpolated)" } else { "" }
            );
        }
        LookupCommands::Fhv { fhv, table } => {
            let tables = load_tables(None, table.as_deref())?;
            let t = tables.fhv_tcd.tcd_by_fhv(*fhv);
            println!(
                "fhv = {:.6}  t_cd = {:.6}{}",
                fhv,
                t.tcd,
                if t.interpolated { "  (interpolated)" } else { "" }
            );
        }
    }
    Ok(())
}

fn cmd_check(preset_path: &Path, items: &[ReportItem]) -> CliResult<()> {
    let preset = read_preset(preset_path)?;
    let items = requested_items(items);
    let check = validate_fields_for_calculation(&preset.data, &items);
    let completeness = check_model_completeness(&preset.data);

    println!(
        "Preset: {} ({}/{} fields present)",
        preset.name, completeness.present_fields, completeness.total_fields
    );
    if check.valid {
        println!("✓ All fields present for {}", join(&items));
    } else {
        println!("✗ Missing for {}: {}", join(&items), check.missing_fields.join(", "));
    }
    if !check.unused_fields.is_empty() {
        println!("  Not read by these items: {}", check.unused_fields.join(", "));
    }
    if !completeness.all_fields_present {
        println!(
            "  Missing for the full model: {}",
            completeness.missing_fields.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "sf-cli", "-v", "run", "--rate", "565", "--rate", "755", "--items", "A,c",
            "--format", "json", "--units", "si", "--cross-check",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.rates, vec![565.0, 755.0]);
        assert_eq!(args.items, vec![ReportItem::A, ReportItem::C]);
        assert!(args.format == OutputFormat::Json);
        assert!(args.units == Units::Si);
        assert!(args.cross_check);
    }

    #[test]
    fn file_and_preset_conflict() {
        let res = Cli::try_parse_from([
            "sf-cli", "run", "--file", "a.yaml", "--preset", "serigado-iv",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn unknown_item_is_rejected() {
        let res = Cli::try_parse_from(["sf-cli", "check", "p.yaml", "--items", "Z"]);
        assert!(res.is_err());
    }

    #[test]
    fn items_default_to_all_and_dedup() {
        assert_eq!(requested_items(&[]), ReportItem::ALL.to_vec());
        assert_eq!(
            requested_items(&[ReportItem::C, ReportItem::A, ReportItem::C]),
            vec![ReportItem::A, ReportItem::C]
        );
    }

    #[test]
    fn resolve_defaults_to_builtin() {
        let p = resolve_preset(None, None).unwrap();
        assert!(p.is_default);
        assert!(matches!(
            resolve_preset(None, Some("missing")),
            Err(CliError::Project(_))
        ));
    }
}
