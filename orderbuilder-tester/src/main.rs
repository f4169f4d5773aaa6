mod common;
mod logic;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use orderbuilder_catalog::{CatalogAssets, EmbeddedDataLoader, VendorCatalog, load_assets};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::split_csv;
use logic::scenarios::scenario_keys;
use logic::{LogicTester, ScenarioResult, find_scenario, list_scenarios};

#[derive(Debug, Parser)]
#[command(name = "orderbuilder-tester", version)]
#[command(about = "Scripted QA runs for the Order Builder category selectors, no browser needed")]
struct Args {
    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Vendors to run against (comma-separated); defaults to every vendor
    #[arg(long)]
    vendor: Option<String>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    if args.report == "console" {
        announce_banner();
    }

    let start_time = Instant::now();
    let assets = load_assets(&EmbeddedDataLoader).context("failed to load embedded catalog")?;
    let vendors = select_vendors(&assets, args.vendor.as_deref())?;
    let scenarios = expand_scenarios(&args.scenarios);

    let results = run_scenarios(&args, &assets, &vendors, &scenarios);
    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:28} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧾 Order Builder Selector Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn select_vendors<'a>(
    assets: &'a CatalogAssets,
    vendor_arg: Option<&str>,
) -> Result<Vec<&'a VendorCatalog>> {
    let Some(vendor_arg) = vendor_arg else {
        return Ok(assets.catalog.vendors.iter().collect());
    };
    split_csv(vendor_arg)
        .iter()
        .map(|id| assets.vendor(id).map_err(anyhow::Error::from))
        .collect()
}

fn run_scenarios(
    args: &Args,
    assets: &CatalogAssets,
    vendors: &[&VendorCatalog],
    scenarios: &[String],
) -> Vec<ScenarioResult> {
    let tester = LogicTester::new(assets, args.verbose);
    let mut results = Vec::new();
    for name in scenarios {
        if let Some(scenario) = find_scenario(name) {
            results.extend(tester.run_scenario(scenario, vendors));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            results.push(LogicTester::unknown_scenario(name));
        }
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Order Builder Selector Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["orderbuilder-tester"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn all_expands_to_every_scenario_once() {
        let expanded = expand_scenarios("smoke,all");
        assert_eq!(expanded[0], "smoke");
        assert_eq!(expanded.len(), scenario_keys().len());
    }

    #[test]
    fn explicit_scenarios_are_kept_in_order() {
        assert_eq!(
            expand_scenarios("quantity-blur, smoke"),
            vec!["quantity-blur".to_string(), "smoke".to_string()]
        );
    }

    #[test]
    fn vendor_filter_resolves_ids() {
        let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
        let all = select_vendors(&assets, None).expect("all vendors");
        assert_eq!(all.len(), assets.catalog.vendors.len());
        let one = select_vendors(&assets, Some("cloudline")).expect("one vendor");
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].vendor_id, "cloudline");
        assert!(select_vendors(&assets, Some("nobody")).is_err());
    }

    #[test]
    fn unknown_scenarios_become_failed_results() {
        let assets = load_assets(&EmbeddedDataLoader).expect("embedded data");
        let vendors = select_vendors(&assets, Some("smokehaus")).expect("vendor");
        let results = run_scenarios(
            &args(&[]),
            &assets,
            &vendors,
            &["smoke".to_string(), "ghost".to_string()],
        );
        assert_eq!(results.len(), 2);
        assert!(results[0].passed);
        assert!(!results[1].passed);
    }

    #[test]
    fn report_flag_rejects_unknown_formats() {
        let parsed = Args::try_parse_from(["orderbuilder-tester", "--report", "csv"]);
        assert!(parsed.is_err());
        assert_eq!(args(&[]).report, "console");
    }
}
