use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "keel workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benches and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run benches whose target name contains this string
        #[arg(long)]
        filter: Option<String>,
    },
}

const BENCHES: &[&str] = &[
    "linked_list_benchmark",
    "bst_benchmark",
    "min_heap_benchmark",
    "graph_benchmark",
];

/// The subset of criterion's `estimates.json` the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            filter,
        } => {
            if !report_only {
                run_benchmarks(quick, filter.as_deref())?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, filter: Option<&str>) -> Result<()> {
    let selected: Vec<&str> = BENCHES
        .iter()
        .copied()
        .filter(|name| filter.map_or(true, |f| name.contains(f)))
        .collect();
    if selected.is_empty() {
        anyhow::bail!("No bench target matches {:?}", filter.unwrap_or_default());
    }

    for bench in selected {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark {bench} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results: BTreeMap<String, f64> = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# keel Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;

    for (name, time_ns) in &results {
        let ops = 1e9 / time_ns;
        let ops_str = if ops > 1_000_000.0 {
            format!("{:.2}M", ops / 1_000_000.0)
        } else if ops > 1_000.0 {
            format!("{:.2}K", ops / 1_000.0)
        } else {
            format!("{ops:.0}")
        };
        writeln!(file, "| {name} | {} | {ops_str} |", format_duration(*time_ns))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_duration(time_ns: f64) -> String {
    if time_ns > 1e6 {
        format!("{:.2} ms", time_ns / 1e6)
    } else if time_ns > 1e3 {
        format!("{:.2} µs", time_ns / 1e3)
    } else {
        format!("{time_ns:.0} ns")
    }
}

/// Walks criterion's output tree, reading `<bench>/new/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(root, &path, results)?;
            continue;
        }

        // Structure: .../<group>/<function>/new/estimates.json
        let is_estimate = path.file_name().and_then(|s| s.to_str()) == Some("estimates.json");
        let Some(run_dir) = path.parent() else { continue };
        if !is_estimate || run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if estimates.mean.point_estimate <= 0.0 {
            continue;
        }

        let name = bench_dir
            .strip_prefix(root)
            .unwrap_or(bench_dir)
            .display()
            .to_string();
        results.insert(name, estimates.mean.point_estimate);
    }

    Ok(())
}
