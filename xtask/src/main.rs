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
#[command(about = "graph-scan workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks and write a BFS vs DFS report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "traversal_benchmark";
const STRATEGIES: &[&str] = &["bfs", "dfs"];

/// Subset of criterion's `estimates.json`.
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
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("{BENCH} failed with {status}");
    }
    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // workload -> strategy -> nodes/s
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;
    write!(file, "| Workload |")?;
    for strategy in STRATEGIES {
        write!(file, " {strategy} (nodes/s) |")?;
    }
    writeln!(file, " dfs vs bfs |")?;
    write!(file, "|---|")?;
    for _ in STRATEGIES {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (workload, by_strategy) in &results {
        write!(file, "| {workload} |")?;
        for strategy in STRATEGIES {
            match by_strategy.get(*strategy) {
                Some(rate) => write!(file, " {} |", format_rate(*rate))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (by_strategy.get("bfs"), by_strategy.get("dfs")) {
            (Some(b), Some(d)) if *b > 0.0 => writeln!(file, " **{:.2}x** |", d / b)?,
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{rate:.0}")
    }
}

/// Walks criterion output laid out as `<workload>/<strategy>/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(strategy_dir) = baseline_dir.parent() else { continue };
        let Some(workload_dir) = strategy_dir.parent() else { continue };
        let (Some(strategy), Some(workload)) = (
            strategy_dir.file_name().and_then(|s| s.to_str()),
            workload_dir.file_name().and_then(|s| s.to_str()),
        ) else {
            continue;
        };
        if !STRATEGIES.contains(&strategy) {
            continue;
        }

        // Throughput is recorded next to the estimates in benchmark.json.
        let mut elements = 1.0;
        if let Ok(content) = fs::read_to_string(baseline_dir.join("benchmark.json")) {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                if let Some(n) = json
                    .get("throughput")
                    .and_then(|t| t.get("Elements"))
                    .and_then(serde_json::Value::as_f64)
                {
                    elements = n;
                }
            }
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(workload.to_owned())
                .or_default()
                .insert(strategy.to_owned(), elements * 1e9 / time_ns);
        }
    }
    Ok(())
}
