/*!
 * Scheduling Simulator - Command-Line Entry Point
 *
 * Thin front end over the library:
 * - Load a JSON workload (or the built-in demo)
 * - Run one policy, or compare every policy
 * - Print a compact summary or the serialized results
 */

use clap::Parser;
use miette::IntoDiagnostic;
use sched_sim::{compare, init_tracing, run, Policy, SimConfig, Workload};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sched-sim", version, about = "Single-CPU process scheduling simulator")]
struct Cli {
    /// JSON workload file; the built-in three-process demo is used when omitted
    workload: Option<PathBuf>,

    /// Policy to simulate: fcfs, sjf, srtf, priority, round_robin
    #[arg(short, long)]
    policy: Option<Policy>,

    /// Round Robin time quantum
    #[arg(short, long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Run every policy on the same workload
    #[arg(long)]
    all: bool,

    /// Print results as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = SimConfig::from_env()?;
    init_tracing(config.trace_json);

    let workload = match &cli.workload {
        Some(path) => {
            info!(path = %path.display(), "Loading workload");
            Workload::from_path(path)?
        }
        None => Workload::demo(),
    };

    let results = if cli.all {
        let quantum = workload.comparison_quantum(cli.quantum, &config);
        compare(&workload.processes, quantum)?
    } else {
        let policy = workload.resolve_policy(cli.policy);
        let quantum = workload.resolve_quantum(policy, cli.quantum, &config);
        vec![run(policy, &workload.processes, quantum)?]
    };

    if cli.json {
        let json = match results.as_slice() {
            [single] => serde_json::to_string_pretty(single),
            all => serde_json::to_string_pretty(all),
        }
        .into_diagnostic()?;
        println!("{}", json);
    } else {
        for result in &results {
            println!("{}", result);
        }
    }

    Ok(())
}
