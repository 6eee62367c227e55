//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand: instance evaluation with a
//! component breakdown, and the exhaustive domain sweep.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use falsum::evaluate::evaluate_detailed;
use falsum::instance::Instance;
use falsum::sweep;

/// Load an instance file, evaluate it and print the verdict.
///
/// Human-readable by default, a JSON object with `--json` (one line, for
/// harness consumption).
pub fn run_eval(path: &Path, json: bool) -> Result<()> {
    let instance = Instance::from_toml_file(path)?;
    info!(
        path = %path.display(),
        width = instance.width,
        slots = instance.slots(),
        "evaluating instance"
    );
    let verdict = evaluate_detailed(&instance);
    debug!(
        all_certified = verdict.all_certified,
        composite = verdict.composite,
        member = verdict.member,
        "component outcomes"
    );
    if json {
        println!("{}", serde_json::to_string(&verdict)?);
    } else {
        println!("instance:      {}", path.display());
        println!("width:         {} bits", instance.width);
        println!("slots:         {}", instance.slots());
        println!("all_certified: {}", verdict.all_certified);
        println!("composite:     {}", verdict.composite);
        println!("member:        {}", verdict.member);
        println!("result:        {}", verdict.result);
    }
    Ok(())
}

/// Sweep the whole input domain for a width/slot-count pair.
///
/// Exits nonzero if a satisfying tuple is found — that would mean the
/// predicate is not the tautological false it is supposed to be.
pub fn run_sweep(width: u32, slots: usize, json: bool) -> Result<()> {
    let report = sweep::exhaustive(width, slots)?;
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("width:     {} bits", report.width);
        println!("slots:     {}", report.slots);
        println!("evaluated: {} tuples", report.evaluated);
        println!("satisfied: {}", report.satisfied);
    }
    if report.satisfied > 0 {
        anyhow::bail!(
            "predicate satisfied {} times — counterexample: {:?}",
            report.satisfied,
            report.counterexample
        );
    }
    Ok(())
}

/// Configure the global rayon pool used by the sweep.
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        // Already initialized (e.g. in tests) — keep the existing pool.
        tracing::debug!("rayon pool already configured: {}", e);
    }
}
