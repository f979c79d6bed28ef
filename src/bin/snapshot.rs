//! One-shot dashboard snapshot: builds the full dashboard payload and
//! prints it as JSON on stdout.
//!
//! Usage: snapshot [--days N] [--seed S] [--pretty]

use anyhow::{anyhow, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ccs_telemetry::snapshot::build_snapshot;

fn main() -> Result<()> {
    let mut days: u32 = 7;
    let mut seed: Option<u64> = None;
    let mut pretty = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--days" => {
                days = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(|| anyhow!("--days requires a number"))?;
            }
            "--seed" => {
                seed = Some(
                    args.next()
                        .and_then(|v| v.parse().ok())
                        .ok_or_else(|| anyhow!("--seed requires a number"))?,
                );
            }
            "--pretty" => pretty = true,
            other => return Err(anyhow!("unknown argument: {other}")),
        }
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let snapshot = build_snapshot(days, Utc::now(), &mut rng);

    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");
    Ok(())
}
