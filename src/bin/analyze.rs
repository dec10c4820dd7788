//! Command-line placement query
//!
//! Usage: analyze [--json] [--explain] <SPECIES> <QUANTITY>
//!
//! Exit codes: 0 on success, 1 on a placement error, 2 on a usage error.
//! Set ZOO_LOCALE=pt for Portuguese output.

use anyhow::Context;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zoo_enclosure_planner::planner::{report, AnalysisResponse, Verdict};
use zoo_enclosure_planner::{Planner, PlannerConfig};

const USAGE: &str = "usage: analyze [--json] [--explain] <SPECIES> <QUANTITY>";

struct Args {
    json: bool,
    explain: bool,
    species: String,
    quantity: String,
}

fn parse_args() -> Option<Args> {
    let mut json = false;
    let mut explain = false;
    let mut positional = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--explain" => explain = true,
            _ => positional.push(arg),
        }
    }

    let [species, quantity]: [String; 2] = positional.try_into().ok()?;
    Some(Args { json, explain, species, quantity })
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zoo_enclosure_planner=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(args) = parse_args() else {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::from(2));
    };

    let config = PlannerConfig::from_env()?;
    let locale = config.locale;
    let planner = Planner::builtin()
        .context("built-in catalog failed validation")?
        .with_config(config);

    let result = planner.analyze_raw(&args.species, &args.quantity);
    let response = AnalysisResponse::from_result(&result, locale);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match &response {
            AnalysisResponse::Viable { viable } => viable.iter().for_each(|line| println!("{}", line)),
            AnalysisResponse::Error { error } => eprintln!("{}", error),
        }
    }

    if args.explain {
        match planner.explain_raw(&args.species, &args.quantity) {
            Ok(verdicts) => {
                for v in verdicts {
                    match v.verdict {
                        Verdict::Viable { free_space, .. } => {
                            eprintln!("  enclosure {}: viable ({} free)", v.enclosure_id, free_space)
                        }
                        Verdict::Rejected { gate } => {
                            eprintln!("  enclosure {}: {}", v.enclosure_id, gate.display_text())
                        }
                    }
                }
            }
            Err(e) => eprintln!("  no verdicts: {}", report::error_message(&e, locale)),
        }
    }

    Ok(if response.is_error() { ExitCode::from(1) } else { ExitCode::SUCCESS })
}
