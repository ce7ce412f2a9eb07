//! Command-line driver.
//!
//! ```text
//! dominoes [--demo] [--json] [--sequential]
//! ```
//!
//! Reads the two-line text format from stdin and prints the right and left
//! cascade distances. `--json` reads a `CascadeRequest` and prints a
//! `CascadeResponse` instead; its `config.parallel` is honoured, while the
//! line-length cap always comes from `DOMINOES_MAX_LINE_LENGTH`. `--demo`
//! replays the two worked scenarios.

use std::io::{self, Read, Write};

use dominoes::{cascade, report, run_text, CascadeEngine, CascadeRequest, EngineConfig, LineParser};
use miette::{miette, IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

const SCENARIOS: [&str; 2] = [
    "11\n0 0 4 1 0 2 0 1 0 0 3",
    "12\n2 3 0 0 0 0 0 6 10 1 0 2",
];

#[derive(Debug, Default)]
struct Args {
    demo: bool,
    json: bool,
    sequential: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--demo" => args.demo = true,
            "--json" => args.json = true,
            "--sequential" => args.sequential = true,
            "-h" | "--help" => {
                println!("usage: dominoes [--demo] [--json] [--sequential]");
                std::process::exit(0);
            }
            other => return Err(miette!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).into_diagnostic()?;
    Ok(input)
}

/// The length cap comes from the environment, never from the body.
fn apply_overrides(request: &mut CascadeRequest, config: &EngineConfig, args: &Args) {
    request.config.max_line_length = config.max_line_length;
    if args.sequential {
        request.config.parallel = false;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    let mut config = EngineConfig::from_env();
    if args.sequential {
        config.parallel = false;
    }
    tracing::debug!(?config, ?args, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.demo {
        for text in SCENARIOS {
            let line = LineParser::new(&config).parse_str(text).into_diagnostic()?;
            let outcome = CascadeEngine::new(config).run(&line);
            report::write_report(&mut out, &outcome.distances).into_diagnostic()?;
        }
        return Ok(());
    }

    let input = read_stdin()?;
    if args.json {
        let mut request: CascadeRequest = serde_json::from_str(&input).into_diagnostic()?;
        apply_overrides(&mut request, &config, &args);
        let response = cascade(request).into_diagnostic()?;
        serde_json::to_writer(&mut out, &response).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    } else {
        let rendered = run_text(&input, &config).into_diagnostic()?;
        out.write_all(rendered.as_bytes()).into_diagnostic()?;
    }
    Ok(())
}
