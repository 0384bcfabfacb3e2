use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::LevelFilter;
use scamshield::{BatchRunner, MessageAnalyzer, RiskAssessment, Row, UrlAnalyzer};
use std::fs;
use std::process;

// Display-only truncation; the assessment itself keeps every reason.
const MAX_DISPLAYED_REASONS: usize = 5;

fn main() {
    let matches = Command::new("scamshield")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scores messages and URLs for scam risk with human-readable reasons")
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .help("Analyze a free-text message")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Analyze a URL")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .value_name("FILE")
                .help("Analyze JSON-lines rows with optional 'message' and/or 'url' fields")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit machine-readable JSON instead of the text report")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let as_json = matches.get_flag("json");
    let message = matches.get_one::<String>("message");
    let url = matches.get_one::<String>("url");
    let batch = matches.get_one::<String>("batch");

    if message.is_none() && url.is_none() && batch.is_none() {
        eprintln!("Nothing to analyze: pass --message, --url or --batch (see --help)");
        process::exit(2);
    }

    if let Err(e) = run(message, url, batch, as_json) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(
    message: Option<&String>,
    url: Option<&String>,
    batch: Option<&String>,
    as_json: bool,
) -> Result<()> {
    if let Some(text) = message {
        let assessment = MessageAnalyzer::new().analyze(text);
        print_assessment(&assessment, as_json)?;
    }

    if let Some(target) = url {
        let assessment = UrlAnalyzer::default().analyze(target);
        print_assessment(&assessment, as_json)?;
    }

    if let Some(path) = batch {
        run_batch(path, as_json)?;
    }

    Ok(())
}

fn run_batch(path: &str, as_json: bool) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read batch file {path}"))?;

    let mut rows: Vec<Row> = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Row = serde_json::from_str(line)
            .with_context(|| format!("invalid row on line {}", number + 1))?;
        rows.push(row);
    }
    log::debug!("loaded {} rows from {}", rows.len(), path);

    let records = BatchRunner::new().run(&rows, Some("message"), Some("url"));
    log::info!("analyzed {} values", records.len());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!(
                "{:?} {:>3}/100  {}",
                record.assessment.label, record.assessment.score, record.input
            );
        }
    }
    Ok(())
}

fn print_assessment(assessment: &RiskAssessment, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(assessment)?);
        return Ok(());
    }

    println!(
        "Verdict: {} (score {}/100)",
        assessment.label, assessment.score
    );

    if !assessment.reasons.is_empty() {
        println!("Top reasons:");
        for reason in assessment.reasons.iter().take(MAX_DISPLAYED_REASONS) {
            println!("  - {reason}");
        }
    }

    if let Some(meta) = &assessment.meta {
        println!(
            "Details: host={} domain={} suffix={} subdomain={} params={}",
            meta.host, meta.domain, meta.suffix, meta.subdomain, meta.params
        );
    }
    Ok(())
}
