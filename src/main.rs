use clap::Parser;
use std::path::Path;

use staatsblad_monitor::config::AppConfig;
use staatsblad_monitor::records::Directors;
use staatsblad_monitor::{export, scrape, vat};

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration, falling back to defaults when no file is given
    let config = match &args.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    let exit_code = match args.command {
        Command::Company {
            number,
            no_save,
            results_dir,
        } => run_company(&number, no_save, results_dir, config).await,
        Command::Vat {
            country_code,
            vat_number,
        } => run_vat(&country_code, &vat_number, &config).await,
    };

    std::process::exit(exit_code);
}

/// Look up a company, print a summary, and export the result files
async fn run_company(
    number: &str,
    no_save: bool,
    results_dir: Option<String>,
    mut config: AppConfig,
) -> i32 {
    if let Some(dir) = results_dir {
        config.scraper.results_dir = dir;
    }

    let envelope = scrape::lookup_company(number, &config.scraper).await;

    if envelope.success {
        print_summary(&envelope);
    } else {
        eprintln!(
            "Lookup failed: {}",
            envelope.error.as_deref().unwrap_or("unknown error")
        );
    }

    // The renderers handle error envelopes too, so failures still leave
    // a record on disk
    if !no_save {
        match export::save_envelope(
            &envelope,
            Path::new(&config.scraper.results_dir),
            "staatsblad",
        ) {
            Ok(saved) => {
                println!("Saved: {}", saved.json.display());
                println!("Saved: {}", saved.markdown.display());
                println!("Saved: {}", saved.text.display());
            }
            Err(e) => {
                ::log::error!("Failed to save results: {}", e);
                return 1;
            }
        }
    }

    if envelope.success { 0 } else { 1 }
}

/// Print the short lookup summary to stdout
fn print_summary(envelope: &staatsblad_monitor::ResultEnvelope) {
    let Some(record) = &envelope.data else {
        return;
    };

    println!(
        "Company: {}",
        envelope.company_name().unwrap_or("(name not found)")
    );
    println!("Financial years: {}", record.financial_years.len());
    println!("Activities: {}", record.activities.len());
    println!("Publications: {}", record.publications.len());
    match &record.directors {
        Directors::Available { names } => println!("Directors: {}", names.len()),
        Directors::Unavailable { reason } => println!("Directors: {reason}"),
    }
    println!("PDF documents: {}", record.pdf_links.len());
    for warning in &envelope.warnings {
        println!("Warning [{}]: {}", warning.extractor, warning.message);
    }
}

/// Validate a VAT number and print the narrative report
async fn run_vat(country_code: &str, vat_number: &str, config: &AppConfig) -> i32 {
    let query = vat::VatQuery::new(country_code, vat_number);
    let outcome = vat::validate(&query, &config.vat).await;
    let report = vat::report::render(&query, &outcome, &config.vat.report).await;

    println!("{report}");

    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
