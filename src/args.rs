use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staatsblad-monitor")]
#[command(about = "Belgian company-registry scraper and EU VAT validator")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a company on Staatsblad Monitor and export the results
    Company {
        /// Company number (ondernemingsnummer); dots and spaces allowed
        number: String,

        /// Do not write the JSON/Markdown/text result files
        #[arg(long)]
        no_save: bool,

        /// Override the results directory from configuration
        #[arg(long)]
        results_dir: Option<String>,
    },

    /// Validate an EU VAT number against VIES and print a report
    Vat {
        /// Two-letter EU country code (e.g. BE, FR, DE)
        country_code: String,

        /// VAT number; spaces, dots and dashes allowed
        vat_number: String,
    },
}
