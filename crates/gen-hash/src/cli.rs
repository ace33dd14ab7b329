use crate::OutputFormat;
use clap::Parser;
use tracing::metadata::LevelFilter;

#[derive(Parser)]
#[clap(
    name = "gen-hash",
    about = "Prints a fresh random preimage and its SHA-256 hash for a hold invoice"
)]
pub struct Opts {
    /// Print the pair as a JSON object instead of two aligned lines.
    #[clap(long)]
    pub json: bool,

    /// Log debug output to stderr.
    #[clap(short, long)]
    pub verbose: bool,

    /// If enabled logs will be in json format
    #[clap(long)]
    pub json_logs: bool,
}

impl Opts {
    // use this method to parse the options from the cli.
    pub fn read() -> Opts {
        Opts::parse()
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }
}
