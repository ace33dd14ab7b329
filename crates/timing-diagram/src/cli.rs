use clap::Parser;
use tracing::metadata::LevelFilter;

#[derive(Parser)]
#[clap(
    name = "timing-diagram",
    about = "Renders the HTLC timing of a payment read from stdin as HTML"
)]
pub struct Opts {
    /// Hash of the payment to draw from a `listpayments` document. Not needed for the output of
    /// `payinvoice`.
    pub payment_hash: Option<String>,

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

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }
}
