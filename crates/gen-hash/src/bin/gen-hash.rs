use anyhow::Result;
use gen_hash::cli::Opts;
use gen_hash::PreimageHash;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let opts = Opts::read();

    if let Err(e) = logger::init_tracing(opts.log_level(), opts.json_logs) {
        eprintln!("WARN could not initialize logger: {e:#}");
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Failed to generate preimage: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Opts) -> Result<()> {
    let pair = PreimageHash::generate()?;
    tracing::debug!(?pair, "Generated preimage");

    let out = pair.render(opts.output_format())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
