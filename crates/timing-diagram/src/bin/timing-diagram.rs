use std::io::Write;
use std::process::ExitCode;
use timing_diagram::cli::Opts;

fn main() -> ExitCode {
    let opts = Opts::read();

    if let Err(e) = logger::init_tracing(opts.log_level(), opts.json_logs) {
        eprintln!("WARN could not initialize logger: {e:#}");
    }

    let result = timing_diagram::run(std::io::stdin().lock(), opts.payment_hash.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|html| {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
            Ok(())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
