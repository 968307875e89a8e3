use anyhow::{Context, Result};
use clap::Parser;
use ctstat::{cli::Cli, report};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::run(&args.directory, args.format, args.sorted, &mut out)
        .with_context(|| format!("failed to report on {}", args.directory.display()))?;
    Ok(())
}
