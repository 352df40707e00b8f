use std::process::ExitCode;

use clap::Parser;
use kmp_trace::report::{render, OutputFormat};
use tracing_subscriber::EnvFilter;

/// Run Knuth-Morris-Pratt search and print the full step-by-step trace
#[derive(Parser)]
#[command(name = "kmp-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to search in
    text: String,

    /// Pattern to search for
    pattern: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, env = "KMP_TRACE_FORMAT")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = kmp_trace::search(&cli.text, &cli.pattern);

    if let Some(err) = result.error {
        eprintln!("kmp-trace: {err}");
        return Ok(ExitCode::from(2));
    }

    let rendered = render(&result, cli.format)?;
    println!("{}", rendered.trim_end());
    Ok(ExitCode::SUCCESS)
}
