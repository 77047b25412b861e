use anyhow::Context;
use clap::Parser;
use iris_das_domain::{CliOverrides, OutputFormat};
use tracing::{debug, error};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "iris-das")]
#[command(version)]
#[command(about = "Check domain availability against an IRIS DAS server")]
struct Cli {
    /// Domain name to check
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DAS server address (host:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Reply timeout in milliseconds (0 = 5s default)
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server_address: cli.server.clone(),
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
        output_format: cli.json.then_some(OutputFormat::Json),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting IRIS DAS client v{}", env!("CARGO_PKG_VERSION"));

    let lookup_config = config.das.lookup_config();

    let result = iris_das_infrastructure::lookup(&lookup_config, &cli.domain)
        .await
        .map_err(|e| {
            error!(error = %e, domain = %cli.domain, "DAS lookup failed");
            e
        })
        .with_context(|| format!("Lookup of {} failed", cli.domain.trim()))?;

    output::print_result(&result, config.output.format)?;

    Ok(())
}
