//! # Ferrous Resolve
//!
//! Iterative DNS lookups from the root servers down, one `name,value` line
//! per name on stdout.

mod bootstrap;
mod di;

use clap::Parser;
use ferrous_resolve_domain::{CliOverrides, RecordType};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-resolve")]
#[command(version = "0.1.0")]
#[command(about = "Iterative DNS resolver starting from the root servers")]
struct Cli {
    /// Names to resolve
    #[arg(required = true)]
    names: Vec<String>,

    /// Record type: A, NS, CNAME, TXT or AAAA
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Root server IPv4 address (repeatable, replaces the configured list)
    #[arg(long = "root")]
    roots: Vec<String>,

    /// Destination port for every nameserver
    #[arg(short, long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum referrals followed per name
    #[arg(long)]
    max_hops: Option<u8>,

    /// Maximum depth of nested lookups (nameserver addresses, alias targets)
    #[arg(long)]
    max_nesting_depth: Option<u8>,

    /// Also resolve the address of NS and CNAME targets
    #[arg(long)]
    with_address: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let record_type = match parse_record_type(&cli.record_type) {
        Ok(record_type) => record_type,
        Err(message) => {
            eprintln!("{}", message);
            return Ok(ExitCode::FAILURE);
        }
    };

    let cli_overrides = CliOverrides {
        root_servers: (!cli.roots.is_empty()).then(|| cli.roots.clone()),
        port: cli.port,
        query_timeout: cli.timeout,
        max_hops: cli.max_hops,
        max_nesting_depth: cli.max_nesting_depth,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!(
        names = cli.names.len(),
        record_type = %record_type,
        "Ferrous Resolve starting"
    );

    let use_case = di::build_use_case(&config, cli.with_address)?;
    let results = use_case.execute(&cli.names, record_type).await?;

    let mut failed = false;
    for result in &results {
        println!("{}", result);
        failed |= !result.is_success();
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Accepts only the types the resolver can format, case-insensitively.
fn parse_record_type(input: &str) -> Result<RecordType, String> {
    let supported = RecordType::SUPPORTED
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    match input.parse::<RecordType>() {
        Ok(record_type) if record_type.is_supported() => Ok(record_type),
        _ => Err(format!(
            "Unsupported record type '{}'. Supported types: {}",
            input, supported
        )),
    }
}
