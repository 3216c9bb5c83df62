use ferrous_resolve_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        root_servers = config.resolver.root_servers.len(),
        port = config.resolver.port,
        query_timeout_ms = config.resolver.query_timeout,
        max_hops = config.resolver.max_hops,
        "Configuration loaded"
    );

    Ok(config)
}
