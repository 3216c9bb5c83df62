use ferrous_resolve_application::use_cases::ResolveNamesUseCase;
use ferrous_resolve_domain::Config;
use ferrous_resolve_infrastructure::dns::{ResolverBuilder, ResolverSettings};
use tracing::info;

/// Wires the iterative resolver behind the batch use case.
pub fn build_use_case(
    config: &Config,
    with_target_addresses: bool,
) -> anyhow::Result<ResolveNamesUseCase> {
    let settings = ResolverSettings::from_config(&config.resolver)?;

    info!(
        roots = settings.root_servers.len(),
        max_nesting_depth = settings.max_nesting_depth,
        with_target_addresses,
        "Wiring resolver"
    );

    let resolver = ResolverBuilder::new(settings).build();
    Ok(ResolveNamesUseCase::new(resolver).with_target_addresses(with_target_addresses))
}
