use ferrous_locator_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        fqdn = config.locator.fqdn.as_deref().unwrap_or("-"),
        nameserver = %config.resolver.nameserver,
        protocol = config.resolver.protocol.as_str(),
        refresh = config.refresh.enabled,
        "Configuration loaded"
    );

    Ok(config)
}
