use query_atlas_domain::{CliOverrides, Config, EnvOverrides};

pub fn load_config(
    path: Option<&str>,
    env_overrides: EnvOverrides,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(path, env_overrides, cli_overrides)
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    Ok(config)
}
