use tasklist_core::ClientConfig;

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");
const API_URL_OVERRIDE: Option<&str> =
  option_env!("TASKLIST_API_URL");

/// Embedded config with the build-time API url override applied.
pub fn load_client_config() -> ClientConfig
{
  let mut cfg =
    ClientConfig::from_toml_or_default(
      CLIENT_CONFIG_TOML
    );

  if let Some(url) = API_URL_OVERRIDE
    && let Err(error) =
      cfg.set_api_base_url(url)
  {
    tracing::warn!(
      %error,
      "ignoring TASKLIST_API_URL \
       override"
    );
  }

  tracing::info!(
    api_base_url = %cfg.api_base_url,
    timezone = %cfg.timezone.name(),
    "client config ready"
  );
  cfg
}
