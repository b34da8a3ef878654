//! Auth Config

use clap::Args;

use wave_app::auth::OpenBaoConfig;

/// `OpenBao` Transit settings used to verify tokens and passwords.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// `OpenBao` server address
    #[arg(long = "openbao-addr", env = "OPENBAO_ADDR")]
    pub addr: String,

    /// `OpenBao` authentication token
    #[arg(long = "openbao-token", env = "OPENBAO_TOKEN", hide_env_values = true)]
    pub token: String,

    /// `OpenBao` Transit key name shared by API tokens and password digests
    #[arg(long = "openbao-transit-key", env = "OPENBAO_TRANSIT_KEY")]
    pub transit_key: String,
}

impl From<AuthConfig> for OpenBaoConfig {
    fn from(config: AuthConfig) -> Self {
        OpenBaoConfig {
            addr: config.addr,
            token: config.token,
            transit_key: config.transit_key,
        }
    }
}
