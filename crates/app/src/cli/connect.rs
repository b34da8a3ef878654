use std::sync::Arc;

use clap::Args;
use wave_app::{
    auth::{OpenBaoClient, OpenBaoConfig},
    context::AppContext,
    database::{self, Db, PoolSettings},
};

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub(crate) database_url: String,

    /// Maximum open connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 2)]
    pub(crate) database_max_connections: u32,
}

impl DatabaseArgs {
    pub(crate) async fn db(&self) -> Result<Db, String> {
        let settings = PoolSettings {
            max_connections: self.database_max_connections,
            ..PoolSettings::default()
        };

        database::connect(&self.database_url, settings)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

#[derive(Debug, Args)]
pub(crate) struct OpenBaoArgs {
    /// OpenBao server address
    #[arg(long, env = "OPENBAO_ADDR")]
    openbao_addr: String,

    /// OpenBao authentication token
    #[arg(long, env = "OPENBAO_TOKEN", hide_env_values = true)]
    openbao_token: String,

    /// OpenBao Transit key name
    #[arg(long, env = "OPENBAO_TRANSIT_KEY")]
    openbao_transit_key: String,
}

impl OpenBaoArgs {
    fn client(&self) -> OpenBaoClient {
        OpenBaoClient::new(OpenBaoConfig {
            addr: self.openbao_addr.clone(),
            token: self.openbao_token.clone(),
            transit_key: self.openbao_transit_key.clone(),
        })
    }
}

/// Connect and wire every service.
pub(crate) async fn app_context(
    database: &DatabaseArgs,
    openbao: &OpenBaoArgs,
) -> Result<AppContext, String> {
    let db = database.db().await?;

    Ok(AppContext::from_db(&db, Arc::new(openbao.client())))
}
