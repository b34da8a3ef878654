use clap::Args;
use uuid::Uuid;
use wave_app::auth::PgAuthRepository;

use crate::cli::connect::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Token UUID to revoke
    #[arg(long)]
    token_uuid: Uuid,
}

pub(crate) async fn run(args: RevokeTokenArgs) -> Result<(), String> {
    let db = args.database.db().await?;
    let repository = PgAuthRepository::new(db.pool().clone());

    let revoked = repository
        .revoke_api_token(args.token_uuid)
        .await
        .map(|record| record.is_some())
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    if revoked {
        println!("revoked token {}", args.token_uuid);
    } else {
        println!("token {} was not active", args.token_uuid);
    }

    Ok(())
}
