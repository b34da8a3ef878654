use clap::Args;
use wave::accounts::Role;
use wave_app::domain::accounts::{data::NewAccount, records::AccountUuid};

use crate::cli::connect::{DatabaseArgs, OpenBaoArgs, app_context};

#[derive(Debug, Args)]
pub(crate) struct CreateAccountArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    openbao: OpenBaoArgs,

    /// Login email
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    full_name: String,

    /// Account role: customer, vendor or admin
    #[arg(long, default_value = "customer")]
    role: Role,

    /// Login password
    #[arg(long, env = "WAVE_ACCOUNT_PASSWORD", hide_env_values = true)]
    password: String,

    /// Optional phone number
    #[arg(long)]
    phone: Option<String>,
}

pub(crate) async fn run(args: CreateAccountArgs) -> Result<(), String> {
    let app = app_context(&args.database, &args.openbao).await?;

    let account = app
        .accounts
        .register(NewAccount {
            uuid: AccountUuid::new(),
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            phone: args.phone,
            role: args.role,
        })
        .await
        .map_err(|error| format!("failed to create account: {error}"))?;

    let issued = app
        .auth
        .issue_api_token(account.uuid, None)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("account_uuid: {}", account.uuid);
    println!("email: {}", account.email);
    println!("role: {}", account.role);
    println!("token_uuid: {}", issued.metadata.uuid);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
