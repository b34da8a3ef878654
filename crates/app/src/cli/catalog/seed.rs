use std::path::PathBuf;

use clap::Args;
use wave::fixtures::CatalogFixture;
use wave_app::seed::CatalogSeeder;

use crate::cli::connect::{DatabaseArgs, OpenBaoArgs, app_context};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    openbao: OpenBaoArgs,

    /// Catalog fixture to load
    #[arg(long, default_value = "fixtures/catalog.yaml")]
    fixture: PathBuf,

    /// Password given to newly created vendor accounts
    #[arg(long, env = "WAVE_VENDOR_PASSWORD", hide_env_values = true)]
    vendor_password: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let fixture = CatalogFixture::load(&args.fixture)
        .map_err(|error| format!("failed to load {}: {error}", args.fixture.display()))?;

    let app = app_context(&args.database, &args.openbao).await?;

    let report = CatalogSeeder {
        accounts: app.accounts.as_ref(),
        categories: app.categories.as_ref(),
        products: app.products.as_ref(),
    }
    .seed(&fixture, &args.vendor_password)
    .await
    .map_err(|error| format!("failed to seed catalog: {error}"))?;

    println!("categories: {}", report.categories);
    println!("vendors_created: {}", report.vendors_created);
    println!("products_created: {}", report.products_created);
    println!("products_skipped: {}", report.products_skipped);

    Ok(())
}
