//! Sales Summary Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{analytics::models::SalesSummaryResponse, extensions::*, state::State};

/// Sales Summary Handler
///
/// Summarises the caller's sales across every order line they sold.
#[endpoint(
    tags("analytics"),
    summary = "Get Sales Summary",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SalesSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let summary = state
        .app
        .analytics
        .sales_summary(principal.account_uuid)
        .await
        .or_500("failed to summarise sales")?;

    Ok(Json(summary.into()))
}
