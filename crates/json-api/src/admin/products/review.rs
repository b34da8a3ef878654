//! Review Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use wave::catalog::ReviewDecision;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Review outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Decision {
    /// Publish the product
    Approve,

    /// Refuse the product
    Reject,
}

impl From<Decision> for ReviewDecision {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => ReviewDecision::Approve,
            Decision::Reject => ReviewDecision::Reject,
        }
    }
}

/// Review Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewProductRequest {
    pub decision: Decision,
}

/// Review Product Handler
///
/// Approves or rejects a pending product.
#[endpoint(
    tags("admin"),
    summary = "Review Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product reviewed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product is not pending"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ReviewProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let decision = ReviewDecision::from(json.into_inner().decision);

    let product = state
        .app
        .products
        .review_product(product.into_inner().into(), decision)
        .await
        .map_err(into_status_error)?;

    info!(
        product = %product.uuid,
        reviewer = %principal.account_uuid,
        %decision,
        "product reviewed"
    );

    Ok(Json(product.into()))
}
