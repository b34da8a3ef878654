//! Update Current Account Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use wave_app::domain::accounts::data::ProfileUpdate;

use crate::{
    accounts::{errors::into_status_error, models::AccountResponse},
    extensions::*,
    state::State,
};

/// Update Profile Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            full_name: request.full_name,
            phone: request.phone,
        }
    }
}

/// Update Current Account Handler
///
/// Replaces the display name and phone number.
#[endpoint(
    tags("accounts"),
    summary = "Update Current Account",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<AccountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let account = state
        .app
        .accounts
        .update_profile(principal.account_uuid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(account.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use wave::{accounts::Role, validation::ValidationErrors};
    use wave_app::domain::accounts::AccountsServiceError;

    use crate::test_helpers::{CUSTOMER, Mocks};

    use super::{super::tests::make_account, *};

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Some(CUSTOMER), Router::with_path("accounts/me").put(handler))
    }

    #[tokio::test]
    async fn test_update_replaces_profile() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .accounts
            .expect_update_profile()
            .once()
            .withf(|account, update| {
                *account == CUSTOMER.account_uuid
                    && *update
                        == ProfileUpdate {
                            full_name: "Chidi Okafor".to_string(),
                            phone: Some("+2348012345678".to_string()),
                        }
            })
            .return_once(|account, update| {
                let mut record = make_account(account, "chidi@example.com", Role::Customer);

                record.phone = update.phone;

                Ok(record)
            });

        let mut res = TestClient::put("http://example.com/accounts/me")
            .json(&json!({ "full_name": "Chidi Okafor", "phone": "+2348012345678" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: AccountResponse = res.take_json().await?;

        assert_eq!(body.phone.as_deref(), Some("+2348012345678"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_blank_name_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .accounts
            .expect_update_profile()
            .once()
            .return_once(|_, _| {
                let mut errors = ValidationErrors::default();

                errors.push("full_name", "is required");

                Err(AccountsServiceError::Invalid(errors))
            });

        let res = TestClient::put("http://example.com/accounts/me")
            .json(&json!({ "full_name": " " }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
