//! Account Errors

use salvo::http::StatusError;
use tracing::error;

use wave_app::{auth::AuthServiceError, domain::accounts::AccountsServiceError};

pub(crate) fn into_status_error(error: AccountsServiceError) -> StatusError {
    match error {
        AccountsServiceError::AlreadyExists => {
            StatusError::conflict().brief("An account with this email already exists")
        }
        AccountsServiceError::NotFound => StatusError::not_found().brief("Account not found"),
        AccountsServiceError::Invalid(errors) => StatusError::bad_request().brief(errors.to_string()),
        AccountsServiceError::InvalidReference
        | AccountsServiceError::MissingRequiredData
        | AccountsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid account payload")
        }
        AccountsServiceError::Verifier(source) => {
            error!("OpenBao error while handling account: {source}");

            StatusError::internal_server_error()
        }
        AccountsServiceError::Sql(source) => {
            error!("account storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn auth_into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        AuthServiceError::NotFound => StatusError::not_found().brief("Token not found"),
        AuthServiceError::Sql(source) => {
            error!("token storage error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process api token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::OpenBao(source) => {
            error!("OpenBao error while issuing token: {source}");

            StatusError::internal_server_error()
        }
    }
}
