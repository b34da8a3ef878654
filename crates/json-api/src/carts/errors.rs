//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use wave_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::InvalidReference => {
            StatusError::not_found().brief("Product not found")
        }
        CartsServiceError::MissingRequiredData | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::ProductUnavailable(product) => {
            StatusError::conflict().brief(format!("Product {product} is not available"))
        }
        CartsServiceError::Cart(source) => StatusError::conflict().brief(source.to_string()),
        CartsServiceError::Money(source) => StatusError::bad_request().brief(source.to_string()),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
