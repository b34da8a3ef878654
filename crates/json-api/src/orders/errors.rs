//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use wave_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Invalid(errors) => StatusError::bad_request().brief(errors.to_string()),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::EmptyCart => StatusError::conflict().brief("Cart is empty"),
        OrdersServiceError::ProductUnavailable(product) => {
            StatusError::conflict().brief(format!("Product {product} is no longer available"))
        }
        OrdersServiceError::InvalidTransition(source) => {
            StatusError::conflict().brief(source.to_string())
        }
        OrdersServiceError::Money(source) => StatusError::bad_request().brief(source.to_string()),
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
