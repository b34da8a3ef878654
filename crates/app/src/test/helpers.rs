//! Test Helpers

use wave::{
    accounts::Role,
    catalog::ReviewDecision,
    checkout::ShippingAddress,
};

use crate::{
    domain::{
        accounts::{
            AccountsService, AccountsServiceError,
            data::NewAccount,
            records::{AccountRecord, AccountUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, ProductDetails},
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

/// Password every helper-made account signs in with.
pub(crate) const PASSWORD: &str = "correct horse";

pub(crate) fn new_account(email: &str, role: Role) -> NewAccount {
    NewAccount {
        uuid: AccountUuid::new(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        full_name: "Test Account".to_string(),
        phone: None,
        role,
    }
}

pub(crate) async fn create_account(
    ctx: &TestContext,
    email: &str,
    role: Role,
) -> Result<AccountRecord, AccountsServiceError> {
    ctx.accounts.register(new_account(email, role)).await
}

pub(crate) fn product_details(name: &str, category: &str, price: u64) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        description: format!("{name}, fresh from the vendor."),
        price,
        category: category.to_string(),
        image_url: "https://placehold.co/600x600.png".to_string(),
    }
}

pub(crate) async fn create_approved_product(
    ctx: &TestContext,
    vendor: AccountUuid,
    name: &str,
    category: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    let submitted = ctx
        .products
        .submit_product(
            vendor,
            NewProduct {
                uuid: ProductUuid::new(),
                details: product_details(name, category, price),
            },
        )
        .await?;

    ctx.products
        .review_product(submitted.uuid, ReviewDecision::Approve)
        .await
}

pub(crate) fn shipping_to(name: &str) -> ShippingAddress {
    ShippingAddress {
        name: name.to_string(),
        email: "shipping@example.com".to_string(),
        address: "12 Admiralty Way, Lekki Phase 1".to_string(),
        city: "Lagos".to_string(),
        country: "Nigeria".to_string(),
    }
}
