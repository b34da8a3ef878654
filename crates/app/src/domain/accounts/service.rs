//! Accounts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use wave::accounts::{Registration, normalize_email};
use wave::validation::ValidationErrors;

use crate::{
    auth::{HmacVerifier, build_password_input},
    database::Db,
    domain::accounts::{
        data::{NewAccount, ProfileUpdate},
        errors::AccountsServiceError,
        records::{AccountRecord, AccountUuid},
        repository::{NewAccountRow, PgAccountsRepository},
    },
};

#[derive(Clone)]
pub struct PgAccountsService {
    db: Db,
    verifier: Arc<dyn HmacVerifier>,
    repository: PgAccountsRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(db: Db, verifier: Arc<dyn HmacVerifier>) -> Self {
        Self {
            db,
            verifier,
            repository: PgAccountsRepository::new(),
        }
    }
}

impl fmt::Debug for PgAccountsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgAccountsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    #[tracing::instrument(
        name = "accounts.service.register",
        skip(self, account),
        fields(account_uuid = %account.uuid, role = account.role.as_str()),
        err
    )]
    async fn register(&self, account: NewAccount) -> Result<AccountRecord, AccountsServiceError> {
        Registration {
            email: &account.email,
            password: &account.password,
            full_name: &account.full_name,
        }
        .validate()?;

        let email = normalize_email(&account.email);
        let password_input = build_password_input(&email, &account.password);
        let password_verifier = self.verifier.hmac(&password_input).await?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_account(
                &mut tx,
                &NewAccountRow {
                    uuid: account.uuid,
                    email: &email,
                    password_verifier: &password_verifier,
                    full_name: account.full_name.trim(),
                    phone: clean_phone(account.phone.as_deref()),
                    role: account.role.as_str(),
                },
            )
            .await?;

        tx.commit().await?;

        tracing::info!(account = %created.uuid, role = %created.role, "registered account");

        Ok(created)
    }

    async fn get_account(&self, account: AccountUuid) -> Result<AccountRecord, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_account(&mut tx, account).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn find_account_by_email(
        &self,
        email: &str,
    ) -> Result<AccountRecord, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .find_credentials_by_email(&mut tx, &normalize_email(email))
            .await?;

        tx.commit().await?;

        found
            .map(|credentials| credentials.account)
            .ok_or(AccountsServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "accounts.service.update_profile",
        skip(self, update),
        fields(account_uuid = %account),
        err
    )]
    async fn update_profile(
        &self,
        account: AccountUuid,
        update: ProfileUpdate,
    ) -> Result<AccountRecord, AccountsServiceError> {
        let mut errors = ValidationErrors::default();

        if update.full_name.trim().is_empty() {
            errors.push("full_name", "is required");
        }

        errors.into_result()?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_profile(
                &mut tx,
                account,
                update.full_name.trim(),
                clean_phone(update.phone.as_deref()),
            )
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

fn clean_phone(phone: Option<&str>) -> Option<&str> {
    phone.map(str::trim).filter(|phone| !phone.is_empty())
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Create an account, storing only a keyed verifier of its password.
    async fn register(&self, account: NewAccount) -> Result<AccountRecord, AccountsServiceError>;

    /// Retrieve a single account.
    async fn get_account(&self, account: AccountUuid) -> Result<AccountRecord, AccountsServiceError>;

    /// Look an account up by login email, ignoring case.
    async fn find_account_by_email(&self, email: &str)
    -> Result<AccountRecord, AccountsServiceError>;

    /// Replace the editable profile fields.
    async fn update_profile(
        &self,
        account: AccountUuid,
        update: ProfileUpdate,
    ) -> Result<AccountRecord, AccountsServiceError>;
}
