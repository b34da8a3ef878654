//! Auth service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenMetadata, ApiTokenVersion, AuthServiceError, Credentials, HmacVerifier,
        IssuedApiToken, NewApiToken, Principal, Session, build_password_input,
        build_verifier_input, format_api_token, generate_api_token_secret, parse_api_token,
        repository::PgAuthRepository,
    },
    database::Db,
    domain::accounts::{records::AccountUuid, repository::PgAccountsRepository},
};

#[derive(Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
    accounts: PgAccountsRepository,
    verifier: Arc<dyn HmacVerifier>,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, verifier: Arc<dyn HmacVerifier>) -> Self {
        Self {
            repository: PgAuthRepository::new(db.pool().clone()),
            accounts: PgAccountsRepository::new(),
            db,
            verifier,
        }
    }
}

impl fmt::Debug for PgAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgAuthService")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed_token =
            parse_api_token(bearer_token).map_err(|_err| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_api_token_by_uuid(parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if token.version != parsed_token.version {
            return Err(AuthServiceError::NotFound);
        }

        let verifier_input = build_verifier_input(
            &parsed_token.token_uuid,
            parsed_token.version,
            &token.account_uuid,
            &parsed_token.secret,
        );

        let valid = self
            .verifier
            .verify(&verifier_input, &token.token_hash)
            .await?;

        if !valid {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on this write.
        if let Err(error) = self
            .repository
            .touch_api_token_last_used(parsed_token.token_uuid)
            .await
        {
            tracing::warn!(token = %parsed_token.token_uuid, %error, "failed to record token use");
        }

        Ok(Principal {
            account_uuid: token.account_uuid,
            role: token.role,
            token_uuid: parsed_token.token_uuid,
        })
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .accounts
            .find_credentials_by_email(&mut tx, credentials.email.trim())
            .await?;

        tx.commit().await?;

        let Some(found) = found else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        let password_input = build_password_input(&found.account.email, &credentials.password);

        let valid = self
            .verifier
            .verify(&password_input, &found.password_verifier)
            .await?;

        if !valid {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.issue_api_token(found.account.uuid, None).await?;

        Ok(Session {
            account: found.account,
            token,
        })
    }

    #[tracing::instrument(
        name = "auth.service.issue_api_token",
        skip(self, expires_at),
        fields(account_uuid = %account, token_uuid = tracing::field::Empty),
        err
    )]
    async fn issue_api_token(
        &self,
        account: AccountUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();

        tracing::Span::current().record("token_uuid", tracing::field::display(token_uuid));

        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let verifier_input = build_verifier_input(&token_uuid, version, &account, &secret);

        let token_hash = self.verifier.hmac(&verifier_input).await?;

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                account_uuid: account,
                version,
                token_hash,
                expires_at,
            })
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }

    async fn list_api_tokens(
        &self,
        account: AccountUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self.repository.list_api_tokens_by_account(account).await?)
    }

    #[tracing::instrument(
        name = "auth.service.revoke_api_token",
        skip(self),
        fields(token_uuid = %token_uuid),
        err
    )]
    async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        Ok(self
            .repository
            .revoke_api_token(token_uuid)
            .await?
            .is_some())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token into the calling account.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;

    /// Check an email and password, issuing a fresh token on success.
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthServiceError>;

    /// Issue a new API token for the given account.
    async fn issue_api_token(
        &self,
        account: AccountUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError>;

    /// List all tokens for the given account.
    async fn list_api_tokens(
        &self,
        account: AccountUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError>;

    /// Revoke a token by UUID. Returns `true` if the token was active.
    async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use testresult::TestResult;
    use wave::accounts::Role;

    use crate::{
        domain::accounts::AccountsService,
        test::{TestContext, helpers::new_account},
    };

    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_as_its_account() -> TestResult {
        let ctx = TestContext::new().await;

        let account = ctx
            .accounts
            .register(new_account("vendor@example.com", Role::Vendor))
            .await?;

        let issued = ctx.auth.issue_api_token(account.uuid, None).await?;
        let principal = ctx.auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(principal.account_uuid, account.uuid);
        assert_eq!(principal.role, Role::Vendor);
        assert_eq!(principal.token_uuid, issued.metadata.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.authenticate_bearer("not-a-token").await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let account = ctx
            .accounts
            .register(new_account("ada@example.com", Role::Customer))
            .await?;

        let issued = ctx.auth.issue_api_token(account.uuid, None).await?;

        assert!(ctx.auth.revoke_api_token(issued.metadata.uuid).await?);
        assert!(!ctx.auth.revoke_api_token(issued.metadata.uuid).await?);

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn expired_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let account = ctx
            .accounts
            .register(new_account("ada@example.com", Role::Customer))
            .await?;

        let expired = Timestamp::now().checked_sub(SignedDuration::from_secs(60))?;
        let issued = ctx.auth.issue_api_token(account.uuid, Some(expired)).await?;

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn sign_in_with_correct_password_issues_token() -> TestResult {
        let ctx = TestContext::new().await;

        let account = ctx
            .accounts
            .register(new_account("ada@example.com", Role::Customer))
            .await?;

        let session = ctx
            .auth
            .sign_in(Credentials {
                email: "ADA@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await?;

        assert_eq!(session.account.uuid, account.uuid);

        let principal = ctx.auth.authenticate_bearer(&session.token.token).await?;

        assert_eq!(principal.account_uuid, account.uuid);

        let tokens = ctx.auth.list_api_tokens(account.uuid).await?;

        assert_eq!(tokens.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn sign_in_with_wrong_password_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.accounts
            .register(new_account("ada@example.com", Role::Customer))
            .await?;

        for (email, password) in [
            ("ada@example.com", "wrong horse"),
            ("nobody@example.com", "correct horse"),
        ] {
            let result = ctx
                .auth
                .sign_in(Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await;

            assert!(
                matches!(result, Err(AuthServiceError::InvalidCredentials)),
                "expected InvalidCredentials for {email}, got {result:?}"
            );
        }

        Ok(())
    }
}
