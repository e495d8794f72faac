//! Explicit session context: the signed-in account plus its stored token.

use std::sync::Arc;

use fashionhub_core::{AccessDecision, AccessPolicy, User};

use crate::api::{Backend, Credentials, SignupRequest};
use crate::error::ClientError;
use crate::token::{TokenStore, AUTH_TOKEN_KEY};

/// Current user and token storage for one client.
///
/// A new session is loading until [`Session::restore`] has run.
pub struct Session {
    backend: Arc<dyn Backend>,
    tokens: Box<dyn TokenStore>,
    user: Option<User>,
    loading: bool,
}

impl Session {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, tokens: Box<dyn TokenStore>) -> Self {
        Self {
            backend,
            tokens,
            user: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The signed-in user, or [`ClientError::NotAuthenticated`].
    ///
    /// # Errors
    ///
    /// Fails when nobody is signed in.
    pub fn require_user(&self) -> Result<&User, ClientError> {
        self.user.as_ref().ok_or(ClientError::NotAuthenticated)
    }

    #[must_use]
    pub fn access(&self, policy: &AccessPolicy) -> AccessDecision {
        policy.evaluate(self.loading, self.user.as_ref())
    }

    /// Resolve the stored token into a user. A token the backend rejects is
    /// removed from storage. Loading ends whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the token store cannot be read or cleared.
    pub async fn restore(&mut self) -> Result<(), ClientError> {
        let result = self.restore_inner().await;
        self.loading = false;
        result
    }

    async fn restore_inner(&mut self) -> Result<(), ClientError> {
        let Some(token) = self.tokens.get(AUTH_TOKEN_KEY)? else {
            tracing::debug!("no stored session token");
            return Ok(());
        };

        match self.backend.auth().get_current_user(&token).await {
            Ok(user) => {
                tracing::info!(restored = user.is_some(), "session restored");
                self.user = user;
            }
            Err(e) => {
                tracing::warn!(error = %e, "session restore failed; clearing stored token");
                self.user = None;
                self.tokens.remove(AUTH_TOKEN_KEY)?;
            }
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates backend and storage failures. The current user is left
    /// unchanged on failure.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<&User, ClientError> {
        let response = self
            .backend
            .auth()
            .login(credentials)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "login failed"))?;
        self.tokens.set(AUTH_TOKEN_KEY, &response.token)?;
        tracing::info!(user_id = %response.user.id, role = %response.user.role, "signed in");
        Ok(self.user.insert(response.user))
    }

    /// # Errors
    ///
    /// Propagates backend and storage failures.
    pub async fn signup(&mut self, request: &SignupRequest) -> Result<&User, ClientError> {
        let response = self
            .backend
            .auth()
            .signup(request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "signup failed"))?;
        self.tokens.set(AUTH_TOKEN_KEY, &response.token)?;
        tracing::info!(user_id = %response.user.id, role = %response.user.role, "signed up");
        Ok(self.user.insert(response.user))
    }

    /// Sign out. The stored token and the current user are cleared even when
    /// the backend call fails.
    ///
    /// # Errors
    ///
    /// Returns a storage error only if the token cannot be removed.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let token = match self.tokens.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored token during logout");
                String::new()
            }
        };
        if let Err(e) = self.backend.auth().logout(&token).await {
            tracing::error!(error = %e, "logout failed");
        }
        self.user = None;
        self.tokens.remove(AUTH_TOKEN_KEY)
    }

    /// # Errors
    ///
    /// Propagates the backend failure.
    pub async fn send_magic_link(&self, email: &str) -> Result<(), ClientError> {
        self.backend.auth().send_magic_link(email).await
    }

    /// Re-fetch the current user. Any failure signs the session out locally
    /// without touching the stored token.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the token store cannot be read.
    pub async fn refresh_user(&mut self) -> Result<Option<&User>, ClientError> {
        let Some(token) = self.tokens.get(AUTH_TOKEN_KEY)? else {
            self.user = None;
            return Ok(None);
        };
        match self.backend.auth().get_current_user(&token).await {
            Ok(user) => self.user = user,
            Err(e) => {
                tracing::error!(error = %e, "refresh user failed");
                self.user = None;
            }
        }
        Ok(self.user.as_ref())
    }
}
