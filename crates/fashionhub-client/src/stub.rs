//! Reference backend: logs every call and answers with mock data.
//!
//! Listing operations return nothing, record builders return a fresh record,
//! and everything else fails with [`ClientError::Unimplemented`].

use async_trait::async_trait;
use chrono::Utc;
use fashionhub_core::{
    new_id, AdminAction, Brief, BriefFilters, BriefPatch, BriefResponse, BriefStatus,
    ContactMessage, DigestFrequency, NewAdminAction, NewBrief, NewProfile, NewResponse, Profile,
    ProfileFilters, ResponseStatus, SortKey, User, UserPatch, UserRole, UserStatus,
};

use crate::api::{
    AdminApi, AuthApi, AuthResponse, BriefApi, Credentials, NotificationApi, ProfileApi,
    ResponseApi, SignupRequest, UserApi, UserQuery,
};
use crate::error::ClientError;

/// Token handed out by every stub login and signup.
pub const STUB_TOKEN: &str = "stub-token";

/// User id of the account returned by a stub login.
pub const STUB_USER_ID: &str = "1";

#[derive(Debug, Clone, Copy, Default)]
pub struct StubBackend;

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthApi for StubBackend {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        tracing::info!(operation = "auth.login", email = %credentials.email, "stub call");
        Ok(AuthResponse {
            user: User {
                id: STUB_USER_ID.to_string(),
                email: credentials.email.clone(),
                role: UserRole::Brand,
                status: UserStatus::Approved,
                created_date: Utc::now(),
                approved_date: None,
                last_login: None,
            },
            token: STUB_TOKEN.to_string(),
        })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        tracing::info!(
            operation = "auth.signup",
            email = %request.email,
            role = %request.role,
            "stub call"
        );
        Ok(AuthResponse {
            user: User {
                id: new_id(),
                email: request.email.clone(),
                role: request.role,
                status: UserStatus::Pending,
                created_date: Utc::now(),
                approved_date: None,
                last_login: None,
            },
            token: STUB_TOKEN.to_string(),
        })
    }

    async fn send_magic_link(&self, email: &str) -> Result<(), ClientError> {
        tracing::info!(operation = "auth.send_magic_link", email, "stub call");
        Ok(())
    }

    async fn logout(&self, _token: &str) -> Result<(), ClientError> {
        tracing::info!(operation = "auth.logout", "stub call");
        Ok(())
    }

    async fn get_current_user(&self, _token: &str) -> Result<Option<User>, ClientError> {
        tracing::info!(operation = "auth.get_current_user", "stub call");
        Ok(None)
    }
}

#[async_trait]
impl UserApi for StubBackend {
    async fn get(&self, id: &str) -> Result<User, ClientError> {
        tracing::info!(operation = "users.get", id, "stub call");
        Err(ClientError::unimplemented("users.get"))
    }

    async fn update(&self, id: &str, patch: &UserPatch) -> Result<User, ClientError> {
        tracing::info!(operation = "users.update", id, ?patch, "stub call");
        Err(ClientError::unimplemented("users.update"))
    }

    async fn approve(&self, id: &str) -> Result<User, ClientError> {
        tracing::info!(operation = "users.approve", id, "stub call");
        Err(ClientError::unimplemented("users.approve"))
    }

    async fn ban(&self, id: &str, reason: Option<&str>) -> Result<User, ClientError> {
        tracing::info!(operation = "users.ban", id, reason, "stub call");
        Err(ClientError::unimplemented("users.ban"))
    }

    async fn list(&self, query: UserQuery) -> Result<Vec<User>, ClientError> {
        tracing::info!(operation = "users.list", ?query, "stub call");
        Ok(Vec::new())
    }
}

#[async_trait]
impl ProfileApi for StubBackend {
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, ClientError> {
        tracing::info!(operation = "profiles.get", user_id, "stub call");
        Ok(None)
    }

    async fn create(&self, profile: &NewProfile) -> Result<Profile, ClientError> {
        tracing::info!(
            operation = "profiles.create",
            user_id = %profile.user_id,
            role = %profile.role(),
            "stub call"
        );
        Err(ClientError::unimplemented("profiles.create"))
    }

    async fn update(&self, user_id: &str, _profile: &Profile) -> Result<Profile, ClientError> {
        tracing::info!(operation = "profiles.update", user_id, "stub call");
        Err(ClientError::unimplemented("profiles.update"))
    }

    async fn search(
        &self,
        filters: &ProfileFilters,
        query: Option<&str>,
    ) -> Result<Vec<Profile>, ClientError> {
        tracing::info!(operation = "profiles.search", ?filters, query, "stub call");
        Ok(Vec::new())
    }

    async fn feature(&self, profile_id: &str, featured: bool) -> Result<Profile, ClientError> {
        tracing::info!(operation = "profiles.feature", profile_id, featured, "stub call");
        Err(ClientError::unimplemented("profiles.feature"))
    }
}

#[async_trait]
impl BriefApi for StubBackend {
    async fn create(&self, brief: &NewBrief) -> Result<Brief, ClientError> {
        tracing::info!(
            operation = "briefs.create",
            user_id = %brief.user_id,
            title = %brief.title,
            "stub call"
        );
        Ok(brief.build(new_id(), Utc::now())?)
    }

    async fn get(&self, id: &str) -> Result<Brief, ClientError> {
        tracing::info!(operation = "briefs.get", id, "stub call");
        Err(ClientError::unimplemented("briefs.get"))
    }

    async fn update(&self, id: &str, patch: &BriefPatch) -> Result<Brief, ClientError> {
        tracing::info!(operation = "briefs.update", id, ?patch, "stub call");
        Err(ClientError::unimplemented("briefs.update"))
    }

    async fn update_status(&self, id: &str, status: BriefStatus) -> Result<Brief, ClientError> {
        tracing::info!(operation = "briefs.update_status", id, %status, "stub call");
        Err(ClientError::unimplemented("briefs.update_status"))
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        tracing::info!(operation = "briefs.delete", id, "stub call");
        Ok(())
    }

    async fn list(
        &self,
        filters: Option<&BriefFilters>,
        sort_by: Option<SortKey>,
    ) -> Result<Vec<Brief>, ClientError> {
        tracing::info!(
            operation = "briefs.list",
            ?filters,
            sort_by = sort_by.map(|k| k.to_string()),
            "stub call"
        );
        Ok(Vec::new())
    }

    async fn feature(&self, id: &str, featured: bool) -> Result<Brief, ClientError> {
        tracing::info!(operation = "briefs.feature", id, featured, "stub call");
        Err(ClientError::unimplemented("briefs.feature"))
    }

    async fn get_matching(&self, user_id: &str) -> Result<Vec<Brief>, ClientError> {
        tracing::info!(operation = "briefs.get_matching", user_id, "stub call");
        Ok(Vec::new())
    }
}

#[async_trait]
impl ResponseApi for StubBackend {
    async fn create(&self, response: &NewResponse) -> Result<BriefResponse, ClientError> {
        tracing::info!(
            operation = "responses.create",
            brief_id = %response.brief_id,
            user_id = %response.user_id,
            "stub call"
        );
        Ok(response.build(new_id(), Utc::now())?)
    }

    async fn get(&self, id: &str) -> Result<BriefResponse, ClientError> {
        tracing::info!(operation = "responses.get", id, "stub call");
        Err(ClientError::unimplemented("responses.get"))
    }

    async fn list(
        &self,
        brief_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<BriefResponse>, ClientError> {
        tracing::info!(operation = "responses.list", brief_id, user_id, "stub call");
        Ok(Vec::new())
    }

    async fn update_status(
        &self,
        id: &str,
        status: ResponseStatus,
    ) -> Result<BriefResponse, ClientError> {
        tracing::info!(operation = "responses.update_status", id, %status, "stub call");
        Err(ClientError::unimplemented("responses.update_status"))
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        tracing::info!(operation = "responses.delete", id, "stub call");
        Ok(())
    }
}

#[async_trait]
impl AdminApi for StubBackend {
    async fn get_actions(&self) -> Result<Vec<AdminAction>, ClientError> {
        tracing::info!(operation = "admin.get_actions", "stub call");
        Ok(Vec::new())
    }

    async fn create_action(&self, action: &NewAdminAction) -> Result<AdminAction, ClientError> {
        tracing::info!(
            operation = "admin.create_action",
            admin_id = %action.admin_id,
            action_type = %action.action_type,
            target_id = %action.target_id,
            "stub call"
        );
        Err(ClientError::unimplemented("admin.create_action"))
    }
}

#[async_trait]
impl NotificationApi for StubBackend {
    async fn send_brief_digest(
        &self,
        user_id: &str,
        frequency: DigestFrequency,
    ) -> Result<(), ClientError> {
        tracing::info!(
            operation = "notifications.send_brief_digest",
            user_id,
            %frequency,
            "stub call"
        );
        Ok(())
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ClientError> {
        tracing::info!(
            operation = "notifications.send_contact_message",
            to = %message.recipient_email,
            subject = %message.subject,
            "stub call"
        );
        Ok(())
    }
}
