//! Collaborator contracts for everything the hub delegates to a backend.
//!
//! Each area is its own trait so callers can depend on only what they use.
//! [`Backend`] hands out every area and is implemented for any type that
//! implements all of them.

use async_trait::async_trait;
use fashionhub_core::{
    AdminAction, Brief, BriefFilters, BriefPatch, BriefResponse, BriefStatus, ContactMessage,
    DigestFrequency, NewAdminAction, NewBrief, NewProfile, NewResponse, Profile, ProfileFilters,
    ResponseStatus, SortKey, User, UserPatch, UserRole, UserStatus,
};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Sign-in request. Either a password or a magic-link token is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_link_token: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn email_only(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Result of a successful login or signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Optional narrowing for the user listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserQuery {
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.role.is_none_or(|r| r == user.role) && self.status.is_none_or(|s| s == user.status)
    }
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError>;
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError>;
    async fn send_magic_link(&self, email: &str) -> Result<(), ClientError>;
    /// Invalidate `token` on the backend.
    async fn logout(&self, token: &str) -> Result<(), ClientError>;
    /// Resolve the account behind a stored session token.
    async fn get_current_user(&self, token: &str) -> Result<Option<User>, ClientError>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get(&self, id: &str) -> Result<User, ClientError>;
    async fn update(&self, id: &str, patch: &UserPatch) -> Result<User, ClientError>;
    async fn approve(&self, id: &str) -> Result<User, ClientError>;
    async fn ban(&self, id: &str, reason: Option<&str>) -> Result<User, ClientError>;
    async fn list(&self, query: UserQuery) -> Result<Vec<User>, ClientError>;
}

#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// The profile owned by `user_id`, if onboarding has been completed.
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, ClientError>;
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ClientError>;
    /// Replace the details of the profile owned by `user_id`.
    async fn update(&self, user_id: &str, profile: &Profile) -> Result<Profile, ClientError>;
    async fn search(
        &self,
        filters: &ProfileFilters,
        query: Option<&str>,
    ) -> Result<Vec<Profile>, ClientError>;
    async fn feature(&self, profile_id: &str, featured: bool) -> Result<Profile, ClientError>;
}

#[async_trait]
pub trait BriefApi: Send + Sync {
    async fn create(&self, brief: &NewBrief) -> Result<Brief, ClientError>;
    async fn get(&self, id: &str) -> Result<Brief, ClientError>;
    async fn update(&self, id: &str, patch: &BriefPatch) -> Result<Brief, ClientError>;
    async fn update_status(&self, id: &str, status: BriefStatus) -> Result<Brief, ClientError>;
    /// Responses to the brief are left in place.
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
    async fn list(
        &self,
        filters: Option<&BriefFilters>,
        sort_by: Option<SortKey>,
    ) -> Result<Vec<Brief>, ClientError>;
    async fn feature(&self, id: &str, featured: bool) -> Result<Brief, ClientError>;
    /// Open briefs relevant to the profile owned by `user_id`.
    async fn get_matching(&self, user_id: &str) -> Result<Vec<Brief>, ClientError>;
}

#[async_trait]
pub trait ResponseApi: Send + Sync {
    async fn create(&self, response: &NewResponse) -> Result<BriefResponse, ClientError>;
    async fn get(&self, id: &str) -> Result<BriefResponse, ClientError>;
    async fn list(
        &self,
        brief_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<BriefResponse>, ClientError>;
    async fn update_status(
        &self,
        id: &str,
        status: ResponseStatus,
    ) -> Result<BriefResponse, ClientError>;
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn get_actions(&self) -> Result<Vec<AdminAction>, ClientError>;
    async fn create_action(&self, action: &NewAdminAction) -> Result<AdminAction, ClientError>;
}

#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn send_brief_digest(
        &self,
        user_id: &str,
        frequency: DigestFrequency,
    ) -> Result<(), ClientError>;
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ClientError>;
}

/// Every collaborator area behind one handle, grouped the way callers reach
/// them: `backend.briefs().create(..)`.
pub trait Backend: Send + Sync {
    fn auth(&self) -> &dyn AuthApi;
    fn users(&self) -> &dyn UserApi;
    fn profiles(&self) -> &dyn ProfileApi;
    fn briefs(&self) -> &dyn BriefApi;
    fn responses(&self) -> &dyn ResponseApi;
    fn admin(&self) -> &dyn AdminApi;
    fn notifications(&self) -> &dyn NotificationApi;
}

impl<T> Backend for T
where
    T: AuthApi + UserApi + ProfileApi + BriefApi + ResponseApi + AdminApi + NotificationApi,
{
    fn auth(&self) -> &dyn AuthApi {
        self
    }

    fn users(&self) -> &dyn UserApi {
        self
    }

    fn profiles(&self) -> &dyn ProfileApi {
        self
    }

    fn briefs(&self) -> &dyn BriefApi {
        self
    }

    fn responses(&self) -> &dyn ResponseApi {
        self
    }

    fn admin(&self) -> &dyn AdminApi {
        self
    }

    fn notifications(&self) -> &dyn NotificationApi {
        self
    }
}
