//! Process-local backend that keeps every record in memory.
//!
//! Unlike [`crate::StubBackend`] it remembers what it is given, enforces the
//! brief status lifecycle and records outgoing notifications so callers can
//! inspect them.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fashionhub_core::{
    new_id, sort_records, AdminAction, Brief, BriefFilters, BriefPatch, BriefResponse,
    BriefStatus, BriefVisibility, ContactMessage, CoreError, DigestFrequency, DirectoryCriteria,
    NewAdminAction, NewBrief, NewProfile, NewResponse, Profile, ProfileFilters, ResponseStatus,
    SortKey, User, UserPatch, UserStatus,
};
use tokio::sync::Mutex;

use crate::api::{
    AdminApi, AuthApi, AuthResponse, BriefApi, Credentials, NotificationApi, ProfileApi,
    ResponseApi, SignupRequest, UserApi, UserQuery,
};
use crate::error::ClientError;

/// A notification accepted by [`InMemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentNotification {
    Digest {
        user_id: String,
        frequency: DigestFrequency,
    },
    Contact(ContactMessage),
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    /// token -> user id
    tokens: HashMap<String, String>,
    profiles: Vec<Profile>,
    featured_profiles: HashSet<String>,
    briefs: Vec<Brief>,
    responses: Vec<BriefResponse>,
    actions: Vec<AdminAction>,
    outbox: Vec<SentNotification>,
}

impl State {
    fn user_mut(&mut self, id: &str) -> Result<&mut User, ClientError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ClientError::not_found("user", id))
    }

    fn brief_mut(&mut self, id: &str) -> Result<&mut Brief, ClientError> {
        self.briefs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ClientError::not_found("brief", id))
    }

    fn response_mut(&mut self, id: &str) -> Result<&mut BriefResponse, ClientError> {
        self.responses
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::not_found("response", id))
    }

    fn issue_token(&mut self, user_id: &str) -> String {
        let token = new_id();
        self.tokens.insert(token.clone(), user_id.to_string());
        token
    }
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.state.get_mut().users.extend(users);
        self
    }

    #[must_use]
    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.state.get_mut().profiles.extend(profiles);
        self
    }

    #[must_use]
    pub fn with_briefs(mut self, briefs: Vec<Brief>) -> Self {
        self.state.get_mut().briefs.extend(briefs);
        self
    }

    pub async fn is_profile_featured(&self, profile_id: &str) -> bool {
        self.state
            .lock()
            .await
            .featured_profiles
            .contains(profile_id)
    }

    /// Notifications accepted so far, oldest first.
    pub async fn sent(&self) -> Vec<SentNotification> {
        self.state.lock().await.outbox.clone()
    }
}

/// Overwrite the identity and timestamps of `profile` in place.
fn restamp(
    profile: &mut Profile,
    id: &str,
    user_id: &str,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
) {
    let (p_id, p_user, p_created, p_updated) = match profile {
        Profile::Brand(p) => (&mut p.id, &mut p.user_id, &mut p.created_date, &mut p.updated_date),
        Profile::Supplier(p) => (&mut p.id, &mut p.user_id, &mut p.created_date, &mut p.updated_date),
        Profile::Expert(p) => (&mut p.id, &mut p.user_id, &mut p.created_date, &mut p.updated_date),
    };
    *p_id = id.to_string();
    *p_user = user_id.to_string();
    *p_created = created;
    *p_updated = updated;
}

#[async_trait]
impl AuthApi for InMemoryBackend {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.email.eq_ignore_ascii_case(&credentials.email))
            .ok_or_else(|| ClientError::not_found("account", &credentials.email))?;
        if user.status == UserStatus::Banned {
            return Err(ClientError::Rejected(format!(
                "account {} is banned",
                user.email
            )));
        }
        user.last_login = Some(now);
        let user = user.clone();
        let token = state.issue_token(&user.id);
        tracing::info!(operation = "auth.login", user_id = %user.id, "signed in");
        Ok(AuthResponse { user, token })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        let mut state = self.state.lock().await;
        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&request.email))
        {
            return Err(ClientError::Rejected(format!(
                "an account already exists for {}",
                request.email
            )));
        }
        let user = User {
            id: new_id(),
            email: request.email.clone(),
            role: request.role,
            status: UserStatus::Pending,
            created_date: Utc::now(),
            approved_date: None,
            last_login: None,
        };
        state.users.push(user.clone());
        let token = state.issue_token(&user.id);
        tracing::info!(operation = "auth.signup", user_id = %user.id, role = %user.role, "account created");
        Ok(AuthResponse { user, token })
    }

    async fn send_magic_link(&self, email: &str) -> Result<(), ClientError> {
        tracing::info!(operation = "auth.send_magic_link", email, "magic link requested");
        Ok(())
    }

    async fn logout(&self, token: &str) -> Result<(), ClientError> {
        self.state.lock().await.tokens.remove(token);
        tracing::info!(operation = "auth.logout", "token revoked");
        Ok(())
    }

    async fn get_current_user(&self, token: &str) -> Result<Option<User>, ClientError> {
        let state = self.state.lock().await;
        let user_id = state
            .tokens
            .get(token)
            .ok_or(ClientError::NotAuthenticated)?;
        Ok(state.users.iter().find(|u| &u.id == user_id).cloned())
    }
}

#[async_trait]
impl UserApi for InMemoryBackend {
    async fn get(&self, id: &str) -> Result<User, ClientError> {
        let mut state = self.state.lock().await;
        state.user_mut(id).cloned()
    }

    async fn update(&self, id: &str, patch: &UserPatch) -> Result<User, ClientError> {
        let mut state = self.state.lock().await;
        let user = state.user_mut(id)?;
        patch.apply(user);
        Ok(user.clone())
    }

    async fn approve(&self, id: &str) -> Result<User, ClientError> {
        let mut state = self.state.lock().await;
        let user = state.user_mut(id)?;
        user.status = UserStatus::Approved;
        user.approved_date = Some(Utc::now());
        tracing::info!(operation = "users.approve", user_id = id, "account approved");
        Ok(user.clone())
    }

    async fn ban(&self, id: &str, reason: Option<&str>) -> Result<User, ClientError> {
        let mut state = self.state.lock().await;
        let user = state.user_mut(id)?;
        user.status = UserStatus::Banned;
        let user = user.clone();
        state.tokens.retain(|_, owner| owner != id);
        tracing::info!(operation = "users.ban", user_id = id, reason, "account banned");
        Ok(user)
    }

    async fn list(&self, query: UserQuery) -> Result<Vec<User>, ClientError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .filter(|u| query.matches(u))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProfileApi for InMemoryBackend {
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, ClientError> {
        let state = self.state.lock().await;
        Ok(state
            .profiles
            .iter()
            .find(|p| p.user_id() == user_id)
            .cloned())
    }

    async fn create(&self, profile: &NewProfile) -> Result<Profile, ClientError> {
        let mut state = self.state.lock().await;
        if state
            .profiles
            .iter()
            .any(|p| p.user_id() == profile.user_id)
        {
            return Err(ClientError::Rejected(format!(
                "user {} already has a profile",
                profile.user_id
            )));
        }
        let created = profile.build(new_id(), Utc::now())?;
        state.profiles.push(created.clone());
        tracing::info!(
            operation = "profiles.create",
            profile_id = %created.id(),
            role = %created.role(),
            "profile created"
        );
        Ok(created)
    }

    async fn update(&self, user_id: &str, profile: &Profile) -> Result<Profile, ClientError> {
        let mut state = self.state.lock().await;
        let existing = state
            .profiles
            .iter_mut()
            .find(|p| p.user_id() == user_id)
            .ok_or_else(|| ClientError::not_found("profile", user_id))?;
        if existing.role() != profile.role() {
            return Err(CoreError::RoleMismatch {
                expected: existing.role(),
                found: profile.role(),
            }
            .into());
        }
        let id = existing.id().to_string();
        let created = existing.created_date();
        let mut replacement = profile.clone();
        restamp(&mut replacement, &id, user_id, created, Utc::now());
        *existing = replacement.clone();
        Ok(replacement)
    }

    async fn search(
        &self,
        filters: &ProfileFilters,
        query: Option<&str>,
    ) -> Result<Vec<Profile>, ClientError> {
        let state = self.state.lock().await;
        let text = DirectoryCriteria {
            query: query.map(str::to_string),
            ..DirectoryCriteria::default()
        };
        Ok(state
            .profiles
            .iter()
            .filter(|p| filters.matches(p) && text.matches(p))
            .cloned()
            .collect())
    }

    async fn feature(&self, profile_id: &str, featured: bool) -> Result<Profile, ClientError> {
        let mut state = self.state.lock().await;
        let profile = state
            .profiles
            .iter()
            .find(|p| p.id() == profile_id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("profile", profile_id))?;
        if featured {
            state.featured_profiles.insert(profile_id.to_string());
        } else {
            state.featured_profiles.remove(profile_id);
        }
        Ok(profile)
    }
}

#[async_trait]
impl BriefApi for InMemoryBackend {
    async fn create(&self, brief: &NewBrief) -> Result<Brief, ClientError> {
        let created = brief.build(new_id(), Utc::now())?;
        self.state.lock().await.briefs.push(created.clone());
        tracing::info!(operation = "briefs.create", brief_id = %created.id, "brief posted");
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Brief, ClientError> {
        let mut state = self.state.lock().await;
        state.brief_mut(id).cloned()
    }

    async fn update(&self, id: &str, patch: &BriefPatch) -> Result<Brief, ClientError> {
        let mut state = self.state.lock().await;
        let brief = state.brief_mut(id)?;
        patch.apply(brief, Utc::now())?;
        Ok(brief.clone())
    }

    async fn update_status(&self, id: &str, status: BriefStatus) -> Result<Brief, ClientError> {
        let mut state = self.state.lock().await;
        let brief = state.brief_mut(id)?;
        let next = brief
            .status
            .transition(status)
            .map_err(|e| ClientError::Rejected(e.to_string()))?;
        tracing::info!(
            operation = "briefs.update_status",
            brief_id = id,
            from = %brief.status,
            to = %next,
            "brief status changed"
        );
        brief.status = next;
        brief.updated_date = Utc::now();
        Ok(brief.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock().await;
        let before = state.briefs.len();
        state.briefs.retain(|b| b.id != id);
        if state.briefs.len() == before {
            return Err(ClientError::not_found("brief", id));
        }
        tracing::info!(operation = "briefs.delete", brief_id = id, "brief deleted");
        Ok(())
    }

    async fn list(
        &self,
        filters: Option<&BriefFilters>,
        sort_by: Option<SortKey>,
    ) -> Result<Vec<Brief>, ClientError> {
        let state = self.state.lock().await;
        let mut briefs: Vec<Brief> = state
            .briefs
            .iter()
            .filter(|b| filters.is_none_or(|f| f.matches(b)))
            .cloned()
            .collect();
        if let Some(key) = sort_by {
            sort_records(&mut briefs, key);
        }
        Ok(briefs)
    }

    async fn feature(&self, id: &str, featured: bool) -> Result<Brief, ClientError> {
        let mut state = self.state.lock().await;
        let brief = state.brief_mut(id)?;
        brief.featured = featured;
        brief.updated_date = Utc::now();
        Ok(brief.clone())
    }

    async fn get_matching(&self, user_id: &str) -> Result<Vec<Brief>, ClientError> {
        let state = self.state.lock().await;
        let Some(profile) = state.profiles.iter().find(|p| p.user_id() == user_id) else {
            return Ok(Vec::new());
        };
        let tags = profile.tags();
        let mut matching: Vec<Brief> = state
            .briefs
            .iter()
            .filter(|b| {
                b.status == BriefStatus::Open
                    && b.visibility == BriefVisibility::Public
                    && b.user_id != user_id
                    && b.tags.iter().any(|t| tags.contains(t))
            })
            .cloned()
            .collect();
        sort_records(&mut matching, SortKey::NEWEST_FIRST);
        Ok(matching)
    }
}

#[async_trait]
impl ResponseApi for InMemoryBackend {
    async fn create(&self, response: &NewResponse) -> Result<BriefResponse, ClientError> {
        let mut state = self.state.lock().await;
        if !state.briefs.iter().any(|b| b.id == response.brief_id) {
            return Err(ClientError::not_found("brief", &response.brief_id));
        }
        let created = response.build(new_id(), Utc::now())?;
        state.responses.push(created.clone());
        tracing::info!(
            operation = "responses.create",
            response_id = %created.id,
            brief_id = %created.brief_id,
            "response posted"
        );
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<BriefResponse, ClientError> {
        let mut state = self.state.lock().await;
        state.response_mut(id).cloned()
    }

    async fn list(
        &self,
        brief_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<BriefResponse>, ClientError> {
        let state = self.state.lock().await;
        Ok(state
            .responses
            .iter()
            .filter(|r| brief_id.is_none_or(|id| r.brief_id == id))
            .filter(|r| user_id.is_none_or(|id| r.user_id == id))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: &str,
        status: ResponseStatus,
    ) -> Result<BriefResponse, ClientError> {
        let mut state = self.state.lock().await;
        let response = state.response_mut(id)?;
        response.status = status;
        response.updated_date = Utc::now();
        Ok(response.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock().await;
        let before = state.responses.len();
        state.responses.retain(|r| r.id != id);
        if state.responses.len() == before {
            return Err(ClientError::not_found("response", id));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminApi for InMemoryBackend {
    async fn get_actions(&self) -> Result<Vec<AdminAction>, ClientError> {
        Ok(self.state.lock().await.actions.clone())
    }

    async fn create_action(&self, action: &NewAdminAction) -> Result<AdminAction, ClientError> {
        let recorded = action.record(new_id(), Utc::now());
        self.state.lock().await.actions.push(recorded.clone());
        tracing::info!(
            operation = "admin.create_action",
            action_type = %recorded.action_type,
            target_id = %recorded.target_id,
            "admin action recorded"
        );
        Ok(recorded)
    }
}

#[async_trait]
impl NotificationApi for InMemoryBackend {
    async fn send_brief_digest(
        &self,
        user_id: &str,
        frequency: DigestFrequency,
    ) -> Result<(), ClientError> {
        self.state.lock().await.outbox.push(SentNotification::Digest {
            user_id: user_id.to_string(),
            frequency,
        });
        Ok(())
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ClientError> {
        message.validate()?;
        self.state
            .lock()
            .await
            .outbox
            .push(SentNotification::Contact(message.clone()));
        Ok(())
    }
}
