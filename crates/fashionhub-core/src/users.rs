//! Accounts and the moderation trail kept by administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum UserRole ("user role") {
        Brand => "brand",
        Supplier => "supplier",
        Expert => "expert",
        Admin => "admin",
    }
}

labeled_enum! {
    pub enum UserStatus ("user status") {
        Pending => "pending",
        Approved => "approved",
        Banned => "banned",
        Suspended => "suspended",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == UserStatus::Approved
    }
}

/// Partial update of a [`User`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }
}

labeled_enum! {
    pub enum AdminActionType ("admin action") {
        ApproveUser => "approve_user",
        BanUser => "ban_user",
        UnlistProfile => "unlist_profile",
        HideBrief => "hide_brief",
        FeatureBrief => "feature_brief",
        FeatureProfile => "feature_profile",
    }
}

labeled_enum! {
    pub enum AdminTargetType ("admin target") {
        User => "user",
        Profile => "profile",
        Brief => "brief",
    }
}

impl AdminActionType {
    /// The kind of record this action operates on.
    #[must_use]
    pub fn target_type(self) -> AdminTargetType {
        match self {
            AdminActionType::ApproveUser | AdminActionType::BanUser => AdminTargetType::User,
            AdminActionType::UnlistProfile | AdminActionType::FeatureProfile => {
                AdminTargetType::Profile
            }
            AdminActionType::HideBrief | AdminActionType::FeatureBrief => AdminTargetType::Brief,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAction {
    pub id: String,
    pub admin_id: String,
    pub action_type: AdminActionType,
    pub target_type: AdminTargetType,
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_date: DateTime<Utc>,
}

/// An admin action before the backend assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdminAction {
    pub admin_id: String,
    pub action_type: AdminActionType,
    pub target_type: AdminTargetType,
    pub target_id: String,
    pub reason: Option<String>,
}

impl NewAdminAction {
    /// Build an action whose target type is derived from the action type.
    #[must_use]
    pub fn new(admin_id: &str, action_type: AdminActionType, target_id: &str) -> Self {
        Self {
            admin_id: admin_id.to_string(),
            action_type,
            target_type: action_type.target_type(),
            target_id: target_id.to_string(),
            reason: None,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    #[must_use]
    pub fn record(&self, id: String, now: DateTime<Utc>) -> AdminAction {
        AdminAction {
            id,
            admin_id: self.admin_id.clone(),
            action_type: self.action_type,
            target_type: self.target_type,
            target_id: self.target_id.clone(),
            reason: self.reason.clone(),
            created_date: now,
        }
    }
}
