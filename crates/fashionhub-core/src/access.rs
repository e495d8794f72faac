//! Gate for pages that need a signed-in, approved account.

use crate::pages::create_page_url;
use crate::users::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session is still being restored; show a spinner.
    Loading,
    Allowed,
    /// Send the visitor to this path instead.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Empty means any role.
    pub required_roles: Vec<UserRole>,
    pub require_approved: bool,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            required_roles: Vec::new(),
            require_approved: true,
        }
    }
}

impl AccessPolicy {
    /// Any signed-in account, approved or not. Used by onboarding.
    #[must_use]
    pub fn signed_in() -> Self {
        Self {
            required_roles: Vec::new(),
            require_approved: false,
        }
    }

    #[must_use]
    pub fn for_roles(roles: &[UserRole]) -> Self {
        Self {
            required_roles: roles.to_vec(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn evaluate(&self, loading: bool, user: Option<&User>) -> AccessDecision {
        if loading {
            return AccessDecision::Loading;
        }
        let Some(user) = user else {
            return AccessDecision::Redirect(create_page_url("Auth"));
        };
        if self.require_approved && !user.is_approved() {
            return AccessDecision::Redirect(create_page_url("Pending Approval"));
        }
        if !self.required_roles.is_empty() && !self.required_roles.contains(&user.role) {
            return AccessDecision::Redirect(create_page_url("Unauthorized"));
        }
        AccessDecision::Allowed
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::users::UserStatus;

    fn user(role: UserRole, status: UserStatus) -> User {
        User {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            role,
            status,
            created_date: Utc::now(),
            approved_date: None,
            last_login: None,
        }
    }

    fn redirect(path: &str) -> AccessDecision {
        AccessDecision::Redirect(path.to_string())
    }

    #[test]
    fn loading_wins_over_everything() {
        let policy = AccessPolicy::default();
        assert_eq!(policy.evaluate(true, None), AccessDecision::Loading);
    }

    #[test]
    fn anonymous_visitors_go_to_auth() {
        assert_eq!(AccessPolicy::default().evaluate(false, None), redirect("/auth"));
    }

    #[test]
    fn pending_accounts_wait_for_approval() {
        let pending = user(UserRole::Brand, UserStatus::Pending);
        assert_eq!(
            AccessPolicy::default().evaluate(false, Some(&pending)),
            redirect("/pending-approval")
        );
        assert_eq!(
            AccessPolicy::signed_in().evaluate(false, Some(&pending)),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn role_outside_required_set_is_unauthorized() {
        let supplier = user(UserRole::Supplier, UserStatus::Approved);
        let admin_only = AccessPolicy::for_roles(&[UserRole::Admin]);
        assert_eq!(admin_only.evaluate(false, Some(&supplier)), redirect("/unauthorized"));

        let trade = AccessPolicy::for_roles(&[UserRole::Brand, UserRole::Supplier]);
        assert_eq!(trade.evaluate(false, Some(&supplier)), AccessDecision::Allowed);
    }

    #[test]
    fn approval_is_checked_before_role() {
        let banned = user(UserRole::Expert, UserStatus::Banned);
        let admin_only = AccessPolicy::for_roles(&[UserRole::Admin]);
        assert_eq!(
            admin_only.evaluate(false, Some(&banned)),
            redirect("/pending-approval")
        );
    }
}
