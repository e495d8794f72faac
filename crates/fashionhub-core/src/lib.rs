#[macro_use]
mod labels;

pub mod access;
pub mod app_config;
pub mod briefs;
pub mod config;
pub mod directory;
pub mod filters;
pub mod messages;
pub mod onboarding;
pub mod pages;
pub mod profiles;
pub mod seed;
pub mod sort;
pub mod users;

#[cfg(test)]
mod test_fixtures;

pub use access::{AccessDecision, AccessPolicy};
pub use app_config::{AppConfig, Environment};
pub use briefs::{
    BoardQuery, Brief, BriefCategory, BriefPatch, BriefResponse, BriefStatus, BriefVisibility,
    BudgetRange, ClientTeamContact, LocationPreference, NewBrief, NewResponse, ProductCategory,
    ResponseStatus,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{DirectoryCriteria, DirectoryStats, DirectoryView, ProfileDirectoryFilter};
pub use filters::{BriefFilters, ProfileFilters};
pub use messages::{ContactMessage, DigestFrequency};
pub use onboarding::{
    BrandDraft, ExpertDraft, NewProfile, OnboardingDraft, OnboardingFlow, OnboardingStep,
    SupplierDraft,
};
pub use pages::create_page_url;
pub use profiles::{
    BrandProfile, CompanySize, ExpertProfile, PricingRange, Profile, ProfileCategory,
    SocialLinks, SupplierCapability, SupplierProfile, Tag, ValueRange,
};
pub use seed::{load_directory, DirectoryFile};
pub use sort::{sort_records, SortDirection, SortField, SortKey, Sortable};
pub use users::{
    AdminAction, AdminActionType, AdminTargetType, NewAdminAction, User, UserPatch, UserRole,
    UserStatus,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("cannot move brief from {from} to {to}")]
    InvalidTransition { from: BriefStatus, to: BriefStatus },

    #[error("profile details are for a {found} but the account is a {expected}")]
    RoleMismatch { expected: UserRole, found: UserRole },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read directory file {path}: {source}")]
    DirectoryFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse directory file: {0}")]
    DirectoryFileParse(#[from] serde_yaml::Error),

    #[error("directory validation failed: {0}")]
    Validation(String),
}

/// Generate a fresh record identifier.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
