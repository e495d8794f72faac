//! Three-step profile creation for a freshly signed-up account.
//!
//! The draft kind follows the account role. Free-text fields are kept as
//! plain strings while editing and only become `None` when blank at build time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profiles::{
    BrandProfile, CompanySize, ExpertProfile, PricingRange, Profile, ProfileCategory, SocialLinks,
    SupplierCapability, SupplierProfile, Tag, ValueRange,
};
use crate::users::{User, UserRole};
use crate::CoreError;

/// Add `item` if absent, remove it if present. Order of the rest is kept.
pub fn toggle_selection<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingStep {
    #[default]
    BasicInformation,
    BusinessDetails,
    CapabilitiesAndPreferences,
}

impl OnboardingStep {
    pub const COUNT: u8 = 3;

    /// 1-based position shown as "Step N of 3".
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInformation => 1,
            Self::BusinessDetails => 2,
            Self::CapabilitiesAndPreferences => 3,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::BusinessDetails => "Business Details",
            Self::CapabilitiesAndPreferences => "Capabilities & Preferences",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::BasicInformation => Some(Self::BusinessDetails),
            Self::BusinessDetails => Some(Self::CapabilitiesAndPreferences),
            Self::CapabilitiesAndPreferences => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::BasicInformation => None,
            Self::BusinessDetails => Some(Self::BasicInformation),
            Self::CapabilitiesAndPreferences => Some(Self::BusinessDetails),
        }
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandDraft {
    pub company_name: String,
    pub bio: String,
    pub website: String,
    pub abn: String,
    pub locations: Vec<String>,
    pub categories: Vec<ProfileCategory>,
    pub company_size: CompanySize,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl Default for BrandDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            bio: String::new(),
            website: String::new(),
            abn: String::new(),
            locations: Vec::new(),
            categories: Vec::new(),
            company_size: CompanySize::Small,
            social_links: SocialLinks::default(),
        }
    }
}

impl BrandDraft {
    pub fn toggle_location(&mut self, location: &str) {
        toggle_selection(&mut self.locations, location.to_string());
    }

    pub fn toggle_category(&mut self, category: ProfileCategory) {
        toggle_selection(&mut self.categories, category);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub company_name: String,
    pub bio: String,
    pub website: String,
    pub abn: String,
    pub capabilities: Vec<SupplierCapability>,
    pub fabric_types: Vec<String>,
    pub moq_min: Option<u32>,
    pub moq_max: Option<u32>,
    pub pricing_range: PricingRange,
    pub regions_served: Vec<String>,
    pub tags: Vec<Tag>,
}

impl Default for SupplierDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            bio: String::new(),
            website: String::new(),
            abn: String::new(),
            capabilities: Vec::new(),
            fabric_types: Vec::new(),
            moq_min: None,
            moq_max: None,
            pricing_range: PricingRange::Mid,
            regions_served: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl SupplierDraft {
    pub fn toggle_capability(&mut self, capability: SupplierCapability) {
        toggle_selection(&mut self.capabilities, capability);
    }

    pub fn toggle_region(&mut self, region: &str) {
        toggle_selection(&mut self.regions_served, region.to_string());
    }

    pub fn toggle_tag(&mut self, tag: Tag) {
        toggle_selection(&mut self.tags, tag);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertDraft {
    pub name: String,
    pub bio: String,
    pub website: String,
    pub skills: Vec<String>,
    pub day_rate_min: Option<u32>,
    pub day_rate_max: Option<u32>,
    pub hourly_rate_min: Option<u32>,
    pub hourly_rate_max: Option<u32>,
    pub regions_served: Vec<String>,
    pub tags: Vec<Tag>,
}

impl ExpertDraft {
    pub fn toggle_skill(&mut self, skill: &str) {
        toggle_selection(&mut self.skills, skill.to_string());
    }

    pub fn toggle_region(&mut self, region: &str) {
        toggle_selection(&mut self.regions_served, region.to_string());
    }

    pub fn toggle_tag(&mut self, tag: Tag) {
        toggle_selection(&mut self.tags, tag);
    }
}

/// Profile details collected during onboarding, one shape per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OnboardingDraft {
    Brand(BrandDraft),
    Supplier(SupplierDraft),
    Expert(ExpertDraft),
}

impl OnboardingDraft {
    /// Empty draft for the given account role. Anything that is not a brand
    /// or supplier onboards as an expert.
    #[must_use]
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Brand => Self::Brand(BrandDraft::default()),
            UserRole::Supplier => Self::Supplier(SupplierDraft::default()),
            UserRole::Expert | UserRole::Admin => Self::Expert(ExpertDraft::default()),
        }
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        match self {
            Self::Brand(_) => UserRole::Brand,
            Self::Supplier(_) => UserRole::Supplier,
            Self::Expert(_) => UserRole::Expert,
        }
    }

    /// Check required fields and range ordering.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Brand(d) => {
                require_text("company name", &d.company_name)?;
            }
            Self::Supplier(d) => {
                require_text("company name", &d.company_name)?;
                require_ordered("moq", d.moq_min, d.moq_max)?;
            }
            Self::Expert(d) => {
                require_text("name", &d.name)?;
                require_ordered("day rate", d.day_rate_min, d.day_rate_max)?;
                require_ordered("hourly rate", d.hourly_rate_min, d.hourly_rate_max)?;
            }
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_ordered(field: &str, min: Option<u32>, max: Option<u32>) -> Result<(), CoreError> {
    let ordered = ValueRange::from_bounds(min, max).is_none_or(|r| r.is_ordered());
    if !ordered {
        return Err(CoreError::Validation(format!(
            "{field} minimum must not exceed maximum"
        )));
    }
    Ok(())
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Payload for the profile create operation: draft details stamped with the
/// owning account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub user_id: String,
    pub details: OnboardingDraft,
}

impl NewProfile {
    /// Stamp `draft` with the account id after checking the draft kind fits
    /// the account role.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RoleMismatch`] when the draft belongs to another
    /// role, or [`CoreError::Validation`] when required fields are missing.
    pub fn for_user(user: &User, draft: OnboardingDraft) -> Result<Self, CoreError> {
        let expected = OnboardingDraft::for_role(user.role).role();
        let found = draft.role();
        if expected != found {
            return Err(CoreError::RoleMismatch { expected, found });
        }
        draft.validate()?;
        Ok(Self {
            user_id: user.id.clone(),
            details: draft,
        })
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.details.role()
    }

    /// Materialise the stored profile record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the details are incomplete.
    pub fn build(&self, id: String, now: DateTime<Utc>) -> Result<Profile, CoreError> {
        if self.user_id.trim().is_empty() {
            return Err(CoreError::Validation("user id is required".to_string()));
        }
        self.details.validate()?;

        let user_id = self.user_id.clone();
        let profile = match &self.details {
            OnboardingDraft::Brand(d) => Profile::Brand(BrandProfile {
                id,
                user_id,
                company_name: d.company_name.trim().to_string(),
                logo_url: None,
                bio: optional_text(&d.bio),
                website: optional_text(&d.website),
                abn: optional_text(&d.abn),
                locations: d.locations.clone(),
                categories: d.categories.clone(),
                company_size: d.company_size,
                social_links: d.social_links.clone(),
                created_date: now,
                updated_date: now,
            }),
            OnboardingDraft::Supplier(d) => Profile::Supplier(SupplierProfile {
                id,
                user_id,
                company_name: d.company_name.trim().to_string(),
                logo_url: None,
                bio: optional_text(&d.bio),
                website: optional_text(&d.website),
                abn: optional_text(&d.abn),
                capabilities: d.capabilities.clone(),
                fabric_types: d.fabric_types.clone(),
                moq_min: d.moq_min,
                moq_max: d.moq_max,
                pricing_range: Some(d.pricing_range),
                regions_served: d.regions_served.clone(),
                tags: d.tags.clone(),
                certifications: Vec::new(),
                created_date: now,
                updated_date: now,
            }),
            OnboardingDraft::Expert(d) => Profile::Expert(ExpertProfile {
                id,
                user_id,
                name: d.name.trim().to_string(),
                photo_url: None,
                bio: optional_text(&d.bio),
                website: optional_text(&d.website),
                skills: d.skills.clone(),
                day_rate_min: d.day_rate_min,
                day_rate_max: d.day_rate_max,
                hourly_rate_min: d.hourly_rate_min,
                hourly_rate_max: d.hourly_rate_max,
                regions_served: d.regions_served.clone(),
                tags: d.tags.clone(),
                certifications: Vec::new(),
                created_date: now,
                updated_date: now,
            }),
        };
        Ok(profile)
    }
}

/// Wizard state: current step plus the draft being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    pub draft: OnboardingDraft,
}

impl OnboardingFlow {
    #[must_use]
    pub fn for_role(role: UserRole) -> Self {
        Self {
            step: OnboardingStep::default(),
            draft: OnboardingDraft::for_role(role),
        }
    }

    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// "Step N of 3".
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step.number(), OnboardingStep::COUNT)
    }

    /// Move forward one step; stays on the last step.
    pub fn advance(&mut self) -> OnboardingStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move back one step; stays on the first step.
    pub fn back(&mut self) -> OnboardingStep {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
        self.step
    }

    /// Produce the create payload for `user`. The flow is left untouched so a
    /// failed submission can be retried.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`NewProfile::for_user`].
    pub fn submission(&self, user: &User) -> Result<NewProfile, CoreError> {
        NewProfile::for_user(user, self.draft.clone())
    }
}
