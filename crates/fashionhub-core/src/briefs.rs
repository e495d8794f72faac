//! Briefs posted to the board and the responses professionals send back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profiles::Tag;
use crate::CoreError;

labeled_enum! {
    pub enum BriefCategory ("brief category") {
        Materials => "materials",
        Manufacturing => "manufacturing",
        TechnicalPattern => "technical_pattern",
        DesignSupport => "design_support",
        CollaborationPartnership => "collaboration_partnership",
        Logistics => "logistics",
    }
}

labeled_enum! {
    pub enum ProductCategory ("product category") {
        Wovens => "wovens",
        Knits => "knits",
        Denim => "denim",
        Activewear => "activewear",
        Swim => "swim",
        Accessories => "accessories",
        Footwear => "footwear",
    }
}

labeled_enum! {
    pub enum LocationPreference ("location preference") {
        AustraliaOnly => "australia_only",
        InternationalOk => "international_ok",
    }
}

labeled_enum! {
    pub enum BudgetRange ("budget range") {
        Under10k => "under_10k",
        From10kTo50k => "10k_50k",
        From50kTo100k => "50k_100k",
        Over100k => "100k_plus",
        Negotiable => "negotiable",
    }
}

labeled_enum! {
    pub enum BriefVisibility ("brief visibility") {
        Public => "public",
        ClientTeamOnly => "client_team_only",
    }
}

labeled_enum! {
    /// Lifecycle: `open → under_review → {closed, filled}`.
    pub enum BriefStatus ("brief status") {
        Open => "open",
        UnderReview => "under_review",
        Closed => "closed",
        Filled => "filled",
    }
}

labeled_enum! {
    pub enum ResponseStatus ("response status") {
        Pending => "pending",
        Shortlisted => "shortlisted",
        Declined => "declined",
        Accepted => "accepted",
    }
}

impl BriefCategory {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            BriefCategory::Materials => "Materials",
            BriefCategory::Manufacturing => "Manufacturing",
            BriefCategory::TechnicalPattern => "Technical/Pattern",
            BriefCategory::DesignSupport => "Design Support",
            BriefCategory::CollaborationPartnership => "Collaboration/Partnership",
            BriefCategory::Logistics => "Logistics",
        }
    }
}

impl BriefStatus {
    /// Whether the lifecycle allows moving from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: BriefStatus) -> bool {
        matches!(
            (self, next),
            (BriefStatus::Open, BriefStatus::UnderReview)
                | (
                    BriefStatus::UnderReview,
                    BriefStatus::Closed | BriefStatus::Filled
                )
        )
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if the lifecycle forbids the move.
    pub fn transition(self, next: BriefStatus) -> Result<BriefStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, BriefStatus::Closed | BriefStatus::Filled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTeamContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub id: String,
    /// Owner of the brief.
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: BriefCategory,
    pub product_category: Vec<ProductCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_moq: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    pub location_preference: LocationPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    pub nda_required: bool,
    pub visibility: BriefVisibility,
    pub status: BriefStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_team_contact: Option<ClientTeamContact>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_date: Option<DateTime<Utc>>,
    pub featured: bool,
}

/// The brief form. Defaults mirror a blank form: materials, Australia only,
/// public, no NDA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBrief {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: BriefCategory,
    pub product_category: Vec<ProductCategory>,
    pub quantity_moq: Option<u32>,
    pub timeline: Option<String>,
    pub location_preference: LocationPreference,
    pub budget_range: Option<BudgetRange>,
    pub nda_required: bool,
    pub visibility: BriefVisibility,
    pub client_team_contact: Option<ClientTeamContact>,
    pub tags: Vec<Tag>,
    pub expires_date: Option<DateTime<Utc>>,
}

impl Default for NewBrief {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            title: String::new(),
            description: String::new(),
            category: BriefCategory::Materials,
            product_category: Vec::new(),
            quantity_moq: None,
            timeline: None,
            location_preference: LocationPreference::AustraliaOnly,
            budget_range: None,
            nda_required: false,
            visibility: BriefVisibility::Public,
            client_team_contact: None,
            tags: Vec::new(),
            expires_date: None,
        }
    }
}

impl NewBrief {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.user_id.trim().is_empty() {
            return Err(CoreError::Validation("brief owner is required".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("brief title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "brief description is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn toggle_product_category(&mut self, category: ProductCategory) {
        crate::onboarding::toggle_selection(&mut self.product_category, category);
    }

    pub fn toggle_tag(&mut self, tag: Tag) {
        crate::onboarding::toggle_selection(&mut self.tags, tag);
    }

    /// Build the stored record: `open`, not featured, both timestamps `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a required field is missing.
    pub fn build(&self, id: String, now: DateTime<Utc>) -> Result<Brief, CoreError> {
        self.validate()?;
        Ok(Brief {
            id,
            user_id: self.user_id.clone(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            product_category: self.product_category.clone(),
            quantity_moq: self.quantity_moq,
            timeline: self.timeline.clone().filter(|t| !t.trim().is_empty()),
            location_preference: self.location_preference,
            budget_range: self.budget_range,
            nda_required: self.nda_required,
            visibility: self.visibility,
            status: BriefStatus::Open,
            client_team_contact: self.client_team_contact.clone(),
            tags: self.tags.clone(),
            created_date: now,
            updated_date: now,
            expires_date: self.expires_date,
            featured: false,
        })
    }
}

/// Partial update of a [`Brief`]. Status and featured flags have their own
/// operations and are not patchable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BriefPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<BriefCategory>,
    pub product_category: Option<Vec<ProductCategory>>,
    pub quantity_moq: Option<u32>,
    pub timeline: Option<String>,
    pub location_preference: Option<LocationPreference>,
    pub budget_range: Option<BudgetRange>,
    pub nda_required: Option<bool>,
    pub visibility: Option<BriefVisibility>,
    pub client_team_contact: Option<ClientTeamContact>,
    pub tags: Option<Vec<Tag>>,
    pub expires_date: Option<DateTime<Utc>>,
}

impl BriefPatch {
    /// Apply the patch, refusing to blank out a required field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] and leaves `brief` untouched if the
    /// patch would clear the title or description.
    pub fn apply(&self, brief: &mut Brief, now: DateTime<Utc>) -> Result<(), CoreError> {
        if self.title.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation("brief title is required".to_string()));
        }
        if self.description.as_ref().is_some_and(|d| d.trim().is_empty()) {
            return Err(CoreError::Validation(
                "brief description is required".to_string(),
            ));
        }

        if let Some(title) = &self.title {
            brief.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            brief.description = description.trim().to_string();
        }
        if let Some(category) = self.category {
            brief.category = category;
        }
        if let Some(products) = &self.product_category {
            brief.product_category.clone_from(products);
        }
        if let Some(quantity) = self.quantity_moq {
            brief.quantity_moq = Some(quantity);
        }
        if let Some(timeline) = &self.timeline {
            brief.timeline = Some(timeline.clone());
        }
        if let Some(location) = self.location_preference {
            brief.location_preference = location;
        }
        if let Some(budget) = self.budget_range {
            brief.budget_range = Some(budget);
        }
        if let Some(nda) = self.nda_required {
            brief.nda_required = nda;
        }
        if let Some(visibility) = self.visibility {
            brief.visibility = visibility;
        }
        if let Some(contact) = &self.client_team_contact {
            brief.client_team_contact = Some(contact.clone());
        }
        if let Some(tags) = &self.tags {
            brief.tags.clone_from(tags);
        }
        if let Some(expires) = self.expires_date {
            brief.expires_date = Some(expires);
        }
        brief.updated_date = now;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefResponse {
    pub id: String,
    pub brief_id: String,
    pub user_id: String,
    pub message: String,
    pub why_fit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    pub status: ResponseStatus,
    /// Public replies are shown under the brief like comments.
    pub is_public: bool,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResponse {
    pub brief_id: String,
    pub user_id: String,
    pub message: String,
    pub why_fit: String,
    pub profile_link: Option<String>,
    pub attachment_url: Option<String>,
    pub is_public: bool,
}

impl NewResponse {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the brief, author or message is missing.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.brief_id.trim().is_empty() {
            return Err(CoreError::Validation("response brief is required".to_string()));
        }
        if self.user_id.trim().is_empty() {
            return Err(CoreError::Validation("response author is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(CoreError::Validation(
                "response message is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the stored record with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a required field is missing.
    pub fn build(&self, id: String, now: DateTime<Utc>) -> Result<BriefResponse, CoreError> {
        self.validate()?;
        Ok(BriefResponse {
            id,
            brief_id: self.brief_id.clone(),
            user_id: self.user_id.clone(),
            message: self.message.trim().to_string(),
            why_fit: self.why_fit.trim().to_string(),
            profile_link: self.profile_link.clone(),
            attachment_url: self.attachment_url.clone(),
            status: ResponseStatus::Pending,
            is_public: self.is_public,
            created_date: now,
            updated_date: now,
        })
    }
}

/// Board search: free text over title or description plus optional category
/// and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardQuery {
    pub text: String,
    pub category: Option<BriefCategory>,
    pub status: Option<BriefStatus>,
}

impl BoardQuery {
    #[must_use]
    pub fn matches(&self, brief: &Brief) -> bool {
        let needle = self.text.trim().to_lowercase();
        let matches_text = needle.is_empty()
            || brief.title.to_lowercase().contains(&needle)
            || brief.description.to_lowercase().contains(&needle);
        let matches_category = self.category.is_none_or(|c| c == brief.category);
        let matches_status = self.status.is_none_or(|s| s == brief.status);
        matches_text && matches_category && matches_status
    }

    /// Keep matching briefs in input order.
    #[must_use]
    pub fn apply(&self, briefs: &[Brief]) -> Vec<Brief> {
        briefs.iter().filter(|b| self.matches(b)).cloned().collect()
    }
}

#[cfg(test)]
#[path = "briefs_test.rs"]
mod tests;
