//! Directory profiles for the three kinds of professionals on the hub.
//!
//! A [`Profile`] is an explicit sum type serialized with a `kind` tag, so a
//! supplier that lists no capabilities is still a supplier and can never be
//! mistaken for a malformed brand record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels::humanize;
use crate::users::UserRole;

labeled_enum! {
    pub enum ProfileCategory ("profile category") {
        Streetwear => "streetwear",
        Rtw => "rtw",
        Luxury => "luxury",
        Uniforms => "uniforms",
        Activewear => "activewear",
        Swim => "swim",
        Accessories => "accessories",
        Footwear => "footwear",
        Wovens => "wovens",
        Knits => "knits",
        Denim => "denim",
    }
}

labeled_enum! {
    pub enum SupplierCapability ("supplier capability") {
        FabricSupplier => "fabric_supplier",
        CutSew => "cut_sew",
        PatternMaker => "pattern_maker",
        FullProduction => "full_production",
        SamplingOnly => "sampling_only",
        Logistics => "logistics",
        DesignSupport => "design_support",
        TechnicalConsulting => "technical_consulting",
    }
}

labeled_enum! {
    pub enum Tag ("tag") {
        LowMoq => "low_moq",
        Sustainable => "sustainable",
        EthicalCertified => "ethical_certified",
        SamplingOnly => "sampling_only",
        FullPackage => "full_package",
        FastTurnaround => "fast_turnaround",
        CustomDesign => "custom_design",
        BulkProduction => "bulk_production",
    }
}

labeled_enum! {
    pub enum CompanySize ("company size") {
        Startup => "startup",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Enterprise => "enterprise",
    }
}

labeled_enum! {
    pub enum PricingRange ("pricing range") {
        Budget => "budget",
        Mid => "mid",
        Premium => "premium",
        Luxury => "luxury",
    }
}

impl CompanySize {
    /// Headcount band shown next to the size during onboarding.
    #[must_use]
    pub fn headcount(self) -> &'static str {
        match self {
            CompanySize::Startup => "1-5 employees",
            CompanySize::Small => "6-20 employees",
            CompanySize::Medium => "21-50 employees",
            CompanySize::Large => "51-200 employees",
            CompanySize::Enterprise => "200+ employees",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Australian Business Number.
    #[serde(default)]
    pub abn: Option<String>,
    /// Markets the brand operates in, e.g. `["AU", "International"]`.
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub categories: Vec<ProfileCategory>,
    pub company_size: CompanySize,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub abn: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<SupplierCapability>,
    #[serde(default)]
    pub fabric_types: Vec<String>,
    #[serde(default)]
    pub moq_min: Option<u32>,
    #[serde(default)]
    pub moq_max: Option<u32>,
    #[serde(default)]
    pub pricing_range: Option<PricingRange>,
    #[serde(default)]
    pub regions_served: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// e.g. `OEKO-TEX`, `GOTS`.
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertProfile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub day_rate_min: Option<u32>,
    #[serde(default)]
    pub day_rate_max: Option<u32>,
    #[serde(default)]
    pub hourly_rate_min: Option<u32>,
    #[serde(default)]
    pub hourly_rate_max: Option<u32>,
    #[serde(default)]
    pub regions_served: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Profile {
    Brand(BrandProfile),
    Supplier(SupplierProfile),
    Expert(ExpertProfile),
}

/// An optional numeric range where either bound may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl ValueRange {
    /// Returns `None` when neither bound is set.
    #[must_use]
    pub fn from_bounds(min: Option<u32>, max: Option<u32>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// `false` only when both bounds are set and `min > max`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => lo <= hi,
            _ => true,
        }
    }

    /// Whether `[lo, hi]` shares at least one value with this range.
    #[must_use]
    pub fn overlaps(&self, lo: Option<u32>, hi: Option<u32>) -> bool {
        let below_hi = match (self.min, hi) {
            (Some(min), Some(hi)) => min <= hi,
            _ => true,
        };
        let above_lo = match (self.max, lo) {
            (Some(max), Some(lo)) => max >= lo,
            _ => true,
        };
        below_hi && above_lo
    }

    /// Render as `"{prefix}{min} - {prefix}{max}{suffix}"`, or `from`/`up to`
    /// for single-ended ranges.
    #[must_use]
    pub fn format(&self, prefix: &str, suffix: &str) -> String {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => format!("{prefix}{lo} - {prefix}{hi}{suffix}"),
            (Some(lo), None) => format!("from {prefix}{lo}{suffix}"),
            (None, Some(hi)) => format!("up to {prefix}{hi}{suffix}"),
            (None, None) => String::new(),
        }
    }
}

impl Profile {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Profile::Brand(p) => &p.id,
            Profile::Supplier(p) => &p.id,
            Profile::Expert(p) => &p.id,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Profile::Brand(p) => &p.user_id,
            Profile::Supplier(p) => &p.user_id,
            Profile::Expert(p) => &p.user_id,
        }
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        match self {
            Profile::Brand(_) => UserRole::Brand,
            Profile::Supplier(_) => UserRole::Supplier,
            Profile::Expert(_) => UserRole::Expert,
        }
    }

    #[must_use]
    pub fn has_categories(&self) -> bool {
        matches!(self, Profile::Brand(_))
    }

    #[must_use]
    pub fn has_capabilities(&self) -> bool {
        matches!(self, Profile::Supplier(_))
    }

    #[must_use]
    pub fn has_skills(&self) -> bool {
        matches!(self, Profile::Expert(_))
    }

    /// Company name for brands and suppliers, personal name for experts.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self {
            Profile::Brand(p) => &p.company_name,
            Profile::Supplier(p) => &p.company_name,
            Profile::Expert(p) => &p.name,
        }
    }

    /// Badge text identifying the kind of profile.
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        match self {
            Profile::Brand(_) => "Brand",
            Profile::Supplier(_) => "Supplier",
            Profile::Expert(_) => "Expert",
        }
    }

    /// Icon identifier for the profile kind.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Profile::Brand(_) => "building",
            Profile::Supplier(_) => "factory",
            Profile::Expert(_) => "user",
        }
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        match self {
            Profile::Brand(p) => p.bio.as_deref(),
            Profile::Supplier(p) => p.bio.as_deref(),
            Profile::Expert(p) => p.bio.as_deref(),
        }
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        match self {
            Profile::Brand(p) => p.website.as_deref(),
            Profile::Supplier(p) => p.website.as_deref(),
            Profile::Expert(p) => p.website.as_deref(),
        }
    }

    #[must_use]
    pub fn created_date(&self) -> DateTime<Utc> {
        match self {
            Profile::Brand(p) => p.created_date,
            Profile::Supplier(p) => p.created_date,
            Profile::Expert(p) => p.created_date,
        }
    }

    #[must_use]
    pub fn updated_date(&self) -> DateTime<Utc> {
        match self {
            Profile::Brand(p) => p.updated_date,
            Profile::Supplier(p) => p.updated_date,
            Profile::Expert(p) => p.updated_date,
        }
    }

    /// Brands carry no tags.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Profile::Brand(_) => &[],
            Profile::Supplier(p) => &p.tags,
            Profile::Expert(p) => &p.tags,
        }
    }

    /// Regions served, or the operating locations for a brand.
    #[must_use]
    pub fn regions(&self) -> &[String] {
        match self {
            Profile::Brand(p) => &p.locations,
            Profile::Supplier(p) => &p.regions_served,
            Profile::Expert(p) => &p.regions_served,
        }
    }

    /// The role-specific list as raw labels: categories, capabilities or skills.
    #[must_use]
    pub fn role_items(&self) -> Vec<&str> {
        match self {
            Profile::Brand(p) => p.categories.iter().map(|c| c.as_str()).collect(),
            Profile::Supplier(p) => p.capabilities.iter().map(|c| c.as_str()).collect(),
            Profile::Expert(p) => p.skills.iter().map(String::as_str).collect(),
        }
    }

    /// The first two role-specific items in human form, falling back to the
    /// type label when the list is empty.
    #[must_use]
    pub fn subtitle(&self) -> String {
        let items: Vec<String> = self
            .role_items()
            .into_iter()
            .take(2)
            .map(humanize)
            .collect();
        if items.is_empty() {
            self.type_label().to_string()
        } else {
            items.join(", ")
        }
    }

    /// Lower-cased text the directory query is matched against: display name,
    /// bio, and skills or capabilities joined by spaces.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.display_title()];
        if let Some(bio) = self.bio() {
            parts.push(bio);
        }
        let listed = match self {
            Profile::Brand(_) => Vec::new(),
            Profile::Supplier(_) | Profile::Expert(_) => self.role_items(),
        };
        parts.extend(listed);
        parts.join(" ").to_lowercase()
    }

    #[must_use]
    pub fn moq_range(&self) -> Option<ValueRange> {
        match self {
            Profile::Supplier(p) => ValueRange::from_bounds(p.moq_min, p.moq_max),
            _ => None,
        }
    }

    #[must_use]
    pub fn day_rate(&self) -> Option<ValueRange> {
        match self {
            Profile::Expert(p) => ValueRange::from_bounds(p.day_rate_min, p.day_rate_max),
            _ => None,
        }
    }

    #[must_use]
    pub fn hourly_rate(&self) -> Option<ValueRange> {
        match self {
            Profile::Expert(p) => ValueRange::from_bounds(p.hourly_rate_min, p.hourly_rate_max),
            _ => None,
        }
    }

    #[must_use]
    pub fn pricing_range(&self) -> Option<PricingRange> {
        match self {
            Profile::Supplier(p) => p.pricing_range,
            _ => None,
        }
    }

    #[must_use]
    pub fn company_size(&self) -> Option<CompanySize> {
        match self {
            Profile::Brand(p) => Some(p.company_size),
            _ => None,
        }
    }

    #[must_use]
    pub fn certifications(&self) -> &[String] {
        match self {
            Profile::Brand(_) => &[],
            Profile::Supplier(p) => &p.certifications,
            Profile::Expert(p) => &p.certifications,
        }
    }

    /// One-line summary of the numeric details present on the profile,
    /// e.g. `"MOQ 100 - 10000 · mid"` or `"$500 - $800/day"`.
    #[must_use]
    pub fn rate_summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(moq) = self.moq_range() {
            parts.push(format!("MOQ {}", moq.format("", "")));
        }
        if let Some(pricing) = self.pricing_range() {
            parts.push(pricing.to_string());
        }
        if let Some(day) = self.day_rate() {
            parts.push(day.format("$", "/day"));
        }
        if let Some(hour) = self.hourly_rate() {
            parts.push(hour.format("$", "/hr"));
        }
        if let Some(size) = self.company_size() {
            parts.push(format!("{size} ({})", size.headcount()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }

    pub(crate) fn ranges(&self) -> Vec<(&'static str, ValueRange)> {
        [
            ("moq", self.moq_range()),
            ("day rate", self.day_rate()),
            ("hourly rate", self.hourly_rate()),
        ]
        .into_iter()
        .filter_map(|(name, range)| range.map(|r| (name, r)))
        .collect()
    }
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
