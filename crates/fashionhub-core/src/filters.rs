//! Filter arguments accepted by the brief list and profile search operations.
//!
//! Within a field the listed values are alternatives (any may match); across
//! fields every populated criterion must match. Empty lists and `None` match
//! everything.

use serde::{Deserialize, Serialize};

use crate::briefs::{Brief, BriefCategory, BriefStatus, ProductCategory};
use crate::profiles::{PricingRange, Profile, ProfileCategory, SupplierCapability, Tag};
use crate::users::UserRole;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFilters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<UserRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<ProfileCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capability: Vec<SupplierCapability>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub region: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pricing_range: Vec<PricingRange>,
}

impl ProfileFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, profile: &Profile) -> bool {
        if !self.role.is_empty() && !self.role.contains(&profile.role()) {
            return false;
        }

        if !self.category.is_empty() {
            let Profile::Brand(brand) = profile else {
                return false;
            };
            if !any_shared(&self.category, &brand.categories) {
                return false;
            }
        }

        if !self.capability.is_empty() {
            let Profile::Supplier(supplier) = profile else {
                return false;
            };
            if !any_shared(&self.capability, &supplier.capabilities) {
                return false;
            }
        }

        if !self.region.is_empty() && !any_shared(&self.region, profile.regions()) {
            return false;
        }

        if self.moq_min.is_some() || self.moq_max.is_some() {
            match profile.moq_range() {
                Some(range) if range.overlaps(self.moq_min, self.moq_max) => {}
                _ => return false,
            }
        }

        if !self.tags.is_empty() && !any_shared(&self.tags, profile.tags()) {
            return false;
        }

        if !self.pricing_range.is_empty() {
            match profile.pricing_range() {
                Some(p) if self.pricing_range.contains(&p) => {}
                _ => return false,
            }
        }

        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefFilters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<BriefCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_category: Vec<ProductCategory>,
    /// Location preference labels, e.g. `australia_only`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq_max: Option<u32>,
    /// `Some(true)` keeps only briefs tagged `sustainable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<BriefStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl BriefFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, brief: &Brief) -> bool {
        if !self.category.is_empty() && !self.category.contains(&brief.category) {
            return false;
        }

        if !self.product_category.is_empty()
            && !any_shared(&self.product_category, &brief.product_category)
        {
            return false;
        }

        if !self.location.is_empty()
            && !self
                .location
                .iter()
                .any(|l| l == brief.location_preference.as_str())
        {
            return false;
        }

        if self.moq_min.is_some() || self.moq_max.is_some() {
            let Some(quantity) = brief.quantity_moq else {
                return false;
            };
            if self.moq_min.is_some_and(|min| quantity < min)
                || self.moq_max.is_some_and(|max| quantity > max)
            {
                return false;
            }
        }

        if self.sustainability == Some(true) && !brief.tags.contains(&Tag::Sustainable) {
            return false;
        }

        if !self.tags.is_empty() && !any_shared(&self.tags, &brief.tags) {
            return false;
        }

        if !self.status.is_empty() && !self.status.contains(&brief.status) {
            return false;
        }

        if let Some(wanted) = self.timeline.as_deref() {
            match brief.timeline.as_deref() {
                Some(timeline) if timeline.eq_ignore_ascii_case(wanted.trim()) => {}
                _ => return false,
            }
        }

        true
    }
}

fn any_shared<T: PartialEq>(wanted: &[T], present: &[T]) -> bool {
    wanted.iter().any(|w| present.contains(w))
}
