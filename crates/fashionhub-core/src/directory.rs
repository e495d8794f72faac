//! Client-side filtering of the professionals directory.
//!
//! The predicate is pure and order-preserving, so applying it twice with the
//! same criteria gives the same result as applying it once.

use crate::config::DEFAULT_FEATURED_COUNT;
use crate::filters::ProfileFilters;
use crate::profiles::{Profile, Tag};
use crate::users::UserRole;

/// Directory filter state. `None` (or an empty query) means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryCriteria {
    pub role: Option<UserRole>,
    pub region: Option<String>,
    pub tag: Option<Tag>,
    pub query: Option<String>,
}

impl DirectoryCriteria {
    /// Whether any of role, region or tag is set. The text query does not count.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.role.is_some() || self.region.is_some() || self.tag.is_some()
    }

    /// Reset every criterion, including the text query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The non-empty query, if any. Surrounding whitespace is part of the
    /// query and is matched as typed.
    #[must_use]
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Role and region forwarded to the search collaborator.
    #[must_use]
    pub fn to_profile_filters(&self) -> ProfileFilters {
        ProfileFilters {
            role: self.role.into_iter().collect(),
            region: self.region.iter().cloned().collect(),
            ..ProfileFilters::default()
        }
    }

    #[must_use]
    pub fn matches(&self, profile: &Profile) -> bool {
        if let Some(query) = self.query_text() {
            if !profile.searchable_text().contains(&query.to_lowercase()) {
                return false;
            }
        }

        if let Some(tag) = self.tag {
            if !profile.tags().contains(&tag) {
                return false;
            }
        }

        if let Some(role) = self.role {
            if profile.role() != role {
                return false;
            }
        }

        if let Some(region) = self.region.as_deref() {
            if !profile.regions().iter().any(|r| r == region) {
                return false;
            }
        }

        true
    }
}

/// Applies [`DirectoryCriteria`] and splits off the featured subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDirectoryFilter {
    featured_count: usize,
}

impl Default for ProfileDirectoryFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURED_COUNT)
    }
}

impl ProfileDirectoryFilter {
    #[must_use]
    pub fn new(featured_count: usize) -> Self {
        Self { featured_count }
    }

    #[must_use]
    pub fn featured_count(&self) -> usize {
        self.featured_count
    }

    /// Stable filter: matching profiles in input order.
    #[must_use]
    pub fn filter(&self, profiles: &[Profile], criteria: &DirectoryCriteria) -> Vec<Profile> {
        profiles
            .iter()
            .filter(|p| criteria.matches(p))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn apply(&self, profiles: &[Profile], criteria: &DirectoryCriteria) -> DirectoryView {
        DirectoryView {
            profiles: self.filter(profiles, criteria),
            featured_count: self.featured_count,
        }
    }
}

/// Result of a directory pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    pub profiles: Vec<Profile>,
    featured_count: usize,
}

impl DirectoryView {
    /// The leading entries of the filtered list. This is positional only and
    /// says nothing about profile quality.
    #[must_use]
    pub fn featured(&self) -> &[Profile] {
        let n = self.featured_count.min(self.profiles.len());
        &self.profiles[..n]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// `"1 professional"` / `"4 professionals"`.
    #[must_use]
    pub fn result_label(&self) -> String {
        let noun = if self.profiles.len() == 1 {
            "professional"
        } else {
            "professionals"
        };
        format!("{} {noun}", self.profiles.len())
    }
}

/// Per-role counts over an unfiltered directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub brands: usize,
    pub suppliers: usize,
    pub experts: usize,
}

impl DirectoryStats {
    #[must_use]
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        profiles.iter().fold(Self::default(), |mut stats, p| {
            match p {
                Profile::Brand(_) => stats.brands += 1,
                Profile::Supplier(_) => stats.suppliers += 1,
                Profile::Expert(_) => stats.experts += 1,
            }
            stats
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.brands + self.suppliers + self.experts
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
