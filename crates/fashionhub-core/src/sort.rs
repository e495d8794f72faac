//! Sort keys in the `-field` convention: a leading `-` means descending.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::briefs::{Brief, BriefResponse};
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

labeled_enum! {
    pub enum SortField ("sort field") {
        CreatedDate => "created_date",
        UpdatedDate => "updated_date",
        Title => "title",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    /// `-created_date`, the default board ordering.
    pub const NEWEST_FIRST: SortKey = SortKey {
        field: SortField::CreatedDate,
        direction: SortDirection::Descending,
    };

    /// Keys offered by the brief board, in menu order.
    pub const BOARD_OPTIONS: [SortKey; 4] = [
        Self::NEWEST_FIRST,
        SortKey {
            field: SortField::CreatedDate,
            direction: SortDirection::Ascending,
        },
        SortKey {
            field: SortField::Title,
            direction: SortDirection::Ascending,
        },
        SortKey {
            field: SortField::Title,
            direction: SortDirection::Descending,
        },
    ];

    #[must_use]
    pub fn label(&self) -> String {
        match (self.field, self.direction) {
            (SortField::CreatedDate, SortDirection::Descending) => "Newest First".to_string(),
            (SortField::CreatedDate, SortDirection::Ascending) => "Oldest First".to_string(),
            (SortField::Title, SortDirection::Ascending) => "Title A-Z".to_string(),
            (SortField::Title, SortDirection::Descending) => "Title Z-A".to_string(),
            (SortField::UpdatedDate, SortDirection::Descending) => {
                "Recently Updated".to_string()
            }
            (SortField::UpdatedDate, SortDirection::Ascending) => {
                "Least Recently Updated".to_string()
            }
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::NEWEST_FIRST
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == SortDirection::Descending {
            f.write_str("-")?;
        }
        f.write_str(self.field.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (direction, name) = match trimmed.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, trimmed),
        };
        let field = name.parse::<SortField>().map_err(|_| CoreError::UnknownValue {
            kind: "sort key",
            value: s.to_string(),
        })?;
        Ok(Self { field, direction })
    }
}

/// Records orderable by a [`SortKey`].
pub trait Sortable {
    fn created_date(&self) -> DateTime<Utc>;
    fn updated_date(&self) -> DateTime<Utc>;
    /// Records without a title compare equal on [`SortField::Title`].
    fn title(&self) -> Option<&str> {
        None
    }
}

impl Sortable for Brief {
    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }

    fn title(&self) -> Option<&str> {
        Some(self.title.as_str())
    }
}

impl Sortable for BriefResponse {
    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }
}

fn compare<T: Sortable>(a: &T, b: &T, field: SortField) -> Ordering {
    match field {
        SortField::CreatedDate => a.created_date().cmp(&b.created_date()),
        SortField::UpdatedDate => a.updated_date().cmp(&b.updated_date()),
        SortField::Title => {
            let left = a.title().map(str::to_lowercase);
            let right = b.title().map(str::to_lowercase);
            left.cmp(&right)
        }
    }
}

/// Stable sort: records that compare equal keep their input order in both
/// directions.
pub fn sort_records<T: Sortable>(records: &mut [T], key: SortKey) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, key.field);
        match key.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
