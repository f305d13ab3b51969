use std::collections::BTreeSet;

use crate::{ExerciseRecord, RawExercise};

pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_SORT_BY: &str = "name";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parameters of an exercise query.
///
/// Sets are joined in their sorted order when sent to the service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub search: String,
    pub muscles: BTreeSet<String>,
    pub equipment: BTreeSet<String>,
    pub body_parts: BTreeSet<String>,
    pub offset: u32,
    /// `None` and `Some(0)` both mean [`DEFAULT_LIMIT`].
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub fetch_all: bool,
}

impl QueryFilter {
    #[must_use]
    pub fn body_part(body_part: &str, limit: u32, fetch_all: bool) -> Self {
        Self {
            body_parts: BTreeSet::from([body_part.to_string()]),
            limit: Some(limit),
            fetch_all,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn muscle_group(muscle_group: &str, limit: u32) -> Self {
        Self {
            muscles: BTreeSet::from([muscle_group.to_string()]),
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LIMIT)
    }

    #[must_use]
    pub fn sort_by(&self) -> &str {
        self.sort_by
            .as_deref()
            .filter(|sort_by| !sort_by.is_empty())
            .unwrap_or(DEFAULT_SORT_BY)
    }

    /// The query for a single request covering `limit` records starting at `offset`.
    #[must_use]
    pub fn page(&self, offset: u32, limit: u32) -> FilterQuery {
        FilterQuery {
            offset,
            limit,
            sort_by: self.sort_by().to_string(),
            sort_order: self.sort_order,
            search: Some(self.search.trim())
                .filter(|search| !search.is_empty())
                .map(str::to_string),
            muscles: joined(&self.muscles),
            equipment: joined(&self.equipment),
            body_parts: joined(&self.body_parts),
        }
    }
}

fn joined(values: &BTreeSet<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().map(String::as_str).collect::<Vec<_>>().join(","))
    }
}

/// Parameters of exactly one request against the filter endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub offset: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub search: Option<String>,
    pub muscles: Option<String>,
    pub equipment: Option<String>,
    pub body_parts: Option<String>,
}

impl FilterQuery {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortOrder", self.sort_order.as_ref().to_string()),
        ];
        for (key, value) in [
            ("search", &self.search),
            ("muscles", &self.muscles),
            ("equipment", &self.equipment),
            ("bodyParts", &self.body_parts),
        ] {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}

/// One decoded response of the filter endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExercisePage {
    pub exercises: Vec<RawExercise>,
    pub total_exercises: Option<u32>,
    pub metadata: Metadata,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub total_exercises: Option<u32>,
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
    pub pages_fetched: Option<u32>,
    pub total_fetched: Option<usize>,
}

impl Metadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PagedResult {
    pub exercises: Vec<ExerciseRecord>,
    pub total_exercises: u32,
    pub metadata: Metadata,
}

impl PagedResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
