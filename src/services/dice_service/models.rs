use std::str::FromStr;

use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use super::error::DiceServiceError;

///
/// Outcome of a single `roll`. `results` holds each die in draw order,
/// unless a `SortOrder` was requested.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Constructor)]
pub struct DiceRollModel {
    pub total: i128,
    pub die_count: i64,
    pub results: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl FromStr for SortOrder {
    type Err = DiceServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(DiceServiceError::InvalidArgument(format!("`{s}` is not a sort order"))),
        }
    }
}
