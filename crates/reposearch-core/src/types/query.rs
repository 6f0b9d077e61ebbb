//! Search query type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A trimmed, non-empty repository search query.
///
/// Two queries that differ only in surrounding whitespace are equal, which is
/// what the query cache compares on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Qualifier appended to every query so matches come from repository
    /// names and descriptions.
    pub const IN_QUALIFIER: &'static str = " in:name,description";

    /// Create a query, trimming whitespace and rejecting empty input.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::Query {
                value: raw.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the query text as typed by the user.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the query sent to the search API.
    pub fn api_query(&self) -> String {
        format!("{}{}", self.0, Self::IN_QUALIFIER)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SearchQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SearchQuery {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_input() {
        let query = SearchQuery::new("  android  ").unwrap();
        assert_eq!(query.as_str(), "android");
        assert_eq!(query, SearchQuery::new("android").unwrap());
    }

    #[test]
    fn rejects_blank() {
        assert!(SearchQuery::new("").is_err());
        assert!(SearchQuery::new(" \t\n").is_err());
    }

    #[test]
    fn api_query_appends_qualifier() {
        let query = SearchQuery::new("foo").unwrap();
        assert_eq!(query.api_query(), "foo in:name,description");
    }
}
