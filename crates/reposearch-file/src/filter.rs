//! Query parsing and matching for offline search.

use reposearch_core::Repo;
use tracing::trace;

/// A repository field free-text terms are matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Some(Field::Name),
            "description" => Some(Field::Description),
            _ => None,
        }
    }

    fn text<'a>(&self, repo: &'a Repo) -> Option<&'a str> {
        match self {
            Field::Name => Some(&repo.name),
            Field::Description => repo.description.as_deref(),
        }
    }
}

/// Parsed search query.
///
/// Whitespace separates terms. `in:name,description` picks the fields terms
/// are matched in (both by default) and `language:<lang>` keeps only
/// repositories written in that language. A repository matches when every
/// term occurs, case-insensitively, in one of the selected fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFilter {
    terms: Vec<String>,
    fields: Vec<Field>,
    language: Option<String>,
}

impl RepoFilter {
    pub fn parse(query: &str) -> Self {
        let mut terms = Vec::new();
        let mut fields = Vec::new();
        let mut language = None;

        for token in query.split_whitespace() {
            let lower = token.to_lowercase();
            if let Some(list) = lower.strip_prefix("in:") {
                fields.extend(list.split(',').filter_map(Field::parse));
            } else if let Some(lang) = lower.strip_prefix("language:") {
                language = Some(lang.to_string());
            } else {
                terms.push(lower);
            }
        }

        if fields.is_empty() {
            fields = vec![Field::Name, Field::Description];
        }
        fields.dedup();

        trace!(?terms, ?fields, ?language, "parsed query");
        Self {
            terms,
            fields,
            language,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn matches(&self, repo: &Repo) -> bool {
        if let Some(language) = &self.language
            && !repo
                .language
                .as_deref()
                .is_some_and(|l| l.eq_ignore_ascii_case(language))
        {
            return false;
        }

        let haystacks: Vec<String> = self
            .fields
            .iter()
            .filter_map(|f| f.text(repo))
            .map(str::to_lowercase)
            .collect();

        self.terms
            .iter()
            .all(|term| haystacks.iter().any(|h| h.contains(term.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>, language: Option<&str>) -> Repo {
        Repo {
            id: 1,
            name: name.to_string(),
            full_name: format!("owner/{name}"),
            description: description.map(str::to_string),
            url: format!("https://github.com/owner/{name}"),
            stars: 0,
            forks: 0,
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn defaults_to_name_and_description() {
        let filter = RepoFilter::parse("tokio");
        assert_eq!(filter.fields(), &[Field::Name, Field::Description]);
        assert_eq!(filter.terms(), &["tokio".to_string()]);
    }

    #[test]
    fn in_qualifier_selects_fields() {
        let filter = RepoFilter::parse("Async in:name");
        assert_eq!(filter.fields(), &[Field::Name]);

        assert!(filter.matches(&repo("async-std", None, None)));
        assert!(!filter.matches(&repo("smol", Some("async runtime"), None)));
    }

    #[test]
    fn every_term_must_match() {
        let filter = RepoFilter::parse("async runtime");
        assert!(filter.matches(&repo("smol", Some("A small async runtime"), None)));
        assert!(!filter.matches(&repo("async-trait", Some("Traits"), None)));
    }

    #[test]
    fn matching_ignores_case() {
        let filter = RepoFilter::parse("TOKIO");
        assert!(filter.matches(&repo("tokio", None, None)));
    }

    #[test]
    fn language_qualifier_filters() {
        let filter = RepoFilter::parse("web language:rust");
        assert!(filter.matches(&repo("web-server", None, Some("Rust"))));
        assert!(!filter.matches(&repo("web-app", None, Some("Go"))));
        assert!(!filter.matches(&repo("web-thing", None, None)));
    }

    #[test]
    fn unknown_fields_fall_back_to_defaults() {
        let filter = RepoFilter::parse("x in:readme");
        assert_eq!(filter.fields(), &[Field::Name, Field::Description]);
    }

    #[test]
    fn qualifiers_only_match_everything() {
        let filter = RepoFilter::parse("in:name,description");
        assert!(filter.terms().is_empty());
        assert!(filter.matches(&repo("anything", None, None)));
    }
}
