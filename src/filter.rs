//! Publication filtering. The active filter is a single tag (or "All"),
//! owned above the Projects and Publications sections so a project click
//! can drive the publication list. Setting an unrecognized tag is allowed
//! and simply yields an empty list.

use crate::content::{Publication, PUBLICATIONS};

pub const ALL: &str = "All";

/// The tag currently narrowing the publication list. Never empty; defaults
/// to "All".
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActiveFilter(String);

impl Default for ActiveFilter {
    fn default() -> Self {
        Self(ALL.to_string())
    }
}

impl ActiveFilter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL
    }

    pub fn matches(&self, tags: &[&str]) -> bool {
        self.is_all() || tags.contains(&self.0.as_str())
    }
}

/// Pure derivation of the visible publication list: the full list under
/// "All", otherwise the tagged subset in source order. Filtering only,
/// never reordering.
pub fn filtered_publications(filter: &ActiveFilter) -> Vec<&'static Publication> {
    PUBLICATIONS
        .iter()
        .filter(|publication| filter.matches(publication.tags))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FILTER_TAGS, PROJECTS};

    #[test]
    fn all_filter_returns_the_full_list() {
        let visible = filtered_publications(&ActiveFilter::default());
        assert_eq!(visible.len(), PUBLICATIONS.len());
        for (shown, source) in visible.iter().zip(PUBLICATIONS) {
            assert!(std::ptr::eq(*shown, source));
        }
    }

    #[test]
    fn every_vocabulary_tag_selects_exactly_its_subset() {
        for tag in &FILTER_TAGS[1..] {
            let filter = ActiveFilter::new(*tag);
            let visible = filtered_publications(&filter);
            let expected: Vec<_> = PUBLICATIONS
                .iter()
                .filter(|publication| publication.tags.contains(tag))
                .collect();
            assert_eq!(visible.len(), expected.len(), "tag {tag:?}");
            for (shown, source) in visible.iter().zip(&expected) {
                assert!(std::ptr::eq(*shown, *source), "order changed for {tag:?}");
            }
        }
    }

    #[test]
    fn graph_theory_project_selects_graph_theory_publications() {
        let project = PROJECTS
            .iter()
            .find(|project| project.filter_tag == "Graph Theory")
            .expect("a project linking to Graph Theory");
        let filter = ActiveFilter::new(project.filter_tag);
        assert_eq!(filter.as_str(), "Graph Theory");

        let visible = filtered_publications(&filter);
        assert!(!visible.is_empty());
        for publication in &visible {
            assert!(publication.tags.contains(&"Graph Theory"));
        }
        let tagged_count = PUBLICATIONS
            .iter()
            .filter(|publication| publication.tags.contains(&"Graph Theory"))
            .count();
        assert_eq!(visible.len(), tagged_count);
    }

    #[test]
    fn unknown_tag_yields_an_empty_list() {
        let visible = filtered_publications(&ActiveFilter::new("Quantum Basketry"));
        assert!(visible.is_empty());
    }

    #[test]
    fn default_filter_is_all() {
        assert!(ActiveFilter::default().is_all());
        assert_eq!(ActiveFilter::default().as_str(), ALL);
    }
}
