//! Advisory checks on descriptor lists
//!
//! Descriptors are rendered verbatim, whatever their ids look like. These
//! checks only report input that will produce a surprising repo file.

use std::collections::HashSet;
use std::fmt;

use crate::RepositoryDescriptor;

/// A finding about one descriptor, identified by its input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `id` is empty, producing a `[]` section header
    EmptyId { index: usize },
    /// `id` repeats an earlier descriptor's id
    DuplicateId { index: usize, id: String },
    /// `id` contains `[`, `]` or a line break
    MalformedId { index: usize, id: String },
    /// `base_url` is empty
    EmptyBaseUrl { index: usize, id: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "repository #{index} has an empty id"),
            Self::DuplicateId { index, id } => {
                write!(f, "repository #{index} reuses id {id:?}")
            }
            Self::MalformedId { index, id } => {
                write!(f, "repository #{index} id {id:?} is not a valid section name")
            }
            Self::EmptyBaseUrl { index, id } => {
                write!(f, "repository #{index} ({id:?}) has an empty baseurl")
            }
        }
    }
}

/// Report undefined input in `descriptors`, in input order.
pub fn diagnose(descriptors: &[RepositoryDescriptor]) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for (index, repo) in descriptors.iter().enumerate() {
        let id = &repo.id;
        if id.is_empty() {
            findings.push(Diagnostic::EmptyId { index });
        } else if id.contains(['[', ']', '\n', '\r']) {
            findings.push(Diagnostic::MalformedId {
                index,
                id: id.clone(),
            });
        }
        if !seen.insert(id.as_str()) {
            findings.push(Diagnostic::DuplicateId {
                index,
                id: id.clone(),
            });
        }
        if repo.base_url.is_empty() {
            findings.push(Diagnostic::EmptyBaseUrl {
                index,
                id: id.clone(),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn clean_input_has_no_findings() {
        let repos = [
            RepositoryDescriptor::new("a", "http://a/"),
            RepositoryDescriptor::new("b", "http://b/"),
        ];
        assert!(diagnose(&repos).is_empty());
    }

    #[test]
    fn duplicate_reported_at_second_occurrence() {
        let repos = [
            RepositoryDescriptor::new("a", "http://a/"),
            RepositoryDescriptor::new("a", "http://b/"),
        ];
        assert_eq!(
            diagnose(&repos),
            vec![Diagnostic::DuplicateId {
                index: 1,
                id: "a".into()
            }]
        );
    }

    #[rstest]
    #[case("bad]id")]
    #[case("[bad")]
    #[case("multi\nline")]
    fn malformed_ids(#[case] id: &str) {
        let repos = [RepositoryDescriptor::new(id, "http://a/")];
        assert_eq!(
            diagnose(&repos),
            vec![Diagnostic::MalformedId {
                index: 0,
                id: id.into()
            }]
        );
    }

    #[test]
    fn empty_id_and_url() {
        let repos = [RepositoryDescriptor::new("", "")];
        assert_eq!(
            diagnose(&repos),
            vec![
                Diagnostic::EmptyId { index: 0 },
                Diagnostic::EmptyBaseUrl {
                    index: 0,
                    id: String::new()
                },
            ]
        );
    }

    #[test]
    fn display_mentions_position() {
        let text = Diagnostic::EmptyId { index: 3 }.to_string();
        assert_eq!(text, "repository #3 has an empty id");
    }
}
