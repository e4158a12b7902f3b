//! In-memory model of a managed repo file
//!
//! A [`RepoFileDocument`] is built from descriptors in one pass and turned
//! into text through its `Display` impl. Nothing is reordered or merged:
//! the `main` section comes first, then one section per descriptor in input
//! order.

use std::fmt;

use crate::RepositoryDescriptor;

/// First line of every managed repo file.
pub const MANAGED_HEADER: &str = "# Repo file managed by Google OSConfig agent";

const MAIN_SECTION: &str = "main";

/// A `key=value` line, or a multi-valued key written as a first line plus
/// continuation lines aligned under the first value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: &'static str,
    pub values: Vec<String>,
}

impl Entry {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            values: vec![value.into()],
        }
    }

    /// A multi-valued entry, or `None` when there are no values.
    pub fn multi(key: &'static str, values: &[String]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            key,
            values: values.to_vec(),
        })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values.iter();
        if let Some(first) = values.next() {
            writeln!(f, "{}={}", self.key, first)?;
        }
        // Continuation lines line up with the first value, past "key=".
        let indent = self.key.len() + 1;
        for value in values {
            writeln!(f, "{:indent$}{}", "", value, indent = indent)?;
        }
        Ok(())
    }
}

/// A `[name]` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Section {
    /// The reserved global section.
    pub fn main() -> Self {
        Self {
            name: MAIN_SECTION.to_string(),
            entries: vec![Entry::new("gpgcheck", "1")],
        }
    }

    /// Section for one repository, keys in fixed order:
    /// `name`, `baseurl`, `enabled`, `gpgcheck`, then `gpgkey` if any keys exist.
    pub fn repository(repo: &RepositoryDescriptor) -> Self {
        let mut entries = vec![
            Entry::new("name", repo.name()),
            Entry::new("baseurl", repo.base_url.as_str()),
            Entry::new("enabled", "1"),
            Entry::new("gpgcheck", "1"),
        ];
        entries.extend(Entry::multi("gpgkey", &repo.gpg_keys));
        Self {
            name: repo.id.clone(),
            entries,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Complete contents of a managed repo file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFileDocument {
    sections: Vec<Section>,
}

impl RepoFileDocument {
    pub fn from_descriptors(descriptors: &[RepositoryDescriptor]) -> Self {
        let mut sections = Vec::with_capacity(descriptors.len() + 1);
        sections.push(Section::main());
        sections.extend(descriptors.iter().map(Section::repository));
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl fmt::Display for RepoFileDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", MANAGED_HEADER)?;
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_value_entry() {
        assert_eq!(Entry::new("enabled", "1").to_string(), "enabled=1\n");
    }

    #[test]
    fn continuation_lines_align_with_first_value() {
        let keys = vec!["k1".to_string(), "k2".to_string(), "k3".to_string()];
        let entry = Entry::multi("gpgkey", &keys).unwrap();
        assert_eq!(entry.to_string(), "gpgkey=k1\n       k2\n       k3\n");
    }

    #[test]
    fn empty_multi_entry_is_omitted() {
        assert!(Entry::multi("gpgkey", &[]).is_none());
    }

    #[test]
    fn main_section_always_present() {
        let doc = RepoFileDocument::from_descriptors(&[]);
        assert_eq!(doc.sections(), &[Section::main()]);
    }

    #[test]
    fn repository_section_key_order() {
        let repo = RepositoryDescriptor::new("id", "u").with_gpg_keys(["k"]);
        let keys: Vec<_> = Section::repository(&repo)
            .entries
            .iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, ["name", "baseurl", "enabled", "gpgcheck", "gpgkey"]);
    }

    #[test]
    fn sections_follow_input_order() {
        let repos = [
            RepositoryDescriptor::new("b", "u"),
            RepositoryDescriptor::new("a", "u"),
            RepositoryDescriptor::new("b", "u"),
        ];
        let names: Vec<_> = RepoFileDocument::from_descriptors(&repos)
            .sections()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, ["main", "b", "a", "b"]);
    }
}
