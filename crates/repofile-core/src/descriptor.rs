//! Repository descriptors, the renderer's input

use serde::{Deserialize, Serialize};

/// One package repository to configure.
///
/// Field names accept both snake_case and the control plane's camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Section name in the repo file
    pub id: String,

    /// Human readable name; `id` is used when empty
    #[serde(default, alias = "displayName", skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(alias = "baseUrl")]
    pub base_url: String,

    /// Key URLs in the order they should be written
    #[serde(default, alias = "gpgKeys", skip_serializing_if = "Vec::is_empty")]
    pub gpg_keys: Vec<String>,
}

impl RepositoryDescriptor {
    pub fn new(id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_gpg_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gpg_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// The value written as `name=`.
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }
}
