//! Shared model info type (no dependencies on the provider client).

use serde::{Deserialize, Serialize};

/// Generation method a model must support to be offered for stories.
pub const GENERATE_CONTENT: &str = "generateContent";

/// A catalog entry as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Model identifier, e.g. `models/gemini-pro`.
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports(&self, method: &str) -> bool {
        self.supported_generation_methods.iter().any(|m| m == method)
    }
}
