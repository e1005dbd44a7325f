use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of category prefixes a query can be scoped by.
///
/// The order of `ALL` is the display order of result groups and the order in
/// which prefix tokens are stripped during query validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Prefix {
    Template,
    Vault,
    InitialPrompt,
    RefinedPrompt,
    Content,
}

impl Prefix {
    pub const ALL: [Prefix; 5] = [
        Prefix::Template,
        Prefix::Vault,
        Prefix::InitialPrompt,
        Prefix::RefinedPrompt,
        Prefix::Content,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Template => "template",
            Prefix::Vault => "vault",
            Prefix::InitialPrompt => "initial-prompt",
            Prefix::RefinedPrompt => "refined-prompt",
            Prefix::Content => "content",
        }
    }

    /// The literal token users type to scope a query, e.g. `"template:"`.
    #[must_use]
    pub fn token(&self) -> String {
        format!("{}:", self.as_str())
    }

    /// Human-facing name used for group headers ("initial prompt").
    #[must_use]
    pub fn display_name(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single match returned by the matcher.
///
/// The wire format is one heterogeneous object per category; which optional
/// fields are populated depends on the category the item was returned under.
/// Field projection lives in `app::results`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultItem {
    pub name: String,
    pub role: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub generated_content: Option<String>,
    pub initial_prompt: Option<String>,
    pub refined_prompt: Option<String>,
    /// Similarity score in [0, 1], when the matcher provides one.
    pub score: Option<f64>,
}

/// One categorized response from the matcher.
///
/// An absent category on the wire deserializes to an empty vec; keys outside
/// the prefix vocabulary are ignored. The response is immutable once
/// produced and discarded when dismissed or superseded by the next search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub template: Vec<ResultItem>,
    pub vault: Vec<ResultItem>,
    #[serde(rename = "initial-prompt")]
    pub initial_prompt: Vec<ResultItem>,
    #[serde(rename = "refined-prompt")]
    pub refined_prompt: Vec<ResultItem>,
    pub content: Vec<ResultItem>,
}

impl SearchResponse {
    #[must_use]
    pub fn items(&self, prefix: Prefix) -> &[ResultItem] {
        match prefix {
            Prefix::Template => &self.template,
            Prefix::Vault => &self.vault,
            Prefix::InitialPrompt => &self.initial_prompt,
            Prefix::RefinedPrompt => &self.refined_prompt,
            Prefix::Content => &self.content,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Prefix::ALL.iter().all(|p| self.items(*p).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_wire_names_are_kebab_case() {
        assert_eq!(Prefix::InitialPrompt.as_str(), "initial-prompt");
        assert_eq!(Prefix::InitialPrompt.token(), "initial-prompt:");
        assert_eq!(Prefix::InitialPrompt.display_name(), "initial prompt");
        assert_eq!(
            serde_json::to_string(&Prefix::RefinedPrompt).unwrap(),
            "\"refined-prompt\""
        );
    }

    #[test]
    fn response_deserializes_with_absent_and_unknown_categories() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "vault": [{"name": "Notes", "generatedContent": "body", "score": 0.5}],
                "someFutureCategory": []
            }"#,
        )
        .unwrap();

        assert!(response.template.is_empty());
        assert_eq!(response.vault.len(), 1);
        assert_eq!(response.vault[0].generated_content.as_deref(), Some("body"));
        assert!(!response.is_empty());
    }

    #[test]
    fn empty_response_is_empty() {
        assert!(SearchResponse::default().is_empty());
    }
}
