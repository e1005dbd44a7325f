use crate::domain::models::{Prefix, ResultItem, SearchResponse};

/// Items of one category, in the order the matcher ranked them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub prefix: Prefix,
    pub items: Vec<ResultItem>,
}

/// Classify a raw response into display-ready groups: vocabulary order,
/// categories with at least one item only. An empty vec is the explicit
/// "searched, nothing found" outcome, distinct from no search at all.
#[must_use]
pub fn classify(response: SearchResponse) -> Vec<ResultGroup> {
    Prefix::ALL
        .into_iter()
        .map(|prefix| ResultGroup {
            prefix,
            items: response.items(prefix).to_vec(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

/// The descriptive field shown under an item's name, per category.
#[must_use]
pub fn describe(prefix: Prefix, item: &ResultItem) -> &str {
    let field = match prefix {
        Prefix::Template => item.description.as_deref(),
        Prefix::Vault | Prefix::Content => item.generated_content.as_deref(),
        Prefix::InitialPrompt => item.initial_prompt.as_deref(),
        Prefix::RefinedPrompt => item.refined_prompt.as_deref(),
    };
    field.unwrap_or_default()
}

/// Render a similarity score as a percentage with exactly three fractional
/// digits ("93.521%"). Category-agnostic.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{:.3}%", score * 100.0)
}
