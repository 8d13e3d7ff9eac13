//! Wire models for the Personality Insights v3 API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Profile input
// =============================================================================

/// Content to profile.
///
/// Structured JSON content items, or raw text or HTML sent as-is with the
/// matching content type.
#[derive(Debug, Clone)]
pub enum ProfileContent {
    /// Structured content items (`application/json`).
    Content(Content),
    /// Plain text (`text/plain`).
    Text(String),
    /// HTML (`text/html`).
    Html(String),
}

/// Structured input: a list of content items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "contentItems")]
    pub content_items: Vec<ContentItem>,
}

/// One piece of authored text with optional provenance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contenttype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parentid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<bool>,
}

/// Options for the `profile` operations.
#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
    /// Language of the input content (`Content-Language` header).
    pub content_language: Option<String>,
    /// Requested language of the profile (`Accept-Language` header).
    pub accept_language: Option<String>,
    /// Include raw scores alongside normalized percentiles.
    pub raw_scores: Option<bool>,
    /// Include consumption preference results.
    pub consumption_preferences: Option<bool>,
    /// CSV output only: include a header row.
    pub csv_headers: Option<bool>,
}

// =============================================================================
// Profile output
// =============================================================================

/// Response of `profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count_message: Option<String>,
    #[serde(default)]
    pub personality: Vec<TraitTreeNode>,
    #[serde(default)]
    pub needs: Vec<TraitTreeNode>,
    #[serde(default)]
    pub values: Vec<TraitTreeNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Vec<BehaviorNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_preferences: Option<Vec<ConsumptionPreferencesCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
}

/// A scored trait, with child facets for the Big Five dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitTreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TraitTreeNode>>,
}

/// Temporal behavior distribution (day-of-week, hour-of-day).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// One category of consumption preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPreferencesCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_preference_category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub consumption_preferences: Vec<ConsumptionPreferences>,
}

/// One scored consumption preference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_preference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Non-fatal warning attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_items_use_wire_field_name() {
        let content = Content {
            content_items: vec![ContentItem {
                content: "Hello world".to_string(),
                ..Default::default()
            }],
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["contentItems"][0]["content"], "Hello world");
        assert!(json["contentItems"][0].get("id").is_none());
    }

    #[test]
    fn test_profile_trait_tree_parses_children() {
        let json = r#"{
            "processed_language": "en",
            "word_count": 2500,
            "personality": [
                {
                    "trait_id": "big5_openness",
                    "name": "Openness",
                    "category": "personality",
                    "percentile": 0.88,
                    "children": [
                        {"trait_id": "facet_adventurousness", "percentile": 0.56}
                    ]
                }
            ],
            "needs": [],
            "values": []
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        let openness = &profile.personality[0];
        assert_eq!(openness.percentile, Some(0.88));
        assert_eq!(
            openness.children.as_ref().unwrap()[0].trait_id.as_deref(),
            Some("facet_adventurousness")
        );
    }
}
