use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HarmfulCategory {
    Sugar,
    Preservative,
    Additive,
}

impl HarmfulCategory {
    pub fn as_str(&self) -> &str {
        match self {
            HarmfulCategory::Sugar => "sugar",
            HarmfulCategory::Preservative => "preservative",
            HarmfulCategory::Additive => "additive",
        }
    }

    /// Severity attached to every match in this category.
    pub fn severity(&self) -> Severity {
        match self {
            HarmfulCategory::Sugar => Severity::Moderate,
            HarmfulCategory::Preservative => Severity::High,
            HarmfulCategory::Additive => Severity::Moderate,
        }
    }
}

impl fmt::Display for HarmfulCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Moderate,
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::High => "high",
            Severity::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known harmful substance, matched by substring against normalized ingredient names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HarmfulIngredientEntry {
    pub match_phrase: &'static str,
    pub category: HarmfulCategory,
    pub severity: Severity,
}

impl HarmfulIngredientEntry {
    pub const fn new(match_phrase: &'static str, category: HarmfulCategory, severity: Severity) -> Self {
        Self {
            match_phrase,
            category,
            severity,
        }
    }
}

/// Outcome of classifying one ingredient name.
///
/// `category` and `severity` are set if and only if `harmful` is true, so the fields are
/// private and the value is only built through [`ClassificationResult::harmful`] or
/// [`ClassificationResult::harmless`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClassificationResult {
    harmful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<HarmfulCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
}

impl ClassificationResult {
    pub fn harmful(category: HarmfulCategory) -> Self {
        Self {
            harmful: true,
            category: Some(category),
            severity: Some(category.severity()),
        }
    }

    pub fn harmless() -> Self {
        Self {
            harmful: false,
            category: None,
            severity: None,
        }
    }

    pub fn is_harmful(&self) -> bool {
        self.harmful
    }

    pub fn category(&self) -> Option<HarmfulCategory> {
        self.category
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }
}

/// An ingredient the classifier flagged, keeping the name as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlaggedIngredient {
    pub name: String,
    pub category: HarmfulCategory,
    pub severity: Severity,
}

/// One line of a classification report: the input name plus its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct IngredientClassification {
    pub name: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}
