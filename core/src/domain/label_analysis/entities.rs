use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::FlaggedIngredient;

/// Traffic-light category assigned to an ingredient by the analysis model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Red,
    Yellow,
    Green,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &str {
        match self {
            IngredientCategory::Red => "red",
            IngredientCategory::Yellow => "yellow",
            IngredientCategory::Green => "green",
        }
    }

    /// Case-insensitive parse; anything outside red/yellow/green yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "red" => Some(IngredientCategory::Red),
            "yellow" => Some(IngredientCategory::Yellow),
            "green" => Some(IngredientCategory::Green),
            _ => None,
        }
    }

    pub fn risk_label(&self) -> RiskLabel {
        match self {
            IngredientCategory::Red => RiskLabel::HighRisk,
            IngredientCategory::Yellow => RiskLabel::ModerateRisk,
            IngredientCategory::Green => RiskLabel::Safe,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RiskLabel {
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "Safe")]
    Safe,
}

impl RiskLabel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLabel::HighRisk => "High Risk",
            RiskLabel::ModerateRisk => "Moderate Risk",
            RiskLabel::Safe => "Safe",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high risk" => Some(RiskLabel::HighRisk),
            "moderate risk" => Some(RiskLabel::ModerateRisk),
            "safe" => Some(RiskLabel::Safe),
            _ => None,
        }
    }

    pub fn category(&self) -> IngredientCategory {
        match self {
            RiskLabel::HighRisk => IngredientCategory::Red,
            RiskLabel::ModerateRisk => IngredientCategory::Yellow,
            RiskLabel::Safe => IngredientCategory::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedIngredient {
    pub name: String,
    pub category: IngredientCategory,
    pub risk: RiskLabel,
    pub explanation: String,
}

/// A front-label claim next to what the ingredient list actually shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MarketingClaim {
    pub claim: String,
    pub reality: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OverallScore {
    pub red: u32,
    pub yellow: u32,
    pub green: u32,
}

impl OverallScore {
    pub fn from_ingredients(ingredients: &[AnalyzedIngredient]) -> Self {
        ingredients
            .iter()
            .fold(OverallScore::default(), |mut score, ingredient| {
                match ingredient.category {
                    IngredientCategory::Red => score.red += 1,
                    IngredientCategory::Yellow => score.yellow += 1,
                    IngredientCategory::Green => score.green += 1,
                }
                score
            })
    }

    pub fn total(&self) -> u32 {
        self.red + self.yellow + self.green
    }
}

/// Structured assessment of one submitted label.
///
/// `overall_score` always matches the category counts of `ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub ingredients: Vec<AnalyzedIngredient>,
    pub marketing_claims: Vec<MarketingClaim>,
    pub overall_score: OverallScore,
    pub summary: String,
    /// Ingredients the keyword classifier flagged, independent of the model's categories.
    pub harmful_flags: Vec<FlaggedIngredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Image,
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::Image => "image",
            InputType::Text => "text",
        }
    }
}

/// A demo product for front ends to offer as a one-click example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleProduct {
    pub name: String,
    pub front_label: String,
    pub ingredients: String,
    pub safe: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, category: IngredientCategory) -> AnalyzedIngredient {
        AnalyzedIngredient {
            name: name.to_string(),
            category,
            risk: category.risk_label(),
            explanation: String::new(),
        }
    }

    #[test]
    fn test_overall_score_counts_categories() {
        let score = OverallScore::from_ingredients(&[
            ingredient("Red 40", IngredientCategory::Red),
            ingredient("BHT", IngredientCategory::Red),
            ingredient("Sugar", IngredientCategory::Yellow),
            ingredient("Water", IngredientCategory::Green),
        ]);

        assert_eq!(
            score,
            OverallScore {
                red: 2,
                yellow: 1,
                green: 1
            }
        );
        assert_eq!(score.total(), 4);
    }

    #[test]
    fn test_category_and_risk_label_round_trip() {
        for category in [
            IngredientCategory::Red,
            IngredientCategory::Yellow,
            IngredientCategory::Green,
        ] {
            assert_eq!(category.risk_label().category(), category);
            assert_eq!(IngredientCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(IngredientCategory::parse(" RED "), Some(IngredientCategory::Red));
        assert_eq!(IngredientCategory::parse("orange"), None);
        assert_eq!(RiskLabel::parse("moderate RISK"), Some(RiskLabel::ModerateRisk));
        assert_eq!(RiskLabel::parse("dangerous"), None);
    }

    #[test]
    fn test_analysis_response_wire_format() {
        let response = AnalysisResponse {
            product_name: None,
            ingredients: vec![ingredient("Water", IngredientCategory::Green)],
            marketing_claims: vec![],
            overall_score: OverallScore {
                red: 0,
                yellow: 0,
                green: 1,
            },
            summary: "Fine.".to_string(),
            harmful_flags: vec![],
            extracted_text: Some("Water".to_string()),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("productName").is_none());
        assert_eq!(value["ingredients"][0]["risk"], "Safe");
        assert_eq!(value["ingredients"][0]["category"], "green");
        assert_eq!(value["overallScore"]["green"], 1);
        assert_eq!(value["marketingClaims"], serde_json::json!([]));
        assert_eq!(value["harmfulFlags"], serde_json::json!([]));
        assert_eq!(value["extractedText"], "Water");
    }
}
