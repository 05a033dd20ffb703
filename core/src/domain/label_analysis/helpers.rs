use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::services::classify_ingredients,
    label_analysis::entities::{
        AnalysisResponse, AnalyzedIngredient, IngredientCategory, MarketingClaim, OverallScore,
        RiskLabel,
    },
};

/// Model reply as it arrives: every field may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    product_name: Option<String>,
    ingredients: Option<Vec<RawIngredient>>,
    marketing_claims: Option<Vec<RawMarketingClaim>>,
    overall_score: Option<RawOverallScore>,
    summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawIngredient {
    name: Option<String>,
    category: Option<String>,
    risk: Option<String>,
    explanation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMarketingClaim {
    claim: Option<String>,
    reality: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOverallScore {
    red: Option<f64>,
    yellow: Option<f64>,
    green: Option<f64>,
}

/// Parse the analysis model's JSON reply into a sanitized [`AnalysisResponse`].
///
/// An empty reply is read as `{}`. Text that is not a JSON object fails with
/// [`CoreError::MalformedAnalysis`]. The classifier flags and `extracted_text` are
/// filled in here as well.
pub fn parse_analysis_response(
    raw_response: &str,
    extracted_text: Option<String>,
) -> Result<AnalysisResponse, CoreError> {
    let raw_response = match raw_response.trim() {
        "" => "{}",
        trimmed => trimmed,
    };

    let raw: RawAnalysis = serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("Failed to parse analysis response: {}", e);
        CoreError::MalformedAnalysis(e.to_string())
    })?;

    Ok(sanitize_analysis(raw, extracted_text))
}

fn sanitize_analysis(raw: RawAnalysis, extracted_text: Option<String>) -> AnalysisResponse {
    let ingredients: Vec<AnalyzedIngredient> = raw
        .ingredients
        .unwrap_or_default()
        .into_iter()
        .filter_map(sanitize_ingredient)
        .collect();

    let marketing_claims = raw
        .marketing_claims
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| {
            let claim = c.claim.unwrap_or_default().trim().to_string();
            let reality = c.reality.unwrap_or_default().trim().to_string();
            if claim.is_empty() && reality.is_empty() {
                None
            } else {
                Some(MarketingClaim { claim, reality })
            }
        })
        .collect();

    let overall_score = OverallScore::from_ingredients(&ingredients);
    if let Some(reported) = raw.overall_score {
        let reported = (
            count_or_zero(reported.red),
            count_or_zero(reported.yellow),
            count_or_zero(reported.green),
        );
        let actual = (overall_score.red, overall_score.yellow, overall_score.green);
        if reported != actual {
            tracing::warn!(
                ?reported,
                ?actual,
                "Model overall score disagrees with ingredient categories, recomputed"
            );
        }
    }

    let harmful_flags = classify_ingredients(ingredients.iter().map(|i| i.name.as_str()));

    AnalysisResponse {
        product_name: raw
            .product_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()),
        ingredients,
        marketing_claims,
        overall_score,
        summary: raw.summary.unwrap_or_default().trim().to_string(),
        harmful_flags,
        extracted_text,
    }
}

fn sanitize_ingredient(raw: RawIngredient) -> Option<AnalyzedIngredient> {
    let name = raw.name.unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return None;
    }

    let category = raw
        .category
        .as_deref()
        .and_then(IngredientCategory::parse)
        .or_else(|| {
            raw.risk
                .as_deref()
                .and_then(RiskLabel::parse)
                .map(|risk| risk.category())
        })
        .unwrap_or(IngredientCategory::Yellow);

    Some(AnalyzedIngredient {
        name,
        category,
        risk: category.risk_label(),
        explanation: raw.explanation.unwrap_or_default().trim().to_string(),
    })
}

fn count_or_zero(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32)
        .unwrap_or(0)
}
