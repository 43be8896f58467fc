use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::analysis::entities::{AnalysisResult, Macronutrients};

const BAD_NUTRIENT_PENALTY: i32 = 5;
const HARMFUL_INGREDIENT_PENALTY: i32 = 10;
const HIGH_PROCESSING_PENALTY: i32 = 15;
const MEDIUM_PROCESSING_PENALTY: i32 = 5;
const NON_COMPLIANT_DIET_PENALTY: i32 = 5;

/// Derives the 0-100 health score from an analysis payload.
///
/// Additive-penalty model starting from a perfect 100: each independent
/// negative signal subtracts a fixed amount, and missing fields count as
/// zero signals rather than errors. Monotonic and order-independent.
pub fn compute_health_score(analysis: &AnalysisResult) -> u8 {
    let mut score: i32 = 100;

    score -= BAD_NUTRIENT_PENALTY * bad_nutrient_count(analysis) as i32;

    let harmful_count = analysis
        .harmful_ingredients
        .as_ref()
        .map_or(0, |ingredients| ingredients.len());
    score -= HARMFUL_INGREDIENT_PENALTY * harmful_count as i32;

    score -= processing_penalty(analysis);

    let non_compliant_count = analysis
        .diet_compliance
        .as_ref()
        .and_then(|dc| dc.non_compliant_diets.as_ref())
        .map_or(0, |diets| diets.len());
    score -= NON_COMPLIANT_DIET_PENALTY * non_compliant_count as i32;

    score.clamp(0, 100) as u8
}

/// Entries in the "Bad" lists of the four macronutrient categories.
fn bad_nutrient_count(analysis: &AnalysisResult) -> usize {
    let macronutrients = analysis
        .nutritional_analysis
        .as_ref()
        .and_then(|na| na.macronutrients.as_ref());

    let Some(Macronutrients {
        carbohydrates,
        proteins,
        fats,
        fiber,
    }) = macronutrients
    else {
        return 0;
    };

    [carbohydrates, proteins, fats, fiber]
        .into_iter()
        .flatten()
        .filter_map(|balance| balance.bad.as_ref())
        .map(|bad| bad.len())
        .sum()
}

fn processing_penalty(analysis: &AnalysisResult) -> i32 {
    let level = analysis
        .processing_level
        .as_ref()
        .and_then(|pl| pl.level.as_deref())
        .unwrap_or_default();

    match level.to_lowercase().as_str() {
        "high" => HIGH_PROCESSING_PENALTY,
        "medium" => MEDIUM_PROCESSING_PENALTY,
        _ => 0,
    }
}

/// Dashboard color band for a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Healthy,
    Moderate,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            ScoreBand::Healthy
        } else if score > 50 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Poor
        }
    }

    pub fn css_color(&self) -> &'static str {
        match self {
            ScoreBand::Healthy => "green",
            ScoreBand::Moderate => "orange",
            ScoreBand::Poor => "red",
        }
    }
}

/// One-paragraph plain-language summary of the analysis, matching the
/// sentences the dashboard shows under the score.
pub fn overall_review(analysis: &AnalysisResult, health_score: u8) -> String {
    let mut review: Vec<String> = Vec::new();

    review.push(
        match ScoreBand::from_score(health_score) {
            ScoreBand::Healthy => "This product is generally healthy and well-balanced.",
            ScoreBand::Moderate => {
                "This product is moderately healthy but has some areas of concern."
            }
            ScoreBand::Poor => {
                "This product is not healthy and contains many harmful ingredients or nutrients."
            }
        }
        .to_string(),
    );

    let level = analysis
        .processing_level
        .as_ref()
        .and_then(|pl| pl.level.as_deref())
        .unwrap_or_default();
    match level.to_lowercase().as_str() {
        "high" => {
            review.push("It is highly processed, which can negatively impact health.".to_string())
        }
        "medium" => review.push("It is moderately processed.".to_string()),
        "low" => review.push("It is minimally processed.".to_string()),
        _ => {}
    }

    let has_harmful = analysis
        .harmful_ingredients
        .as_ref()
        .is_some_and(|ingredients| !ingredients.is_empty());
    if has_harmful {
        review.push("Contains harmful ingredients that could pose health risks.".to_string());
    } else {
        review.push("No harmful ingredients detected.".to_string());
    }

    if let Some(diet_compliance) = analysis.diet_compliance.as_ref() {
        if let Some(compliant) = diet_compliance
            .compliant_diets
            .as_ref()
            .filter(|diets| !diets.is_empty())
        {
            review.push(format!(
                "Complies with the following diets: {}.",
                compliant.join(", ")
            ));
        }
        if let Some(non_compliant) = diet_compliance
            .non_compliant_diets
            .as_ref()
            .filter(|diets| !diets.is_empty())
        {
            review.push(format!(
                "Does not comply with the following diets: {}.",
                non_compliant.join(", ")
            ));
        }
    }

    review.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::{
        DietCompliance, HarmfulIngredient, NutrientBalance, NutritionalAnalysis, ProcessingLevel,
    };

    fn balance(bad: &[&str]) -> NutrientBalance {
        NutrientBalance {
            good: None,
            bad: Some(bad.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn with_level(level: &str) -> AnalysisResult {
        AnalysisResult {
            processing_level: Some(ProcessingLevel {
                level: Some(level.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn empty_payload_scores_a_perfect_100() {
        assert_eq!(compute_health_score(&AnalysisResult::default()), 100);
    }

    #[test]
    fn all_clear_payload_scores_100() {
        let analysis = AnalysisResult {
            nutritional_analysis: Some(NutritionalAnalysis {
                macronutrients: Some(Macronutrients {
                    carbohydrates: Some(NutrientBalance {
                        good: Some(vec!["Whole grains".to_string()]),
                        bad: None,
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            harmful_ingredients: Some(vec![]),
            processing_level: Some(ProcessingLevel {
                level: Some("Low".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(compute_health_score(&analysis), 100);
    }

    #[test]
    fn worked_example_from_the_mock_payload_scores_50() {
        // 3 bad macros (15) + 2 harmful (20) + Medium (5) + 2 diets (10) = 50.
        let analysis = AnalysisResult {
            nutritional_analysis: Some(NutritionalAnalysis {
                macronutrients: Some(Macronutrients {
                    carbohydrates: Some(balance(&["Added sugars"])),
                    fats: Some(balance(&["Trans fats", "Saturated fats"])),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            harmful_ingredients: Some(vec![
                HarmfulIngredient {
                    ingredient: "High Fructose Corn Syrup".to_string(),
                    reason: "Linked to obesity and diabetes.".to_string(),
                },
                HarmfulIngredient {
                    ingredient: "Trans Fats".to_string(),
                    reason: "Increase bad cholesterol levels.".to_string(),
                },
            ]),
            processing_level: Some(ProcessingLevel {
                level: Some("Medium".to_string()),
                ..Default::default()
            }),
            diet_compliance: Some(DietCompliance {
                non_compliant_diets: Some(vec!["Keto".to_string(), "Paleo".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(compute_health_score(&analysis), 50);
    }

    #[test]
    fn high_processing_alone_scores_85() {
        assert_eq!(compute_health_score(&with_level("High")), 85);
    }

    #[test]
    fn processing_level_is_case_insensitive() {
        assert_eq!(compute_health_score(&with_level("HIGH")), 85);
        assert_eq!(compute_health_score(&with_level("medium")), 95);
    }

    #[test]
    fn unrecognized_processing_level_costs_nothing() {
        assert_eq!(compute_health_score(&with_level("Ultra")), 100);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let analysis = AnalysisResult {
            harmful_ingredients: Some(
                (0..30)
                    .map(|i| HarmfulIngredient {
                        ingredient: format!("additive {i}"),
                        reason: "bad".to_string(),
                    })
                    .collect(),
            ),
            ..Default::default()
        };

        assert_eq!(compute_health_score(&analysis), 0);
    }

    #[test]
    fn score_is_order_independent() {
        let forward = AnalysisResult {
            nutritional_analysis: Some(NutritionalAnalysis {
                macronutrients: Some(Macronutrients {
                    fats: Some(balance(&["Trans fats", "Saturated fats"])),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let reversed = AnalysisResult {
            nutritional_analysis: Some(NutritionalAnalysis {
                macronutrients: Some(Macronutrients {
                    fats: Some(balance(&["Saturated fats", "Trans fats"])),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            compute_health_score(&forward),
            compute_health_score(&reversed)
        );
    }

    #[test]
    fn review_reports_score_band_and_diets() {
        let analysis = AnalysisResult {
            diet_compliance: Some(DietCompliance {
                compliant_diets: Some(vec!["Vegetarian".to_string()]),
                non_compliant_diets: Some(vec!["Keto".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let score = compute_health_score(&analysis);
        let review = overall_review(&analysis, score);

        assert!(review.starts_with("This product is generally healthy"));
        assert!(review.contains("Complies with the following diets: Vegetarian."));
        assert!(review.contains("Does not comply with the following diets: Keto."));
        assert!(review.contains("No harmful ingredients detected."));
    }

    #[test]
    fn band_thresholds_match_the_dashboard_colors() {
        assert_eq!(ScoreBand::from_score(81), ScoreBand::Healthy);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(51), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }
}
