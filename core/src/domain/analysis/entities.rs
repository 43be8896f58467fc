use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

use super::value_objects::LabelHighlight;

/// Structured interpretation of a food label, as produced by the LLM.
///
/// Every field is optional: absence means the model did not evaluate that
/// aspect, never that the product scored well on it. Wire names are the
/// PascalCase keys of the upstream JSON contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_analysis: Option<NutritionalAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_level: Option<ProcessingLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmful_ingredients: Option<Vec<HarmfulIngredient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_compliance: Option<DietCompliance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diabetes_allergen_friendly: Option<DiabetesAllergenFriendly>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability_and_ethics: Option<SustainabilityAndEthics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_alternatives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_compliance: Option<RegulatoryCompliance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misleading_claims: Option<Vec<MisleadingClaim>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_home_made_procedure: Option<HomemadeProcedure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct NutritionalAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macronutrients: Option<Macronutrients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micronutrients: Option<Micronutrients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_risks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_benefits: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Macronutrients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<NutrientBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proteins: Option<NutrientBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<NutrientBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<NutrientBalance>,
}

/// Good/bad split for one macronutrient category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct NutrientBalance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Micronutrients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<MicronutrientBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minerals: Option<MicronutrientBalance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct MicronutrientBalance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficient: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// "Low"/"Medium"/"High" by contract, but the model may return anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct HarmfulIngredient {
    pub ingredient: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct DietCompliance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliant_diets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_compliant_diets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiabetesAllergenFriendly {
    pub is_suitable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct SustainabilityAndEthics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethical_concerns: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegulatoryCompliance {
    #[serde(rename = "FSSAI", skip_serializing_if = "Option::is_none")]
    pub fssai: Option<ComplianceFlag>,
    #[serde(rename = "FDA", skip_serializing_if = "Option::is_none")]
    pub fda: Option<ComplianceFlag>,
    #[serde(rename = "EFSA", skip_serializing_if = "Option::is_none")]
    pub efsa: Option<ComplianceFlag>,
    #[serde(rename = "OtherRegions", skip_serializing_if = "Option::is_none")]
    pub other_regions: Option<String>,
}

/// Agency compliance as reported by the model, which answers either with a
/// plain boolean or with a short note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ComplianceFlag {
    Flag(bool),
    Note(String),
}

/// Misleading label claims arrive either as `{Claim, Reason}` objects or, in
/// sloppier model output, as bare strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum MisleadingClaim {
    Detailed {
        #[serde(rename = "Claim")]
        claim: String,
        #[serde(rename = "Reason")]
        reason: String,
    },
    Plain(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct HomemadeProcedure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Image,
    Text,
}

/// Outcome of one analysis run. Held in transient state only, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub input_type: InputType,
    pub analysis: AnalysisResult,
    pub health_score: u8,
    pub overall_review: String,
    pub highlights: Vec<LabelHighlight>,
    /// Annotated label image (base64 JPEG), when the OCR service supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_image: Option<String>,
    #[serde(skip)]
    pub raw_response: String,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input_type: InputType,
        analysis: AnalysisResult,
        health_score: u8,
        overall_review: String,
        highlights: Vec<LabelHighlight>,
        highlighted_image: Option<String>,
        raw_response: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            input_type,
            analysis,
            health_score,
            overall_review,
            highlights,
            highlighted_image,
            raw_response,
            created_at: now,
        }
    }
}
