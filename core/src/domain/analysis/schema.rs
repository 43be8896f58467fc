use serde_json::json;

fn string_list() -> serde_json::Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn nutrient_balance() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "Good": string_list(),
            "Bad": string_list()
        }
    })
}

fn micronutrient_balance() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "Good": string_list(),
            "Deficient": string_list()
        }
    })
}

/// Returns the JSON response schema handed to the LLM so it answers with a
/// well-formed analysis payload. Every top-level section is optional; the
/// regulatory flags are strings because the model mixes booleans and notes.
pub fn get_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "NutritionalAnalysis": {
                "type": "object",
                "properties": {
                    "Macronutrients": {
                        "type": "object",
                        "properties": {
                            "Carbohydrates": nutrient_balance(),
                            "Proteins": nutrient_balance(),
                            "Fats": nutrient_balance(),
                            "Fiber": nutrient_balance()
                        }
                    },
                    "Micronutrients": {
                        "type": "object",
                        "properties": {
                            "Vitamins": micronutrient_balance(),
                            "Minerals": micronutrient_balance()
                        }
                    },
                    "HealthRisks": string_list(),
                    "HealthBenefits": string_list()
                }
            },
            "ProcessingLevel": {
                "type": "object",
                "properties": {
                    "Description": { "type": "string" },
                    "Level": {
                        "type": "string",
                        "enum": ["Low", "Medium", "High"]
                    },
                    "Good": string_list(),
                    "Bad": string_list()
                }
            },
            "HarmfulIngredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "Ingredient": { "type": "string" },
                        "Reason": { "type": "string" }
                    },
                    "required": ["Ingredient", "Reason"]
                }
            },
            "DietCompliance": {
                "type": "object",
                "properties": {
                    "CompliantDiets": string_list(),
                    "NonCompliantDiets": string_list(),
                    "Reasons": { "type": "string" }
                }
            },
            "DiabetesAllergenFriendly": {
                "type": "object",
                "properties": {
                    "IsSuitable": { "type": "boolean" },
                    "Reasons": { "type": "string" },
                    "Allergens": string_list()
                }
            },
            "SustainabilityAndEthics": {
                "type": "object",
                "properties": {
                    "Sustainability": { "type": "string" },
                    "EthicalConcerns": { "type": "string" }
                }
            },
            "RecommendedAlternatives": string_list(),
            "RegulatoryCompliance": {
                "type": "object",
                "properties": {
                    "FSSAI": { "type": "string" },
                    "FDA": { "type": "string" },
                    "EFSA": { "type": "string" },
                    "OtherRegions": { "type": "string" }
                }
            },
            "MisleadingClaims": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "Claim": { "type": "string" },
                        "Reason": { "type": "string" }
                    },
                    "required": ["Claim", "Reason"]
                }
            },
            "AlternativeHomeMadeProcedure": {
                "type": "object",
                "properties": {
                    "Ingredients": string_list(),
                    "Steps": string_list()
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_the_score_relevant_sections() {
        let schema = get_analysis_schema();
        let properties = schema
            .get("properties")
            .and_then(|p| p.as_object())
            .expect("schema has properties");

        for section in [
            "NutritionalAnalysis",
            "ProcessingLevel",
            "HarmfulIngredients",
            "DietCompliance",
        ] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
