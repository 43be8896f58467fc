/// Nutrition-expert prompt sent to the LLM. The `{extracted_text}`
/// placeholder is replaced with the label text before the call.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a nutrition expert. Analyze the following product details extracted from a food label:

{extracted_text}

Provide the analysis split into the following sections, using JSON format:

- "NutritionalAnalysis": "Macronutrients" (Carbohydrates, Proteins, Fats, Fiber; each with "Good" and "Bad" lists with reasons), "Micronutrients" (Vitamins and Minerals; each with "Good" and "Deficient" lists), "HealthRisks" and "HealthBenefits" summaries.
- "ProcessingLevel": "Description", "Level" (Low/Medium/High), "Good" and "Bad" aspects of processing.
- "HarmfulIngredients": list of objects with "Ingredient" and "Reason" keys.
- "DietCompliance": "CompliantDiets", "NonCompliantDiets", and "Reasons".
- "DiabetesAllergenFriendly": "IsSuitable" (true/false), "Reasons", and "Allergens" present.
- "SustainabilityAndEthics": "Sustainability" of sourcing and "EthicalConcerns".
- "RecommendedAlternatives": healthier or more sustainable alternatives to harmful ingredients.
- "RegulatoryCompliance": "FSSAI", "FDA", "EFSA" compliance and "OtherRegions" issues.
- "MisleadingClaims": list of objects with "Claim" and "Reason" keys.
- "AlternativeHomeMadeProcedure": "Ingredients" with measurements and step-by-step "Steps".

Important instructions:

- Provide the result in JSON format only.
- Do not include any explanations, code snippets, disclaimers, or additional text.
- Do not include code fences.
- Ensure the JSON is properly formatted and valid.
"#;

pub fn build_analysis_prompt(extracted_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{extracted_text}", extracted_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_label_text() {
        let prompt = build_analysis_prompt("INGREDIENTS: sugar, palm oil");

        assert!(prompt.contains("INGREDIENTS: sugar, palm oil"));
        assert!(!prompt.contains("{extracted_text}"));
    }

    #[test]
    fn prompt_names_every_section_of_the_contract() {
        let prompt = build_analysis_prompt("x");

        for section in [
            "NutritionalAnalysis",
            "ProcessingLevel",
            "HarmfulIngredients",
            "DietCompliance",
            "DiabetesAllergenFriendly",
            "SustainabilityAndEthics",
            "RecommendedAlternatives",
            "RegulatoryCompliance",
            "MisleadingClaims",
            "AlternativeHomeMadeProcedure",
        ] {
            assert!(prompt.contains(section), "missing section {section}");
        }
    }
}
