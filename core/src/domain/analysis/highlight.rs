use crate::domain::analysis::{
    entities::AnalysisResult,
    value_objects::{HighlightVerdict, LabelHighlight, OcrRegion},
};

/// Lowercases and collapses whitespace so OCR spans and ingredient names
/// compare reliably.
pub fn normalize_label_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classifies each OCR region against the harmful-ingredient list so the
/// dashboard can color the matching patches of the label image.
pub fn classify_regions(analysis: &AnalysisResult, regions: &[OcrRegion]) -> Vec<LabelHighlight> {
    let harmful: Vec<String> = analysis
        .harmful_ingredients
        .as_ref()
        .map(|ingredients| {
            ingredients
                .iter()
                .map(|item| normalize_label_text(&item.ingredient))
                .collect()
        })
        .unwrap_or_default();

    regions
        .iter()
        .map(|region| {
            let verdict = if harmful.contains(&normalize_label_text(&region.text)) {
                HighlightVerdict::Harmful
            } else {
                HighlightVerdict::Neutral
            };

            LabelHighlight {
                text: region.text.clone(),
                quad: region.quad,
                verdict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::HarmfulIngredient;

    fn region(text: &str) -> OcrRegion {
        OcrRegion {
            text: text.to_string(),
            quad: [[0.0, 0.0], [10.0, 0.0], [10.0, 5.0], [0.0, 5.0]],
        }
    }

    fn analysis_with_harmful(names: &[&str]) -> AnalysisResult {
        AnalysisResult {
            harmful_ingredients: Some(
                names
                    .iter()
                    .map(|name| HarmfulIngredient {
                        ingredient: name.to_string(),
                        reason: "test".to_string(),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let analysis = analysis_with_harmful(&["High Fructose  Corn Syrup"]);
        let highlights = classify_regions(&analysis, &[region("high fructose corn syrup")]);

        assert_eq!(highlights[0].verdict, HighlightVerdict::Harmful);
    }

    #[test]
    fn unmatched_regions_are_neutral() {
        let analysis = analysis_with_harmful(&["Trans fats"]);
        let highlights = classify_regions(&analysis, &[region("whole grain oats")]);

        assert_eq!(highlights[0].verdict, HighlightVerdict::Neutral);
    }

    #[test]
    fn missing_harmful_list_marks_everything_neutral() {
        let highlights = classify_regions(&AnalysisResult::default(), &[region("sugar")]);

        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].verdict, HighlightVerdict::Neutral);
    }
}
