use crate::domain::analysis::{
    entities::{AnalysisResult, MicronutrientBalance, MisleadingClaim, NutrientBalance},
    score::ScoreBand,
};

/// Renders an analysis payload into the labeled HTML sections the dashboard
/// embeds. Stateless: fields that are absent render nothing, except the
/// affirmative "none detected" lines for harmful ingredients, misleading
/// claims, nutrient deficiencies, and allergens.
pub fn render_report(analysis: &AnalysisResult, health_score: u8, overall_review: &str) -> String {
    let mut html = String::new();

    html.push_str("<h2>Nutritional and Product Analysis</h2>");

    let band = ScoreBand::from_score(health_score);
    html.push_str(&format!(
        "<h3>Health Score: <span style='color:{};'>{}/100</span></h3>",
        band.css_color(),
        health_score
    ));
    html.push_str(&format!(
        "<h4>Overall Review:</h4><p>{}</p>",
        escape_html(overall_review)
    ));

    render_nutritional_analysis(&mut html, analysis);
    render_processing_level(&mut html, analysis);
    render_harmful_ingredients(&mut html, analysis);
    render_diet_compliance(&mut html, analysis);
    render_allergen_suitability(&mut html, analysis);
    render_sustainability(&mut html, analysis);
    render_alternatives(&mut html, analysis);
    render_regulatory_compliance(&mut html, analysis);
    render_misleading_claims(&mut html, analysis);
    render_homemade_procedure(&mut html, analysis, health_score);

    html
}

fn render_nutritional_analysis(html: &mut String, analysis: &AnalysisResult) {
    let Some(nutritional) = analysis.nutritional_analysis.as_ref() else {
        return;
    };

    html.push_str("<h3>Nutritional Analysis:</h3>");

    if let Some(macros) = nutritional.macronutrients.as_ref() {
        html.push_str("<h4>Macronutrients:</h4>");
        let categories: [(&str, &Option<NutrientBalance>); 4] = [
            ("Carbohydrates", &macros.carbohydrates),
            ("Proteins", &macros.proteins),
            ("Fats", &macros.fats),
            ("Fiber", &macros.fiber),
        ];
        for (name, balance) in categories {
            let Some(balance) = balance else { continue };
            push_colored_list(html, &format!("Good {name}"), "green", &balance.good);
            push_colored_list(html, &format!("Bad {name}"), "red", &balance.bad);
        }
    }

    if let Some(micros) = nutritional.micronutrients.as_ref() {
        html.push_str("<h4>Micronutrients:</h4>");
        let categories: [(&str, &Option<MicronutrientBalance>); 2] =
            [("Vitamins", &micros.vitamins), ("Minerals", &micros.minerals)];
        let mut any_deficient = false;
        for (name, balance) in categories {
            let Some(balance) = balance else { continue };
            push_colored_list(html, &format!("Good {name}"), "green", &balance.good);
            push_colored_list(html, &format!("Deficient {name}"), "red", &balance.deficient);
            any_deficient |= balance
                .deficient
                .as_ref()
                .is_some_and(|items| !items.is_empty());
        }
        if !any_deficient {
            html.push_str("<p style='color:green;'>No nutrient deficiencies detected.</p>");
        }
    }

    push_colored_items(html, "Health Risks", "red", &nutritional.health_risks);
    push_colored_items(html, "Health Benefits", "green", &nutritional.health_benefits);
}

fn render_processing_level(html: &mut String, analysis: &AnalysisResult) {
    let Some(processing) = analysis.processing_level.as_ref() else {
        return;
    };

    html.push_str("<h3>Processing Level:</h3>");

    if let Some(level) = processing.level.as_deref() {
        let color = match level.to_lowercase().as_str() {
            "low" => "green",
            "medium" => "orange",
            _ => "red",
        };
        html.push_str(&format!(
            "<p style='color:{color};'><strong>Level:</strong> {}</p>",
            escape_html(level)
        ));
    }
    if let Some(description) = processing.description.as_deref() {
        html.push_str(&format!("<p>{}</p>", escape_html(description)));
    }
    push_colored_list(html, "Good Processing Aspects", "green", &processing.good);
    push_colored_list(html, "Bad Processing Aspects", "red", &processing.bad);
}

fn render_harmful_ingredients(html: &mut String, analysis: &AnalysisResult) {
    html.push_str("<h3>Harmful Ingredients:</h3>");

    let ingredients = analysis
        .harmful_ingredients
        .as_ref()
        .filter(|items| !items.is_empty());
    let Some(ingredients) = ingredients else {
        html.push_str("<p style='color:green;'>No harmful ingredients detected.</p>");
        return;
    };

    html.push_str("<ul>");
    for item in ingredients {
        html.push_str(&format!(
            "<li style='color:red;'><strong>{}</strong>: {}</li>",
            escape_html(&item.ingredient),
            escape_html(&item.reason)
        ));
    }
    html.push_str("</ul>");
}

fn render_diet_compliance(html: &mut String, analysis: &AnalysisResult) {
    let Some(compliance) = analysis.diet_compliance.as_ref() else {
        return;
    };

    html.push_str("<h3>Diet Compliance:</h3>");

    if let Some(diets) = compliance
        .compliant_diets
        .as_ref()
        .filter(|diets| !diets.is_empty())
    {
        html.push_str(&format!(
            "<p style='color:green;'><strong>Compliant Diets:</strong> {}</p>",
            escape_html(&diets.join(", "))
        ));
    }
    if let Some(diets) = compliance
        .non_compliant_diets
        .as_ref()
        .filter(|diets| !diets.is_empty())
    {
        html.push_str(&format!(
            "<p style='color:red;'><strong>Non-Compliant Diets:</strong> {}</p>",
            escape_html(&diets.join(", "))
        ));
    }
    if let Some(reasons) = compliance.reasons.as_deref() {
        html.push_str(&format!("<p>{}</p>", escape_html(reasons)));
    }
}

fn render_allergen_suitability(html: &mut String, analysis: &AnalysisResult) {
    let Some(suitability) = analysis.diabetes_allergen_friendly.as_ref() else {
        return;
    };

    html.push_str("<h3>Diabetes/Allergen Friendly:</h3>");

    let (color, verdict) = if suitability.is_suitable {
        ("green", "Suitable")
    } else {
        ("red", "Not Suitable")
    };
    html.push_str(&format!(
        "<p style='color:{color};'><strong>{verdict} for people with diabetes or allergies.</strong></p>"
    ));

    if let Some(reasons) = suitability.reasons.as_deref() {
        html.push_str(&format!("<p>{}</p>", escape_html(reasons)));
    }
    match suitability
        .allergens
        .as_ref()
        .filter(|allergens| !allergens.is_empty())
    {
        Some(allergens) => html.push_str(&format!(
            "<p><strong>Allergens:</strong> {}</p>",
            escape_html(&allergens.join(", "))
        )),
        None => html.push_str("<p style='color:green;'>No common allergens detected.</p>"),
    }
}

fn render_sustainability(html: &mut String, analysis: &AnalysisResult) {
    let Some(ethics) = analysis.sustainability_and_ethics.as_ref() else {
        return;
    };

    html.push_str("<h3>Sustainability and Ethics:</h3>");

    if let Some(sustainability) = ethics.sustainability.as_deref() {
        html.push_str(&format!(
            "<p><strong>Sustainability:</strong> {}</p>",
            escape_html(sustainability)
        ));
    }
    if let Some(concerns) = ethics.ethical_concerns.as_deref() {
        html.push_str(&format!(
            "<p><strong>Ethical Concerns:</strong> {}</p>",
            escape_html(concerns)
        ));
    }
}

fn render_alternatives(html: &mut String, analysis: &AnalysisResult) {
    let alternatives = analysis
        .recommended_alternatives
        .as_ref()
        .filter(|items| !items.is_empty());
    let Some(alternatives) = alternatives else {
        return;
    };

    html.push_str("<h3>Recommended Alternatives:</h3><ul>");
    for alternative in alternatives {
        html.push_str(&format!(
            "<li style='color:green;'>{}</li>",
            escape_html(alternative)
        ));
    }
    html.push_str("</ul>");
}

fn render_regulatory_compliance(html: &mut String, analysis: &AnalysisResult) {
    use crate::domain::analysis::entities::ComplianceFlag;

    let Some(regulatory) = analysis.regulatory_compliance.as_ref() else {
        return;
    };

    html.push_str("<h3>Regulatory Compliance:</h3>");

    let flag_text = |flag: &Option<ComplianceFlag>| match flag {
        Some(ComplianceFlag::Flag(true)) => "Yes".to_string(),
        Some(ComplianceFlag::Flag(false)) => "No".to_string(),
        Some(ComplianceFlag::Note(note)) => escape_html(note),
        None => "Unknown".to_string(),
    };

    html.push_str(&format!(
        "<p><strong>FSSAI Compliant:</strong> {}</p>",
        flag_text(&regulatory.fssai)
    ));
    html.push_str(&format!(
        "<p><strong>FDA Compliant:</strong> {}</p>",
        flag_text(&regulatory.fda)
    ));
    html.push_str(&format!(
        "<p><strong>EFSA Compliant:</strong> {}</p>",
        flag_text(&regulatory.efsa)
    ));
    if let Some(other) = regulatory.other_regions.as_deref() {
        html.push_str(&format!(
            "<p><strong>Other Region Compliance Issues:</strong> {}</p>",
            escape_html(other)
        ));
    }
}

fn render_misleading_claims(html: &mut String, analysis: &AnalysisResult) {
    html.push_str("<h3>Misleading Claims:</h3>");

    let claims = analysis
        .misleading_claims
        .as_ref()
        .filter(|claims| !claims.is_empty());
    let Some(claims) = claims else {
        html.push_str("<p style='color:green;'>No misleading claims detected.</p>");
        return;
    };

    html.push_str("<ul>");
    for claim in claims {
        match claim {
            MisleadingClaim::Detailed { claim, reason } => html.push_str(&format!(
                "<li style='color:red;'><strong>{}</strong>: {}</li>",
                escape_html(claim),
                escape_html(reason)
            )),
            MisleadingClaim::Plain(text) => html.push_str(&format!(
                "<li style='color:red;'>{}</li>",
                escape_html(text)
            )),
        }
    }
    html.push_str("</ul>");
}

fn render_homemade_procedure(html: &mut String, analysis: &AnalysisResult, health_score: u8) {
    // Only worth showing a homemade alternative for products that score badly.
    if health_score > 50 {
        return;
    }
    let Some(procedure) = analysis.alternative_home_made_procedure.as_ref() else {
        return;
    };

    let ingredients = procedure
        .ingredients
        .as_ref()
        .filter(|items| !items.is_empty());
    let steps = procedure.steps.as_ref().filter(|items| !items.is_empty());
    if ingredients.is_none() && steps.is_none() {
        return;
    }

    html.push_str("<h3>Alternative Homemade Procedure:</h3>");
    if let Some(ingredients) = ingredients {
        html.push_str("<p><strong>Ingredients Required:</strong></p><ul>");
        for ingredient in ingredients {
            html.push_str(&format!("<li>{}</li>", escape_html(ingredient)));
        }
        html.push_str("</ul>");
    }
    if let Some(steps) = steps {
        html.push_str("<p><strong>Step-by-Step Procedure:</strong></p><ol>");
        for step in steps {
            html.push_str(&format!("<li>{}</li>", escape_html(step)));
        }
        html.push_str("</ol>");
    }
}

/// `<p><strong>` heading followed by a `<ul>` of items; nothing when the
/// list is absent or empty.
fn push_colored_list(html: &mut String, label: &str, color: &str, items: &Option<Vec<String>>) {
    let Some(items) = items.as_ref().filter(|items| !items.is_empty()) else {
        return;
    };

    html.push_str(&format!(
        "<p style='color:{color};'><strong>{label}:</strong></p><ul>"
    ));
    for item in items {
        html.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    html.push_str("</ul>");
}

/// `<h4>` heading with colored list items, for the risk/benefit summaries.
fn push_colored_items(html: &mut String, label: &str, color: &str, items: &Option<Vec<String>>) {
    let Some(items) = items.as_ref().filter(|items| !items.is_empty()) else {
        return;
    };

    html.push_str(&format!("<h4>{label}:</h4><ul>"));
    for item in items {
        html.push_str(&format!(
            "<li style='color:{color};'>{}</li>",
            escape_html(item)
        ));
    }
    html.push_str("</ul>");
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
