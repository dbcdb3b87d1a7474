use crate::models::ImageRequest;

const MAX_ALT_TEXT_CHARS: usize = 125;

const PHOTOGRAPHY_STYLE: &[&str] = &[
    "Photography style:",
    "- Professional editorial quality (Canon 5D Mark IV, 35mm f/2.8)",
    "- Natural lighting with soft shadows, not harsh or uniform",
    "- Rule of thirds composition, authentic documentary style",
    "- Shallow depth of field with natural background blur",
    "- Modern color grading with professional warmth",
    "- Subtle film grain for authenticity",
];

const EDITORIAL_REQUIREMENTS: &[&str] = &[
    "Editorial requirements:",
    "- Candid, authentic moment - not posed or stock-photo-like",
    "- Real workplace environment with natural details",
    "- Professional but approachable atmosphere",
    "- No text, logos, or branding visible in image",
    "- Diverse and inclusive representation when people are shown",
];

pub fn build_professional_prompt(request: &ImageRequest, scene_description: &str) -> String {
    let mut lines: Vec<String> = vec![
        format!(
            "Professional editorial photograph for a business article about '{}'.",
            request.keyword
        ),
        String::new(),
        format!("Scene: {}", scene_description),
        String::new(),
    ];
    lines.extend(PHOTOGRAPHY_STYLE.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.extend(EDITORIAL_REQUIREMENTS.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.push("Technical specs: 16:9 landscape, high resolution, editorial quality".to_string());
    lines.push("Style reference: Bloomberg Businessweek, Harvard Business Review".to_string());

    if let Some(custom) = request.company_data.custom_instructions() {
        lines.push(String::new());
        lines.push(format!("Additional requirements: {}", custom));
    }

    lines.join("\n")
}

pub fn build_alt_text(headline: &str) -> String {
    let alt_text = format!("Professional editorial image: {}", headline);
    if alt_text.chars().count() <= MAX_ALT_TEXT_CHARS {
        return alt_text;
    }
    let truncated: String = alt_text.chars().take(MAX_ALT_TEXT_CHARS - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyData;

    fn request(custom: Option<&str>) -> ImageRequest {
        let mut company = CompanyData::new("GreenFields", "Agriculture");
        if let Some(custom) = custom {
            company = company.with_custom_instructions(custom);
        }
        ImageRequest::new("Precision Farming Goes Mainstream", "precision farming", company)
    }

    #[test]
    fn test_prompt_carries_scene_and_shared_requirements() {
        let prompt = build_professional_prompt(&request(None), "A farmer in a field.");

        assert!(prompt.starts_with(
            "Professional editorial photograph for a business article about 'precision farming'."
        ));
        assert!(prompt.contains("\n\nScene: A farmer in a field.\n\n"));
        assert!(prompt.contains("Canon 5D Mark IV, 35mm f/2.8"));
        assert!(prompt.contains("authentic documentary style"));
        assert!(prompt.contains("Diverse and inclusive representation"));
        assert!(prompt.contains("Technical specs: 16:9 landscape"));
        assert!(!prompt.contains("Additional requirements"));
    }

    #[test]
    fn test_custom_instructions_are_appended_last() {
        let prompt = build_professional_prompt(&request(Some("Show drones overhead")), "scene");
        assert!(prompt.ends_with("\n\nAdditional requirements: Show drones overhead"));

        let blank = build_professional_prompt(&request(Some("   ")), "scene");
        assert!(!blank.contains("Additional requirements"));
    }

    #[test]
    fn test_alt_text_truncation() {
        assert_eq!(build_alt_text("Short"), "Professional editorial image: Short");

        let long = "x".repeat(200);
        let alt = build_alt_text(&long);
        assert_eq!(alt.chars().count(), 125);
        assert!(alt.ends_with("..."));
    }
}
