use serde::{Deserialize, Serialize};

/// Company context for image generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
    pub industry: String,
    pub custom_prompt_instructions: Option<String>,
    /// Content language code, "en" unless set.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl CompanyData {
    pub fn new(name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            custom_prompt_instructions: None,
            language: default_language(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_custom_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.custom_prompt_instructions = Some(instructions.into());
        self
    }

    /// Custom instructions, ignoring blank values.
    pub fn custom_instructions(&self) -> Option<&str> {
        self.custom_prompt_instructions
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub headline: String,
    pub keyword: String,
    pub company_data: CompanyData,
}

impl ImageRequest {
    pub fn new(
        headline: impl Into<String>,
        keyword: impl Into<String>,
        company_data: CompanyData,
    ) -> Self {
        Self {
            headline: headline.into(),
            keyword: keyword.into(),
            company_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_english() {
        let company = CompanyData::new("Acme Farms", "Agriculture");
        assert_eq!(company.language, "en");
        assert_eq!(company.with_language("de").language, "de");
    }

    #[test]
    fn test_language_missing_from_json() {
        let company: CompanyData = serde_json::from_str(
            r#"{"name":"Acme Farms","industry":"Agriculture","custom_prompt_instructions":null}"#,
        )
        .unwrap();
        assert_eq!(company.language, "en");
        assert_eq!(company.custom_instructions(), None);
    }

    #[test]
    fn test_blank_custom_instructions_are_ignored() {
        let company = CompanyData::new("Acme", "Retail").with_custom_instructions("   ");
        assert_eq!(company.custom_instructions(), None);
    }
}
