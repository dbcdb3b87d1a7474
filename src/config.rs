use std::env;

pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1alpha";
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// Environment variables consulted for the API key, highest priority first.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GOOGLE_API_KEY", "GEMINI_API_KEY", "GOOGLE_GEMINI_API_KEY"];

pub const DEFAULT_SCENE_PROMPT_TEMPLATE: &str = r#"Generate a professional, realistic scene description for a business editorial photograph about "{keyword}" in the {industry} industry.

Requirements:
- Describe a specific, photographable workplace scene (not abstract concepts)
- Focus on real people doing authentic work related to this topic
- Include environmental details that make it feel genuine and lived-in
- Avoid generic office descriptions - be specific to the topic
- Maximum 2 sentences, around 30-40 words
- Professional but not sterile - show real work happening

Examples of good scene descriptions:
- "Software engineer explaining code architecture to colleagues at a standing desk, laptops open with multiple monitors showing data visualizations. Coffee cups and notebooks scattered naturally."
- "Construction supervisor reviewing safety protocols with team on-site, hard hats and high-vis vests visible. Building materials and equipment in background under natural daylight."
- "Healthcare administrator analyzing patient flow data on tablet in hospital corridor. Medical staff moving naturally in background, professional but warm atmosphere."

Generate scene description for: {keyword} ({industry} industry)"#;

/// Resolves the API key: explicit value first, then [`API_KEY_ENV_VARS`] in order.
pub fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    resolve_api_key_with(explicit, |name| env::var(name).ok())
}

/// Same as [`resolve_api_key`] with a custom variable lookup.
pub fn resolve_api_key_with<F>(explicit: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = explicit.map(str::trim).filter(|key| !key.is_empty()) {
        return Some(key.to_string());
    }

    API_KEY_ENV_VARS.iter().find_map(|name| {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

#[derive(Debug, Clone)]
pub struct SceneAnalysisConfig {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub max_scene_chars: usize,
    /// `{keyword}` and `{industry}` are substituted before sending.
    pub prompt_template: String,
}

impl Default for SceneAnalysisConfig {
    fn default() -> Self {
        SceneAnalysisConfig {
            model: DEFAULT_TEXT_MODEL.to_string(),
            temperature: 0.7,
            max_output_tokens: 100,
            max_scene_chars: 200,
            prompt_template: DEFAULT_SCENE_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl SceneAnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_max_scene_chars(mut self, max_chars: usize) -> Self {
        self.max_scene_chars = max_chars;
        self
    }

    pub fn with_prompt_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = template.into();
        self
    }

    pub fn render_prompt(&self, keyword: &str, industry: &str) -> String {
        self.prompt_template
            .replace("{keyword}", keyword)
            .replace("{industry}", industry)
    }
}

fn parse_timeout_secs(raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            log::warn!(
                "Ignoring invalid OPENIMAGEN_TIMEOUT_SECS value '{}', using no timeout",
                raw
            );
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImagenConfig {
    pub api_key: Option<String>,
    pub image_model: String,
    pub base_url: String,
    pub api_version: String,
    pub aspect_ratio: String,
    pub timeout_secs: Option<u64>,
    pub scene_analysis_enabled: bool,
    pub scene_analysis: SceneAnalysisConfig,
}

impl Default for ImagenConfig {
    fn default() -> Self {
        ImagenConfig {
            api_key: None,
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            timeout_secs: None,
            scene_analysis_enabled: true,
            scene_analysis: SceneAnalysisConfig::default(),
        }
    }
}

impl ImagenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = ImagenConfig {
            api_key: resolve_api_key(None),
            ..Default::default()
        };

        if let Ok(model) = env::var("OPENIMAGEN_IMAGE_MODEL") {
            config.image_model = model;
        }
        if let Ok(model) = env::var("OPENIMAGEN_TEXT_MODEL") {
            config.scene_analysis.model = model;
        }
        if let Ok(url) = env::var("OPENIMAGEN_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(version) = env::var("OPENIMAGEN_API_VERSION") {
            config.api_version = version;
        }
        config.timeout_secs = parse_timeout_secs(env::var("OPENIMAGEN_TIMEOUT_SECS").ok());
        config.scene_analysis_enabled = env::var("OPENIMAGEN_SCENE_ANALYSIS")
            .ok()
            .map_or(true, |val| val != "false" && val != "0");

        config
    }

    /// Explicit keys win over whatever `from_env` picked up. `None` leaves it untouched.
    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        if let Some(key) = resolve_api_key_with(api_key, |_| None) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_scene_analysis(mut self, enabled: bool) -> Self {
        self.scene_analysis_enabled = enabled;
        self
    }

    pub fn with_scene_analysis_config(mut self, config: SceneAnalysisConfig) -> Self {
        self.scene_analysis = config;
        self
    }

    pub fn models_url(&self) -> String {
        format!(
            "{}/{}/models",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}
