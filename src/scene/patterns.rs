//! Offline keyword matching used when AI scene analysis is unavailable.

struct ScenePattern {
    name: &'static str,
    terms: &'static [&'static str],
    template: &'static str,
}

// Order matters: the first pattern with a matching term wins.
const PATTERNS: &[ScenePattern] = &[
    ScenePattern {
        name: "agriculture",
        terms: &["farm", "agricultur", "agri", "crop", "harvest", "livestock", "dairy", "agronom", "irrigation"],
        template: "Farmer and agronomist discussing {keyword} in the field beside working equipment. Rows of crops, muddy boots and tablets with field data under natural morning light.",
    },
    ScenePattern {
        name: "healthcare",
        terms: &["health", "medical", "medicine", "hospital", "patient", "clinic", "nurse", "pharma"],
        template: "Healthcare professionals reviewing {keyword} together in a hospital corridor. Medical staff moving naturally in background, professional but warm atmosphere.",
    },
    ScenePattern {
        name: "construction",
        terms: &["construction", "building", "infrastructure", "engineering", "architect"],
        template: "Site supervisor reviewing {keyword} plans with crew on an active job site. Hard hats, high-vis vests and building materials visible under natural daylight.",
    },
    ScenePattern {
        name: "manufacturing",
        terms: &["manufactur", "factory", "production line", "supply chain", "logistics", "warehouse"],
        template: "Operations team inspecting {keyword} on the production floor. Machinery, inventory racks and handheld scanners in use, authentic industrial working environment.",
    },
    ScenePattern {
        name: "technology",
        terms: &["ai", "artificial intelligence", "machine learning", "automation", "algorithm", "data", "software", "tech", "digital"],
        template: "Professional team collaborating on {keyword} in modern office environment. Multiple screens with data visualizations, authentic working session with natural lighting and lived-in details.",
    },
    ScenePattern {
        name: "strategy",
        terms: &["management", "strategy", "leadership", "business", "operations", "planning", "growth"],
        template: "Business professionals engaged in strategic discussion about {keyword}. Conference room setting with whiteboards, documents, and authentic decision-making atmosphere.",
    },
    ScenePattern {
        name: "compliance",
        terms: &["safety", "security", "compliance", "risk", "audit", "quality"],
        template: "Professional reviewing {keyword} protocols in workplace setting. Documentation, monitoring equipment, and safety-focused environment with natural workflow.",
    },
    ScenePattern {
        name: "customer",
        terms: &["customer", "service", "support", "client", "user", "experience"],
        template: "Service professional engaged in {keyword} activities. Customer-facing environment with modern tools, authentic service delivery moment.",
    },
    ScenePattern {
        name: "finance",
        terms: &["financial", "finance", "budget", "cost", "roi", "investment", "accounting"],
        template: "Finance professional analyzing {keyword} data at workstation. Multiple monitors with charts and reports, traditional yet modern office environment.",
    },
];

pub const GENERIC_SCENE_TEMPLATE: &str = "Professional team working on {keyword} project in contemporary workplace. Collaborative environment with modern tools, authentic work session with natural lighting and personal touches.";

/// Terms short enough to show up inside unrelated words ("retail", "airline").
/// These only match as a whole word.
const WHOLE_WORD_TERMS: &[&str] = &["ai", "roi"];

/// Lower-cased `text` with every run of non-alphanumerics collapsed to one space.
fn normalize(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn term_matches(keyword: &str, term: &str) -> bool {
    if WHOLE_WORD_TERMS.contains(&term) {
        keyword.split(' ').any(|word| word == term)
    } else {
        keyword.contains(term)
    }
}

/// Name and rendered scene of the first pattern with a term inside the keyword.
pub fn match_keyword(keyword: &str) -> Option<(&'static str, String)> {
    let normalized = normalize(keyword);
    PATTERNS
        .iter()
        .find(|pattern| pattern.terms.iter().any(|term| term_matches(&normalized, term)))
        .map(|pattern| (pattern.name, pattern.template.replace("{keyword}", keyword)))
}

pub fn generic_scene(keyword: &str) -> String {
    GENERIC_SCENE_TEMPLATE.replace("{keyword}", keyword)
}
