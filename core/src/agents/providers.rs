/// Static description of a built-in backend.
pub struct ProviderSeed {
    pub id: &'static str,
    pub kind: &'static str,
    pub display: &'static str,
    pub base_url: &'static str,
    pub default_model: &'static str,
    pub api_key_header: Option<&'static str>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

pub const GOOGLE_SEED: ProviderSeed = ProviderSeed {
    id: "google",
    kind: "cloud",
    display: "Google Gemini",
    base_url: "https://generativelanguage.googleapis.com/v1beta",
    default_model: "gemini-2.0-flash",
    api_key_header: Some("x-goog-api-key"),
    temperature: None,
    top_p: None,
};

pub const OLLAMA_SEED: ProviderSeed = ProviderSeed {
    id: "ollama",
    kind: "local",
    display: "Ollama",
    base_url: "http://localhost:11434",
    default_model: "llama3.1:8b",
    api_key_header: None,
    temperature: Some(0.2),
    top_p: Some(0.95),
};

pub const PROVIDER_SEEDS: &[ProviderSeed] = &[GOOGLE_SEED, OLLAMA_SEED];
