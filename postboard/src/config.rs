use crate::client::DEFAULT_BASE_URL;

pub const DEFAULT_STUB_BIND: &str = "127.0.0.1:3000";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the posts endpoint. `POSTBOARD_API_URL`
    pub api_base_url: String,
    /// Listen address of the local stand-in server. `POSTBOARD_STUB_BIND`
    pub stub_bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.into(),
            stub_bind: DEFAULT_STUB_BIND.into(),
        }
    }
}

impl Settings {
    /// Loads `.env` if there is one, then applies environment overrides.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(v) = lookup("POSTBOARD_API_URL").filter(|v| !v.trim().is_empty()) {
            settings.api_base_url = v;
        }
        if let Some(v) = lookup("POSTBOARD_STUB_BIND").filter(|v| !v.trim().is_empty()) {
            settings.stub_bind = v;
        }

        settings
    }
}
