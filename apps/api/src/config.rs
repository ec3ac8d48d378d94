use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_SYSTEM_PROMPT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/system_prompt.txt");
const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded once at startup and shared read-only.
///
/// A missing `GROQ_API_KEY` is not an error here; `main` logs a warning once
/// tracing is up and requests will fail upstream with an authorization error.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub system_prompt: Arc<str>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prompt_path = lookup("SYSTEM_PROMPT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_PROMPT_PATH));

        Ok(Config {
            groq_api_key: lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()),
            groq_api_url: lookup("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            system_prompt: load_system_prompt(&prompt_path)?,
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Reads the interviewer system prompt. The text is used verbatim.
pub fn load_system_prompt(path: &Path) -> Result<Arc<str>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read system prompt from '{}'", path.display()))?;
    Ok(Arc::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn prompt_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn lookup_from(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_prompt_path_is_set() {
        let file = prompt_file("You are an interviewer.");
        let vars = HashMap::from([(
            "SYSTEM_PROMPT_PATH",
            file.path().to_string_lossy().into_owned(),
        )]);

        let config = Config::from_lookup(lookup_from(vars)).unwrap();
        assert_eq!(config.groq_api_key, None);
        assert_eq!(config.groq_api_url, DEFAULT_GROQ_API_URL);
        assert_eq!(&*config.system_prompt, "You are an interviewer.");
        assert_eq!(config.port, 5000);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let file = prompt_file("prompt");
        let vars = HashMap::from([
            ("SYSTEM_PROMPT_PATH", file.path().to_string_lossy().into_owned()),
            ("GROQ_API_KEY", "   ".to_string()),
        ]);

        let config = Config::from_lookup(lookup_from(vars)).unwrap();
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let file = prompt_file("prompt");
        let vars = HashMap::from([
            ("SYSTEM_PROMPT_PATH", file.path().to_string_lossy().into_owned()),
            ("GROQ_API_KEY", "gsk_test".to_string()),
            ("GROQ_API_URL", "http://127.0.0.1:9999/v1/chat".to_string()),
            ("PORT", "8081".to_string()),
        ]);

        let config = Config::from_lookup(lookup_from(vars)).unwrap();
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.groq_api_url, "http://127.0.0.1:9999/v1/chat");
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let file = prompt_file("prompt");
        let vars = HashMap::from([
            ("SYSTEM_PROMPT_PATH", file.path().to_string_lossy().into_owned()),
            ("PORT", "not-a-port".to_string()),
        ]);

        let err = Config::from_lookup(lookup_from(vars)).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_missing_prompt_file_is_fatal() {
        let vars = HashMap::from([(
            "SYSTEM_PROMPT_PATH",
            "/nonexistent/system_prompt.txt".to_string(),
        )]);

        let err = Config::from_lookup(lookup_from(vars)).unwrap_err();
        assert!(err.to_string().contains("system prompt"));
    }

    #[test]
    fn test_bundled_prompt_file_loads() {
        let prompt = load_system_prompt(Path::new(DEFAULT_SYSTEM_PROMPT_PATH)).unwrap();
        assert!(!prompt.trim().is_empty());
    }
}
