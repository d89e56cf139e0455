use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

/// Connection to the OpenAI-compatible vision service.
#[derive(Debug, Clone)]
pub struct VisionSettings {
    pub service_url: String,
    /// Photo analysis reports a per-image error when unset.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
    pub retry_max_elapsed_seconds: u64,
    pub max_concurrency: usize,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Vision Service
    pub vision: VisionSettings,

    // Uploads
    pub max_images_per_request: usize,
    pub max_upload_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Environment::parse(&lookup("ENV").unwrap_or_else(|| "dev".to_string()));
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = lookup("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Vision Service
        let service_url = lookup("VISION_SERVICE_URL")
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        Url::parse(&service_url)
            .with_context(|| format!("VISION_SERVICE_URL is not a valid URL: {service_url}"))?;
        let api_key = lookup("VISION_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let model = lookup("VISION_MODEL").unwrap_or_else(|| "gpt-4o".to_string());
        let max_tokens = parse_var(&lookup, "VISION_MAX_TOKENS").unwrap_or(1000);
        let timeout_seconds = parse_var(&lookup, "VISION_TIMEOUT_SECONDS").unwrap_or(60);
        let retry_max_elapsed_seconds =
            parse_var(&lookup, "VISION_RETRY_MAX_ELAPSED_SECONDS").unwrap_or(30);
        let max_concurrency = parse_var(&lookup, "VISION_MAX_CONCURRENCY")
            .filter(|n: &usize| *n > 0)
            .unwrap_or(4);

        // Uploads
        let max_images_per_request = parse_var(&lookup, "MAX_IMAGES_PER_REQUEST").unwrap_or(20);
        let max_upload_bytes =
            parse_var(&lookup, "MAX_UPLOAD_BYTES").unwrap_or(25 * 1024 * 1024); // 25 MiB

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            vision: VisionSettings {
                service_url,
                api_key,
                model,
                max_tokens,
                timeout_seconds,
                retry_max_elapsed_seconds,
                max_concurrency,
            },
            max_images_per_request,
            max_upload_bytes,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.env, Environment::Dev);
        assert_eq!(s.server_addr, "0.0.0.0:8080");
        assert_eq!(s.vision.service_url, "https://api.openai.com/v1");
        assert!(s.vision.api_key.is_none());
        assert_eq!(s.vision.model, "gpt-4o");
        assert_eq!(s.vision.max_tokens, 1000);
        assert_eq!(s.vision.timeout_seconds, 60);
        assert_eq!(s.vision.retry_max_elapsed_seconds, 30);
        assert_eq!(s.vision.max_concurrency, 4);
        assert_eq!(s.max_images_per_request, 20);
        assert_eq!(s.max_upload_bytes, 25 * 1024 * 1024);
        assert_eq!(s.cors_allow_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn overrides() {
        let s = settings(&[
            ("ENV", "production"),
            ("VISION_API_KEY", " sk-test "),
            ("VISION_MAX_CONCURRENCY", "8"),
            ("CORS_ALLOW_ORIGINS", "https://a.example, ,https://b.example"),
        ])
        .unwrap();
        assert!(s.env.is_prod());
        assert_eq!(s.vision.api_key.as_deref(), Some("sk-test"));
        assert_eq!(s.vision.max_concurrency, 8);
        assert_eq!(
            s.cors_allow_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn blank_api_key_is_unset() {
        let s = settings(&[("VISION_API_KEY", "   ")]).unwrap();
        assert!(s.vision.api_key.is_none());
    }

    #[test]
    fn zero_concurrency_falls_back() {
        let s = settings(&[("VISION_MAX_CONCURRENCY", "0")]).unwrap();
        assert_eq!(s.vision.max_concurrency, 4);
    }

    #[test]
    fn invalid_service_url_is_rejected() {
        assert!(settings(&[("VISION_SERVICE_URL", "not a url")]).is_err());
    }
}
