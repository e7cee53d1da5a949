//! Configuration for the inference endpoint, loaded once at startup

use std::fmt;
use std::time::Duration;
use log::{debug, error};

/// Variable holding the bearer credential
pub const API_KEY_VAR: &str = "HF_API_KEY";
/// Optional endpoint override
pub const API_URL_VAR: &str = "HF_API_URL";
/// Optional request timeout in milliseconds
pub const TIMEOUT_MS_VAR: &str = "HF_TIMEOUT_MS";

pub const DEFAULT_API_URL: &str
  = "https://api-inference.huggingface.co/models/google/flan-t5-large";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Chatbot configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ChatbotConfig
{   /// Bearer credential for the inference endpoint
    pub api_key: String
  , /// Inference endpoint URL
    pub api_url: String
  , /// Request timeout in milliseconds
    pub timeout_ms: u64
}

impl ChatbotConfig
{   /// Config with the default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self
    {   ChatbotConfig
        {   api_key: api_key.into()
          , api_url: DEFAULT_API_URL.to_string()
          , timeout_ms: DEFAULT_TIMEOUT_MS
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self
    {   self.api_url = api_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self
    {   self.timeout_ms = timeout_ms;
        self
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   match dotenvy::dotenv()
        {   Ok(path) => debug!("Loaded {}", path.display())
          , Err(e) if e.not_found() => debug!("No .env file found")
          , Err(e) => {
              error!("Failed to read .env: {}", e);
              return Err(crate::error::Error::InvalidConfiguration(
                format!(".env: {}", e)
              ));
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   let api_key = lookup(API_KEY_VAR)
          .filter(|key| !key.trim().is_empty())
          .ok_or_else(|| {
            error!("{} is not set", API_KEY_VAR);
            crate::error::Error::MissingApiKey(API_KEY_VAR.to_string())
          })?;

        let mut config = ChatbotConfig::new(api_key.trim());

        if let Some(url) = lookup(API_URL_VAR)
          .filter(|url| !url.trim().is_empty())
        {   debug!("Using endpoint override: {}", url);
            config.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_MS_VAR)
        {   config.timeout_ms = parse_timeout_ms(&raw)?;
        }

        debug!(
          "Loaded config: endpoint={}, timeout={}ms",
          config.api_url, config.timeout_ms
        );
        Ok(config)
    }

    /// Authorization header value
    pub fn auth_header(&self) -> String
    {   format!("Bearer {}", self.api_key)
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_millis(self.timeout_ms)
    }
}

fn parse_timeout_ms(raw: &str)
  -> Result<u64, crate::error::Error>
{   match raw.trim().parse::<u64>()
    {   Ok(ms) if ms > 0 => Ok(ms)
      , _ => {
          error!("Bad {} value: {:?}", TIMEOUT_MS_VAR, raw);
          Err(crate::error::Error::InvalidConfiguration(
            format!(
              "{} must be a positive integer, got {:?}",
              TIMEOUT_MS_VAR, raw
            )
          ))
        }
    }
}

// Never print the credential
impl fmt::Debug for ChatbotConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ChatbotConfig")
          .field("api_key", &"<redacted>")
          .field("api_url", &self.api_url)
          .field("timeout_ms", &self.timeout_ms)
          .finish()
    }
}
