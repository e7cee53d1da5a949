use log::{debug, trace, error};

use crate::config::ChatbotConfig;
use crate::error::Error;
use crate::request::{GeneratedText, InferenceRequest, Query};

/// Hugging Face Inference API client
///
/// One POST per query; no retries. Every failure comes back as an
/// `Error` value.
pub struct HuggingFaceClient
{   api_url: String
  , auth_header: String
  , timeout_ms: u64
  , http_client: reqwest::Client
}

impl HuggingFaceClient
{   pub fn new(config: &ChatbotConfig)
      -> Result<Self, Error>
    {   debug!("Creating HuggingFaceClient for {}", config.api_url);
        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(HuggingFaceClient
        {   api_url: config.api_url.clone()
          , auth_header: config.auth_header()
          , timeout_ms: config.timeout_ms
          , http_client
        })
    }

    pub fn api_url(&self) -> &str
    {   &self.api_url
    }

    /// Send the query and return the model's generated text
    pub async fn query(&self, query: &Query) -> crate::QueryReply
    {   debug!("Sending query ({} chars)", query.as_str().len());

        let request = InferenceRequest::from(query);
        trace!("Inference request: {:?}", request);

        let response = self.http_client
          .post(&self.api_url)
          .header("Authorization", &self.auth_header)
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        trace!("Inference response status: {}", status);

        // Only 200 counts; other 2xx carry errors like "Model is loading"
        if status != reqwest::StatusCode::OK
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "<unable to read response body>".to_string()
              );
            error!("Inference API error {}: {}", status, body);
            return Err(Error::ApiError
            {   status: status.as_u16()
              , body
            });
        }

        let body = response.text().await
          .map_err(|e| self.transport_error(e))?;
        trace!("Inference response body: {}", body);

        parse_generated_text(&body)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error
    {   if e.is_timeout()
        {   error!("Request timed out after {}ms", self.timeout_ms);
            Error::Timeout(self.timeout_ms)
        } else
        {   error!("HTTP error: {}", e);
            Error::HttpError(e.to_string())
        }
    }
}

/// Extract `generated_text` from the first element of a JSON array
pub fn parse_generated_text(body: &str) -> crate::QueryReply
{   let value: serde_json::Value = serde_json::from_str(body)
      .map_err(|e| {
        error!("Parse error: {}", e);
        Error::ParseError(e.to_string())
      })?;

    value.as_array()
      .and_then(|items| items.first())
      .and_then(|first| {
        serde_json::from_value::<GeneratedText>(first.clone()).ok()
      })
      .map(|g| g.generated_text)
      .ok_or_else(|| {
        error!("No generated_text in response");
        Error::NoGeneratedText
      })
}
