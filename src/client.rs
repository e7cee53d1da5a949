use log::{debug, info};

use crate::config::ChatbotConfig;
use crate::error::Error;
use crate::providers::HuggingFaceClient;
use crate::request::Query;

pub const TITLE: &str = "Medicinal Chatbot";
pub const TAGLINE: &str
  = "Ask me anything about medicines, symptoms, or treatments.";
pub const EXAMPLE_QUERY: &str
  = "What are the side effects of paracetamol?";
pub const EMPTY_QUERY_WARNING: &str = "Please enter a query.";

/// Outcome of one submit from the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission
{   /// Input was blank; nothing was sent
    Blank
  , /// Query was sent; holds the model's text or the failure
    Answered(crate::QueryReply)
}

impl Submission
{   /// Text the front-end shows for this outcome
    pub fn display_text(&self) -> String
    {   match self
        {   Submission::Blank => EMPTY_QUERY_WARNING.to_string()
          , Submission::Answered(Ok(text)) => text.clone()
          , Submission::Answered(Err(e)) => e.to_string()
        }
    }
}

/// Front-end session: owns the config and the endpoint client
pub struct Chatbot
{   config: ChatbotConfig
  , client: HuggingFaceClient
}

impl Chatbot
{   pub fn new(config: ChatbotConfig) -> Result<Self, Error>
    {   debug!("Initializing Chatbot");
        let client = HuggingFaceClient::new(&config)?;
        Ok(Chatbot
        {   config
          , client
        })
    }

    pub fn config(&self) -> &ChatbotConfig
    {   &self.config
    }

    /// Check the input, then ask the model.
    /// Blank input never reaches the endpoint.
    pub async fn submit(&self, input: &str) -> Submission
    {   let query = match Query::new(input)
        {   Ok(query) => query
          , Err(_) => {
              debug!("Blank input, not querying");
              return Submission::Blank;
            }
        };

        info!("Querying {}", self.client.api_url());
        Submission::Answered(self.client.query(&query).await)
    }
}
