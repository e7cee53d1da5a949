use std::fmt;

/// Custom error type for medichat operations
/// Implements Clone so a reply can be stored and re-displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Credential variable is missing or blank
    MissingApiKey(String)
  , /// Invalid configuration value
    InvalidConfiguration(String)
  , /// Query text was blank
    EmptyQuery
  , /// Endpoint answered with a non-success status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Response body was not JSON
    ParseError(String)
  , /// JSON had no `generated_text` in its first element
    NoGeneratedText
  , /// Request exceeded the configured timeout (ms)
    Timeout(u64)
  , /// Transport failure (DNS, refused connection, body read)
    HttpError(String)
}

impl Error
{   /// True for errors that should stop the program at startup
    pub fn is_configuration(&self) -> bool
    {   matches!(
          self,
          Error::MissingApiKey(_) | Error::InvalidConfiguration(_)
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f,
                "API key not found. Please set {} in your .env file.",
                var
              )
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::EmptyQuery => {
              write!(f, "Please enter a query.")
            }
          , Error::ApiError { status, body } => {
              write!(f, "Error: {} - {}", status, body)
            }
          , Error::ParseError(_) => {
              write!(f,
                "Error: Unable to decode response. API might be down."
              )
            }
          , Error::NoGeneratedText => {
              write!(f,
                "Error: No valid response received from the model."
              )
            }
          , Error::Timeout(ms) => {
              write!(f, "Error: Request timed out after {} ms", ms)
            }
          , Error::HttpError(msg) => {
              write!(f, "Unexpected Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
