//! Request and response types for the inference endpoint

use serde::{Deserialize, Serialize};

/// A query the user submitted; never blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query
{   /// Rejects blank or whitespace-only text.
    /// The text is kept as typed and sent unmodified.
    pub fn new(text: impl Into<String>)
      -> Result<Self, crate::error::Error>
    {   let text = text.into();
        if text.trim().is_empty()
        {   return Err(crate::error::Error::EmptyQuery);
        }
        Ok(Query(text))
    }

    pub fn as_str(&self) -> &str
    {   &self.0
    }
}

/// Body sent to the endpoint: `{"inputs": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a>
{   pub inputs: &'a str
}

impl<'a> From<&'a Query> for InferenceRequest<'a>
{   fn from(query: &'a Query) -> Self
    {   InferenceRequest
        {   inputs: query.as_str()
        }
    }
}

/// One element of a successful reply
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText
{   pub generated_text: String
}
