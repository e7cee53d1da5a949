pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;
pub mod prompt;

/*

medichat: a single-turn medical question front-end for a hosted
text-generation model (Hugging Face Inference API). One query in,
one generated answer (or a typed error) out.

medichat/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and crate layout
│   ├── main.rs         # Terminal front-end
│   ├── error.rs        # Error kinds and their display strings
│   ├── config.rs       # Credential, endpoint and timeout
│   ├── client.rs       # Chatbot session (blank check, then query)
│   ├── prompt.rs       # Line commands and the prompt loop
│   ├── request.rs      # Query and wire types
│   └── providers/
│       ├── mod.rs
│       └── huggingface.rs  # The one POST to the endpoint
└── tests/              # Mock-endpoint integration tests

*/

/// MEDICHAT API INTERFACE:

/// Either the model's generated text or why there is none
pub type QueryReply = Result<String, crate::error::Error>;

pub use client::{Chatbot, Submission};
pub use config::ChatbotConfig;
pub use error::Error;
pub use providers::HuggingFaceClient;
pub use request::Query;
