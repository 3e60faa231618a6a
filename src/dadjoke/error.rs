use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeError {
    #[error("Could not request a dad joke from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not read response body from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No jokes found{}", matching(.term))]
    EmptySet { term: Option<String> },

    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
}

impl JokeError {
    /// Process exit code for this error. 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            JokeError::Network { .. } => 3,
            JokeError::Read { .. } => 4,
            JokeError::Decode { .. } => 5,
            JokeError::EmptySet { .. } => 6,
            JokeError::InvalidUrl(_) => 7,
        }
    }

    pub(crate) fn decode(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| JokeError::Decode { context, source }
    }
}

fn matching(term: &Option<String>) -> String {
    term.as_deref()
        .map(|t| format!(" matching '{}'", t))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, JokeError>;
