use crate::error::{JokeError, Result};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com";

const SEARCH_PATH: &str = "search";

fn default_user_agent() -> String {
    format!(
        "dadjoke/{} (command-line client)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Where to reach the joke API and how to identify ourselves to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Check the base url without building a request.
    pub fn validate(&self) -> Result<()> {
        self.base().map(|_| ())
    }

    /// Endpoint that returns one random joke.
    pub fn random_url(&self) -> Result<Url> {
        self.base()
    }

    /// Search endpoint with `term` percent-encoded into the query string.
    pub fn search_url(&self, term: &str) -> Result<Url> {
        let mut url = self
            .base()?
            .join(SEARCH_PATH)
            .map_err(|e| JokeError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.query_pairs_mut().append_pair("term", term);
        Ok(url)
    }

    // Always ends in '/', so joins append instead of replacing the last segment
    fn base(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| JokeError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(JokeError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.base_url,
                url.scheme()
            )));
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_icanhazdadjoke() {
        let config = ApiConfig::default();
        assert_eq!(
            config.random_url().unwrap().as_str(),
            "https://icanhazdadjoke.com/"
        );
        assert!(config.user_agent.starts_with("dadjoke/"));
    }

    #[test]
    fn search_url_escapes_term() {
        let config = ApiConfig::default();
        assert_eq!(
            config.search_url("chicken").unwrap().as_str(),
            "https://icanhazdadjoke.com/search?term=chicken"
        );
        assert_eq!(
            config.search_url("fish & chips").unwrap().as_str(),
            "https://icanhazdadjoke.com/search?term=fish+%26+chips"
        );
    }

    #[test]
    fn base_url_with_path_keeps_its_path() {
        let config = ApiConfig::default().with_base_url("http://localhost:8080/api");
        assert_eq!(
            config.random_url().unwrap().as_str(),
            "http://localhost:8080/api/"
        );
        assert_eq!(
            config.search_url("cow").unwrap().as_str(),
            "http://localhost:8080/api/search?term=cow"
        );
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        let relative = ApiConfig::default().with_base_url("not a url");
        assert!(matches!(
            relative.validate(),
            Err(JokeError::InvalidUrl(_))
        ));

        let ftp = ApiConfig::default().with_base_url("ftp://example.com");
        assert!(matches!(ftp.random_url(), Err(JokeError::InvalidUrl(_))));
    }
}
