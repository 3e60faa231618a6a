use super::Fetcher;
use crate::config::ApiConfig;
use crate::error::{JokeError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| JokeError::Network {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "requesting joke data");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|source| JokeError::Network {
                url: url.to_string(),
                source,
            })?;

        debug!(status = %response.status(), "received response");

        // Consumes the response, so the connection is released on both paths
        let body = response.bytes().map_err(|source| JokeError::Read {
            url: url.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one response that promises more body than it sends, then closes.
    fn truncated_body_server() -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"id\"")
                .unwrap();
        });
        (url, handle)
    }

    #[test]
    fn sends_fixed_headers_and_returns_body() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/")
            .match_header("accept", "application/json")
            .match_header("user-agent", "test-agent/1.0")
            .with_body(r#"{"id":"a","joke":"j","status":200}"#)
            .expect(1)
            .create();

        let config = ApiConfig::default()
            .with_base_url(&server.url())
            .with_user_agent("test-agent/1.0");
        let fetcher = HttpFetcher::new(&config).unwrap();
        let url = config.random_url().unwrap();

        let body = fetcher.fetch(url.as_str()).unwrap();

        mock.assert();
        assert_eq!(body, br#"{"id":"a","joke":"j","status":200}"#);
    }

    #[test]
    fn returns_body_regardless_of_http_status() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(404)
            .with_body("not here")
            .create();

        let config = ApiConfig::default().with_base_url(&server.url());
        let fetcher = HttpFetcher::new(&config).unwrap();

        let body = fetcher.fetch(&format!("{}/missing", server.url())).unwrap();
        assert_eq!(body, b"not here");
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let config = ApiConfig::default();
        let fetcher = HttpFetcher::new(&config).unwrap();

        let err = fetcher.fetch("http://127.0.0.1:1/").unwrap_err();
        assert!(matches!(err, JokeError::Network { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn truncated_body_is_a_read_error() {
        let (url, server) = truncated_body_server();
        let fetcher = HttpFetcher::new(&ApiConfig::default()).unwrap();

        let err = fetcher.fetch(&url).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, JokeError::Read { .. }));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().starts_with("Could not read response body"));
    }
}
