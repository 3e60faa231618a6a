use super::Fetcher;
use crate::error::Result;
use std::cell::RefCell;

/// In-memory fetcher for testing.
/// Serves one canned body for every url and remembers what was asked for.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    body: Vec<u8>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Urls requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.body.clone())
    }
}
