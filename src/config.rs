//! API Configuration
//!
//! Location of the remote animal store.

/// Endpoint root used when `ANIMALS_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "https://65f394fe105614e654a0ac9d.mockapi.io/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time override via `ANIMALS_API_URL`, else [`DEFAULT_BASE_URL`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ANIMALS_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/animals`
    pub fn collection_url(&self) -> String {
        format!("{}/animals", self.base_url)
    }

    /// `{base}/animals/{id}` with the id percent-encoded as a path segment.
    pub fn record_url(&self, id: &str) -> String {
        let segment = percent_encoding::utf8_percent_encode(id, PATH_SEGMENT);
        format!("{}/animals/{}", self.base_url, segment)
    }
}

const PATH_SEGMENT: &percent_encoding::AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_trailing_slash() {
        let config = ApiConfig::new("http://localhost:3000/api/");
        assert_eq!(config.base_url(), "http://localhost:3000/api");
        assert_eq!(config.collection_url(), "http://localhost:3000/api/animals");
        assert_eq!(config.record_url("42"), "http://localhost:3000/api/animals/42");
    }

    #[test]
    fn test_record_url_encodes_segment() {
        let config = ApiConfig::new("http://h");
        assert_eq!(config.record_url("a/b c"), "http://h/animals/a%2Fb%20c");
    }
}
