// ABOUTME: Builder pattern implementation for SearchClient configuration
// ABOUTME: Endpoint, timeout, user agent, and redirect strategies with sensible defaults

use crate::constants::{http, timeouts, urls};
use crate::error::SearchError;
use crate::redirect::RedirectExtractor;
use crate::SearchClient;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
#[builder(build_method(into = Result<SearchClient, SearchError>))]
pub struct SearchClientConfig {
    #[builder(default = urls::UPLOAD_URL.to_string(), setter(into))]
    pub upload_url: String,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = http::USER_AGENT.to_string(), setter(into))]
    pub user_agent: String,

    /// Replaces the default Location-then-HREF strategy list
    #[builder(default, setter(strip_option))]
    pub extractors: Option<Vec<Box<dyn RedirectExtractor>>>,
}

impl From<SearchClientConfig> for Result<SearchClient, SearchError> {
    fn from(config: SearchClientConfig) -> Self {
        SearchClient::from_config(config)
    }
}

impl SearchClient {
    pub fn builder() -> SearchClientConfigBuilder<((), (), (), ())> {
        SearchClientConfig::builder()
    }
}
