// ABOUTME: Reverse image search client that uploads an image and resolves the results URL
// ABOUTME: Posts the multipart body without following redirects, then runs the strategy list

use crate::builder::SearchClientConfig;
use crate::error::SearchError;
use crate::multipart::MultipartRequest;
use crate::redirect::{default_extractors, resolve_redirect, RedirectExtractor, ResolvedUrl, UploadResponse};
use crate::source::ImageSource;
use crate::Result;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use url::Url;

pub struct SearchClient {
    client: reqwest::Client,
    upload_url: Url,
    extractors: Vec<Box<dyn RedirectExtractor>>,
}

impl SearchClient {
    /// Client for the default endpoint
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub(crate) fn from_config(config: SearchClientConfig) -> Result<Self> {
        let upload_url = Url::parse(&config.upload_url).map_err(|e| {
            SearchError::Configuration(format!("Invalid upload URL '{}': {}", config.upload_url, e))
        })?;

        if !matches!(upload_url.scheme(), "http" | "https") {
            return Err(SearchError::Configuration(format!(
                "Unsupported upload URL scheme '{}': {}",
                upload_url.scheme(),
                upload_url
            )));
        }

        // The Location of the upload's own redirect is the answer
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| SearchError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            upload_url,
            extractors: config.extractors.unwrap_or_else(default_extractors),
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Upload `image_bytes` under `file_name` and return the search results URL.
    ///
    /// One request, no retries. Network failures surface as
    /// [`SearchError::Transport`] or [`SearchError::Timeout`]; a response with no
    /// discoverable redirect as [`SearchError::UnexpectedResponse`].
    pub async fn resolve(&self, file_name: &str, image_bytes: &[u8]) -> Result<ResolvedUrl> {
        self.send(MultipartRequest::new(file_name, image_bytes)).await
    }

    pub async fn resolve_source(&self, source: &ImageSource) -> Result<ResolvedUrl> {
        self.resolve(source.file_name(), source.bytes()).await
    }

    pub async fn send(&self, request: MultipartRequest<'_>) -> Result<ResolvedUrl> {
        if request.boundary_collides() {
            log::debug!(
                "Image bytes of {} contain the multipart boundary; the endpoint may reject it",
                request.file_name()
            );
        }

        let body = request.to_body();
        log::debug!(
            "Uploading {} ({} byte body) to {}",
            request.file_name(),
            body.len(),
            self.upload_url
        );

        let response = self
            .client
            .post(self.upload_url.clone())
            .header(CONTENT_TYPE, request.content_type())
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await?;

        log::debug!("Upload answered with HTTP {}", response.status());

        let upload = UploadResponse::read(response, self.upload_url.clone()).await?;
        resolve_redirect(&self.extractors, &upload)
    }
}
