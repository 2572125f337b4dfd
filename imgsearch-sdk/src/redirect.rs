// ABOUTME: Redirect extraction strategies applied to raw upload responses
// ABOUTME: Tries the Location header first, then HREF markup in the response body

use crate::error::SearchError;
use crate::Result;
use http::header::LOCATION;
use http::{HeaderMap, StatusCode};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

// Standalone attribute only, so `data-href` is skipped
static HREF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|[\s<])href="([^"]+)""#).expect("HREF pattern compiles")
});

/// The parts of an upload response the strategies look at
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
    /// URL the upload was posted to, used to resolve relative redirects
    pub endpoint: Url,
}

impl UploadResponse {
    pub(crate) async fn read(response: reqwest::Response, endpoint: Url) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(Self {
            status,
            headers,
            body,
            endpoint,
        })
    }
}

/// The search results URL and the strategy that found it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUrl {
    pub url: String,
    pub strategy: &'static str,
}

/// One way of discovering where the endpoint wants to send the browser.
///
/// Strategies are tried in order and the first `Some` wins. Implement this to
/// follow a change in endpoint behavior without touching request building.
pub trait RedirectExtractor: Send + Sync {
    /// Short name reported alongside the resolved URL
    fn name(&self) -> &'static str;

    fn extract(&self, response: &UploadResponse) -> Option<String>;
}

/// `Location` header of a 3xx response
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationHeader;

impl RedirectExtractor for LocationHeader {
    fn name(&self) -> &'static str {
        "location_header"
    }

    fn extract(&self, response: &UploadResponse) -> Option<String> {
        if !response.status.is_redirection() {
            return None;
        }

        let location = response.headers.get(LOCATION)?.to_str().ok()?.trim();
        if location.is_empty() {
            return None;
        }

        absolute(&response.endpoint, location)
    }
}

/// First `HREF="..."` attribute in a meta-refresh style page
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyHref;

impl RedirectExtractor for BodyHref {
    fn name(&self) -> &'static str {
        "body_href"
    }

    fn extract(&self, response: &UploadResponse) -> Option<String> {
        // Error pages carry links too; they are never a redirect
        if !(response.status.is_success() || response.status.is_redirection()) {
            return None;
        }

        let href = HREF_PATTERN.captures(&response.body)?.get(1)?.as_str();
        absolute(&response.endpoint, &href.replace("&amp;", "&"))
    }
}

fn absolute(endpoint: &Url, location: &str) -> Option<String> {
    endpoint.join(location).ok().map(String::from)
}

pub fn default_extractors() -> Vec<Box<dyn RedirectExtractor>> {
    vec![Box::new(LocationHeader), Box::new(BodyHref)]
}

/// Run `extractors` in order over `response`.
///
/// Fails with [`SearchError::UnexpectedResponse`] when none of them finds a
/// destination; a URL is never guessed.
pub fn resolve_redirect(
    extractors: &[Box<dyn RedirectExtractor>],
    response: &UploadResponse,
) -> Result<ResolvedUrl> {
    for extractor in extractors {
        if let Some(url) = extractor.extract(response) {
            log::debug!("Resolved redirect via {}: {}", extractor.name(), url);
            return Ok(ResolvedUrl {
                url,
                strategy: extractor.name(),
            });
        }
    }

    Err(SearchError::UnexpectedResponse {
        status: response.status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn response(status: u16, location: Option<&str>, body: &str) -> UploadResponse {
        let mut headers = HeaderMap::new();
        if let Some(location) = location {
            headers.insert(LOCATION, HeaderValue::from_str(location).unwrap());
        }

        UploadResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers,
            body: body.to_string(),
            endpoint: Url::parse("https://search.example/searchbyimage/upload").unwrap(),
        }
    }

    #[test]
    fn test_location_header_on_redirect() {
        let resolved = resolve_redirect(
            &default_extractors(),
            &response(302, Some("http://results.example/abc"), ""),
        )
        .unwrap();

        assert_eq!(resolved.url, "http://results.example/abc");
        assert_eq!(resolved.strategy, "location_header");
    }

    #[test]
    fn test_relative_location_joins_endpoint() {
        let found = LocationHeader.extract(&response(302, Some("/search?tbs=sbi:AMhZ"), ""));
        assert_eq!(
            found.as_deref(),
            Some("https://search.example/search?tbs=sbi:AMhZ")
        );
    }

    #[test]
    fn test_location_ignored_without_redirect_status() {
        let found = LocationHeader.extract(&response(200, Some("http://results.example/abc"), ""));
        assert_eq!(found, None);
    }

    #[test]
    fn test_body_href_fallback() {
        let page = r#"<HTML><HEAD><meta http-equiv="content-type" content="text/html;charset=utf-8">
<TITLE>302 Moved</TITLE></HEAD><BODY>
<H1>302 Moved</H1>
The document has moved
<A HREF="http://results.example/xyz">here</A>.
</BODY></HTML>"#;

        let resolved = resolve_redirect(&default_extractors(), &response(200, None, page)).unwrap();
        assert_eq!(resolved.url, "http://results.example/xyz");
        assert_eq!(resolved.strategy, "body_href");
    }

    #[test]
    fn test_body_href_decodes_ampersands_and_takes_first() {
        let page = r#"<a href="http://results.example/search?a=1&amp;b=2">x</a>
<a href="http://results.example/second">y</a>"#;

        let found = BodyHref.extract(&response(200, None, page));
        assert_eq!(
            found.as_deref(),
            Some("http://results.example/search?a=1&b=2")
        );
    }

    #[test]
    fn test_body_href_skips_prefixed_attributes() {
        let page = r#"<link data-href="http://cdn.example/x.css"><A HREF="http://results.example/xyz">here</A>"#;

        let found = BodyHref.extract(&response(200, None, page));
        assert_eq!(found.as_deref(), Some("http://results.example/xyz"));
    }

    #[test]
    fn test_body_href_at_start_of_body() {
        let found = BodyHref.extract(&response(200, None, r#"href="http://results.example/s""#));
        assert_eq!(found.as_deref(), Some("http://results.example/s"));
    }

    #[test]
    fn test_header_wins_over_body() {
        let resolved = resolve_redirect(
            &default_extractors(),
            &response(
                302,
                Some("http://results.example/header"),
                r#"<A HREF="http://results.example/body">here</A>"#,
            ),
        )
        .unwrap();

        assert_eq!(resolved.url, "http://results.example/header");
    }

    #[test]
    fn test_no_redirect_is_unexpected_response() {
        let result = resolve_redirect(
            &default_extractors(),
            &response(200, None, "<html><body>No results</body></html>"),
        );

        assert!(matches!(
            result,
            Err(SearchError::UnexpectedResponse { status: 200 })
        ));
    }

    #[test]
    fn test_empty_href_is_not_a_url() {
        let result = resolve_redirect(
            &default_extractors(),
            &response(200, None, r#"<a HREF="">nothing</a>"#),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_error_page_links_are_ignored() {
        let result = resolve_redirect(
            &default_extractors(),
            &response(500, None, r#"<a href="http://status.example/">status</a>"#),
        );

        assert!(matches!(
            result,
            Err(SearchError::UnexpectedResponse { status: 500 })
        ));
    }

    #[test]
    fn test_custom_extractor_slots_into_the_list() {
        struct Refresh;

        impl RedirectExtractor for Refresh {
            fn name(&self) -> &'static str {
                "refresh_header"
            }

            fn extract(&self, response: &UploadResponse) -> Option<String> {
                let value = response.headers.get("refresh")?.to_str().ok()?;
                value.split_once("url=").map(|(_, url)| url.to_string())
            }
        }

        let mut upload = response(200, None, "");
        upload
            .headers
            .insert("refresh", HeaderValue::from_static("0; url=http://results.example/r"));

        let mut extractors = default_extractors();
        extractors.push(Box::new(Refresh));

        let resolved = resolve_redirect(&extractors, &upload).unwrap();
        assert_eq!(resolved.url, "http://results.example/r");
        assert_eq!(resolved.strategy, "refresh_header");
    }
}
