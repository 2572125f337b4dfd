// ABOUTME: Test helper utilities for mocking the reverse image search upload endpoint
// ABOUTME: Provides mockito-based servers, canned redirect pages, and pointed clients

#[cfg(test)]
use crate::SearchClient;
#[cfg(test)]
use mockito::{Mock, Server, ServerGuard};

#[cfg(test)]
pub const UPLOAD_PATH: &str = "/searchbyimage/upload";

#[cfg(test)]
pub async fn mock_upload_server() -> ServerGuard {
    Server::new_async().await
}

#[cfg(test)]
pub fn upload_mock(server: &mut ServerGuard) -> Mock {
    server.mock("POST", UPLOAD_PATH)
}

#[cfg(test)]
pub fn client_for(server: &ServerGuard) -> SearchClient {
    SearchClient::builder()
        .upload_url(format!("{}{}", server.url(), UPLOAD_PATH))
        .build()
        .expect("mock server URL is valid")
}

/// A meta-refresh style page the endpoint serves instead of a real redirect
#[cfg(test)]
pub fn redirect_page(url: &str) -> String {
    format!(
        "<HTML><HEAD><meta http-equiv=\"content-type\" content=\"text/html;charset=utf-8\">\n\
         <TITLE>302 Moved</TITLE></HEAD><BODY>\n\
         <H1>302 Moved</H1>\n\
         The document has moved\n\
         <A HREF=\"{}\">here</A>.\r\n\
         </BODY></HTML>\r\n",
        url
    )
}
