// ABOUTME: Hand-assembled multipart/form-data body for reverse image search uploads
// ABOUTME: Raw image bytes sit unencoded between a fixed ASCII head and tail

use crate::constants::multipart::{BOUNDARY, CRLF, EMPTY_FIELD, FILE_FIELD, IMAGE_CONTENT_TYPE};

/// One upload: an image part followed by an empty `image_content` field.
///
/// The body layout is dictated by the endpoint and reproduced byte for byte:
///
/// ```text
/// --<boundary>\r\n
/// Content-Disposition: form-data; name="encoded_image"; filename="<name>"\r\n
/// Content-Type: image/jpeg\r\n
/// \r\n
/// <image bytes>\r\n
/// --<boundary>\r\n
/// Content-Disposition: form-data; name="image_content"\r\n
/// \r\n
/// \r\n
/// --<boundary>--\r\n
/// ```
///
/// The boundary is a fixed token. An image that happens to contain it would
/// corrupt parsing on the server; [`MultipartRequest::boundary_collides`] reports
/// that case but the body is never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultipartRequest<'a> {
    file_name: &'a str,
    image_bytes: &'a [u8],
}

impl<'a> MultipartRequest<'a> {
    pub fn new(file_name: &'a str, image_bytes: &'a [u8]) -> Self {
        Self {
            file_name,
            image_bytes,
        }
    }

    pub fn boundary(&self) -> &'static str {
        BOUNDARY
    }

    pub fn file_name(&self) -> &'a str {
        self.file_name
    }

    pub fn image_bytes(&self) -> &'a [u8] {
        self.image_bytes
    }

    /// Value for the request's `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    /// Everything before the image bytes
    pub fn head(&self) -> String {
        format!(
            "--{boundary}{CRLF}\
             Content-Disposition: form-data; name=\"{FILE_FIELD}\"; filename=\"{name}\"{CRLF}\
             Content-Type: {IMAGE_CONTENT_TYPE}{CRLF}\
             {CRLF}",
            boundary = BOUNDARY,
            name = escape_file_name(self.file_name),
        )
    }

    /// Everything after the image bytes
    pub fn tail(&self) -> String {
        format!(
            "{CRLF}--{boundary}{CRLF}\
             Content-Disposition: form-data; name=\"{EMPTY_FIELD}\"{CRLF}\
             {CRLF}\
             {CRLF}--{boundary}--{CRLF}",
            boundary = BOUNDARY,
        )
    }

    /// Exact byte length of [`MultipartRequest::to_body`]
    pub fn content_length(&self) -> usize {
        self.head().len() + self.image_bytes.len() + self.tail().len()
    }

    pub fn boundary_collides(&self) -> bool {
        let needle = BOUNDARY.as_bytes();
        self.image_bytes
            .windows(needle.len())
            .any(|window| window == needle)
    }

    /// Head, raw image bytes, and tail concatenated
    pub fn to_body(&self) -> Vec<u8> {
        let head = self.head();
        let tail = self.tail();

        let mut body = Vec::with_capacity(head.len() + self.image_bytes.len() + tail.len());
        body.extend_from_slice(head.as_bytes());
        body.extend_from_slice(self.image_bytes);
        body.extend_from_slice(tail.as_bytes());
        body
    }
}

// Quotes and line breaks would end the header early
fn escape_file_name(name: &str) -> String {
    name.replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
