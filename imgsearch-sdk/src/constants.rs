// ABOUTME: Centralized constants for the imgsearch SDK
// ABOUTME: Contains the upload endpoint, timeouts, and multipart wire format tokens

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for the upload request
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Search engine URLs
pub mod urls {
    /// Reverse image search upload endpoint
    pub const UPLOAD_URL: &str = "https://www.google.com/searchbyimage/upload";
}

/// Request identification
pub mod http {
    /// User agent sent with every upload
    pub const USER_AGENT: &str = concat!("imgsearch/", env!("CARGO_PKG_VERSION"));
}

/// Multipart wire format tokens dictated by the upload endpoint
pub mod multipart {
    /// Fixed part delimiter. Must not occur inside the uploaded image bytes.
    pub const BOUNDARY: &str = "----------ThIs_Is_tHe_bouNdaRY_$";

    /// Form field carrying the raw image
    pub const FILE_FIELD: &str = "encoded_image";

    /// Empty form field the endpoint expects after the image
    pub const EMPTY_FIELD: &str = "image_content";

    /// Declared type of the image part, regardless of the real format
    pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

    /// Line terminator used throughout the body
    pub const CRLF: &str = "\r\n";
}
