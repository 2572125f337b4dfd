// ABOUTME: imgsearch SDK: file signature classification and reverse image search uploads
// ABOUTME: Builds the multipart upload, sends it without following redirects, resolves the results URL

pub mod builder;
pub mod client;
pub mod constants;
pub mod error;
pub mod multipart;
pub mod redirect;
pub mod signature;
pub mod source;
mod test_helpers;

pub use builder::SearchClientConfig;
pub use client::SearchClient;
pub use error::SearchError;
pub use multipart::MultipartRequest;
pub use redirect::{BodyHref, LocationHeader, RedirectExtractor, ResolvedUrl, UploadResponse};
pub use signature::{classify, is_image, ByteMatcher, SignatureEntry, SignatureTable};
pub use source::{read_header, ImageSource};

pub type Result<T> = std::result::Result<T, SearchError>;
