// ABOUTME: Centralized constants for the imgsearch CLI application
// ABOUTME: Contains environment variable names, status labels, and output defaults

/// Environment variables read by the CLI
pub mod env_vars {
    /// Overrides the configured upload endpoint
    pub const UPLOAD_URL: &str = "IMGSEARCH_UPLOAD_URL";

    /// Disables colored output when set (see no-color.org)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Labels used in per-file reports
pub mod status {
    pub const RESOLVED: &str = "resolved";
    pub const SKIPPED: &str = "skipped";
    pub const FAILED: &str = "failed";

    /// Shown when no signature matched
    pub const UNKNOWN_FORMAT: &str = "unknown";
}
