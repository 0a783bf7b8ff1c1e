//! TonicLintErrorCode trait: stable error codes for host integrations.

/// Every error enum provides a structured code string so that a host
/// (editor plugin, CI wrapper) can branch on the failure kind without
/// parsing messages.
pub trait TonicLintErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const IO_ERROR: &str = "IO_ERROR";
