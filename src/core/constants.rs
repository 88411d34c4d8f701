//! Constants for the Validator annotation service
//!
//! Service identity, endpoint paths, and environment variable names used
//! throughout the crate.

/// Service identity
pub mod service {
    /// Human-readable service name, used as the prefix of every error message
    pub const NAME: &str = "Validator";

    /// Default service host
    pub const DEFAULT_BASE_URL: &str = "https://validator.minions.farm";
}

/// Endpoint path constants
pub mod path {
    /// Annotation creation endpoint
    pub const ANNOTATE: &str = "/api/annotate";

    /// Annotation viewer endpoint
    pub const ANNOTATIONS: &str = "/api/annotations";
}

/// Query parameter constants
pub mod query {
    /// Document identifier parameter of the viewer URL
    pub const DOC_ID: &str = "doc_id";
}

/// Environment variable names
pub mod env {
    /// API key fallback when none is passed explicitly
    pub const API_KEY: &str = "VALIDATOR_API_KEY";

    /// Overrides the service host
    pub const BASE_URL: &str = "VALIDATOR_BASE_URL";

    /// Optional TOML configuration file
    pub const CONFIG_PATH: &str = "VALIDATOR_CONFIG_PATH";

    /// Log level for the command-line front end
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
