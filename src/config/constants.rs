//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Environment
// =============================================================================

/// Listen port
pub const ENV_PORT: &str = "PORT";

/// Filesystem path of the SQLite store
pub const ENV_DB_PATH: &str = "DB_PATH";

/// Cloud project identifier (stored, not used)
pub const ENV_GCP_PROJECT_ID: &str = "GCP_PROJECT_ID";

/// External URL echoed by the status endpoint
pub const ENV_GITHUB_URL: &str = "GITHUB_URL";

/// Base env file, never overrides variables already set
pub const BASE_ENV_FILE: &str = ".env";

/// Local env file, overrides everything
pub const LOCAL_ENV_FILE: &str = ".env.local";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "prompt_api";

/// Origins allowed by CORS, with or without a port
pub const LOCAL_ORIGINS: &[&str] = &["http://localhost", "http://127.0.0.1"];

// =============================================================================
// Responses
// =============================================================================

/// Prefix of the status message, followed by the external URL
pub const STATUS_MESSAGE_PREFIX: &str = "Base project working...";

/// Detail returned when the status endpoint fails
pub const PROMPT_NOT_FOUND_DETAIL: &str = "prompt not found";

// =============================================================================
// Database
// =============================================================================

/// Database path used when DB_PATH is not set
pub const DEFAULT_DATABASE_PATH: &str = "../data/python-template.db";

/// Page cache size in KiB (negative = KiB rather than pages), 64MB
pub const SQLITE_CACHE_SIZE_KIB: i64 = -64_000;

/// Memory-mapped I/O window in bytes, 256MB
pub const SQLITE_MMAP_SIZE_BYTES: u64 = 268_435_456;
