//! Exit code constants for the quill CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing required input)
//! - 2: Configuration error (missing API key, invalid config file)
//! - 3: Remote generation failure (text or trend discovery)
//! - 4: Archive build or write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a required field left empty.
pub const USER_ERROR: i32 = 1;

/// Configuration error: missing credential, unreadable or invalid config.
pub const CONFIG_ERROR: i32 = 2;

/// Remote generation failure: text generation or trend discovery.
pub const GENERATION_FAILURE: i32 = 3;

/// Archive failure: image decode, zip serialization, or file write.
pub const ARCHIVE_FAILURE: i32 = 4;
