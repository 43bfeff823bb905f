//! Exit code constants for the flowgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, bad config)
//! - 2: Validation failure (document has structural errors or bad checkpoint timing)
//! - 3: Template load failure (source fetch failed or template not registered)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the workflow document did not pass validation.
pub const VALIDATION_FAILURE: i32 = 2;

/// Template could not be loaded or was never registered.
pub const LOAD_FAILURE: i32 = 3;
