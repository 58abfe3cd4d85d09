//! Stable exit codes for site CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, a render failure or other errors.
pub const INVALID: i32 = 1;
/// `site render` was asked for a page that is not registered.
pub const NOT_FOUND: i32 = 2;
