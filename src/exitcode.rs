//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any user-facing failure: usage, column spec, input or output
pub const FAILURE: i32 = 1;
