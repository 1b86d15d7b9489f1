//! Exit code constants for the notice CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown template, missing workspace)
//! - 2: Validation failure (invalid template record, strict render misses)
//! - 3: I/O failure (reading or writing workspace files)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown template, or uninitialized workspace.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a template record or config value was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: a workspace file could not be read or written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
