//! Exit codes for the cleanplans launcher.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | - | Companion ran and its output was relayed |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Missing input argument or invalid configuration |
//! | 65 | `OUTPUT_DECODE` | Companion stdout was not valid UTF-8 |
//! | 69 | `LAUNCH_FAILED` | Companion could not be started |
//! | 70 | `COMPANION_FAILURE` | Companion exited non-zero (strict mode only) |

/// Type-safe process exit code.
///
/// Use the named constants, and [`as_i32()`](Self::as_i32) to get the value
/// for `std::process::exit()`.
///
/// # Example
///
/// ```rust
/// use cleanplans_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::LAUNCH_FAILED.as_i32(), 69);
/// assert_ne!(ExitCode::LAUNCH_FAILED, ExitCode::COMPANION_FAILURE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - missing input path or bad configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Companion stdout could not be decoded as text
    pub const OUTPUT_DECODE: ExitCode = ExitCode(65);

    /// Companion executable missing, not executable, or platform unsupported
    pub const LAUNCH_FAILED: ExitCode = ExitCode(69);

    /// Companion exited with a non-zero status and strict mode is on
    pub const COMPANION_FAILURE: ExitCode = ExitCode(70);

    /// Get the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}
