use std::ffi::OsString;
use std::process::Command;

// ============================================================================
// CommandSpec - argv-style process description
// ============================================================================

/// Specification for a command to execute.
///
/// The companion executable is always described through this type so the
/// input path reaches it as a single argv element, byte for byte, even when
/// it contains spaces or shell metacharacters.
///
/// # Example
///
/// ```rust
/// use cleanplans_runner::CommandSpec;
/// use std::ffi::OsString;
///
/// let cmd = CommandSpec::new("/opt/cleanplans/cleanplans_linux").arg("/tmp/ink_ext_XXXXXX.svg");
///
/// assert_eq!(cmd.program, OsString::from("/opt/cleanplans/cleanplans_linux"));
/// assert_eq!(cmd.args.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandSpec {
    /// The program to execute
    pub program: OsString,
    /// Arguments as discrete elements (NOT shell strings)
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a new `CommandSpec` for `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Convert this `CommandSpec` into a `std::process::Command`.
    ///
    /// Working directory and environment are inherited from the launcher.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}
