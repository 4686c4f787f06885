//! Companion dispatch: resolve, invoke, relay
//!
//! [`Launcher`] resolves the companion executable for the host platform inside
//! the launcher directory, runs it on the input file, and hands back an
//! [`Invocation`] whose output can be relayed to any writer.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use cleanplans_config::LauncherSettings;
use cleanplans_runner::{
    CommandSpec, NativeRunner, Platform, ProcessOutput, ProcessRunner, RunnerError,
};
use cleanplans_utils::error::LauncherError;
use cleanplans_utils::{logging, paths};

/// How a finished invocation is turned into launcher output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayPolicy {
    /// Fail when the companion exits non-zero (after relaying its output)
    pub strict: bool,
    /// Copy the companion's stderr bytes to the error writer
    pub forward_stderr: bool,
}

impl From<&LauncherSettings> for RelayPolicy {
    fn from(settings: &LauncherSettings) -> Self {
        Self {
            strict: settings.strict,
            forward_stderr: settings.forward_stderr,
        }
    }
}

/// Runs the platform companion that ships next to the launcher.
#[derive(Debug, Clone)]
pub struct Launcher<R = NativeRunner> {
    runner: R,
    platform: Platform,
    launcher_dir: PathBuf,
    launcher_exe: Option<PathBuf>,
}

impl Launcher<NativeRunner> {
    /// Launcher for the running process: host platform, own directory, native spawning.
    pub fn native() -> Result<Self, LauncherError> {
        let exe = paths::launcher_exe().map_err(LauncherError::LauncherDir)?;
        let launcher_dir = paths::launcher_dir_from(&exe).map_err(LauncherError::LauncherDir)?;
        Ok(
            Self::new(NativeRunner::new(), Platform::current(), launcher_dir)
                .with_launcher_exe(exe),
        )
    }
}

impl<R: ProcessRunner> Launcher<R> {
    #[must_use]
    pub fn new(runner: R, platform: Platform, launcher_dir: PathBuf) -> Self {
        Self {
            runner,
            platform,
            launcher_dir,
            launcher_exe: None,
        }
    }

    /// Record the launcher's own executable path.
    ///
    /// A companion that resolves to this path is refused instead of spawned,
    /// which would otherwise start the launcher recursively.
    #[must_use]
    pub fn with_launcher_exe(mut self, exe: PathBuf) -> Self {
        self.launcher_exe = Some(exe);
        self
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn launcher_dir(&self) -> &Path {
        &self.launcher_dir
    }

    /// Absolute path of the companion for this launcher's platform.
    ///
    /// An unrecognized platform has no companion and fails as a launch error,
    /// as does a companion path that is the launcher itself.
    pub fn resolve_companion(&self) -> Result<PathBuf, LauncherError> {
        let name = self
            .platform
            .companion_name()
            .ok_or_else(|| RunnerError::UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
            })?;
        let companion = paths::companion_path(&self.launcher_dir, name);
        if self.launcher_exe.as_deref() == Some(companion.as_path()) {
            return Err(RunnerError::LaunchFailed {
                program: companion,
                reason: "companion path is the launcher executable itself".to_string(),
            }
            .into());
        }
        Ok(companion)
    }

    /// Run the companion with `input` as its only argument and wait for it.
    ///
    /// The input path is passed through untouched; whether it exists is the
    /// companion's concern.
    pub fn invoke(&self, input: &Path) -> Result<Invocation, LauncherError> {
        let companion = self.resolve_companion()?;
        logging::log_invocation(self.platform, &companion, input);

        let started = Instant::now();
        let output = self.runner.run(&CommandSpec::new(&companion).arg(input))?;
        logging::log_completion(&companion, &output, started.elapsed().as_millis());

        Ok(Invocation { companion, output })
    }
}

/// A completed companion run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub companion: PathBuf,
    pub output: ProcessOutput,
}

impl Invocation {
    /// Print the companion's stdout to `out`, followed by a newline.
    ///
    /// Stdout is decoded in full before anything is written, so undecodable
    /// output leaves `out` untouched. With `forward_stderr`, the raw stderr
    /// bytes go to `err` first. With `strict`, a non-zero exit becomes
    /// [`LauncherError::CompanionFailed`] once the output has been written.
    pub fn relay<W, E>(
        &self,
        out: &mut W,
        err: &mut E,
        policy: RelayPolicy,
    ) -> Result<(), LauncherError>
    where
        W: Write,
        E: Write,
    {
        if policy.forward_stderr && !self.output.stderr.is_empty() {
            err.write_all(&self.output.stderr)?;
            err.flush()?;
        }

        let text = self.output.stdout_text()?;
        writeln!(out, "{text}")?;
        out.flush()?;

        if policy.strict && !self.output.success() {
            return Err(LauncherError::CompanionFailed {
                companion: self.companion.clone(),
                exit_code: self.output.exit_code,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsString;

    /// Records every command and replies with a canned result.
    struct MockRunner {
        reply: Result<ProcessOutput, String>,
        calls: RefCell<Vec<CommandSpec>>,
    }

    impl MockRunner {
        fn replying(stdout: &[u8], stderr: &[u8], exit_code: Option<i32>) -> Self {
            Self {
                reply: Ok(ProcessOutput::new(stdout.to_vec(), stderr.to_vec(), exit_code)),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                reply: Err(reason.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessRunner for MockRunner {
        fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError> {
            self.calls.borrow_mut().push(cmd.clone());
            match &self.reply {
                Ok(output) => Ok(output.clone()),
                Err(reason) => Err(RunnerError::LaunchFailed {
                    program: PathBuf::from(&cmd.program),
                    reason: reason.clone(),
                }),
            }
        }
    }

    fn launcher(runner: MockRunner, platform: Platform) -> Launcher<MockRunner> {
        Launcher::new(runner, platform, PathBuf::from("/opt/cleanplans"))
    }

    fn relay_to_strings(
        invocation: &Invocation,
        policy: RelayPolicy,
    ) -> (Vec<u8>, Vec<u8>, Result<(), LauncherError>) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = invocation.relay(&mut out, &mut err, policy);
        (out, err, result)
    }

    #[test]
    fn test_resolve_companion_per_platform() {
        let cases = [
            (Platform::Linux, "/opt/cleanplans/cleanplans_linux"),
            (Platform::Windows, "/opt/cleanplans/cleanplans.exe"),
            (Platform::MacOs, "/opt/cleanplans/cleanplans_osx"),
        ];
        for (platform, expected) in cases {
            let launcher = launcher(MockRunner::replying(b"", b"", Some(0)), platform);
            assert_eq!(launcher.resolve_companion().unwrap(), PathBuf::from(expected));
        }
    }

    #[test]
    fn test_unrecognized_platform_fails_without_spawning() {
        let launcher = launcher(MockRunner::replying(b"", b"", Some(0)), Platform::Unrecognized);
        let err = launcher.invoke(Path::new("in.svg")).unwrap_err();
        assert!(matches!(
            err,
            LauncherError::LaunchFailed(RunnerError::UnsupportedPlatform { .. })
        ));
        assert!(launcher.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_companion_matching_launcher_exe_is_refused() {
        let launcher = launcher(MockRunner::replying(b"", b"", Some(0)), Platform::Windows)
            .with_launcher_exe(PathBuf::from("/opt/cleanplans/cleanplans.exe"));

        let err = launcher.invoke(Path::new("in.svg")).unwrap_err();
        match err {
            LauncherError::LaunchFailed(RunnerError::LaunchFailed { program, reason }) => {
                assert_eq!(program, PathBuf::from("/opt/cleanplans/cleanplans.exe"));
                assert!(reason.contains("launcher executable"));
            }
            other => panic!("Expected LaunchFailed, got {other:?}"),
        }
        assert!(launcher.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_launcher_exe_beside_companion_is_allowed() {
        let launcher = launcher(MockRunner::replying(b"OK\n", b"", Some(0)), Platform::Windows)
            .with_launcher_exe(PathBuf::from("/opt/cleanplans/cleanplans-launcher.exe"));

        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        assert_eq!(
            invocation.companion,
            PathBuf::from("/opt/cleanplans/cleanplans.exe")
        );
        assert_eq!(launcher.platform(), Platform::Windows);
        assert_eq!(launcher.launcher_dir(), Path::new("/opt/cleanplans"));
    }

    #[test]
    fn test_invoke_passes_input_as_only_argument() {
        let launcher = launcher(MockRunner::replying(b"OK\n", b"", Some(0)), Platform::Linux);
        let invocation = launcher
            .invoke(Path::new("/tmp/ink ext/drawing.svg"))
            .unwrap();

        let calls = launcher.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].program,
            OsString::from("/opt/cleanplans/cleanplans_linux")
        );
        assert_eq!(calls[0].args, vec![OsString::from("/tmp/ink ext/drawing.svg")]);
        assert_eq!(
            invocation.companion,
            PathBuf::from("/opt/cleanplans/cleanplans_linux")
        );
    }

    #[test]
    fn test_spawn_failure_is_launch_failed() {
        let launcher = launcher(MockRunner::failing("Permission denied"), Platform::MacOs);
        let err = launcher.invoke(Path::new("in.svg")).unwrap_err();
        match err {
            LauncherError::LaunchFailed(RunnerError::LaunchFailed { program, reason }) => {
                assert_eq!(program, PathBuf::from("/opt/cleanplans/cleanplans_osx"));
                assert_eq!(reason, "Permission denied");
            }
            other => panic!("Expected LaunchFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_relay_appends_newline() {
        let launcher = launcher(MockRunner::replying(b"OK\n", b"", Some(0)), Platform::Linux);
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let (out, err, result) = relay_to_strings(&invocation, RelayPolicy::default());
        assert!(result.is_ok());
        assert_eq!(out, b"OK\n\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_relay_multibyte_text_verbatim() {
        let text = "\u{00e9}t\u{00e9} \u{4e16}\u{754c} \u{1f4d0}";
        let launcher = launcher(
            MockRunner::replying(text.as_bytes(), b"", Some(0)),
            Platform::Linux,
        );
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let (out, _, result) = relay_to_strings(&invocation, RelayPolicy::default());
        assert!(result.is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{text}\n"));
    }

    #[test]
    fn test_relay_non_zero_exit_is_silent_by_default() {
        let launcher = launcher(
            MockRunner::replying(b"", b"parse error\n", Some(1)),
            Platform::Linux,
        );
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let (out, err, result) = relay_to_strings(&invocation, RelayPolicy::default());
        assert!(result.is_ok());
        assert_eq!(out, b"\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_relay_strict_reports_failure_after_output() {
        let launcher = launcher(
            MockRunner::replying(b"partial\n", b"", Some(3)),
            Platform::Linux,
        );
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let policy = RelayPolicy {
            strict: true,
            forward_stderr: false,
        };
        let (out, _, result) = relay_to_strings(&invocation, policy);
        assert_eq!(out, b"partial\n\n");
        match result {
            Err(LauncherError::CompanionFailed { exit_code, .. }) => {
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("Expected CompanionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_relay_strict_accepts_success() {
        let launcher = launcher(MockRunner::replying(b"OK\n", b"", Some(0)), Platform::Linux);
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let policy = RelayPolicy {
            strict: true,
            forward_stderr: true,
        };
        let (_, _, result) = relay_to_strings(&invocation, policy);
        assert!(result.is_ok());
    }

    #[test]
    fn test_relay_forwards_stderr() {
        let launcher = launcher(
            MockRunner::replying(b"OK\n", b"warning: open path\n", Some(0)),
            Platform::Linux,
        );
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let policy = RelayPolicy {
            strict: false,
            forward_stderr: true,
        };
        let (out, err, result) = relay_to_strings(&invocation, policy);
        assert!(result.is_ok());
        assert_eq!(out, b"OK\n\n");
        assert_eq!(err, b"warning: open path\n");
    }

    #[test]
    fn test_relay_invalid_utf8_writes_nothing() {
        let launcher = launcher(
            MockRunner::replying(&[b'G', b'1', 0xc3, 0x28], b"", Some(0)),
            Platform::Linux,
        );
        let invocation = launcher.invoke(Path::new("in.svg")).unwrap();
        let (out, _, result) = relay_to_strings(&invocation, RelayPolicy::default());
        assert!(out.is_empty());
        assert!(matches!(result, Err(LauncherError::OutputDecode(_))));
    }

    #[test]
    fn test_relay_policy_from_settings() {
        let settings = LauncherSettings {
            strict: true,
            forward_stderr: false,
            verbose: true,
        };
        assert_eq!(
            RelayPolicy::from(&settings),
            RelayPolicy {
                strict: true,
                forward_stderr: false,
            }
        );
    }
}
