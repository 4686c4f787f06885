//! Host platform identification and companion executable naming

use std::fmt;

/// Companion executable for Linux hosts
pub const LINUX_COMPANION: &str = "cleanplans_linux";
/// Companion executable for Windows hosts
pub const WINDOWS_COMPANION: &str = "cleanplans.exe";
/// Companion executable for macOS hosts
pub const MACOS_COMPANION: &str = "cleanplans_osx";

/// Operating systems the launcher ships a companion executable for.
///
/// Any other host is represented by [`Platform::Unrecognized`], which has no
/// companion name. That is not an error at resolution time; the launcher
/// reports it when it tries to invoke the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    Unrecognized,
}

impl Platform {
    /// Map an OS identifier, as reported by `std::env::consts::OS`, to a platform.
    ///
    /// Matching is exact: `"linux"`, `"windows"` and `"macos"` are recognized,
    /// everything else (including differently cased spellings) is `Unrecognized`.
    #[must_use]
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Unrecognized,
        }
    }

    /// The platform this process is running on.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// File name of the companion executable for this platform.
    #[must_use]
    pub const fn companion_name(self) -> Option<&'static str> {
        match self {
            Self::Linux => Some(LINUX_COMPANION),
            Self::Windows => Some(WINDOWS_COMPANION),
            Self::MacOs => Some(MACOS_COMPANION),
            Self::Unrecognized => None,
        }
    }

    /// Stable lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
