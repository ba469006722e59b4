// SPDX-License-Identifier: MPL-2.0
//! Host platform identification.
//!
//! Each supported target OS supplies its own display name at compile time.

#[cfg(target_os = "windows")]
const PLATFORM_NAME: &str = "Windows";

#[cfg(target_os = "macos")]
const PLATFORM_NAME: &str = "macOS";

#[cfg(target_os = "linux")]
const PLATFORM_NAME: &str = "Linux";

#[cfg(target_os = "android")]
const PLATFORM_NAME: &str = "Android";

#[cfg(target_os = "ios")]
const PLATFORM_NAME: &str = "iOS";

#[cfg(target_os = "freebsd")]
const PLATFORM_NAME: &str = "FreeBSD";

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "android",
    target_os = "ios",
    target_os = "freebsd",
)))]
const PLATFORM_NAME: &str = std::env::consts::OS;

/// Human-readable name of the platform the app was built for.
#[must_use]
pub fn platform_name() -> &'static str {
    PLATFORM_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_name_is_not_empty() {
        assert!(!platform_name().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_reports_linux() {
        assert_eq!(platform_name(), "Linux");
    }
}
