//! User-agent classification into installer platforms.
//!
//! Detection is a pure substring scan over a lowercased user-agent string.
//! The checks run in a fixed priority order so a string mentioning several
//! operating systems always classifies the same way.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::Platform;

/// Substrings that classify a user agent as macOS, iOS, or iPadOS.
const DARWIN_MARKERS: [&str; 4] = ["mac", "darwin", "iphone", "ipad",];
/// Substrings that classify a user agent as Linux or Android.
const LINUX_MARKERS: [&str; 2] = ["linux", "android",];
/// Substring that classifies a user agent as Windows.
const WIN_MARKER: &str = "win";

/// Operating system reported by the detector.
///
/// `Unknown` only ever appears as detector output; it is never a valid
/// `installers` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum DetectedOs
{
    /// One of the canonical installer platforms.
    Known(Platform,),
    /// The user agent did not match any platform marker.
    Unknown,
}

impl DetectedOs
{
    /// Returns the canonical identifier for the detected system.
    pub fn as_str(self,) -> &'static str
    {
        match self {
            Self::Known(platform,) => platform.as_str(),
            Self::Unknown => "unknown",
        }
    }

    /// Returns the underlying platform when one was detected.
    pub fn platform(self,) -> Option<Platform,>
    {
        match self {
            Self::Known(platform,) => Some(platform,),
            Self::Unknown => None,
        }
    }

    /// Parses a platform identifier, accepting the detector-only `unknown`.
    pub fn from_identifier(value: &str,) -> Option<Self,>
    {
        if value == "unknown" {
            return Some(Self::Unknown,);
        }
        Platform::from_key(value,).map(Self::Known,)
    }
}

impl fmt::Display for DetectedOs
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str(self.as_str(),)
    }
}

impl Serialize for DetectedOs
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str(),)
    }
}

/// Classifies a user-agent string into a detected operating system.
///
/// Matching is case-insensitive and runs in a fixed priority order: Darwin
/// markers first, then Linux, then Windows. Empty or missing input maps to
/// [`DetectedOs::Unknown`]. The function is total and never panics.
///
/// # Examples
///
/// ```
/// use install_bridge::{DetectedOs, Platform, detect_os};
///
/// let detected = detect_os(Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)",),);
/// assert_eq!(detected, DetectedOs::Known(Platform::Darwin));
/// assert_eq!(detect_os(None,), DetectedOs::Unknown);
/// ```
pub fn detect_os(user_agent: Option<&str,>,) -> DetectedOs
{
    let Some(value,) = user_agent else {
        return DetectedOs::Unknown;
    };
    if value.is_empty() {
        return DetectedOs::Unknown;
    }

    let lowered = value.to_lowercase();

    if DARWIN_MARKERS.iter().any(|marker| lowered.contains(marker,),) {
        return DetectedOs::Known(Platform::Darwin,);
    }
    if LINUX_MARKERS.iter().any(|marker| lowered.contains(marker,),) {
        return DetectedOs::Known(Platform::Linux,);
    }
    if lowered.contains(WIN_MARKER,) {
        return DetectedOs::Known(Platform::Win32,);
    }

    DetectedOs::Unknown
}
