//! Configuration types describing a project's per-platform installers.
//!
//! The types in this module mirror the structure of the JSON documents
//! consumed by the CLI and the HTTP host. Optional values stay optional so
//! user-supplied documents round-trip untouched, and helper methods derive
//! the resolved values downstream consumers rely on.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Badge label applied when the configuration does not override it.
pub const DEFAULT_BADGE_LABEL: &str = "Install";
/// Badge accent color applied when the configuration does not override it.
pub const DEFAULT_BADGE_COLOR: &str = "#0366d6";
/// Badge style applied when the configuration does not override it.
pub const DEFAULT_BADGE_STYLE: &str = "flat";

/// Canonical installer platforms accepted as `installers` keys.
///
/// The set is closed: the detector may additionally report an unknown
/// operating system, but an unknown platform is never a valid installer key.
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform
{
    /// macOS, iOS, and iPadOS installers.
    Darwin,
    /// Windows installers.
    Win32,
    /// Linux and Android installers.
    Linux,
}

impl Platform
{
    /// Deterministic priority order used whenever a single installer must be
    /// chosen without a specific target platform.
    pub const ORDER: [Self; 3] = [Self::Darwin, Self::Win32, Self::Linux,];

    /// Returns the canonical identifier used in configuration keys.
    pub fn as_str(self,) -> &'static str
    {
        match self {
            Self::Darwin => "darwin",
            Self::Win32 => "win32",
            Self::Linux => "linux",
        }
    }

    /// Parses a configuration key into a platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use install_bridge::Platform;
    ///
    /// assert_eq!(Platform::from_key("darwin"), Some(Platform::Darwin));
    /// assert_eq!(Platform::from_key("freebsd"), None);
    /// ```
    pub fn from_key(key: &str,) -> Option<Self,>
    {
        match key {
            "darwin" => Some(Self::Darwin,),
            "win32" => Some(Self::Win32,),
            "linux" => Some(Self::Linux,),
            _ => None,
        }
    }

    /// Human-readable platform name used on generated download pages.
    pub fn display_name(self,) -> &'static str
    {
        match self {
            Self::Darwin => "macOS",
            Self::Win32 => "Windows",
            Self::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str(self.as_str(),)
    }
}

/// A project's install metadata.
///
/// Instances are produced either by [`parse_config`](crate::parse_config),
/// which validates the raw document first, or by
/// [`config_template`](crate::config_template). Downstream consumers assume
/// the configuration already passed validation but still tolerate absent
/// optional fields.
///
/// # Examples
///
/// ```
/// use install_bridge::parse_config;
///
/// let json = r#"{
///     "name": "Umbrella",
///     "installers": { "darwin": "https://example.com/umbrella.dmg" }
/// }"#;
/// let config = parse_config(json,).expect("valid configuration",);
/// assert_eq!(config.name, "Umbrella");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
pub struct Config
{
    /// Project name rendered verbatim into badges and snippets.
    pub name: String,

    /// Mapping from platform to installer URL.
    #[serde(default)]
    pub installers: BTreeMap<Platform, String,>,

    /// Optional project homepage, used as the default snippet target and as
    /// the last-resort fallback destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String,>,

    /// Optional fallback URL that takes precedence over the homepage when no
    /// installer matches the detected platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String,>,

    /// Optional badge customization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeConfig,>,
}

impl Config
{
    /// Resolved badge label, falling back to [`DEFAULT_BADGE_LABEL`].
    pub fn badge_label(&self,) -> &str
    {
        self.badge
            .as_ref()
            .and_then(|badge| badge.label.as_deref(),)
            .unwrap_or(DEFAULT_BADGE_LABEL,)
    }

    /// Resolved badge color, falling back to [`DEFAULT_BADGE_COLOR`].
    pub fn badge_color(&self,) -> &str
    {
        self.badge
            .as_ref()
            .and_then(|badge| badge.color.as_deref(),)
            .unwrap_or(DEFAULT_BADGE_COLOR,)
    }

    /// Resolved badge style, falling back to [`DEFAULT_BADGE_STYLE`].
    pub fn badge_style(&self,) -> &str
    {
        self.badge
            .as_ref()
            .and_then(|badge| badge.style.as_deref(),)
            .unwrap_or(DEFAULT_BADGE_STYLE,)
    }

    /// Returns the best installer URL without a specific target platform.
    ///
    /// Platforms are consulted in [`Platform::ORDER`]; when none of the
    /// canonical platforms is present the first remaining entry wins, and an
    /// empty map yields `None`.
    pub fn first_installer(&self,) -> Option<&str,>
    {
        for platform in Platform::ORDER {
            if let Some(url,) = self.installers.get(&platform,) {
                return Some(url.as_str(),);
            }
        }

        self.installers.values().next().map(String::as_str,)
    }
}

/// Badge customization entry mirroring the structure of the JSON document.
///
/// Every field is optional; resolved values are exposed through the accessor
/// methods on [`Config`].
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq,)]
pub struct BadgeConfig
{
    /// Optional text rendered in the left badge segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String,>,

    /// Optional accent color applied to the right badge segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String,>,

    /// Optional visual style preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String,>,
}
