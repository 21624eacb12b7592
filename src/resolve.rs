//! Install target resolution for a detected operating system.
//!
//! Resolution is a pure lookup: either the configuration carries an installer
//! for the requested platform, or the caller receives the configured fallback
//! chain. It never fails; a configuration without installers simply resolves
//! to unavailable.

use serde::Serialize;

use crate::{config::Config, detect::DetectedOs};

/// Resolved install destination for a single platform.
///
/// Constructed fresh per resolution call and never persisted. Absent options
/// are skipped during serialization, so an available target carries no
/// `fallback` field and an unavailable one carries no `url` field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InstallTarget {
    /// Whether a platform-specific installer exists.
    pub available: bool,
    /// Platform the resolution was performed for.
    pub platform:  DetectedOs,
    /// Direct installer URL when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url:       Option<String>,
    /// Fallback destination when no installer matches; `None` when neither
    /// `fallback` nor `homepage` is configured, which is not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback:  Option<String>
}

/// Resolves the install destination for the given platform.
///
/// When the configuration lists an installer for the platform the target is
/// available and points at that URL. Otherwise the target is unavailable and
/// carries `fallback`, then `homepage`, then nothing.
///
/// # Examples
///
/// ```
/// use install_bridge::{detect_os, install_target, parse_config};
///
/// let config = parse_config(
///     r#"{ "name": "Umbrella", "installers": { "linux": "https://example.com/u.AppImage" } }"#,
/// )
/// .expect("valid configuration");
///
/// let target = install_target(&config, detect_os(Some("X11; Linux x86_64")));
/// assert!(target.available);
/// assert_eq!(target.url.as_deref(), Some("https://example.com/u.AppImage"));
/// ```
pub fn install_target(config: &Config, platform: DetectedOs) -> InstallTarget {
    let installer = platform
        .platform()
        .and_then(|known| config.installers.get(&known));

    if let Some(url) = installer {
        return InstallTarget {
            available: true,
            platform,
            url: Some(url.clone()),
            fallback: None
        };
    }

    InstallTarget {
        available: false,
        platform,
        url: None,
        fallback: config.fallback.clone().or_else(|| config.homepage.clone())
    }
}
