// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Ready-to-edit default configurations.

use std::collections::BTreeMap;

use crate::config::{
    BadgeConfig, Config, DEFAULT_BADGE_COLOR, DEFAULT_BADGE_LABEL, DEFAULT_BADGE_STYLE, Platform
};

/// Base URL used by the generated installer entries.
const TEMPLATE_DOWNLOAD_BASE: &str = "https://example.com/downloads";
/// Homepage placeholder used by generated configurations.
const TEMPLATE_HOMEPAGE: &str = "https://example.com";

/// Produces a fully populated configuration for the given application name.
///
/// The template carries one installer per canonical platform following a
/// fixed naming convention that embeds the application name, a homepage, a
/// fallback, and explicit default badge fields. It always satisfies the
/// validator for non-empty names.
///
/// # Examples
///
/// ```
/// use install_bridge::{config_template, validate_config};
///
/// let config = config_template("Umbrella");
/// let value = serde_json::to_value(&config).expect("failed to serialize");
/// assert!(validate_config(&value).valid);
/// ```
pub fn config_template(app_name: &str) -> Config {
    let mut installers = BTreeMap::new();
    installers.insert(
        Platform::Darwin,
        format!("{TEMPLATE_DOWNLOAD_BASE}/{app_name}.dmg")
    );
    installers.insert(
        Platform::Win32,
        format!("{TEMPLATE_DOWNLOAD_BASE}/{app_name}-setup.exe")
    );
    installers.insert(
        Platform::Linux,
        format!("{TEMPLATE_DOWNLOAD_BASE}/{app_name}.AppImage")
    );

    Config {
        name: app_name.to_owned(),
        installers,
        homepage: Some(TEMPLATE_HOMEPAGE.to_owned()),
        fallback: Some(format!("{TEMPLATE_HOMEPAGE}/download")),
        badge: Some(BadgeConfig {
            label: Some(DEFAULT_BADGE_LABEL.to_owned()),
            color: Some(DEFAULT_BADGE_COLOR.to_owned()),
            style: Some(DEFAULT_BADGE_STYLE.to_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::config_template;
    use crate::{config::Platform, validate::validate_config};

    proptest! {
        #[test]
        fn templates_always_validate(name in "[A-Za-z0-9][A-Za-z0-9 ._-]{0,32}") {
            let config = config_template(&name);
            let value = serde_json::to_value(&config).expect("failed to serialize");
            let report = validate_config(&value);
            prop_assert!(report.valid, "unexpected errors: {:?}", report.errors);
        }
    }

    #[test]
    fn template_covers_every_canonical_platform() {
        let config = config_template("MyApp");
        for platform in Platform::ORDER {
            assert!(config.installers.contains_key(&platform));
        }
    }

    #[test]
    fn installer_urls_embed_the_application_name() {
        let config = config_template("Umbrella");
        for url in config.installers.values() {
            assert!(url.contains("Umbrella"), "name missing from {url}");
        }
    }

    #[test]
    fn template_populates_homepage_fallback_and_badge() {
        let config = config_template("MyApp");
        assert_eq!(config.homepage.as_deref(), Some("https://example.com"));
        assert_eq!(config.fallback.as_deref(), Some("https://example.com/download"));
        assert_eq!(config.badge_label(), "Install");
        assert_eq!(config.badge_color(), "#0366d6");
        assert_eq!(config.badge_style(), "flat");
    }

    #[test]
    fn template_name_is_used_verbatim() {
        let config = config_template("My App 2.0");
        assert_eq!(config.name, "My App 2.0");
    }
}
