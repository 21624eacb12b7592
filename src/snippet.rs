// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Copy-pasteable embed snippets referencing a badge image.
//!
//! Snippets link the badge image to an install destination. The destination
//! is the explicit URL when the caller supplies one, otherwise the homepage,
//! otherwise the best installer in platform priority order. Names and URLs
//! are interpolated verbatim.

use serde::Serialize;

use crate::config::Config;

/// Relative badge location used when the caller does not provide one.
pub const DEFAULT_BADGE_PATH: &str = "./install-badge.svg";

/// Markdown and HTML embed fragments for one configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Snippets {
    /// Image-link composition suitable for README files.
    pub markdown: String,
    /// Anchor-wrapped image tag suitable for web pages.
    pub html:     String
}

/// Generates Markdown and HTML embed snippets for the configuration.
///
/// `badge_path` defaults to [`DEFAULT_BADGE_PATH`]. The link target is the
/// explicit `install_url` when provided, then the configured homepage, then
/// the first installer in platform priority order.
///
/// # Examples
///
/// ```
/// use install_bridge::{config_template, render_snippets};
///
/// let snippets = render_snippets(&config_template("Umbrella"), None, None);
/// assert!(snippets.markdown.starts_with("[![Install Umbrella]"));
/// ```
pub fn render_snippets(
    config: &Config,
    badge_path: Option<&str>,
    install_url: Option<&str>
) -> Snippets {
    let badge_path = badge_path.unwrap_or(DEFAULT_BADGE_PATH);
    let target = install_url
        .or(config.homepage.as_deref())
        .or_else(|| config.first_installer())
        .unwrap_or_default();

    let markdown = format!("[![Install {}]({badge_path})]({target})", config.name);
    let html = format!(
        "<a href=\"{target}\"><img src=\"{badge_path}\" alt=\"Install {}\" /></a>",
        config.name
    );

    Snippets {
        markdown,
        html
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{DEFAULT_BADGE_PATH, render_snippets};
    use crate::config::{Config, Platform};

    fn config_with(installers: &[(Platform, &str)], homepage: Option<&str>) -> Config {
        let mut map = BTreeMap::new();
        for (platform, url) in installers {
            map.insert(*platform, (*url).to_owned());
        }
        Config {
            name: "MyApp".to_owned(),
            installers: map,
            homepage: homepage.map(str::to_owned),
            fallback: None,
            badge: None
        }
    }

    #[test]
    fn markdown_embeds_badge_and_target() {
        let config = config_with(&[], Some("https://example.com"));
        let snippets = render_snippets(&config, Some("./badge.svg"), None);

        assert_eq!(
            snippets.markdown,
            "[![Install MyApp](./badge.svg)](https://example.com)"
        );
    }

    #[test]
    fn html_wraps_image_in_anchor() {
        let config = config_with(&[], Some("https://example.com"));
        let snippets = render_snippets(&config, Some("./badge.svg"), None);

        assert_eq!(
            snippets.html,
            "<a href=\"https://example.com\"><img src=\"./badge.svg\" alt=\"Install MyApp\" /></a>"
        );
    }

    #[test]
    fn explicit_url_takes_precedence_over_homepage() {
        let config = config_with(
            &[(Platform::Darwin, "https://example.com/app.dmg")],
            Some("https://example.com")
        );
        let snippets = render_snippets(&config, None, Some("https://example.com/direct"));

        assert!(snippets.markdown.ends_with("(https://example.com/direct)"));
        assert!(snippets.html.contains("href=\"https://example.com/direct\""));
    }

    #[test]
    fn homepage_takes_precedence_over_installers() {
        let config = config_with(
            &[(Platform::Darwin, "https://example.com/app.dmg")],
            Some("https://example.com")
        );
        let snippets = render_snippets(&config, None, None);
        assert!(snippets.markdown.ends_with("(https://example.com)"));
    }

    #[test]
    fn darwin_installer_wins_when_homepage_is_absent() {
        let config = config_with(
            &[
                (Platform::Linux, "https://example.com/app.AppImage"),
                (Platform::Darwin, "https://example.com/app.dmg"),
            ],
            None
        );
        let snippets = render_snippets(&config, None, None);
        assert!(snippets.markdown.ends_with("(https://example.com/app.dmg)"));
    }

    #[test]
    fn default_badge_path_is_applied() {
        let config = config_with(&[], Some("https://example.com"));
        let snippets = render_snippets(&config, None, None);
        assert!(snippets.markdown.contains(DEFAULT_BADGE_PATH));
        assert!(snippets.html.contains(DEFAULT_BADGE_PATH));
    }

    #[test]
    fn empty_fallback_chain_renders_an_empty_target() {
        let config = config_with(&[], None);
        let snippets = render_snippets(&config, None, None);
        assert!(snippets.markdown.ends_with("]()"));
        assert!(snippets.html.contains("href=\"\""));
    }

    #[test]
    fn name_is_interpolated_verbatim() {
        let mut config = config_with(&[], Some("https://example.com"));
        config.name = "A&B <Tools>".to_owned();
        let snippets = render_snippets(&config, None, None);

        assert!(snippets.markdown.contains("[![Install A&B <Tools>]"));
        assert!(snippets.html.contains("alt=\"Install A&B <Tools>\""));
    }
}
