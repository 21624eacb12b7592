// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Install badge rendering.
//!
//! The renderer synthesizes a self-contained SVG from the configured badge
//! label, accent color, and project name. Widths derive from character
//! counts, not real text metrics; the formula is part of the output contract
//! because previously published badges must keep rendering identically.
//! Label, name, and color are interpolated verbatim into the markup.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path
};

use crate::{
    config::Config,
    error::{self, Error}
};

/// Per-character width applied to the badge label segment.
const LABEL_CHAR_WIDTH: usize = 6;
/// Per-character width applied to the name segment.
const NAME_CHAR_WIDTH: usize = 7;
/// Horizontal padding added to each segment.
const SEGMENT_PADDING: usize = 10;
/// Style identifier selecting the gradient layout.
const FLAT_STYLE: &str = "flat";

/// Renders the install badge for the provided configuration.
///
/// The output is standalone SVG markup with no external references, directly
/// embeddable as an image payload. The `flat` style produces the two-segment
/// gradient layout; any other style value selects the simpler flat-rectangle
/// layout.
///
/// # Examples
///
/// ```
/// use install_bridge::{config_template, render_badge};
///
/// let svg = render_badge(&config_template("Umbrella"));
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("Umbrella"));
/// ```
pub fn render_badge(config: &Config) -> String {
    let label = config.badge_label();
    let color = config.badge_color();
    let name = config.name.as_str();

    let label_width = segment_width(label, LABEL_CHAR_WIDTH);
    let name_width = segment_width(name, NAME_CHAR_WIDTH);

    if config.badge_style() == FLAT_STYLE {
        render_flat(label, name, color, label_width, name_width)
    } else {
        render_plain(label, name, color, label_width, name_width)
    }
}

/// Renders the badge and writes it to `path` through a buffered writer.
///
/// # Errors
///
/// Returns [`Error::BadgeIo`](Error::BadgeIo) when the file cannot be
/// created or written.
pub fn write_badge(config: &Config, path: &Path) -> Result<(), Error> {
    let contents = render_badge(config);
    let file = File::create(path).map_err(|source| error::badge_io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::badge_io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::badge_io_error(path, source))
}

fn segment_width(text: &str, char_width: usize) -> usize {
    text.chars().count() * char_width + SEGMENT_PADDING
}

fn render_flat(
    label: &str,
    name: &str,
    color: &str,
    label_width: usize,
    name_width: usize
) -> String {
    use std::fmt::Write as _;

    let total_width = label_width + name_width;
    let label_center = label_width / 2;
    let name_center = label_width + name_width / 2;

    let mut buffer = String::with_capacity(1024);
    let _ = write!(
        buffer,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total_width}\" height=\"20\" role=\"img\" aria-label=\"{label}: {name}\">",
    );
    let _ = write!(
        buffer,
        "<linearGradient id=\"smooth\" x2=\"0\" y2=\"100%\"><stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/><stop offset=\"1\" stop-opacity=\".1\"/></linearGradient>",
    );
    let _ = write!(
        buffer,
        "<clipPath id=\"round\"><rect width=\"{total_width}\" height=\"20\" rx=\"3\" fill=\"#fff\"/></clipPath>",
    );
    let _ = write!(
        buffer,
        "<g clip-path=\"url(#round)\"><rect width=\"{label_width}\" height=\"20\" fill=\"#555\"/><rect x=\"{label_width}\" width=\"{name_width}\" height=\"20\" fill=\"{color}\"/><rect width=\"{total_width}\" height=\"20\" fill=\"url(#smooth)\"/></g>",
    );
    let _ = write!(
        buffer,
        "<g fill=\"#fff\" text-anchor=\"middle\" font-family=\"Verdana,Geneva,DejaVu Sans,sans-serif\" font-size=\"11\">",
    );
    let _ = write!(
        buffer,
        "<text x=\"{label_center}\" y=\"15\" fill=\"#010101\" fill-opacity=\".3\">{label}</text><text x=\"{label_center}\" y=\"14\">{label}</text>",
    );
    let _ = write!(
        buffer,
        "<text x=\"{name_center}\" y=\"15\" fill=\"#010101\" fill-opacity=\".3\">{name}</text><text x=\"{name_center}\" y=\"14\">{name}</text>",
    );
    buffer.push_str("</g></svg>");

    buffer
}

fn render_plain(
    label: &str,
    name: &str,
    color: &str,
    label_width: usize,
    name_width: usize
) -> String {
    use std::fmt::Write as _;

    let total_width = label_width + name_width;
    let label_center = label_width / 2;
    let name_center = label_width + name_width / 2;

    let mut buffer = String::with_capacity(512);
    let _ = write!(
        buffer,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total_width}\" height=\"20\" role=\"img\" aria-label=\"{label}: {name}\">",
    );
    let _ = write!(
        buffer,
        "<rect width=\"{label_width}\" height=\"20\" fill=\"#555\"/><rect x=\"{label_width}\" width=\"{name_width}\" height=\"20\" fill=\"{color}\"/>",
    );
    let _ = write!(
        buffer,
        "<g fill=\"#fff\" text-anchor=\"middle\" font-family=\"Verdana,Geneva,DejaVu Sans,sans-serif\" font-size=\"11\"><text x=\"{label_center}\" y=\"14\">{label}</text><text x=\"{name_center}\" y=\"14\">{name}</text></g>",
    );
    buffer.push_str("</svg>");

    buffer
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{render_badge, write_badge};
    use crate::config::{BadgeConfig, Config};

    fn sample_config(name: &str) -> Config {
        Config {
            name: name.to_owned(),
            installers: std::collections::BTreeMap::new(),
            homepage: None,
            fallback: None,
            badge: None
        }
    }

    fn styled_config(name: &str, label: &str, color: &str, style: &str) -> Config {
        let mut config = sample_config(name);
        config.badge = Some(BadgeConfig {
            label: Some(label.to_owned()),
            color: Some(color.to_owned()),
            style: Some(style.to_owned())
        });
        config
    }

    #[test]
    fn badge_contains_svg_label_and_name() {
        let svg = render_badge(&sample_config("MyApp"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Install"));
        assert!(svg.contains("MyApp"));
    }

    #[test]
    fn badge_is_self_contained_markup() {
        let svg = render_badge(&sample_config("MyApp"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn configured_color_appears_verbatim() {
        let svg = render_badge(&styled_config("MyApp", "Install", "#123456", "flat"));
        assert!(svg.contains("#123456"));
        assert!(!svg.contains("#0366d6"));
    }

    #[test]
    fn widths_follow_the_character_count_formula() {
        // "Install" is 7 characters (7*6+10 = 52), "MyApp" is 5 (5*7+10 = 45).
        let svg = render_badge(&sample_config("MyApp"));
        assert!(svg.contains("width=\"97\""));
        assert!(svg.contains("width=\"52\""));
        assert!(svg.contains("x=\"52\" width=\"45\""));
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        // "héllo" is 5 characters even though it is 6 bytes (5*7+10 = 45).
        let svg = render_badge(&sample_config("héllo"));
        assert!(svg.contains("width=\"97\""));
    }

    #[test]
    fn flat_style_uses_gradient_clip_and_shadow_text() {
        let svg = render_badge(&sample_config("MyApp"));
        assert!(svg.contains("<linearGradient"));
        assert!(svg.contains("<clipPath"));
        assert!(svg.contains("rx=\"3\""));
        assert!(svg.contains("fill=\"#555\""));
        assert_eq!(svg.matches("<text").count(), 4);
    }

    #[test]
    fn other_styles_use_the_plain_layout() {
        let svg = render_badge(&styled_config("MyApp", "Install", "#0366d6", "plastic"));
        assert!(!svg.contains("<linearGradient"));
        assert!(!svg.contains("<clipPath"));
        assert_eq!(svg.matches("<text").count(), 2);
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn custom_label_replaces_the_default() {
        let svg = render_badge(&styled_config("MyApp", "Download", "#0366d6", "flat"));
        assert!(svg.contains(">Download</text>"));
        assert!(!svg.contains(">Install</text>"));
    }

    #[test]
    fn label_and_name_are_interpolated_verbatim() {
        let svg = render_badge(&sample_config("A&B"));
        assert!(svg.contains(">A&B</text>"));
    }

    #[test]
    fn write_badge_creates_the_file() {
        let directory = tempdir().expect("failed to create temp dir");
        let path = directory.path().join("install-badge.svg");

        write_badge(&sample_config("MyApp"), &path).expect("expected badge write to succeed");

        let contents = fs::read_to_string(&path).expect("expected badge to be readable");
        assert!(contents.contains("<svg"));
        assert!(contents.contains("MyApp"));
    }

    #[test]
    fn write_badge_propagates_io_errors() {
        let directory = tempdir().expect("failed to create temp dir");

        let error = write_badge(&sample_config("MyApp"), directory.path())
            .expect_err("expected io failure");

        match error {
            crate::Error::BadgeIo {
                path, ..
            } => {
                assert_eq!(path, directory.path());
            }
            other => panic!("unexpected error variant: {other:?}")
        }
    }
}
