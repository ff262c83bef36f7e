use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{StyleAttrs, StyleConfig, StyleKey};

/// Built-in colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected `dark` or `light`)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Named colours of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub sidebar: &'static str,
    pub title_bar: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    /// Foreground for inline and block code.
    pub code: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: "#1e1e1e",
        sidebar: "#252526",
        title_bar: "#323233",
        accent: "#007acc",
        text: "#cccccc",
        text_secondary: "#969696",
        border: "#3e3e42",
        code: "#ce9178",
    };

    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        sidebar: "#f3f3f3",
        title_bar: "#e8e8e8",
        accent: "#007acc",
        text: "#333333",
        text_secondary: "#666666",
        border: "#dddddd",
        code: "#a31515",
    };
}

const MONOSPACE: &str = "monospace";

impl StyleConfig {
    /// The preset styles of a built-in theme.
    pub fn for_theme(theme: Theme) -> StyleConfig {
        let p = theme.palette();
        let owned = |s: &str| Some(s.to_string());

        let heading = |padding_bottom: f32, margin_top: f32, margin_bottom: f32| StyleAttrs {
            color: owned(p.accent),
            border_color: owned(p.border),
            border_bottom_width: Some(1.0),
            padding_bottom: Some(padding_bottom),
            margin_top: Some(margin_top),
            margin_bottom: Some(margin_bottom),
            ..Default::default()
        };

        StyleConfig::default()
            .with(
                StyleKey::Body,
                StyleAttrs {
                    color: owned(p.text),
                    background: owned(p.background),
                    font_size: Some(16.0),
                    ..Default::default()
                },
            )
            .with(StyleKey::Heading1, heading(8.0, 24.0, 16.0))
            .with(StyleKey::Heading2, heading(6.0, 20.0, 14.0))
            .with(
                StyleKey::Heading3,
                StyleAttrs {
                    margin_top: Some(16.0),
                    margin_bottom: Some(12.0),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::CodeSpan,
                StyleAttrs {
                    background: owned(p.title_bar),
                    color: owned(p.code),
                    font_family: owned(MONOSPACE),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::CodeBlock,
                StyleAttrs {
                    background: owned(p.title_bar),
                    border_color: owned(p.border),
                    padding: Some(16.0),
                    border_radius: Some(6.0),
                    color: owned(p.code),
                    font_family: owned(MONOSPACE),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::Blockquote,
                StyleAttrs {
                    background: owned(p.title_bar),
                    border_color: owned(p.accent),
                    border_left_width: Some(4.0),
                    padding: Some(10.0),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::Link,
                StyleAttrs {
                    color: owned(p.accent),
                    text_decoration: owned("underline"),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::Bold,
                StyleAttrs {
                    font_weight: owned("bold"),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::Italic,
                StyleAttrs {
                    font_style: owned("italic"),
                    ..Default::default()
                },
            )
            .with(
                StyleKey::TableHeader,
                StyleAttrs {
                    background: owned(p.sidebar),
                    font_weight: owned("600"),
                    ..Default::default()
                },
            )
    }

    pub fn dark() -> StyleConfig {
        Self::for_theme(Theme::Dark)
    }

    pub fn light() -> StyleConfig {
        Self::for_theme(Theme::Light)
    }
}
