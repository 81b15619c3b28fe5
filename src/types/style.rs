//! Avatar style variants.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};

/// Procedural algorithm used to paint the avatar background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Solid background colour.
    #[default]
    Flat,

    /// Soft translucent ellipses over the background.
    Pattern,

    /// Grid of slightly varied tiles, `edge/10` pixels across.
    Mosaic,

    /// Translucent vertical bars anchored to the bottom edge.
    #[serde(alias = "tradingbars")]
    #[value(alias = "tradingbars")]
    Bars,
}

impl Style {
    /// All styles.
    pub const ALL: [Style; 4] = [Style::Flat, Style::Pattern, Style::Mosaic, Style::Bars];

    /// Lower-case style name.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Flat => "flat",
            Style::Pattern => "pattern",
            Style::Mosaic => "mosaic",
            Style::Bars => "bars",
        }
    }

    /// Suffix inserted after `avatar` in output file names.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Style::Flat => "",
            Style::Pattern => "_pattern",
            Style::Mosaic => "_mosaic",
            Style::Bars => "_tradingbars",
        }
    }

    /// Whether shapes are drawn with anti-aliased edges.
    ///
    /// Mosaic keeps hard tile edges.
    pub const fn antialias(self) -> bool {
        !matches!(self, Style::Mosaic)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Style::Flat),
            "pattern" => Ok(Style::Pattern),
            "mosaic" => Ok(Style::Mosaic),
            "bars" | "tradingbars" => Ok(Style::Bars),
            other => Err(AvatarError::Parse {
                message: format!("Unknown style: {}", other),
                help: Some("Use one of: flat, pattern, mosaic, bars".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("flat".parse::<Style>().unwrap(), Style::Flat);
        assert_eq!("Pattern".parse::<Style>().unwrap(), Style::Pattern);
        assert_eq!(" mosaic ".parse::<Style>().unwrap(), Style::Mosaic);
        assert_eq!("tradingbars".parse::<Style>().unwrap(), Style::Bars);
        assert!("stripes".parse::<Style>().is_err());
    }

    #[test]
    fn test_display_round_trips_names() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_file_suffix() {
        assert_eq!(Style::Flat.file_suffix(), "");
        assert_eq!(Style::Pattern.file_suffix(), "_pattern");
        assert_eq!(Style::Mosaic.file_suffix(), "_mosaic");
        assert_eq!(Style::Bars.file_suffix(), "_tradingbars");
    }

    #[test]
    fn test_only_mosaic_disables_antialias() {
        let hard: Vec<Style> = Style::ALL.into_iter().filter(|s| !s.antialias()).collect();
        assert_eq!(hard, vec![Style::Mosaic]);
    }

    #[test]
    fn test_serde_names() {
        let style: Style = serde_yaml::from_str("tradingbars").unwrap();
        assert_eq!(style, Style::Bars);
        assert_eq!(serde_yaml::to_string(&Style::Pattern).unwrap().trim(), "pattern");
    }

    #[test]
    fn test_default_is_flat() {
        assert_eq!(Style::default(), Style::Flat);
    }
}
