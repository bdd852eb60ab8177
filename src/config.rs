//! Per-instance carousel configuration.

use crate::error::{CarouselError, Result};

/// Default number of slides cloned at each end when looping.
pub const DEFAULT_CLONE_COUNT: usize = 2;

/// Default autoplay period in milliseconds.
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 5_000;

/// Immutable carousel settings.
///
/// All fields have defaults so partial documents deserialize cleanly.
/// The autoplay flag held here is the configured value; the live flag that a
/// manual stop clears belongs to the [`AutoplayController`](crate::AutoplayController).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Wrap around at both ends using cloned boundary slides
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Align slides on the viewport center instead of the leading edge
    pub centered: bool,
    /// Slides cloned at each end when looping (clamped to the slide count)
    pub clone_count: usize,
    /// Advance automatically on a timer
    pub autoplay: bool,
    /// Autoplay period in milliseconds, must be non-zero
    pub autoplay_delay_ms: u64,
    /// Class given to demoted headings inside clones, indexed by level - 1.
    /// Empty strings mean no class.
    pub heading_demotion_classes: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            looping: false,
            centered: false,
            clone_count: DEFAULT_CLONE_COUNT,
            autoplay: false,
            autoplay_delay_ms: DEFAULT_AUTOPLAY_DELAY_MS,
            heading_demotion_classes: Vec::new(),
        }
    }
}

impl CarouselConfig {
    /// Parse a TOML document into a validated `CarouselConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_delay_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "autoplay_delay_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Alignment implied by the `centered` flag.
    #[inline]
    pub fn alignment(&self) -> crate::Alignment {
        if self.centered {
            crate::Alignment::Center
        } else {
            crate::Alignment::Leading
        }
    }

    /// Class for a demoted heading of the given level (1-6), if configured.
    pub fn demotion_class(&self, level: u8) -> Option<&str> {
        let idx = usize::from(level).checked_sub(1)?;
        self.heading_demotion_classes
            .get(idx)
            .map(String::as_str)
            .filter(|class| !class.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CarouselConfig::default();
        assert!(!config.looping);
        assert_eq!(config.clone_count, 2);
        assert_eq!(config.autoplay_delay_ms, 5_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_delay_rejected() {
        let config = CarouselConfig {
            autoplay_delay_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidConfig(_))
        ));
    }

    #[test]
    fn demotion_class_lookup() {
        let config = CarouselConfig {
            heading_demotion_classes: vec!["h1-like".into(), String::new(), "h3-like".into()],
            ..Default::default()
        };
        assert_eq!(config.demotion_class(1), Some("h1-like"));
        assert_eq!(config.demotion_class(2), None);
        assert_eq!(config.demotion_class(3), Some("h3-like"));
        assert_eq!(config.demotion_class(4), None);
        assert_eq!(config.demotion_class(0), None);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn from_toml_partial() {
        let config = CarouselConfig::from_toml_str(
            "loop = true\nclone_count = 3\nheading_demotion_classes = [\"title\"]\n",
        )
        .unwrap();
        assert!(config.looping);
        assert_eq!(config.clone_count, 3);
        assert!(!config.centered);
        assert_eq!(config.demotion_class(1), Some("title"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn from_toml_rejects_zero_delay() {
        let result = CarouselConfig::from_toml_str("autoplay_delay_ms = 0\n");
        assert!(matches!(result, Err(CarouselError::InvalidConfig(_))));
    }
}
