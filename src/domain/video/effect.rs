// SPDX-License-Identifier: MPL-2.0
//! Frame effect selection.
//!
//! The pixel work lives in `media::effects`; this is only the closed set of
//! effects a user can pick.

use std::fmt;
use std::str::FromStr;

/// Visual effect applied to every decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// Frames are shown untouched.
    #[default]
    Normal,
    /// Luminance only.
    Grayscale,
    /// Gaussian blur.
    Blur,
    /// Canny edge map.
    Edge,
    /// Warm brown tint.
    Sepia,
}

impl Effect {
    /// All effects in menu order.
    pub const ALL: [Effect; 5] = [
        Effect::Normal,
        Effect::Grayscale,
        Effect::Blur,
        Effect::Edge,
        Effect::Sepia,
    ];

    /// Stable lowercase name, used in menus and in the config file.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Grayscale => "grayscale",
            Self::Blur => "blur",
            Self::Edge => "edge",
            Self::Sepia => "sepia",
        }
    }

    /// Returns true if the effect leaves frames unchanged.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::Normal
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|effect| effect.name() == wanted)
            .ok_or_else(|| format!("unknown effect: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(Effect::default(), Effect::Normal);
        assert!(Effect::default().is_identity());
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for effect in Effect::ALL {
            assert_eq!(effect.name().parse::<Effect>(), Ok(effect));
        }
        assert_eq!("  Sepia ".parse::<Effect>(), Ok(Effect::Sepia));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("vignette".parse::<Effect>().is_err());
    }

    #[test]
    fn registry_has_five_effects() {
        assert_eq!(Effect::ALL.len(), 5);
        assert_eq!(Effect::Edge.to_string(), "edge");
    }
}
