//! Delivery zone and service tier enums.
//!
//! Both enums parse *totally*: unrecognized input yields `None` rather than
//! an error, because the pricing path treats unknown keys as a fallback
//! case, never as a failure.

use serde::{Deserialize, Serialize};

/// Delivery distance tier driving the base price of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    #[default]
    Local,
    Regional,
    National,
    International,
}

impl Zone {
    /// All zones, in ascending distance order. Used to render form options.
    pub const ALL: [Self; 4] = [
        Self::Local,
        Self::Regional,
        Self::National,
        Self::International,
    ];

    /// Parse a zone from a form value, case-insensitively.
    ///
    /// Returns `None` for unrecognized input; callers decide whether that
    /// means "use the default" or "use the fallback rates".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local),
            "regional" => Some(Self::Regional),
            "national" => Some(Self::National),
            "international" => Some(Self::International),
            _ => None,
        }
    }

    /// The form value for this zone.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Regional => "regional",
            Self::National => "national",
            Self::International => "international",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Regional => "Regional",
            Self::National => "National",
            Self::International => "International",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery speed option scaling a quote via a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    Express,
    #[default]
    Standard,
    Economy,
}

impl ServiceTier {
    /// All tiers, fastest first. Used to render form options.
    pub const ALL: [Self; 3] = [Self::Express, Self::Standard, Self::Economy];

    /// Parse a service tier from a form value, case-insensitively.
    ///
    /// Returns `None` for unrecognized input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Some(Self::Express),
            "standard" => Some(Self::Standard),
            "economy" => Some(Self::Economy),
            _ => None,
        }
    }

    /// The form value for this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Standard => "standard",
            Self::Economy => "economy",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Standard => "Standard",
            Self::Economy => "Economy",
        }
    }
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parse_known_values() {
        assert_eq!(Zone::parse("local"), Some(Zone::Local));
        assert_eq!(Zone::parse("regional"), Some(Zone::Regional));
        assert_eq!(Zone::parse("national"), Some(Zone::National));
        assert_eq!(Zone::parse("international"), Some(Zone::International));
    }

    #[test]
    fn test_zone_parse_is_case_insensitive_and_trims() {
        assert_eq!(Zone::parse("  Local "), Some(Zone::Local));
        assert_eq!(Zone::parse("NATIONAL"), Some(Zone::National));
    }

    #[test]
    fn test_zone_parse_unknown_is_none() {
        assert_eq!(Zone::parse("interstellar"), None);
        assert_eq!(Zone::parse(""), None);
    }

    #[test]
    fn test_zone_default_is_local() {
        assert_eq!(Zone::default(), Zone::Local);
    }

    #[test]
    fn test_zone_display_roundtrip() {
        for zone in Zone::ALL {
            assert_eq!(Zone::parse(&zone.to_string()), Some(zone));
        }
    }

    #[test]
    fn test_tier_parse_known_values() {
        assert_eq!(ServiceTier::parse("express"), Some(ServiceTier::Express));
        assert_eq!(ServiceTier::parse("standard"), Some(ServiceTier::Standard));
        assert_eq!(ServiceTier::parse("economy"), Some(ServiceTier::Economy));
    }

    #[test]
    fn test_tier_parse_unknown_is_none() {
        assert_eq!(ServiceTier::parse("overnight"), None);
    }

    #[test]
    fn test_tier_default_is_standard() {
        assert_eq!(ServiceTier::default(), ServiceTier::Standard);
    }

    #[test]
    fn test_tier_display_roundtrip() {
        for tier in ServiceTier::ALL {
            assert_eq!(ServiceTier::parse(&tier.to_string()), Some(tier));
        }
    }
}
