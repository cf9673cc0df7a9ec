use std::fmt;

/// A bundled visual theme.
///
/// Theme names are matched in kebab-case, e.g. `near-midnight`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
#[derive(Default)]
pub enum Theme {
    /// Respects the reader's color scheme preference.
    #[default]
    Default,
    Light,
    Dark,
    Air,
    Cotton,
    Glacier,
    Parchment,
    Slate,
    Coffee,
    DeepSpace,
    Ink,
    Midnight,
    NearMidnight,
    OceanFloor,
    /// Compact spacing for dense, chart-heavy pages.
    Dashboard,
    #[cfg(not(feature = "unstable"))]
    #[doc(hidden)]
    #[serde(other)]
    Unknown,
}

impl Theme {
    /// All bundled themes, in palette order.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Default,
            Self::Light,
            Self::Dark,
            Self::Air,
            Self::Cotton,
            Self::Glacier,
            Self::Parchment,
            Self::Slate,
            Self::Coffee,
            Self::DeepSpace,
            Self::Ink,
            Self::Midnight,
            Self::NearMidnight,
            Self::OceanFloor,
            Self::Dashboard,
        ]
        .into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Air => "air",
            Self::Cotton => "cotton",
            Self::Glacier => "glacier",
            Self::Parchment => "parchment",
            Self::Slate => "slate",
            Self::Coffee => "coffee",
            Self::DeepSpace => "deep-space",
            Self::Ink => "ink",
            Self::Midnight => "midnight",
            Self::NearMidnight => "near-midnight",
            Self::OceanFloor => "ocean-floor",
            Self::Dashboard => "dashboard",
            #[cfg(not(feature = "unstable"))]
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
