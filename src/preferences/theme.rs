use serde::Deserialize;
use serde::Serialize;

/// Light/dark selection for the app chrome or the map tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    Dark,
    Light,
    /// Follow the system setting.
    #[default]
    Auto,
}

impl Theme {
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => system_dark,
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "auto" | "system" => Ok(Self::Auto),
            other => Err(anyhow::anyhow!("unknown theme {:?}", other)),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "Dark"),
            Self::Light => write!(f, "Light"),
            Self::Auto => write!(f, "Auto"),
        }
    }
}
