use serde::Deserialize;
use serde::Serialize;

/// How the route will be travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Drive,
    #[default]
    Walk,
}

impl TravelMode {
    /// Whether traffic conditions mean anything for this mode.
    pub fn is_vehicle(&self) -> bool {
        matches!(self, Self::Drive)
    }
}

impl TryFrom<&str> for TravelMode {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drive" => Ok(Self::Drive),
            "walk" => Ok(Self::Walk),
            other => Err(anyhow::anyhow!("unknown travel mode {:?}", other)),
        }
    }
}

impl std::str::FromStr for TravelMode {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drive => write!(f, "Drive"),
            Self::Walk => write!(f, "Walk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&TravelMode::Drive).unwrap(), "\"DRIVE\"");
        assert_eq!(serde_json::to_string(&TravelMode::Walk).unwrap(), "\"WALK\"");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(TravelMode::try_from("DRIVE").unwrap(), TravelMode::Drive);
        assert_eq!(TravelMode::try_from(" walk ").unwrap(), TravelMode::Walk);
        assert!(TravelMode::try_from("fly").is_err());
    }

    #[test]
    fn only_driving_is_a_vehicle() {
        assert!(TravelMode::Drive.is_vehicle());
        assert!(!TravelMode::Walk.is_vehicle());
        assert_eq!(TravelMode::default(), TravelMode::Walk);
    }
}
