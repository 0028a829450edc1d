use super::*;
use crate::KilometersPerHour;
use crate::TRAVEL_SPEED_DEFAULT;
use crate::TRAVEL_SPEED_MAX;
use crate::TRAVEL_SPEED_MIN;
use serde::Deserialize;
use serde::Serialize;

/// Every user preference, as one serializable snapshot.
/// Keys missing from a stored profile fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Profile {
    pub app_theme: Theme,
    pub map_theme: Theme,
    pub amoled_theme: bool,
    pub traffic_awareness: bool,
    pub travel_mode: TravelMode,
    #[serde(deserialize_with = "speed")]
    pub travel_speed: KilometersPerHour,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            app_theme: Theme::Auto,
            map_theme: Theme::Auto,
            amoled_theme: false,
            traffic_awareness: false,
            travel_mode: TravelMode::Walk,
            travel_speed: TRAVEL_SPEED_DEFAULT,
        }
    }
}

impl Profile {
    pub fn clamp_speed(speed: KilometersPerHour) -> KilometersPerHour {
        speed.clamp(TRAVEL_SPEED_MIN, TRAVEL_SPEED_MAX)
    }
    /// Pure black backgrounds only apply while the app is actually dark.
    pub fn amoled(&self, system_dark: bool) -> bool {
        self.amoled_theme && self.app_theme.is_dark(system_dark)
    }
}

fn speed<'de, D>(deserializer: D) -> Result<KilometersPerHour, D::Error>
where
    D: serde::Deserializer<'de>,
{
    KilometersPerHour::deserialize(deserializer).map(Profile::clamp_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_walk_without_traffic() {
        let profile = Profile::default();
        assert_eq!(profile.travel_mode, TravelMode::Walk);
        assert!(!profile.traffic_awareness);
        assert_eq!(profile.travel_speed, 6);
        assert_eq!(profile.map_theme, Theme::Auto);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let profile = serde_json::from_str::<Profile>(r#"{"travel_mode":"DRIVE"}"#).unwrap();
        assert_eq!(profile.travel_mode, TravelMode::Drive);
        assert_eq!(profile.travel_speed, TRAVEL_SPEED_DEFAULT);
        assert_eq!(profile.app_theme, Theme::Auto);
    }

    #[test]
    fn stored_speed_is_clamped() {
        let fast = serde_json::from_str::<Profile>(r#"{"travel_speed":200}"#).unwrap();
        let slow = serde_json::from_str::<Profile>(r#"{"travel_speed":0}"#).unwrap();
        assert_eq!(fast.travel_speed, TRAVEL_SPEED_MAX);
        assert_eq!(slow.travel_speed, TRAVEL_SPEED_MIN);
    }

    #[test]
    fn amoled_requires_dark_app() {
        let profile = Profile {
            amoled_theme: true,
            app_theme: Theme::Auto,
            ..Profile::default()
        };
        assert!(profile.amoled(true));
        assert!(!profile.amoled(false));
        assert!(!Profile::default().amoled(true));
    }
}
