use super::*;
use crate::KilometersPerHour;
use tokio::sync::watch;

/// In-memory preference store.
///
/// Holds the current [`Profile`] behind a watch channel so screens can
/// observe changes while the engine simply reads the latest value.
/// Persistence is limited to a JSON snapshot on explicit load/save.
#[derive(Debug)]
pub struct Settings {
    profile: watch::Sender<Profile>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(Profile::default())
    }
}

impl From<Profile> for Settings {
    fn from(profile: Profile) -> Self {
        Self {
            profile: watch::Sender::new(profile),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read profile {}: {}", path.display(), e))?;
        let profile = serde_json::from_str::<Profile>(&text)
            .map_err(|e| anyhow::anyhow!("parse profile {}: {}", path.display(), e))?;
        log::debug!("loaded profile from {}", path.display());
        Ok(Self::from(profile))
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&self.profile())?;
        std::fs::write(path, text)
            .map_err(|e| anyhow::anyhow!("write profile {}: {}", path.display(), e))
    }

    pub fn profile(&self) -> Profile {
        self.profile.borrow().clone()
    }
    pub fn observe(&self) -> watch::Receiver<Profile> {
        self.profile.subscribe()
    }

    pub fn set_travel_mode(&self, mode: TravelMode) {
        self.update(|p| p.travel_mode = mode);
    }
    pub fn set_traffic_awareness(&self, aware: bool) {
        self.update(|p| p.traffic_awareness = aware);
    }
    pub fn set_app_theme(&self, theme: Theme) {
        self.update(|p| p.app_theme = theme);
    }
    pub fn set_map_theme(&self, theme: Theme) {
        self.update(|p| p.map_theme = theme);
    }
    pub fn set_amoled_theme(&self, amoled: bool) {
        self.update(|p| p.amoled_theme = amoled);
    }
    pub fn set_travel_speed(&self, speed: KilometersPerHour) {
        self.update(|p| p.travel_speed = Profile::clamp_speed(speed));
    }

    /// Applies `change` and notifies observers only if something differs.
    fn update<F>(&self, change: F)
    where
        F: FnOnce(&mut Profile),
    {
        self.profile.send_if_modified(|profile| {
            let before = profile.clone();
            change(profile);
            *profile != before
        });
    }
}

impl Preferences for Settings {
    fn travel_mode(&self) -> TravelMode {
        self.profile.borrow().travel_mode
    }
    fn traffic_aware(&self) -> bool {
        self.profile.borrow().traffic_awareness
    }
    fn theme(&self) -> Theme {
        self.profile.borrow().app_theme
    }
}
