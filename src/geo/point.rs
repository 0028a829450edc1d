use crate::Arbitrary;
use crate::Degrees;
use crate::EARTH_RADIUS_METERS;
use serde::Deserialize;
use serde::Serialize;

/// A geographic position in decimal degrees.
///
/// Equality is by value, so two checkpoints placed on the same
/// camera-settle position compare equal. Serializes in the routes API
/// `latLng` shape: `{"latitude": .., "longitude": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "latitude")]
    lat: Degrees,
    #[serde(rename = "longitude")]
    lng: Degrees,
}

impl Point {
    const DELIM: char = ',';

    pub const fn new(lat: Degrees, lng: Degrees) -> Self {
        Self { lat, lng }
    }
    pub fn lat(&self) -> Degrees {
        self.lat
    }
    pub fn lng(&self) -> Degrees {
        self.lng
    }
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance in meters.
    pub fn haversine(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();
        let sin_dlat = (dlat / 2.0).sin();
        let sin_dlng = (dlng / 2.0).sin();
        let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
        2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
    }

    /// Summed great-circle length of a path, in meters.
    pub fn length(path: &[Self]) -> f64 {
        path.windows(2).map(|w| w[0].haversine(&w[1])).sum()
    }
}

impl TryFrom<&str> for Point {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (lat, lng) = s
            .trim()
            .split_once(Self::DELIM)
            .ok_or_else(|| anyhow::anyhow!("expected <lat>{}<lng>, got {:?}", Self::DELIM, s))?;
        let lat = lat.trim().parse::<Degrees>()?;
        let lng = lng.trim().parse::<Degrees>()?;
        Some(Self::new(lat, lng))
            .filter(Self::is_valid)
            .ok_or_else(|| anyhow::anyhow!("coordinates out of range: {:?}", s))
    }
}

impl std::str::FromStr for Point {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}{}{:.5}", self.lat, Self::DELIM, self.lng)
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::new(rng.random_range(-85.0..85.0), rng.random_range(-180.0..180.0))
    }
}
