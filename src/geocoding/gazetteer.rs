use super::*;
use crate::geo::Point;
use serde::Deserialize;
use serde::Serialize;

/// A named location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub point: Point,
}

/// Offline geocoder over a fixed list of places.
/// Resolves to the nearest place within `radius` meters.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<Place>,
    radius: f64,
}

impl Gazetteer {
    pub fn new(places: Vec<Place>, radius: f64) -> Self {
        Self { places, radius }
    }

    pub fn load(path: impl AsRef<std::path::Path>, radius: f64) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read places {}: {}", path.display(), e))?;
        let places = serde_json::from_str::<Vec<Place>>(&text)
            .map_err(|e| anyhow::anyhow!("parse places {}: {}", path.display(), e))?;
        Ok(Self::new(places, radius))
    }

    pub fn nearest(&self, point: &Point) -> Option<&Place> {
        self.places
            .iter()
            .map(|place| (place, place.point.haversine(point)))
            .filter(|(_, d)| *d <= self.radius)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(place, _)| place)
    }
}

#[async_trait::async_trait]
impl Geocoder for Gazetteer {
    async fn address(&self, point: Point) -> anyhow::Result<Option<String>> {
        Ok(self.nearest(&point).map(|place| place.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gazetteer() -> Gazetteer {
        Gazetteer::new(
            vec![
                Place {
                    name: "Tower".into(),
                    point: Point::new(48.85837, 2.29448),
                },
                Place {
                    name: "Arch".into(),
                    point: Point::new(48.87380, 2.29504),
                },
            ],
            250.0,
        )
    }

    #[test]
    fn picks_nearest_within_radius() {
        let places = gazetteer();
        let near_tower = Point::new(48.8590, 2.2950);
        assert_eq!(places.nearest(&near_tower).map(|p| p.name.as_str()), Some("Tower"));
        let nowhere = Point::new(48.8660, 2.2950);
        assert_eq!(places.nearest(&nowhere), None);
    }

    #[tokio::test]
    async fn resolves_addresses() {
        let places = gazetteer();
        let address = places.address(Point::new(48.8738, 2.2950)).await.unwrap();
        assert_eq!(address.as_deref(), Some("Arch"));
        assert_eq!(Nowhere.address(Point::new(0.0, 0.0)).await.unwrap(), None);
    }

    #[test]
    fn places_parse_from_json() {
        let json = r#"[{"name":"Origin","point":{"latitude":0.0,"longitude":0.0}}]"#;
        let places = serde_json::from_str::<Vec<Place>>(json).unwrap();
        assert_eq!(places[0].point, Point::new(0.0, 0.0));
    }
}
