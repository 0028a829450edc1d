use super::Point;
use crate::POLYLINE_PRECISION;
use geo_types::Coord;
use geo_types::LineString;
use serde::Deserialize;
use serde::Serialize;

/// Geometry in the encoded polyline format, at five decimal places.
///
/// Coding is delegated to the `polyline` crate; this wrapper keeps the
/// encoded text as the wire value and speaks [`Point`] on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline(String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolylineError {
    #[error("undecodable polyline: {0}")]
    Decode(String),
    #[error("unencodable path: {0}")]
    Encode(String),
    #[error("coordinate {point} is out of range")]
    OutOfRange { point: Point },
}

impl Polyline {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn decode(&self) -> Result<Vec<Point>, PolylineError> {
        if self.0.is_empty() {
            return Ok(Vec::new());
        }
        let line = polyline::decode_polyline(&self.0, POLYLINE_PRECISION)
            .map_err(|e| PolylineError::Decode(e.to_string()))?;
        line.coords()
            .map(|c| Point::new(c.y, c.x))
            .map(|point| match point.is_valid() {
                true => Ok(point),
                false => Err(PolylineError::OutOfRange { point }),
            })
            .collect()
    }

    pub fn encode(points: &[Point]) -> Result<Self, PolylineError> {
        if let Some(point) = points.iter().copied().find(|p| !p.is_valid()) {
            return Err(PolylineError::OutOfRange { point });
        }
        let line = points
            .iter()
            .map(|p| Coord { x: p.lng(), y: p.lat() })
            .collect::<LineString<f64>>();
        polyline::encode_coordinates(line, POLYLINE_PRECISION)
            .map(Self)
            .map_err(|e| PolylineError::Encode(e.to_string()))
    }
}

impl TryFrom<&[Point]> for Polyline {
    type Error = PolylineError;
    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        Self::encode(points)
    }
}

impl From<String> for Polyline {
    fn from(encoded: String) -> Self {
        Self(encoded)
    }
}

impl From<&str> for Polyline {
    fn from(encoded: &str) -> Self {
        Self(encoded.to_owned())
    }
}

impl std::fmt::Display for Polyline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
