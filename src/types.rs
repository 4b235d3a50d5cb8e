#[derive(Debug, PartialEq, Clone)]
pub struct Astronaut {
    pub name: String,
    pub craft: String,
}

/// The crewed-spacecraft roster as declared by the API, kept whole so
/// callers can reuse it after the report has been printed.
#[derive(Debug, PartialEq, Clone)]
pub struct AstronautRoster {
    pub number: u32,
    pub people: Vec<Astronaut>,
}

/// One decoded position sample. The store keeps only the most recent fix;
/// every poll replaces the previous one.
#[derive(Debug, PartialEq, Clone)]
pub struct StationFix {
    pub longitude: f64,
    pub latitude: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PassPrediction {
    pub risetime: chrono::DateTime<chrono::Utc>,
}

/// Observer coordinates in decimal degrees. Construction validates the
/// ranges so a mistyped config cannot place the pin off the map.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct GroundLocation {
    longitude: f64,
    latitude: f64,
}

impl GroundLocation {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GroundLocationError> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GroundLocationError::LongitudeOutOfRange(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GroundLocationError::LatitudeOutOfRange(latitude));
        }
        Ok(GroundLocation {
            longitude,
            latitude,
        })
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl std::fmt::Display for GroundLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.longitude, self.latitude)
    }
}

#[derive(Debug)]
pub enum GroundLocationError {
    LongitudeOutOfRange(f64),
    LatitudeOutOfRange(f64),
}

impl std::fmt::Display for GroundLocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroundLocationError::LongitudeOutOfRange(value) => {
                write!(
                    f,
                    "Longitude {value} is outside the valid range [-180, 180]"
                )
            }
            GroundLocationError::LatitudeOutOfRange(value) => {
                write!(f, "Latitude {value} is outside the valid range [-90, 90]")
            }
        }
    }
}

impl std::error::Error for GroundLocationError {}
