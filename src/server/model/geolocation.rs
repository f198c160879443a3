use crate::model::airport::GeolocationDto;

/// Position of an airport, embedded in the airport document.
#[derive(Debug, Clone, PartialEq)]
pub struct Geolocation {
    pub lat: f64,
    pub lon: f64,
    pub alt: Option<f64>,
    pub accuracy: Option<String>,
}

impl Geolocation {
    /// Rebuilds the geolocation from its flattened columns.
    ///
    /// Latitude and longitude are required, so a row missing either has no geolocation.
    pub fn from_columns(
        lat: Option<f64>,
        lon: Option<f64>,
        alt: Option<f64>,
        accuracy: Option<String>,
    ) -> Option<Self> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Self {
                lat,
                lon,
                alt,
                accuracy,
            }),
            _ => None,
        }
    }

    pub fn from_dto(dto: GeolocationDto) -> Self {
        Self {
            lat: dto.lat,
            lon: dto.lon,
            alt: dto.alt,
            accuracy: dto.accuracy,
        }
    }

    pub fn into_dto(self) -> GeolocationDto {
        GeolocationDto {
            alt: self.alt,
            lat: self.lat,
            lon: self.lon,
            accuracy: self.accuracy,
        }
    }
}
