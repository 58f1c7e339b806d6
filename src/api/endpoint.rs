use super::response::{GetStationsList, NearbyAddress};
use super::Error;
use reqwest::Url;

pub const STATIONS: &str = "https://wegfinder.at/api/v1/stations";
pub const NEARBY_ADDRESS: &str = "https://api.i-mobility.at/routing/api/v1/nearby_address";

/// An API endpoint: where to send the GET request and how to decode its body.
pub trait Endpoint {
    type Output;

    fn url(&self) -> Result<String, Error>;

    fn decode(&self, body: &str) -> Result<Self::Output, Error>;
}

/// Station list of the bike sharing system.
pub struct Stations<'a> {
    pub url: &'a str,
}

impl Endpoint for Stations<'_> {
    type Output = GetStationsList;

    fn url(&self) -> Result<String, Error> {
        Ok(self.url.to_owned())
    }

    fn decode(&self, body: &str) -> Result<GetStationsList, Error> {
        GetStationsList::parse(body)
    }
}

/// Street address closest to a coordinate.
pub struct Address<'a> {
    pub url: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Endpoint for Address<'_> {
    type Output = String;

    fn url(&self) -> Result<String, Error> {
        Url::parse_with_params(
            self.url,
            &[
                ("latitude", format!("{:?}", self.latitude)),
                ("longitude", format!("{:?}", self.longitude)),
            ],
        )
        .map(String::from)
        .map_err(|e| Error::ConfigError(format!("Invalid address url {}: {}", self.url, e)))
    }

    fn decode(&self, body: &str) -> Result<String, Error> {
        NearbyAddress::extract(body)
    }
}
