#[macro_use]
extern crate lazy_static;

pub mod api;
pub mod model;
pub mod status;
pub mod transform;

pub use api::Error;
use api::endpoint;
use api::Fetcher;
use model::{AddressPolicy, StationCollection, StationRecord};
use status::StatusCodes;

pub fn api(station_url: String, address_url: String) -> model::Api {
    model::Api {
        station_url,
        address_url,
    }
}

/// Fetch the station list and transform it into the ordered collection of stations with
/// bikes available.
pub async fn stations<F: Fetcher>(
    fetcher: &F,
    codes: &StatusCodes,
    api: &model::Api,
) -> Result<StationCollection, Error> {
    let raw = api::request(
        fetcher,
        codes,
        &endpoint::Stations {
            url: &api.station_url,
        },
    )
    .await?;

    log::info!("Received {} stations from {}", raw.len(), api.station_url);
    let stations = transform::transform(&raw)?;
    log::info!("{} stations with bikes available", stations.len());

    Ok(stations)
}

/// Look up the street address closest to `station`.
pub async fn address<F: Fetcher>(
    fetcher: &F,
    codes: &StatusCodes,
    api: &model::Api,
    station: &StationRecord,
) -> Result<String, Error> {
    api::request(
        fetcher,
        codes,
        &endpoint::Address {
            url: &api.address_url,
            latitude: station.latitude(),
            longitude: station.longitude(),
        },
    )
    .await
}

/// Attach an address to every station, one request at a time. Returns the number of
/// stations resolved.
///
/// With `AddressPolicy::Skip` a failed lookup leaves that station without an address,
/// with `AddressPolicy::Abort` the first failure is returned.
pub async fn resolve_addresses<F: Fetcher>(
    fetcher: &F,
    codes: &StatusCodes,
    api: &model::Api,
    stations: &mut StationCollection,
    policy: AddressPolicy,
) -> Result<usize, Error> {
    let mut resolved = 0;

    for station in stations.iter_mut() {
        match address(fetcher, codes, api, station).await {
            Ok(address) => {
                station.address = Some(address);
                resolved += 1;
            }
            Err(e) => match policy {
                AddressPolicy::Skip => {
                    log::warn!("No address for station {} ({}): {}", station.id, station.name, e)
                }
                AddressPolicy::Abort => {
                    log::error!("Address resolution aborted at station {}: {}", station.id, e);
                    return Err(e);
                }
            },
        }
    }

    log::info!("Resolved {} of {} addresses", resolved, stations.len());
    Ok(resolved)
}

#[cfg(test)]
mod test {
    use super::*;
    use api::mock::MockFetcher;

    const STATION_URL: &str = "http://localhost/stations";
    const ADDRESS_URL: &str = "http://localhost/nearby_address";
    const STATUS_CODES: &str = "[HttpStatusCodes]\nhttp.status.code.200 = OK\nhttp.status.code.404 = Not Found\nhttp.status.code.503 = Service Unavailable\n";

    const STATIONS: &str = r#"[
        {"id": 1, "name": "B", "status": "aktiv", "boxes": 10, "free_boxes": 4, "free_bikes": 4, "longitude": 1.0, "latitude": 2.0, "description": "x"},
        {"id": 2, "name": "A", "status": "inaktiv", "boxes": 5, "free_boxes": 0, "free_bikes": 0, "longitude": 3.0, "latitude": 4.0, "description": "y"},
        {"id": 3, "name": "C", "status": "aktiv", "boxes": 8, "free_boxes": 2, "free_bikes": 6, "longitude": 5.5, "latitude": 6.5, "description": "z"}
    ]"#;

    fn codes() -> StatusCodes {
        StatusCodes::from_ini(STATUS_CODES).unwrap()
    }

    fn test_api() -> model::Api {
        api(STATION_URL.to_string(), ADDRESS_URL.to_string())
    }

    fn address_url(latitude: &str, longitude: &str) -> String {
        format!("{}?latitude={}&longitude={}", ADDRESS_URL, latitude, longitude)
    }

    #[tokio::test]
    async fn fetch_stations() {
        let fetcher = MockFetcher::default().with(STATION_URL, 200, STATIONS);
        let stations = stations(&fetcher, &codes(), &test_api()).await.unwrap();
        assert_eq!(vec![3, 1], stations.ids());
    }

    #[tokio::test]
    async fn fetch_stations_unavailable() {
        let fetcher = MockFetcher::default().with(STATION_URL, 503, STATIONS);
        let result = stations(&fetcher, &codes(), &test_api()).await;
        assert_eq!(
            Err(Error::StatusError(503, "Service Unavailable".to_string())),
            result
        );
    }

    #[tokio::test]
    async fn fetch_stations_unparsable() {
        let fetcher = MockFetcher::default().with(STATION_URL, 200, "<html></html>");
        let result = stations(&fetcher, &codes(), &test_api()).await;
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[tokio::test]
    async fn resolve_all_addresses() {
        let fetcher = MockFetcher::default()
            .with(STATION_URL, 200, STATIONS)
            .with(&address_url("2.0", "1.0"), 200, r#"{"data": {"name": "Main St 5"}}"#)
            .with(&address_url("6.5", "5.5"), 200, r#"{"data": {"name": "Side St 1"}}"#);

        let mut stations = stations(&fetcher, &codes(), &test_api()).await.unwrap();
        let resolved = resolve_addresses(
            &fetcher,
            &codes(),
            &test_api(),
            &mut stations,
            AddressPolicy::Skip,
        )
        .await
        .unwrap();

        assert_eq!(2, resolved);
        assert_eq!(Some("Main St 5".to_string()), stations.get(1).unwrap().address);
        assert_eq!(Some("Side St 1".to_string()), stations.get(3).unwrap().address);
        assert_eq!(vec![3, 1], stations.ids());
        assert_eq!(3, fetcher.requested.borrow().len());
    }

    #[tokio::test]
    async fn failed_address_skipped() {
        let fetcher = MockFetcher::default()
            .with(STATION_URL, 200, STATIONS)
            .with(&address_url("6.5", "5.5"), 503, "")
            .with(&address_url("2.0", "1.0"), 200, r#"{"data": {"name": "Main St 5"}}"#);

        let mut stations = stations(&fetcher, &codes(), &test_api()).await.unwrap();
        let resolved = resolve_addresses(
            &fetcher,
            &codes(),
            &test_api(),
            &mut stations,
            AddressPolicy::Skip,
        )
        .await
        .unwrap();

        assert_eq!(1, resolved);
        assert_eq!(None, stations.get(3).unwrap().address);
        assert_eq!(Some("Main St 5".to_string()), stations.get(1).unwrap().address);
    }

    #[tokio::test]
    async fn failed_address_aborts() {
        let fetcher = MockFetcher::default()
            .with(STATION_URL, 200, STATIONS)
            .with(&address_url("6.5", "5.5"), 200, r#"{"data": {}}"#)
            .with(&address_url("2.0", "1.0"), 200, r#"{"data": {"name": "Main St 5"}}"#);

        let mut stations = stations(&fetcher, &codes(), &test_api()).await.unwrap();
        let result = resolve_addresses(
            &fetcher,
            &codes(),
            &test_api(),
            &mut stations,
            AddressPolicy::Abort,
        )
        .await;

        assert!(matches!(result, Err(Error::ExtractionError(_))));
        assert_eq!(None, stations.get(1).unwrap().address);
        /* station list plus the first address lookup only */
        assert_eq!(2, fetcher.requested.borrow().len());
    }
}
