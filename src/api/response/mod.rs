pub mod get_stations_list;
pub mod nearby_address;

pub use get_stations_list::{GetStationsList, RawStation};
pub use nearby_address::NearbyAddress;
