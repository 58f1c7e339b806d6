//! Filter, reshape and sort raw stations into the ordered `StationCollection`.

use crate::api::response::{GetStationsList, RawStation};
use crate::api::Error;
use crate::model::{StationCollection, StationId, StationRecord};
use serde::Deserialize;
use serde_json::Value;

const ACTIVE_STATUS: &str = "aktiv";

/// Raw fields the record is built from, anything else in the raw station is dropped.
#[derive(Deserialize)]
struct StationFields {
    name: String,
    status: String,
    #[serde(default)]
    description: Option<String>,
    boxes: u32,
    free_boxes: u32,
    free_bikes: u32,
    longitude: f64,
    latitude: f64,
}

/// Build the collection of stations with bikes available, most bikes first and
/// alphabetically among equal counts.
pub fn transform(stations: &GetStationsList) -> Result<StationCollection, Error> {
    let mut records = Vec::with_capacity(stations.len());
    for (id, raw) in &stations.data {
        if passes_filter(raw) {
            records.push(reshape(*id, raw)?);
        }
    }

    sort(&mut records);
    Ok(StationCollection::new(records))
}

/// Stations without bikes are of no use to anyone looking for one. Only `free_bikes` is
/// read, the other fields of a dropped station are never validated.
fn passes_filter(raw: &RawStation) -> bool {
    raw.get("free_bikes").and_then(Value::as_u64) != Some(0)
}

fn reshape(id: StationId, raw: &RawStation) -> Result<StationRecord, Error> {
    let fields: StationFields = serde_json::from_value(Value::Object(raw.clone()))
        .map_err(|e| Error::ParseError(format!("Station {}: {}", id, e)))?;

    Ok(StationRecord {
        id,
        active: fields.status == ACTIVE_STATUS,
        free_ratio: free_ratio(id, fields.free_boxes, fields.boxes),
        coordinates: [fields.longitude, fields.latitude],
        name: fields.name,
        description: fields.description.unwrap_or_default(),
        boxes: fields.boxes,
        free_boxes: fields.free_boxes,
        free_bikes: fields.free_bikes,
        address: None,
    })
}

/// `free_boxes / boxes`, defined as 0.0 for a station without boxes.
fn free_ratio(id: StationId, free_boxes: u32, boxes: u32) -> f64 {
    if boxes == 0 {
        log::warn!("Station {} reports no boxes, using free_ratio 0.0", id);
        return 0.0;
    }
    f64::from(free_boxes) / f64::from(boxes)
}

/// Two stable passes: by name, then by `free_bikes` descending, which keeps
/// names ordered among stations with equal bike counts.
fn sort(records: &mut [StationRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records.sort_by(|a, b| b.free_bikes.cmp(&a.free_bikes));
}
