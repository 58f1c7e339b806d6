use crate::api::Error;
use crate::model::StationId;
use serde_json::{Map, Value};

/// Station fields exactly as delivered by the station list endpoint.
pub type RawStation = Map<String, Value>;

/// Stations in the order the endpoint delivered them, keyed by id.
#[derive(Debug, Default)]
pub struct GetStationsList {
    pub data: Vec<(StationId, RawStation)>,
}

impl GetStationsList {
    /// Parse the station list body. Records without a non-negative integer `id` are dropped,
    /// a body which is not a list of records fails as a whole.
    pub fn parse(body: &str) -> Result<Self, Error> {
        let records: Vec<Value> = serde_json::from_str(body)
            .map_err(|e| Error::ParseError(format!("Station list is not a list of records: {}", e)))?;

        let mut stations = GetStationsList::default();
        for record in records {
            match record {
                Value::Object(fields) => match fields.get("id").and_then(Value::as_u64) {
                    Some(id) => stations.insert(id, fields),
                    None => log::debug!("Skipping station without valid id: {:?}", fields.get("id")),
                },
                other => log::debug!("Skipping non-object station record: {}", other),
            }
        }

        Ok(stations)
    }

    /// Later records replace earlier ones with the same id but keep the earlier position.
    fn insert(&mut self, id: StationId, fields: RawStation) {
        match self.data.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => {
                log::warn!("Duplicate station id {}, keeping the latest record", id);
                entry.1 = fields;
            }
            None => self.data.push((id, fields)),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
