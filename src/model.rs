use serde::ser::{Serialize, SerializeMap, Serializer};

pub type StationId = u64;

/// `[longitude, latitude]`
pub type Coordinates = [f64; 2];

#[derive(Debug, Clone)]
pub struct Api {
    pub station_url: String,
    pub address_url: String,
}

/// What a failed address lookup does to the rest of the resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressPolicy {
    /// Leave the station without an address and carry on
    #[default]
    Skip,
    /// Stop resolving and fail the run
    Abort,
}

/// Transformed station. Serialized field order follows declaration order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub active: bool,
    pub description: String,
    pub boxes: u32,
    pub free_boxes: u32,
    pub free_bikes: u32,
    pub free_ratio: f64,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl StationRecord {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Stations keyed by id, iterated in sort order.
///
/// Serializes as a JSON object whose keys appear in the same order as the
/// records, so the availability ranking survives printing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationCollection {
    records: Vec<StationRecord>,
}

impl StationCollection {
    /// Takes `records` in their final order. Ids are expected to be unique.
    pub fn new(records: Vec<StationRecord>) -> Self {
        StationCollection { records }
    }

    pub fn get(&self, id: StationId) -> Option<&StationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<StationId> {
        self.records.iter().map(|record| record.id).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StationRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, StationRecord> {
        self.records.iter_mut()
    }
}

impl<'a> IntoIterator for &'a StationCollection {
    type Item = &'a StationRecord;
    type IntoIter = std::slice::Iter<'a, StationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for StationCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.id, record)?;
        }
        map.end()
    }
}
