//! Translation of HTTP status codes into the descriptions of the status code table.

use crate::api::Error;
use config::{Config, File, FileFormat};
use std::collections::HashMap;

const SECTION: &str = "HttpStatusCodes";
const KEY_PREFIX: &str = "http.status.code.";

/// Status code table loaded from the `[HttpStatusCodes]` section of an INI file.
#[derive(Debug, Clone, Default)]
pub struct StatusCodes {
    descriptions: HashMap<String, String>,
}

impl StatusCodes {
    /// Read the table from the properties file at `path`.
    pub fn load(path: &str) -> Result<Self, Error> {
        let mut table = Config::default();
        table.merge(File::new(path, FileFormat::Ini))?;
        Self::from_config(table)
    }

    /// Read the table from INI text.
    pub fn from_ini(text: &str) -> Result<Self, Error> {
        let mut table = Config::default();
        table.merge(File::from_str(text, FileFormat::Ini))?;
        Self::from_config(table)
    }

    fn from_config(table: Config) -> Result<Self, Error> {
        let descriptions = table
            .get_table(SECTION)?
            .into_iter()
            .map(|(key, value)| value.into_str().map(|s| (key, s)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        log::debug!("Loaded {} status code descriptions", descriptions.len());
        Ok(StatusCodes { descriptions })
    }

    /// Description of `code`. A code missing from the table is an error of its own.
    pub fn describe(&self, code: u16) -> Result<&str, Error> {
        self.descriptions
            .get(&format!("{}{}", KEY_PREFIX, code))
            .map(String::as_str)
            .ok_or(Error::UnknownStatusCode(code))
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn describe_known_code() {
        let codes = StatusCodes::from_ini(
            "[HttpStatusCodes]\nhttp.status.code.200 = OK\nhttp.status.code.503 = Service Unavailable\n",
        )
        .unwrap();
        assert_eq!("OK", codes.describe(200).unwrap());
        assert_eq!("Service Unavailable", codes.describe(503).unwrap());
        assert_eq!(2, codes.len());
    }

    #[test]
    fn describe_unknown_code() {
        let codes = StatusCodes::from_ini("[HttpStatusCodes]\nhttp.status.code.200 = OK\n").unwrap();
        assert_eq!(Err(Error::UnknownStatusCode(418)), codes.describe(418));
    }

    #[test]
    fn missing_section() {
        assert!(matches!(
            StatusCodes::from_ini("[Other]\nkey = value\n"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn shipped_table() {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("resources/Config.properties");
        let codes = StatusCodes::load(path.to_str().unwrap()).unwrap();
        assert_eq!("Not Found", codes.describe(404).unwrap());
        assert_eq!("Service Unavailable", codes.describe(503).unwrap());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            StatusCodes::load("/nonexistent/Config.properties"),
            Err(Error::ConfigError(_))
        ));
    }
}
