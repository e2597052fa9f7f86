//! Record Module
//!
//! The persisted form submission and its projection for callers.
//!
//! ## Storage Shape
//! ```text
//! { "Name": "...", "FullName": "...", "Location": "...", "DateOfBirth": "..." }
//! ```
//!
//! ## Projected Shape (returned across the boundary)
//! ```text
//! { "name": "...", "fullName": "...", "location": "...", "dateOfBirth": "..." }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A projected record: fixed keys mapped to field values, in field order
pub type RecordMap = IndexMap<String, String>;

/// Projection keys, in field order
pub const KEY_NAME: &str = "name";
pub const KEY_FULL_NAME: &str = "fullName";
pub const KEY_LOCATION: &str = "location";
pub const KEY_DATE_OF_BIRTH: &str = "dateOfBirth";

/// One persisted form submission
///
/// All fields are opaque text. Missing or `null` fields in an existing file
/// decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FormRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub date_of_birth: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FormRecord {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        location: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            location: location.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Project into the caller-facing mapping
    pub fn to_map(&self) -> RecordMap {
        self.clone().into()
    }
}

impl From<FormRecord> for RecordMap {
    fn from(record: FormRecord) -> Self {
        let mut map = RecordMap::with_capacity(4);
        map.insert(KEY_NAME.to_string(), record.name);
        map.insert(KEY_FULL_NAME.to_string(), record.full_name);
        map.insert(KEY_LOCATION.to_string(), record.location);
        map.insert(KEY_DATE_OF_BIRTH.to_string(), record.date_of_birth);
        map
    }
}
