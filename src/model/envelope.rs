//! Typed result containers over the `spHeader`/`spData` response envelope
//!
//! Each endpoint nests its payload of interest under a fixed `spData`
//! sub-key (or uses the block directly). [`ApiList`] and [`ApiObject`] carry
//! that extracted payload together with the envelope header, the remaining
//! top-level `spData` fields, and the raw decoded body.

use crate::error::AppError;
use crate::session::response::SpHeader;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::ops::Deref;

fn parse_header(raw: &Value) -> Result<SpHeader, AppError> {
    let header = raw
        .get("spHeader")
        .cloned()
        .ok_or_else(|| AppError::MissingField("spHeader".to_string()))?;
    Ok(serde_json::from_value(header)?)
}

fn take_sp_data(raw: &Value) -> Value {
    raw.get("spData").cloned().unwrap_or(Value::Null)
}

/// Sequence-shaped API result
///
/// Holds the list extracted from the designated `spData` sub-key. The
/// remaining top-level `spData` fields land in `extra` as supplementary
/// metadata; they are not guaranteed complete. Dereferences to the payload
/// slice.
#[derive(Debug, Clone)]
pub struct ApiList<T> {
    /// Envelope header for the call
    pub sp_header: SpHeader,
    /// The extracted payload of interest
    pub data: Vec<T>,
    /// Remaining top-level `spData` fields, extracted key removed
    pub extra: Map<String, Value>,
    /// The full decoded response body
    pub raw: Value,
}

impl<T: DeserializeOwned> ApiList<T> {
    /// Builds a list result from a decoded response body
    ///
    /// # Arguments
    /// * `raw` - Full decoded JSON body
    /// * `key` - `spData` sub-key holding the payload, or `None` when
    ///   `spData` is itself the list
    ///
    /// # Returns
    /// * `Ok(ApiList)` - Container whose contents equal the designated sub-field
    /// * `Err(AppError::MissingField)` - If the envelope or sub-key is absent
    pub fn from_envelope(raw: Value, key: Option<&str>) -> Result<Self, AppError> {
        let sp_header = parse_header(&raw)?;
        let sp_data = take_sp_data(&raw);

        let (payload, extra) = match key {
            Some(key) => {
                let Value::Object(mut map) = sp_data else {
                    return Err(AppError::MissingField(key.to_string()));
                };
                let payload = map
                    .remove(key)
                    .ok_or_else(|| AppError::MissingField(key.to_string()))?;
                (payload, map)
            }
            None => (sp_data, Map::new()),
        };

        let data: Vec<T> = serde_json::from_value(payload)?;
        Ok(Self {
            sp_header,
            data,
            extra,
            raw,
        })
    }
}

impl<T> ApiList<T> {
    /// Number of items in the payload
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterator over the payload items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Deref for ApiList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> IntoIterator for ApiList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ApiList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Mapping-shaped API result
///
/// Holds the record decoded from the whole `spData` block. The raw block
/// fields also land in `extra` so callers can inspect attributes the typed
/// record does not name. Dereferences to the payload record.
#[derive(Debug, Clone)]
pub struct ApiObject<T> {
    /// Envelope header for the call
    pub sp_header: SpHeader,
    /// The decoded payload record
    pub data: T,
    /// All top-level `spData` fields as raw JSON
    pub extra: Map<String, Value>,
    /// The full decoded response body
    pub raw: Value,
}

impl<T: DeserializeOwned> ApiObject<T> {
    /// Builds an object result from a decoded response body
    ///
    /// # Returns
    /// * `Ok(ApiObject)` - Container whose record reflects the `spData` block
    /// * `Err(AppError::MissingField)` - If the envelope is absent or `spData`
    ///   is not an object
    pub fn from_envelope(raw: Value) -> Result<Self, AppError> {
        let sp_header = parse_header(&raw)?;
        let sp_data = take_sp_data(&raw);

        let Value::Object(extra) = sp_data.clone() else {
            return Err(AppError::MissingField("spData".to_string()));
        };
        let data: T = serde_json::from_value(sp_data)?;

        Ok(Self {
            sp_header,
            data,
            extra,
            raw,
        })
    }
}

impl<T> Deref for ApiObject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Profile {
        #[serde(rename = "emailAddress")]
        email_address: String,
    }

    #[test]
    fn test_list_extracts_designated_sub_field() {
        let raw = json!({
            "spHeader": {"success": true},
            "spData": {"networth": 1234.5, "accounts": [{"id": 1}, {"id": 2}]}
        });

        let list: ApiList<Item> = ApiList::from_envelope(raw, Some("accounts")).unwrap();
        assert_eq!(list.data, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(list.len(), 2);
        // the extracted key is removed from the supplementary fields
        assert!(list.extra.get("accounts").is_none());
        assert_eq!(list.extra.get("networth"), Some(&json!(1234.5)));
        assert_eq!(list.sp_header.success, Some(true));
    }

    #[test]
    fn test_list_when_sp_data_is_the_payload() {
        let raw = json!({
            "spHeader": {"success": true},
            "spData": [{"id": 7}]
        });

        let list: ApiList<Item> = ApiList::from_envelope(raw, None).unwrap();
        assert_eq!(list.data, vec![Item { id: 7 }]);
        assert!(list.extra.is_empty());
    }

    #[test]
    fn test_list_missing_sub_key() {
        let raw = json!({
            "spHeader": {"success": true},
            "spData": {"networth": 0.0}
        });

        let err = ApiList::<Item>::from_envelope(raw, Some("accounts")).unwrap_err();
        match err {
            AppError::MissingField(field) => assert_eq!(field, "accounts"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_missing_header() {
        let raw = json!({"spData": {"accounts": []}});
        let err = ApiList::<Item>::from_envelope(raw, Some("accounts")).unwrap_err();
        match err {
            AppError::MissingField(field) => assert_eq!(field, "spHeader"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_deref_and_iter() {
        let raw = json!({
            "spHeader": {},
            "spData": {"accounts": [{"id": 1}, {"id": 2}, {"id": 3}]}
        });

        let list: ApiList<Item> = ApiList::from_envelope(raw, Some("accounts")).unwrap();
        assert_eq!(list[0], Item { id: 1 });
        let ids: Vec<i64> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_object_reflects_sp_data_block() {
        let raw = json!({
            "spHeader": {"success": true},
            "spData": {"emailAddress": "user@example.com", "age": 42}
        });

        let person: ApiObject<Profile> = ApiObject::from_envelope(raw).unwrap();
        assert_eq!(person.data.email_address, "user@example.com");
        // deref to the record
        assert_eq!(person.email_address, "user@example.com");
        assert_eq!(person.extra.get("age"), Some(&json!(42)));
    }

    #[test]
    fn test_object_rejects_non_object_payload() {
        let raw = json!({"spHeader": {}, "spData": [1, 2, 3]});
        let err = ApiObject::<Profile>::from_envelope(raw).unwrap_err();
        match err {
            AppError::MissingField(field) => assert_eq!(field, "spData"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
