//! The Jama Connect response envelope.
//!
//! Every JSON response from the API arrives wrapped in the same four-key
//! envelope: `meta`, `links`, `linked`, and `data`. Collection responses
//! carry an array in `data` and a `meta.pageInfo` block; single-resource
//! responses carry an object.

use reqwest::Response;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{JamaError, Result};

/// Pagination metadata reported by the server under `meta.pageInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Offset of the first item on this page.
    pub start_index: u64,
    /// Number of items actually returned on this page.
    pub result_count: u64,
    /// Total logical items across all pages. The server is the sole
    /// source of truth; the paginator trusts this as its termination
    /// oracle.
    pub total_results: u64,
}

/// One decoded response body, or the merged result of many pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Response metadata, including `pageInfo` for collection responses.
    pub meta: Map<String, Value>,
    /// Hypermedia link templates for fields of the returned records.
    pub links: Map<String, Value>,
    /// Referenced entities, keyed by resource type then entity id.
    pub linked: Map<String, Value>,
    /// The payload: an array for collections, an object for a single
    /// resource.
    pub data: Value,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            meta: Map::new(),
            links: Map::new(),
            linked: Map::new(),
            data: Value::Array(Vec::new()),
        }
    }
}

impl Envelope {
    /// Decode a raw JSON body into an envelope.
    ///
    /// Missing `meta`, `links`, and `linked` keys default to empty
    /// objects; a missing `data` key defaults to an empty array.
    pub fn from_json(body: Value) -> Self {
        let take_map = |v: Option<&Value>| match v {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        Self {
            meta: take_map(body.get("meta")),
            links: take_map(body.get("links")),
            linked: take_map(body.get("linked")),
            data: body.get("data").cloned().unwrap_or(Value::Array(Vec::new())),
        }
    }

    /// Decode an HTTP response body into an envelope.
    pub async fn from_response(response: Response) -> Result<Self> {
        let body: Value = response.json().await.map_err(JamaError::Http)?;
        Ok(Self::from_json(body))
    }

    /// Merge another envelope into this one, consuming both.
    ///
    /// `meta` and `links` are shallow-merged with `other` winning on key
    /// collision. `linked` is merged one level deeper: each entity-type
    /// bucket accumulates entries across pages instead of being replaced
    /// wholesale, so referenced entities from earlier pages survive.
    /// `data` arrays are concatenated in order, this envelope's items
    /// first.
    #[must_use]
    pub fn combine(mut self, other: Envelope) -> Envelope {
        self.meta.extend(other.meta);
        self.links.extend(other.links);

        for (bucket, entries) in other.linked {
            match (self.linked.get_mut(&bucket), entries) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    existing.extend(incoming);
                }
                (_, entries) => {
                    self.linked.insert(bucket, entries);
                }
            }
        }

        self.data = match (self.data, other.data) {
            (Value::Array(mut items), Value::Array(incoming)) => {
                items.extend(incoming);
                Value::Array(items)
            }
            (_, incoming) => incoming,
        };

        self
    }

    /// Pagination metadata, when the response carried any.
    pub fn page_info(&self) -> Option<PageInfo> {
        let raw = self.meta.get("pageInfo")?;
        serde_json::from_value(raw.clone()).ok()
    }

    /// Number of records in `data`: the array length for collections,
    /// one for a single-resource object, zero otherwise.
    pub fn data_len(&self) -> usize {
        match &self.data {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    /// The records in `data`, empty for non-array payloads.
    pub fn items(&self) -> &[Value] {
        match &self.data {
            Value::Array(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(body: Value) -> Envelope {
        Envelope::from_json(body)
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let e = envelope(json!({}));
        assert!(e.meta.is_empty());
        assert!(e.links.is_empty());
        assert!(e.linked.is_empty());
        assert_eq!(e.data, json!([]));
        assert_eq!(e.data_len(), 0);
    }

    #[test]
    fn single_resource_data_stays_an_object() {
        let e = envelope(json!({"data": {"id": 7}}));
        assert_eq!(e.data, json!({"id": 7}));
        assert_eq!(e.data_len(), 1);
        assert!(e.items().is_empty());
    }

    #[test]
    fn page_info_parses_from_meta() {
        let e = envelope(json!({
            "meta": {"pageInfo": {"startIndex": 20, "resultCount": 5, "totalResults": 25}},
            "data": []
        }));
        let info = e.page_info().unwrap();
        assert_eq!(info.start_index, 20);
        assert_eq!(info.result_count, 5);
        assert_eq!(info.total_results, 25);
    }

    #[test]
    fn combine_concatenates_data_in_order() {
        let a = envelope(json!({"data": [1, 2]}));
        let b = envelope(json!({"data": [3]}));
        assert_eq!(a.combine(b).data, json!([1, 2, 3]));
    }

    #[test]
    fn combine_merges_linked_buckets_instead_of_replacing() {
        let a = envelope(json!({"linked": {"users": {"1": {"id": 1}}}, "data": []}));
        let b = envelope(json!({
            "linked": {"users": {"2": {"id": 2}}, "itemtypes": {"9": {"id": 9}}},
            "data": []
        }));
        let merged = a.combine(b);
        assert_eq!(
            merged.linked.get("users").unwrap(),
            &json!({"1": {"id": 1}, "2": {"id": 2}})
        );
        assert_eq!(merged.linked.get("itemtypes").unwrap(), &json!({"9": {"id": 9}}));
    }

    #[test]
    fn combine_right_operand_wins_on_meta_collision() {
        let a = envelope(json!({"meta": {"status": "OK", "only_a": 1}, "data": []}));
        let b = envelope(json!({"meta": {"status": "Updated"}, "data": []}));
        let merged = a.combine(b);
        assert_eq!(merged.meta.get("status").unwrap(), "Updated");
        assert_eq!(merged.meta.get("only_a").unwrap(), 1);
    }

    #[test]
    fn combine_is_associative_for_data_and_linked() {
        let make = || {
            (
                envelope(json!({"linked": {"users": {"1": 1}}, "data": [1]})),
                envelope(json!({"linked": {"users": {"2": 2}}, "data": [2]})),
                envelope(json!({"linked": {"tags": {"3": 3}}, "data": [3]})),
            )
        };
        let (a, b, c) = make();
        let left = a.combine(b).combine(c);
        let (a, b, c) = make();
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
        assert_eq!(left.data, json!([1, 2, 3]));
    }
}
