//! Serde adapter for optional nested blocks
//!
//! On the wire an optional block is a list holding zero or one map:
//! `[]` (or a missing key) is `None`, `[ {..} ]` is `Some`. A longer list is
//! rejected instead of silently taking the first element.
//!
//! ```ignore
//! #[serde(default, with = "singleton", skip_serializing_if = "Option::is_none")]
//! pub tls_config: Option<TlsConfigSchema>,
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    serializer.collect_seq(value)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let items = Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default();
    if items.len() > 1 {
        return Err(D::Error::invalid_length(items.len(), &"at most one block"));
    }
    Ok(items.into_iter().next())
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Inner {
        value: i32,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Outer {
        #[serde(default, with = "super", skip_serializing_if = "Option::is_none")]
        block: Option<Inner>,
    }

    #[test]
    fn test_missing_and_empty_are_none() {
        let missing: Outer = serde_json::from_value(json!({})).unwrap();
        let empty: Outer = serde_json::from_value(json!({"block": []})).unwrap();
        let null: Outer = serde_json::from_value(json!({"block": null})).unwrap();
        assert_eq!(missing.block, None);
        assert_eq!(empty.block, None);
        assert_eq!(null.block, None);
    }

    #[test]
    fn test_single_item_is_some() {
        let outer: Outer = serde_json::from_value(json!({"block": [{"value": 3}]})).unwrap();
        assert_eq!(outer.block, Some(Inner { value: 3 }));
    }

    #[test]
    fn test_two_items_rejected() {
        let result: Result<Outer, _> =
            serde_json::from_value(json!({"block": [{"value": 1}, {"value": 2}]}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at most one block"));
    }

    #[test]
    fn test_serializes_as_list() {
        let outer = Outer {
            block: Some(Inner { value: 5 }),
        };
        assert_eq!(
            serde_json::to_value(&outer).unwrap(),
            json!({"block": [{"value": 5}]})
        );
        assert_eq!(serde_json::to_value(Outer::default()).unwrap(), json!({}));
    }
}
