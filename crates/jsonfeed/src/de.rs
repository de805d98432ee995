// crates/jsonfeed/src/de.rs
//! Deserialization helpers for the wire format
//!
//! Derived struct impls also accept a JSON array with one element per
//! field. Feed entities are objects keyed by field name, so every entity is
//! decoded through [`Object`], which only offers the decoder a map.

use serde::de::{Deserialize, Deserializer, Visitor};

/// An entity that must be a JSON object on the wire
pub(crate) struct Object<T>(pub(crate) T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(ObjectOnly(deserializer)).map(Object)
    }
}

/// Routes every request to `deserialize_map`
struct ObjectOnly<D>(D);

impl<'de, D: Deserializer<'de>> Deserializer<'de> for ObjectOnly<D> {
    type Error = D::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.0.deserialize_map(visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Required string: a missing key or `null` both decode as ""
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional collection of entities, each of which must be an object
pub(crate) fn objects<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let objects: Option<Vec<Object<T>>> = Option::deserialize(deserializer)?;
    Ok(objects.map(|objects| objects.into_iter().map(|Object(value)| value).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        a: Option<String>,
        b: Option<String>,
    }

    #[test]
    fn test_object_accepts_map() {
        let Object(pair) =
            serde_json::from_str::<Object<Pair>>(r#"{"a": "x"}"#).expect("Should decode");
        assert_eq!(pair.a.as_deref(), Some("x"));
        assert_eq!(pair.b, None);
    }

    #[test]
    fn test_object_rejects_array() {
        // The derived impl alone takes this as {a: "x", b: "y"}
        assert!(serde_json::from_str::<Pair>(r#"["x", "y"]"#).is_ok());
        assert!(serde_json::from_str::<Object<Pair>>(r#"["x", "y"]"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Required {
        #[serde(default, deserialize_with = "null_as_empty")]
        name: String,
    }

    #[test]
    fn test_null_as_empty() {
        let missing: Required = serde_json::from_str("{}").expect("missing");
        assert_eq!(missing.name, "");

        let null: Required = serde_json::from_str(r#"{"name": null}"#).expect("null");
        assert_eq!(null.name, "");

        let set: Required = serde_json::from_str(r#"{"name": "n"}"#).expect("set");
        assert_eq!(set.name, "n");

        assert!(serde_json::from_str::<Required>(r#"{"name": 1}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct List {
        #[serde(default, deserialize_with = "objects")]
        pairs: Option<Vec<Pair>>,
    }

    #[test]
    fn test_objects() {
        let list: List = serde_json::from_str("{}").expect("missing");
        assert!(list.pairs.is_none());

        let list: List = serde_json::from_str(r#"{"pairs": null}"#).expect("null");
        assert!(list.pairs.is_none());

        let list: List = serde_json::from_str(r#"{"pairs": []}"#).expect("empty");
        assert_eq!(list.pairs.map(|p| p.len()), Some(0));

        let list: List = serde_json::from_str(r#"{"pairs": [{"b": "y"}]}"#).expect("one");
        assert_eq!(list.pairs.expect("Should have pairs")[0].b.as_deref(), Some("y"));

        assert!(serde_json::from_str::<List>(r#"{"pairs": [["x", "y"]]}"#).is_err());
    }
}
