use serde::{Deserialize, Deserializer};

pub struct SerdeHelper;

impl SerdeHelper {
    /// Treats an explicit `null` like a missing key.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, deserialize_with = "SerdeHelper::null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn null_missing_and_present_values() {
        let null: Holder = serde_json::from_value(json!({ "items": null })).unwrap();
        let missing: Holder = serde_json::from_value(json!({})).unwrap();
        let present: Holder = serde_json::from_value(json!({ "items": [1, 2] })).unwrap();

        assert!(null.items.is_empty());
        assert!(missing.items.is_empty());
        assert_eq!(present.items, vec![1, 2]);
    }
}
