use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NutrientEntry {
    pub amount: f64,
    #[serde(rename = "akg")]
    pub akg_percent: f64,
}

/// Nutrient map that remembers the order keys arrived in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionInfo {
    entries: Vec<(String, NutrientEntry)>,
}

impl NutritionInfo {
    pub fn get(&self, key: &str) -> Option<&NutrientEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutrientEntry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }

    #[allow(dead_code)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Later duplicates replace the earlier value but keep its position.
    fn insert(&mut self, key: String, entry: NutrientEntry) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((key, entry)),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, NutrientEntry)> for NutritionInfo {
    fn from_iter<I: IntoIterator<Item = (K, NutrientEntry)>>(iter: I) -> Self {
        let mut info = NutritionInfo::default();
        for (key, entry) in iter {
            info.insert(key.into(), entry);
        }
        info
    }
}

impl<'de> Deserialize<'de> for NutritionInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NutritionInfoVisitor;

        impl<'de> Visitor<'de> for NutritionInfoVisitor {
            type Value = NutritionInfo;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of nutrient keys to {amount, akg}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut info = NutritionInfo::default();
                while let Some((key, entry)) = map.next_entry::<String, NutrientEntry>()? {
                    info.insert(key, entry);
                }
                Ok(info)
            }
        }

        deserializer.deserialize_map(NutritionInfoVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let info: NutritionInfo = serde_json::from_str(
            r#"{"protein": {"amount": 1, "akg": 1}, "air": {"amount": 90, "akg": 0},
                "protein": {"amount": 2, "akg": 3}}"#,
        )
        .unwrap();

        assert_eq!(info.len(), 2);
        assert_eq!(info.keys().collect::<Vec<_>>(), vec!["protein", "air"]);
        assert_eq!(info.get("protein").unwrap().akg_percent, 3.0);
    }
}
