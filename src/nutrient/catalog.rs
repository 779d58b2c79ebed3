#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientCatalogEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    pub unit: &'static str,
}

const fn entry(
    key: &'static str,
    display_name: &'static str,
    unit: &'static str,
) -> NutrientCatalogEntry {
    NutrientCatalogEntry {
        key,
        display_name,
        unit,
    }
}

/// Display order of the nutrient table.
pub static NUTRIENT_CATALOG: [NutrientCatalogEntry; 20] = [
    entry("energi", "Energi", "kkal"),
    entry("lemak_total", "Lemak Total", "g"),
    entry("vitamin_a", "Vitamin A", "µg"),
    entry("vitamin_b1", "Vitamin B1", "mg"),
    entry("vitamin_b2", "Vitamin B2", "mg"),
    entry("vitamin_b3", "Vitamin B3", "mg"),
    entry("vitamin_c", "Vitamin C", "mg"),
    entry("karbohidrat_total", "Karbohidrat Total", "g"),
    entry("protein", "Protein", "g"),
    entry("serat_pangan", "Serat Pangan", "g"),
    entry("kalium", "Kalium", "mg"),
    entry("fosfor", "Fosfor", "mg"),
    entry("natrium", "Natrium", "mg"),
    entry("tembaga", "Tembaga", "mg"),
    entry("besi", "Besi", "mg"),
    entry("seng", "Seng", "mg"),
    entry("b_karoten", "B-Karoten", "µg"),
    entry("karoten_total", "Karoten Total", "µg"),
    entry("air", "Air", "g"),
    entry("abu", "Abu", "g"),
];

pub fn lookup(key: &str) -> Option<&'static NutrientCatalogEntry> {
    NUTRIENT_CATALOG.iter().find(|entry| entry.key == key)
}

/// Catalog name for known keys, the raw key otherwise.
pub fn display_name(key: &str) -> &str {
    lookup(key).map(|entry| entry.display_name).unwrap_or(key)
}
