use crate::nutrient::catalog::NutrientCatalogEntry;
use crate::nutrient::nutrition_info::NutritionInfo;
use std::cmp::Ordering;

pub const DEFAULT_TOP_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct TopNutrient {
    pub key: String,
    pub akg_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutrientRow {
    pub key: &'static str,
    pub display_name: &'static str,
    pub amount: f64,
    pub unit: &'static str,
    pub akg_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub unit: &'static str,
    pub amount: Option<f64>,
}

/// The `n` nutrients with the highest AKG, highest first. Equal AKG values
/// keep the order they had in the response.
pub fn project_top(nutrients: &NutritionInfo, n: usize) -> Vec<TopNutrient> {
    let mut ranked: Vec<TopNutrient> = nutrients
        .iter()
        .map(|(key, entry)| TopNutrient {
            key: key.to_string(),
            akg_percent: entry.akg_percent,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.akg_percent
            .partial_cmp(&a.akg_percent)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

pub fn project_table(
    nutrients: &NutritionInfo,
    catalog: &'static [NutrientCatalogEntry],
) -> Vec<NutrientRow> {
    catalog
        .iter()
        .filter_map(|item| {
            nutrients.get(item.key).map(|entry| NutrientRow {
                key: item.key,
                display_name: item.display_name,
                amount: entry.amount,
                unit: item.unit,
                akg_percent: entry.akg_percent,
            })
        })
        .collect()
}

const SUMMARY_CARDS: [(&str, &str, &str); 4] = [
    ("energi", "Energi", "kkal"),
    ("protein", "Protein", "g"),
    ("lemak_total", "Lemak", "g"),
    ("karbohidrat_total", "Karbo", "g"),
];

pub fn project_summary(nutrients: &NutritionInfo) -> Vec<SummaryCard> {
    SUMMARY_CARDS
        .iter()
        .map(|&(key, title, unit)| SummaryCard {
            title,
            unit,
            amount: nutrients.get(key).map(|entry| entry.amount),
        })
        .collect()
}
