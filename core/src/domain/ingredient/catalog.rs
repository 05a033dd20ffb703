use std::sync::LazyLock;

use crate::domain::ingredient::entities::{HarmfulCategory, HarmfulIngredientEntry};

/// Sweeteners listed under names most shoppers do not read as sugar.
pub const HIDDEN_SUGARS: &[&str] = &[
    "dextrose",
    "maltodextrin",
    "rice syrup",
    "corn syrup",
    "high fructose corn syrup",
    "agave nectar",
    "agave syrup",
    "fructose",
    "glucose",
    "sucrose",
    "maltose",
    "fruit juice concentrate",
    "cane sugar",
    "brown sugar",
    "invert sugar",
    "malt syrup",
    "molasses",
    "treacle",
];

pub const HARMFUL_PRESERVATIVES: &[&str] = &[
    "e211",
    "sodium benzoate",
    "e320",
    "bha",
    "butylated hydroxyanisole",
    "e321",
    "bht",
    "butylated hydroxytoluene",
    "e621",
    "msg",
    "monosodium glutamate",
    "e250",
    "sodium nitrite",
    "e220",
    "sulfur dioxide",
    "e221",
    "sodium sulfite",
    "e222",
    "sodium bisulfite",
    "e223",
    "sodium metabisulfite",
    "e224",
    "potassium metabisulfite",
    "e226",
    "calcium sulfite",
    "e227",
    "calcium bisulfite",
    "e228",
    "potassium bisulfite",
];

pub const ARTIFICIAL_ADDITIVES: &[&str] = &[
    "carrageenan",
    "artificial flavor",
    "artificial flavors",
    "artificial colour",
    "artificial colors",
    "natural flavors",
    "red 40",
    "e129",
    "yellow 5",
    "e102",
    "yellow 6",
    "e110",
    "blue 1",
    "e133",
    "blue 2",
    "e132",
    "green 3",
    "e143",
    "caramel color",
    "modified food starch",
    "partially hydrogenated oil",
    "trans fat",
    "sodium aluminum phosphate",
    "potassium bromate",
    "propyl gallate",
    "tbhq",
];

/// Every list paired with its category, in the order the classifier checks them.
const CATEGORY_LISTS: [(HarmfulCategory, &[&str]); 3] = [
    (HarmfulCategory::Sugar, HIDDEN_SUGARS),
    (HarmfulCategory::Preservative, HARMFUL_PRESERVATIVES),
    (HarmfulCategory::Additive, ARTIFICIAL_ADDITIVES),
];

static CATALOG: LazyLock<Vec<HarmfulIngredientEntry>> = LazyLock::new(|| {
    let mut entries = Vec::new();
    for (category, phrases) in CATEGORY_LISTS {
        entries.extend(
            phrases
                .iter()
                .map(|&phrase| HarmfulIngredientEntry::new(phrase, category, category.severity())),
        );
    }
    entries
});

/// The full harmful-ingredient catalog, grouped by category in priority order.
///
/// Built once on first use and shared read-only afterwards.
pub fn catalog() -> &'static [HarmfulIngredientEntry] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keeps_priority_order() {
        let entries = catalog();
        assert_eq!(
            entries.len(),
            HIDDEN_SUGARS.len() + HARMFUL_PRESERVATIVES.len() + ARTIFICIAL_ADDITIVES.len()
        );

        let first_preservative = entries
            .iter()
            .position(|e| e.category == HarmfulCategory::Preservative)
            .unwrap();
        let first_additive = entries
            .iter()
            .position(|e| e.category == HarmfulCategory::Additive)
            .unwrap();

        assert_eq!(first_preservative, HIDDEN_SUGARS.len());
        assert!(
            entries[..first_preservative]
                .iter()
                .all(|e| e.category == HarmfulCategory::Sugar)
        );
        assert!(
            entries[first_additive..]
                .iter()
                .all(|e| e.category == HarmfulCategory::Additive)
        );
    }

    #[test]
    fn test_phrases_are_already_normalized() {
        for entry in catalog() {
            assert_eq!(
                entry.match_phrase,
                crate::domain::ingredient::services::normalize(entry.match_phrase)
            );
        }
    }
}
