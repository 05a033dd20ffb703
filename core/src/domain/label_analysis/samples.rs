use crate::domain::label_analysis::entities::SampleProduct;

struct Sample {
    name: &'static str,
    front_label: &'static str,
    ingredients: &'static str,
    safe: bool,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Protein Bar (Misleading)",
        front_label: "HIGH PROTEIN - HEALTHY SNACK - NATURAL",
        ingredients: "Ingredients: Maltitol Syrup, Soy Protein Isolate, Maltodextrin, Glycerin, Palm Kernel Oil, Fructose, Water, Natural Flavors, Soy Lecithin, Salt, Carrageenan, Sucralose, Acesulfame Potassium, Artificial Flavors, BHT (Preservative), Red 40, Yellow 5.

Nutrition Facts: Serving Size 1 bar (60g)
Calories 200, Total Fat 7g, Saturated Fat 5g, Trans Fat 0g, Cholesterol 0mg, Sodium 190mg, Total Carbohydrate 25g, Dietary Fiber 1g, Total Sugars 1g (Includes 1g Added Sugars), Sugar Alcohols 14g, Protein 15g",
        safe: false,
    },
    Sample {
        name: "Diet Soda",
        front_label: "ZERO SUGAR - ZERO CALORIES - NATURAL FLAVORS",
        ingredients: "Ingredients: Carbonated Water, Caramel Color, Aspartame, Phosphoric Acid, Potassium Benzoate (Preservative), Natural Flavors, Citric Acid, Caffeine, Acesulfame Potassium.

Contains: Phenylalanine",
        safe: false,
    },
    Sample {
        name: "Healthy Cereal",
        front_label: "HEART HEALTHY - WHOLE GRAIN - LOW FAT",
        ingredients: "Ingredients: Whole Grain Wheat, Sugar, Corn Syrup, Modified Corn Starch, Wheat Starch, Maltodextrin, Salt, Tripotassium Phosphate, Color Added (Red 40, Yellow 5, Blue 1), Natural and Artificial Flavor, BHT Added to Preserve Freshness.

Vitamins and Minerals: Reduced Iron, Niacinamide, Zinc Oxide, Vitamin B6, Vitamin A Palmitate, Riboflavin, Thiamin Mononitrate, Folic Acid, Vitamin B12, Vitamin D3.

Nutrition Facts: Serving Size 1 cup (32g)
Calories 120, Total Fat 1g, Saturated Fat 0g, Trans Fat 0g, Sodium 190mg, Total Carbohydrate 27g, Dietary Fiber 3g, Total Sugars 12g (Includes 12g Added Sugars), Protein 2g",
        safe: false,
    },
    Sample {
        name: "Yogurt (Kids)",
        front_label: "NATURAL - CONTAINS REAL FRUIT - CALCIUM RICH",
        ingredients: "Ingredients: Cultured Grade A Low Fat Milk, Sugar, Modified Corn Starch, High Fructose Corn Syrup, Nonfat Milk, Kosher Gelatin, Citric Acid, Tricalcium Phosphate, Natural Flavor, Potassium Sorbate (Preservative), Acesulfame Potassium, Sucralose, Red 40, Blue 1, Vitamin A Acetate, Vitamin D3.

Contains: Milk",
        safe: false,
    },
    Sample {
        name: "Whole Wheat Bread",
        front_label: "MADE WITH WHOLE GRAINS - NO HIGH FRUCTOSE CORN SYRUP",
        ingredients: "Ingredients: Whole Wheat Flour, Water, Wheat Gluten, Sugar, Yeast, Contains 2% or Less of: Soybean Oil, Salt, Calcium Propionate (Preservative), Datem, Monoglycerides, Soy Lecithin, Citric Acid, Grain Vinegar, Calcium Sulfate, Niacin, Reduced Iron, Thiamine Mononitrate, Riboflavin, Folic Acid.

Contains: Wheat, Soy",
        safe: false,
    },
    Sample {
        name: "Organic Apple Sauce",
        front_label: "ORGANIC - NO ADDED SUGAR - SIMPLE INGREDIENTS",
        ingredients: "Ingredients: Organic Apples, Water, Ascorbic Acid (Vitamin C).

That's it! Nothing else.

Nutrition Facts: Serving Size 1/2 cup (122g)
Calories 50, Total Fat 0g, Sodium 0mg, Total Carbohydrate 14g, Dietary Fiber 1g, Total Sugars 11g (Includes 0g Added Sugars), Protein 0g",
        safe: true,
    },
];

/// Demo labels for the "quick demo" picker: five misleading products, then one clean one.
pub fn sample_products() -> Vec<SampleProduct> {
    SAMPLES
        .iter()
        .map(|s| SampleProduct {
            name: s.name.to_string(),
            front_label: s.front_label.to_string(),
            ingredients: s.ingredients.to_string(),
            safe: s.safe,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::services::{classify_ingredients, split_ingredient_list};

    #[test]
    fn test_keyword_flags_on_samples() {
        let flagged: Vec<String> = sample_products()
            .into_iter()
            .filter(|s| !classify_ingredients(split_ingredient_list(&s.ingredients)).is_empty())
            .map(|s| s.name)
            .collect();

        // The bread's sugar and preservative are not on the keyword lists.
        assert_eq!(
            flagged,
            vec![
                "Protein Bar (Misleading)",
                "Diet Soda",
                "Healthy Cereal",
                "Yogurt (Kids)",
            ]
        );
    }

    #[test]
    fn test_safe_sample_is_last() {
        let samples = sample_products();
        assert_eq!(samples.len(), 6);
        assert!(samples.last().is_some_and(|s| s.safe));
        assert_eq!(samples.iter().filter(|s| s.safe).count(), 1);
    }
}
