use crate::domain::label_analysis::value_objects::GenerationSettings;

pub const OCR_INSTRUCTION: &str = "Extract all text from this food label image, focusing on the ingredients list. Return just the raw text, nothing else.";

pub const ANALYSIS_PROMPT: &str = r#"You are a food safety expert. Analyze the following ingredient list from a food product label.

Your task:
1. Extract all ingredients from the text
2. Categorize each ingredient as RED (dangerous/harmful), YELLOW (caution/moderate), or GREEN (safe/natural)
3. Identify hidden sugars (dextrose, maltodextrin, rice syrup, agave, fructose, corn syrup, etc.)
4. Flag harmful preservatives (E-numbers like E211, E320, E621, sodium benzoate, BHA, BHT, etc.)
5. Flag artificial additives (MSG, carrageenan, artificial colors, artificial flavors, etc.)
6. Identify any misleading marketing claims if visible in the text
7. Provide plain English explanations for why each flagged ingredient is concerning

Return a JSON object with this exact structure:
{
  "productName": "string or null",
  "ingredients": [
    {
      "name": "ingredient name",
      "category": "red" | "yellow" | "green",
      "risk": "High Risk" | "Moderate Risk" | "Safe",
      "explanation": "plain English explanation of health impact"
    }
  ],
  "marketingClaims": [
    {
      "claim": "what the front label says",
      "reality": "what the ingredients actually show"
    }
  ],
  "overallScore": {
    "red": number,
    "yellow": number,
    "green": number
  },
  "summary": "2-3 sentence overall assessment"
}

Focus on ingredients that are actually harmful or deceptive. Don't flag basic ingredients like water, salt, flour unless they're in concerning amounts."#;

pub const OCR_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: 0.3,
    max_tokens: 1024,
};

pub const ANALYSIS_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: 0.2,
    max_tokens: 2048,
};
