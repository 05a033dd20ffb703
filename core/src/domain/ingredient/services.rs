use crate::domain::ingredient::{
    catalog::catalog,
    entities::{ClassificationResult, FlaggedIngredient, IngredientClassification},
};

const STRIPPED_CHARS: [char; 5] = ['.', ',', ';', '(', ')'];

/// Lower-cases, strips `. , ; ( )` and trims, so label punctuation does not hide a match.
///
/// Trimming runs last so that `" ( MSG ) "` and `"msg"` normalize alike.
pub fn normalize(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();

    stripped.trim().to_string()
}

/// Classify a single ingredient name against the harmful-ingredient catalog.
///
/// Matching is plain substring containment on the normalized name. Lists are checked
/// sugars first, then preservatives, then additives, and the first hit wins, so
/// `"dextrose and sodium benzoate"` reports a sugar.
pub fn classify(name: &str) -> ClassificationResult {
    let normalized = normalize(name);

    catalog()
        .iter()
        .find(|entry| normalized.contains(entry.match_phrase))
        .map(|entry| ClassificationResult::harmful(entry.category))
        .unwrap_or_else(ClassificationResult::harmless)
}

/// Classify every name and keep only the harmful ones, in input order.
pub fn classify_ingredients<I, S>(names: I) -> Vec<FlaggedIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classification_report(names)
        .into_iter()
        .filter_map(|line| {
            let category = line.result.category()?;
            let severity = line.result.severity()?;
            Some(FlaggedIngredient {
                name: line.name,
                category,
                severity,
            })
        })
        .collect()
}

/// Classify every name, harmful or not. Blank names are skipped.
pub fn classification_report<I, S>(names: I) -> Vec<IngredientClassification>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return None;
            }
            Some(IngredientClassification {
                name: name.to_string(),
                result: classify(name),
            })
        })
        .collect()
}

/// Split a pasted label paragraph into single-ingredient strings.
///
/// Only the first paragraph is read, a leading `Ingredients:` marker is dropped and the
/// list is split on `,` and `;` outside parentheses, so `Color Added (Red 40, Blue 1)`
/// stays one entry.
pub fn split_ingredient_list(text: &str) -> Vec<String> {
    let paragraph = first_paragraph(text);
    let list = strip_ingredients_marker(paragraph);

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for c in list.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' | ';' if depth == 0 => parts.push(std::mem::take(&mut current)),
            '\n' | '\r' => current.push(' '),
            _ => current.push(c),
        }
    }
    parts.push(current);

    parts
        .into_iter()
        .map(|part| part.trim().trim_end_matches('.').trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn first_paragraph(text: &str) -> &str {
    let text = text.trim_start();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            return &text[..offset];
        }
        offset += line.len();
    }
    text
}

/// Drops a leading `Ingredients:` marker. The word must be followed by a colon, or be
/// all the paragraph holds.
fn strip_ingredients_marker(paragraph: &str) -> &str {
    let trimmed = paragraph.trim_start();
    const MARKER: &str = "ingredients";

    let Some(head) = trimmed.get(..MARKER.len()) else {
        return trimmed;
    };
    if !head.eq_ignore_ascii_case(MARKER) {
        return trimmed;
    }

    let rest = trimmed[MARKER.len()..].trim_start();
    match rest.strip_prefix(':') {
        Some(list) => list,
        None if rest.is_empty() => rest,
        None => trimmed,
    }
}
