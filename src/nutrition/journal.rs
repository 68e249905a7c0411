use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::dto::{DailyTotals, Extraction, MealEntry};
use super::normalize_time;

/// One matched meal mention before rounding. All patterns normalize into
/// this shape; grams may be fractional in the bullet phrasing.
struct RawEntry {
    name: String,
    time: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

/// Opportunistically extracts meals from the free-form memory journal.
///
/// The journal knows two phrasings, tried in priority order over the whole
/// text:
///   1. sub-heading form: `### Frühstück — 09:24` followed in the same block
///      by a bolded `**619 kcal | 25g P | 82g C | 21g F**` tuple;
///   2. bullet form: `- **Snack ~08:35:** Joghurt — 84 kcal | 3.6g P | 0g C
///      | 7.8g F`, grams possibly fractional, `KH` accepted for carbs.
///
/// The same meal is often described twice, so the first pattern to claim a
/// time slot wins; later matches on the same `HH:MM` are discarded.
pub fn parse_journal(content: &str) -> Option<Extraction> {
    lazy_static! {
        static ref PATTERNS: [Regex; 2] = [
            Regex::new(
                r"(?i)###?\s*([^—\n]+)—\s*(\d{1,2}:\d{2})[^*]*\*\*(\d+)\s*kcal\s*\|\s*(\d+)g?\s*P\s*\|\s*(\d+)g?\s*C\s*\|\s*(\d+)g?\s*F\*\*",
            )
            .unwrap(),
            Regex::new(
                r"(?i)[-*]\s*\*\*([^*~]+?)(?:~\s*)?\b(\d{1,2}:\d{2})[^*]*\*\*:?\s*[^—\n]*—?\s*~?(\d+)\s*kcal\s*\|\s*([\d.]+)g?\s*P\s*\|\s*([\d.]+)g?\s*(?:C|KH)\s*\|\s*([\d.]+)g?\s*F",
            )
            .unwrap(),
        ];
    }

    let mut entries: Vec<RawEntry> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(content) {
            let Some(entry) = raw_entry(&caps) else {
                continue;
            };
            if !seen.insert(entry.time.clone()) {
                continue;
            }
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return None;
    }

    // Grams are rounded per meal for storage, but the day totals sum the
    // unrounded values and round once.
    let (mut calories, mut protein, mut carbs, mut fat) = (0f64, 0f64, 0f64, 0f64);
    let mut meals = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        calories += entry.calories;
        protein += entry.protein;
        carbs += entry.carbs;
        fat += entry.fat;
        meals.push(MealEntry::new(
            (i + 1) as u32,
            entry.name.clone(),
            entry.time.clone(),
            entry.calories.round() as u32,
            entry.protein.round() as u32,
            entry.carbs.round() as u32,
            entry.fat.round() as u32,
        ));
    }
    meals.sort_by(|a, b| a.time.cmp(&b.time));

    Some(Extraction {
        meals,
        totals: DailyTotals {
            calories: calories.round() as u32,
            protein: protein.round() as u32,
            carbs: carbs.round() as u32,
            fat: fat.round() as u32,
        },
    })
}

fn raw_entry(caps: &Captures) -> Option<RawEntry> {
    let name = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .unwrap_or("Mahlzeit")
        .to_string();
    let time = normalize_time(caps.get(2)?.as_str());
    let calories: f64 = caps.get(3)?.as_str().parse().ok()?;
    let protein: f64 = caps.get(4)?.as_str().parse().ok()?;
    let carbs: f64 = caps.get(5)?.as_str().parse().ok()?;
    let fat: f64 = caps.get(6)?.as_str().parse().ok()?;
    Some(RawEntry {
        name,
        time,
        calories,
        protein,
        carbs,
        fat,
    })
}
