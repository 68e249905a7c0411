use lazy_static::lazy_static;
use regex::Regex;

use super::dto::{DailyTotals, Extraction, MealEntry};
use super::normalize_time;

/// Extracts meals from the structured nutrition log format: `##` sections
/// headed by a meal label plus optional em-dash clock time, each carrying one
/// machine-written summary line like
/// `**Summe Frühstück: 619 kcal | 25g P | 82g C | 21g F**`.
///
/// Sections without a parseable summary contribute nothing; `None` means the
/// document yielded no meals at all.
pub fn parse_nutrition_log(content: &str) -> Option<Extraction> {
    lazy_static! {
        static ref SECTION_SPLIT: Regex = Regex::new(r"(?m)^##\s+").unwrap();
        static ref HEADER_RE: Regex =
            Regex::new(r"^([^—\n]+)(?:[ \t]*—[ \t]*(\d{1,2}:\d{2}))?").unwrap();
        static ref SUMME_RE: Regex = Regex::new(
            r"(?i)\*\*Summe[^:\n]*:\s*(\d+)\s*kcal\s*\|\s*(\d+)g?\s*P\s*\|\s*(\d+)g?\s*C\s*\|\s*(\d+)g?\s*F\*\*",
        )
        .unwrap();
    }

    let mut meals: Vec<MealEntry> = Vec::new();
    let mut totals = DailyTotals::default();

    for section in SECTION_SPLIT.split(content).skip(1) {
        let Some(header) = HEADER_RE.captures(section) else {
            continue;
        };
        let name = header
            .get(1)
            .map(|m| m.as_str().trim())
            .unwrap_or_default()
            .to_string();
        // Daily-balance and daily-target sections are summaries, not meals.
        if name.is_empty() || name.contains("Tagesbilanz") || name.contains("Tagesziel") {
            continue;
        }
        let time = header
            .get(2)
            .map(|m| normalize_time(m.as_str()))
            .unwrap_or_else(|| "00:00".to_string());

        let Some(sum) = SUMME_RE.captures(section) else {
            continue;
        };
        let calories = sum[1].parse().unwrap_or(0);
        let protein = sum[2].parse().unwrap_or(0);
        let carbs = sum[3].parse().unwrap_or(0);
        let fat = sum[4].parse().unwrap_or(0);

        let meal = MealEntry::new(
            (meals.len() + 1) as u32,
            name,
            time,
            calories,
            protein,
            carbs,
            fat,
        );
        totals.add(&meal);
        meals.push(meal);
    }

    if meals.is_empty() {
        None
    } else {
        Some(Extraction { meals, totals })
    }
}
