use std::collections::BTreeMap;

use super::dto::{DailyTotals, Extraction, MealEntry};

/// Merges the structured-log and journal extractions for one day.
///
/// Meals are keyed by their `HH:MM` time string; the structured log inserts
/// first and wins ties, journal meals only fill vacant slots. Totals are
/// accumulated in lockstep with successful inserts, so they always equal the
/// field-wise sum over the returned meal list. Ids are renumbered over the
/// sorted result so they stay unique within the merged set.
pub fn reconcile(log: Option<Extraction>, journal: Option<Extraction>) -> Extraction {
    let mut by_time: BTreeMap<String, MealEntry> = BTreeMap::new();
    let mut totals = DailyTotals::default();

    for source in log.into_iter().chain(journal) {
        for meal in source.meals {
            if by_time.contains_key(&meal.time) {
                continue;
            }
            totals.add(&meal);
            by_time.insert(meal.time.clone(), meal);
        }
    }

    let meals = by_time
        .into_values()
        .enumerate()
        .map(|(i, mut meal)| {
            meal.id = (i + 1) as u32;
            meal
        })
        .collect();

    Extraction { meals, totals }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: u32, name: &str, time: &str, cal: u32, p: u32, c: u32, f: u32) -> MealEntry {
        MealEntry::new(id, name.into(), time.into(), cal, p, c, f)
    }

    fn extraction(meals: Vec<MealEntry>) -> Extraction {
        let mut totals = DailyTotals::default();
        for m in &meals {
            totals.add(m);
        }
        Extraction { meals, totals }
    }

    #[test]
    fn structured_log_wins_time_slot_ties() {
        let log = extraction(vec![meal(1, "Frühstück", "08:35", 84, 3, 0, 7)]);
        let journal = extraction(vec![
            meal(1, "Snack", "08:35", 84, 4, 0, 8),
            meal(2, "Mittagessen", "12:23", 398, 14, 55, 14),
        ]);

        let merged = reconcile(Some(log), Some(journal));
        assert_eq!(merged.meals.len(), 2);
        assert_eq!(merged.meals[0].name, "Frühstück");
        assert_eq!(merged.meals[0].protein, 3);
        assert_eq!(merged.meals[1].name, "Mittagessen");
        assert_eq!(
            merged.totals,
            DailyTotals {
                calories: 482,
                protein: 17,
                carbs: 55,
                fat: 21
            }
        );
    }

    #[test]
    fn journal_only_days_come_back_sorted_with_fresh_ids() {
        let journal = extraction(vec![
            meal(1, "Abendessen", "19:10", 398, 14, 55, 14),
            meal(2, "Snack", "08:35", 84, 4, 0, 8),
            meal(3, "Mittagessen", "12:23", 420, 20, 40, 12),
        ]);

        let merged = reconcile(None, Some(journal));
        let times: Vec<&str> = merged.meals.iter().map(|m| m.time.as_str()).collect();
        assert_eq!(times, ["08:35", "12:23", "19:10"]);
        let ids: Vec<u32> = merged.meals.iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(merged.totals.calories, 902);
    }

    #[test]
    fn no_sources_yield_a_valid_empty_day() {
        let merged = reconcile(None, None);
        assert!(merged.meals.is_empty());
        assert_eq!(merged.totals, DailyTotals::default());
    }

    #[test]
    fn totals_track_surviving_meals_even_for_repeated_slots() {
        // Two timeless sections both default to 00:00; only one survives and
        // only that one may count.
        let log = extraction(vec![
            meal(1, "Frühstück", "00:00", 100, 10, 10, 10),
            meal(2, "Snack", "00:00", 50, 5, 5, 5),
        ]);

        let merged = reconcile(Some(log), None);
        assert_eq!(merged.meals.len(), 1);
        let mut expected = DailyTotals::default();
        for m in &merged.meals {
            expected.add(m);
        }
        assert_eq!(merged.totals, expected);
    }

    #[test]
    fn merged_times_are_unique() {
        let log = extraction(vec![meal(1, "Frühstück", "08:35", 84, 3, 0, 7)]);
        let journal = extraction(vec![
            meal(1, "Snack", "08:35", 84, 4, 0, 8),
            meal(2, "Snack", "10:00", 50, 2, 2, 2),
        ]);

        let merged = reconcile(Some(log), Some(journal));
        let mut times: Vec<&str> = merged.meals.iter().map(|m| m.time.as_str()).collect();
        times.dedup();
        assert_eq!(times.len(), merged.meals.len());
    }
}
