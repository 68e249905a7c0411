use tracing::debug;

use super::dto::{NutritionData, WeightSummary};
use super::{journal, logfile, reconcile};
use crate::state::AppState;

/// Builds the dashboard payload for one day: read both sources, run both
/// extractors, reconcile, attach the fixed targets. Absence of either file
/// is a normal empty contribution; only real I/O failures propagate.
pub async fn nutrition_for_date(state: &AppState, date: &str) -> anyhow::Result<NutritionData> {
    let log_text = state.store.nutrition_log(date).await?;
    let journal_text = state.store.journal(date).await?;

    let from_log = log_text.as_deref().and_then(logfile::parse_nutrition_log);
    let from_journal = journal_text.as_deref().and_then(journal::parse_journal);
    let merged = reconcile::reconcile(from_log, from_journal);
    debug!(%date, meals = merged.meals.len(), "assembled nutrition data");

    let targets = state.targets.targets();
    Ok(NutritionData {
        date: date.to_string(),
        weight: WeightSummary {
            current: targets.current_weight,
            target: targets.weight_target,
        },
        targets,
        totals: merged.totals,
        meals: merged.meals,
    })
}
