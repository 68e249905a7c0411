use serde::{Deserialize, Serialize};

/// One logged meal or snack within a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Sequence number, unique within one day's result set only.
    pub id: u32,
    pub name: String,
    /// `HH:MM`, 24h. Doubles as the dedup and sort key.
    pub time: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    /// Precomputed display string for the macro line on the meal card.
    pub macros: String,
}

impl MealEntry {
    pub fn new(
        id: u32,
        name: String,
        time: String,
        calories: u32,
        protein: u32,
        carbs: u32,
        fat: u32,
    ) -> Self {
        Self {
            id,
            name,
            time,
            calories,
            protein,
            carbs,
            fat,
            macros: format!("{protein}g P • {carbs}g KH • {fat}g F"),
        }
    }
}

/// Aggregate over all meals of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl DailyTotals {
    pub fn add(&mut self, meal: &MealEntry) {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.carbs += meal.carbs;
        self.fat += meal.fat;
    }
}

/// Fixed daily goals the dashboard renders progress against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub weight_target: f64,
    pub current_weight: f64,
}

/// Current and goal body weight for the weight card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    pub current: f64,
    pub target: f64,
}

/// Everything the dashboard needs to render one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    pub date: String,
    pub targets: Targets,
    pub totals: DailyTotals,
    pub meals: Vec<MealEntry>,
    pub weight: WeightSummary,
}

/// Meals and totals pulled out of one source file, before the two sources
/// are reconciled.
#[derive(Debug, PartialEq)]
pub struct Extraction {
    pub meals: Vec<MealEntry>,
    pub totals: DailyTotals,
}
