use super::dto::Targets;

/// Supplies the per-user daily goals. Injected so the static values can be
/// swapped for a persisted settings store without touching the pipeline.
pub trait TargetSource: Send + Sync {
    fn targets(&self) -> Targets;
}

/// Hard-coded goals for the single dashboard user.
#[derive(Debug, Clone)]
pub struct StaticTargets {
    targets: Targets,
}

impl Default for StaticTargets {
    fn default() -> Self {
        Self {
            targets: Targets {
                calories: 2000,
                protein: 150,
                carbs: 200,
                fat: 70,
                weight_target: 70.0,
                current_weight: 78.0,
            },
        }
    }
}

impl TargetSource for StaticTargets {
    fn targets(&self) -> Targets {
        self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_targets_are_stable_across_calls() {
        let source = StaticTargets::default();
        assert_eq!(source.targets(), source.targets());
        assert_eq!(source.targets().calories, 2000);
        assert_eq!(source.targets().weight_target, 70.0);
    }
}
