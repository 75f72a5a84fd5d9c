use onehealth_types::RiskLevel;

/// Which models a scenario evaluation runs. A disabled model is skipped even when the scenario
/// carries inputs for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelToggles {
    pub flurona: bool,
    pub bacterial: bool,
}

impl Default for ModelToggles {
    fn default() -> Self {
        Self {
            flurona: true,
            bacterial: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub preset: String,
    pub models: ModelToggles,
    /// Raise an alert when the verdict reaches this level.
    pub alert_on: Option<RiskLevel>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            preset: "baseline".to_string(),
            models: ModelToggles::default(),
            alert_on: None,
        }
    }
}

impl EffectiveConfig {
    pub fn alert_reached(&self, verdict: RiskLevel) -> bool {
        self.alert_on.is_some_and(|threshold| verdict >= threshold)
    }
}
