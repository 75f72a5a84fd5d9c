#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderableLevel {
    Low,
    Moderate,
    High,
}

impl RenderableLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderableLevel::Low => "LOW",
            RenderableLevel::Moderate => "MODERATE",
            RenderableLevel::High => "HIGH",
        }
    }
}

/// How a metric value is printed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderableValue {
    /// Continuous score, printed with two decimals.
    Score(f64),
    /// Integer factor (ICU amplification), printed as-is.
    Count(u32),
}

impl std::fmt::Display for RenderableValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderableValue::Score(v) => write!(f, "{v:.2}"),
            RenderableValue::Count(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableAssessment {
    /// Heading the assessment is grouped under (the model's display name).
    pub model: String,
    pub metric_id: String,
    pub name: String,
    pub level: RenderableLevel,
    pub value: RenderableValue,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub scenario: String,
    pub preset: String,
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
    pub alert_on: Option<RenderableLevel>,
    pub alert: bool,
    pub input_fingerprint: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub verdict: RenderableLevel,
    pub assessments: Vec<RenderableAssessment>,
    pub data: RenderableData,
}

impl RenderableReport {
    /// Assessments grouped by model, keeping first-seen order.
    pub(crate) fn groups(&self) -> Vec<(&str, Vec<&RenderableAssessment>)> {
        let mut groups: Vec<(&str, Vec<&RenderableAssessment>)> = Vec::new();
        for a in &self.assessments {
            match groups.iter_mut().find(|(model, _)| *model == a.model) {
                Some((_, items)) => items.push(a),
                None => groups.push((a.model.as_str(), vec![a])),
            }
        }
        groups
    }
}
