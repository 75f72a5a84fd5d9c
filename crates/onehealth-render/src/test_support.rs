use crate::{
    RenderableAssessment, RenderableData, RenderableLevel, RenderableReport, RenderableValue,
};

pub fn assessment(
    model: &str,
    metric_id: &str,
    name: &str,
    level: RenderableLevel,
    value: RenderableValue,
) -> RenderableAssessment {
    RenderableAssessment {
        model: model.to_string(),
        metric_id: metric_id.to_string(),
        name: name.to_string(),
        level,
        value,
        help: None,
    }
}

pub fn data() -> RenderableData {
    RenderableData {
        scenario: "clinic".to_string(),
        preset: "baseline".to_string(),
        low: 0,
        moderate: 0,
        high: 0,
        alert_on: None,
        alert: false,
        input_fingerprint: "abc123".to_string(),
    }
}

/// The worked example: both models, verdict HIGH.
pub fn full_report() -> RenderableReport {
    use RenderableLevel::*;
    use RenderableValue::*;

    let flurona = "Flurona Coinfection Model";
    let bacterial = "Bacterial / AMR Model";
    RenderableReport {
        verdict: High,
        assessments: vec![
            assessment(flurona, "flurona.flu_risk", "Influenza Risk", Moderate, Score(0.5)),
            assessment(flurona, "flurona.covid_risk", "COVID-19 Risk", Moderate, Score(0.4975)),
            assessment(
                flurona,
                "flurona.coinfection_risk",
                "Coinfection Risk Index",
                Low,
                Score(0.2861),
            ),
            assessment(flurona, "flurona.hospital_burden", "Hospital Burden", Low, Score(0.2861)),
            assessment(
                bacterial,
                "bacterial.amr_risk",
                "AMR / Bacterial Outbreak Risk",
                High,
                Score(1.0),
            ),
            assessment(
                bacterial,
                "bacterial.icu_amplification",
                "ICU Amplification Risk",
                High,
                Count(4),
            ),
            assessment(
                bacterial,
                "bacterial.zoonotic_risk",
                "Zoonotic Spillover Risk",
                Low,
                Score(0.0),
            ),
        ],
        data: RenderableData {
            low: 3,
            moderate: 2,
            high: 2,
            ..data()
        },
    }
}
