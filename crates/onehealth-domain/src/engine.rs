use crate::bacterial::{BacterialResult, ICU_AMPLIFICATION_LABEL_DIVISOR, compute_bacterial_risk};
use crate::fingerprint::fingerprint_for_scenario;
use crate::flurona::{FluronaResult, HOSPITAL_BURDEN_LABEL_DIVISOR, compute_flurona_risk};
use crate::label::RiskScore;
use crate::model::{BacterialInputs, FluronaInputs, Scenario};
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use onehealth_types::{Assessment, LevelCounts, OneHealthData, RiskLevel, ids};
use serde_json::{Value as JsonValue, json};

/// Evaluate every enabled model the scenario carries inputs for.
///
/// Inputs are expected to be validated already (see [`Scenario::validate`]).
pub fn evaluate(scenario: &Scenario, cfg: &EffectiveConfig) -> DomainReport {
    let in_scope = Scenario {
        name: scenario.name.clone(),
        flurona: scenario.flurona.filter(|_| cfg.models.flurona),
        bacterial: scenario.bacterial.filter(|_| cfg.models.bacterial),
    };

    let mut assessments: Vec<Assessment> = Vec::new();
    let mut models_evaluated: Vec<String> = Vec::new();

    if let Some(inputs) = &in_scope.flurona {
        let result = compute_flurona_risk(inputs);
        flurona_assessments(inputs, &result, &mut assessments);
        models_evaluated.push(ids::MODEL_FLURONA.to_string());
    }

    if let Some(inputs) = &in_scope.bacterial {
        let result = compute_bacterial_risk(inputs);
        bacterial_assessments(inputs, &result, &mut assessments);
        models_evaluated.push(ids::MODEL_BACTERIAL.to_string());
    }

    let verdict = assessments
        .iter()
        .map(|a| a.level)
        .max()
        .unwrap_or(RiskLevel::Low);

    let data = OneHealthData {
        scenario: scenario.name.clone(),
        preset: cfg.preset.clone(),
        models_evaluated,
        assessments_total: assessments.len() as u32,
        level_counts: LevelCounts::from_assessments(&assessments),
        alert_on: cfg.alert_on,
        alert: cfg.alert_reached(verdict),
        input_fingerprint: fingerprint_for_scenario(&in_scope),
    };

    DomainReport {
        verdict,
        assessments,
        data,
    }
}

fn flurona_assessments(inputs: &FluronaInputs, r: &FluronaResult, out: &mut Vec<Assessment>) {
    out.push(assessment(
        ids::MODEL_FLURONA,
        ids::METRIC_FLU_RISK,
        &r.flu_risk,
        "influenza risk",
        json!({ "uncapped": r.flu_risk_uncapped }),
    ));
    out.push(assessment(
        ids::MODEL_FLURONA,
        ids::METRIC_COVID_RISK,
        &r.covid_risk,
        "COVID-19 risk",
        json!({ "uncapped": r.covid_risk_uncapped }),
    ));
    out.push(assessment(
        ids::MODEL_FLURONA,
        ids::METRIC_COINFECTION_RISK,
        &r.coinfection_risk,
        "coinfection risk index",
        json!({
            "flu_risk_uncapped": r.flu_risk_uncapped,
            "covid_risk_uncapped": r.covid_risk_uncapped,
        }),
    ));
    out.push(assessment(
        ids::MODEL_FLURONA,
        ids::METRIC_HOSPITAL_BURDEN,
        &r.hospital_burden,
        "hospital burden",
        json!({
            "hospital_capacity": inputs.hospital_capacity,
            "label_divisor": HOSPITAL_BURDEN_LABEL_DIVISOR,
        }),
    ));
}

fn bacterial_assessments(
    inputs: &BacterialInputs,
    r: &BacterialResult,
    out: &mut Vec<Assessment>,
) {
    out.push(assessment(
        ids::MODEL_BACTERIAL,
        ids::METRIC_AMR_RISK,
        &r.amr_risk,
        "AMR / bacterial outbreak risk",
        json!({ "uncapped": r.amr_risk_uncapped }),
    ));

    let icu = RiskScore {
        value: f64::from(r.icu_amplification.factor),
        label_value: r.icu_amplification.label_value(),
        level: r.icu_amplification.level,
    };
    out.push(Assessment {
        message: format!(
            "ICU amplification risk is {} ({})",
            icu.level, r.icu_amplification.factor
        ),
        ..assessment(
            ids::MODEL_BACTERIAL,
            ids::METRIC_ICU_AMPLIFICATION,
            &icu,
            "ICU amplification risk",
            json!({
                "antibiotic_usage": inputs.antibiotic_usage,
                "icu_capacity": inputs.icu_capacity,
                "label_divisor": ICU_AMPLIFICATION_LABEL_DIVISOR,
            }),
        )
    });

    out.push(assessment(
        ids::MODEL_BACTERIAL,
        ids::METRIC_ZOONOTIC_RISK,
        &r.zoonotic_risk,
        "zoonotic spillover risk",
        json!({ "animal_contact": inputs.animal_contact }),
    ));
}

fn assessment(
    model_id: &str,
    metric_id: &str,
    score: &RiskScore,
    what: &str,
    data: JsonValue,
) -> Assessment {
    Assessment {
        model_id: model_id.to_string(),
        metric_id: metric_id.to_string(),
        level: score.level,
        value: score.value,
        label_value: score.label_value,
        message: format!("{what} is {} ({:.2})", score.level, score.value),
        help: Some(format!("Run `onehealth explain {metric_id}` for the formula.")),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ModelToggles;
    use crate::test_support::{bacterial_example, config, flurona_example, scenario};

    #[test]
    fn assessments_follow_metric_order() {
        let s = scenario(Some(flurona_example()), Some(bacterial_example()));
        let report = evaluate(&s, &config());

        let metric_ids: Vec<&str> = report
            .assessments
            .iter()
            .map(|a| a.metric_id.as_str())
            .collect();
        assert_eq!(metric_ids, onehealth_types::explain::all_metric_ids());
        assert_eq!(report.data.models_evaluated, vec!["flurona", "bacterial"]);
        assert_eq!(report.data.assessments_total, 7);
    }

    #[test]
    fn verdict_is_highest_level() {
        let s = scenario(Some(flurona_example()), Some(bacterial_example()));
        let report = evaluate(&s, &config());
        assert_eq!(report.verdict, RiskLevel::High);
        assert_eq!(report.data.level_counts.high, 2);
        assert_eq!(report.data.level_counts.moderate, 2);
        assert_eq!(report.data.level_counts.low, 3);
    }

    #[test]
    fn disabled_model_is_skipped() {
        let s = scenario(Some(flurona_example()), Some(bacterial_example()));
        let cfg = EffectiveConfig {
            models: ModelToggles {
                flurona: true,
                bacterial: false,
            },
            ..config()
        };
        let report = evaluate(&s, &cfg);
        assert_eq!(report.data.models_evaluated, vec!["flurona"]);
        assert_eq!(report.verdict, RiskLevel::Moderate);
        assert!(report.assessments.iter().all(|a| a.model_id == "flurona"));
    }

    #[test]
    fn empty_scenario_is_low_without_assessments() {
        let report = evaluate(&scenario(None, None), &config());
        assert_eq!(report.verdict, RiskLevel::Low);
        assert!(report.assessments.is_empty());
        assert!(report.data.models_evaluated.is_empty());
        assert!(!report.data.alert);
    }

    #[test]
    fn alert_set_when_threshold_reached() {
        let s = scenario(None, Some(bacterial_example()));
        let cfg = EffectiveConfig {
            alert_on: Some(RiskLevel::High),
            ..config()
        };
        let report = evaluate(&s, &cfg);
        assert!(report.data.alert);
        assert_eq!(report.data.alert_on, Some(RiskLevel::High));
    }

    #[test]
    fn icu_assessment_reports_integer_factor() {
        let report = evaluate(&scenario(None, Some(bacterial_example())), &config());
        let icu = report
            .assessments
            .iter()
            .find(|a| a.metric_id == ids::METRIC_ICU_AMPLIFICATION)
            .expect("icu assessment");
        assert_eq!(icu.value, 4.0);
        assert_eq!(icu.label_value, 1.0);
        assert_eq!(icu.message, "ICU amplification risk is HIGH (4)");
        assert_eq!(icu.data["icu_capacity"], "overloaded");
    }

    #[test]
    fn hospital_burden_records_halved_label_value() {
        let report = evaluate(&scenario(Some(flurona_example()), None), &config());
        let burden = report
            .assessments
            .iter()
            .find(|a| a.metric_id == ids::METRIC_HOSPITAL_BURDEN)
            .expect("burden assessment");
        assert_eq!(burden.label_value, burden.value / 2.0);
        assert_eq!(burden.level, RiskLevel::Low);
        assert_eq!(burden.data["label_divisor"], 2.0);
    }

    #[test]
    fn fingerprint_covers_only_evaluated_models() {
        let both = scenario(Some(flurona_example()), Some(bacterial_example()));
        let cfg = EffectiveConfig {
            models: ModelToggles {
                flurona: false,
                bacterial: true,
            },
            ..config()
        };
        let only_bacterial = scenario(None, Some(bacterial_example()));
        assert_eq!(
            evaluate(&both, &cfg).data.input_fingerprint,
            evaluate(&only_bacterial, &config()).data.input_fingerprint
        );
    }
}
