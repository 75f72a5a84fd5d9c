//! Explain registry for models and metrics.
//!
//! Maps model IDs and metric IDs to the formula behind them and how the label is chosen.

use crate::ids;

/// Explanation entry for a model or metric.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short name of the model/metric.
    pub title: &'static str,
    /// What the score represents.
    pub description: &'static str,
    /// The weighted formula, in plain text.
    pub formula: &'static str,
    /// Which value is looked up on the LOW/MODERATE/HIGH scale.
    pub labeling: &'static str,
}

const LABEL_SCALE: &str = "LOW below 0.30, MODERATE from 0.30 up to 0.60, HIGH from 0.60.";

/// Look up an explanation by metric_id or model_id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Models
        ids::MODEL_FLURONA => Some(explain_flurona()),
        ids::MODEL_BACTERIAL => Some(explain_bacterial()),

        // Metrics
        ids::METRIC_FLU_RISK => Some(explain_flu_risk()),
        ids::METRIC_COVID_RISK => Some(explain_covid_risk()),
        ids::METRIC_COINFECTION_RISK => Some(explain_coinfection_risk()),
        ids::METRIC_HOSPITAL_BURDEN => Some(explain_hospital_burden()),
        ids::METRIC_AMR_RISK => Some(explain_amr_risk()),
        ids::METRIC_ICU_AMPLIFICATION => Some(explain_icu_amplification()),
        ids::METRIC_ZOONOTIC_RISK => Some(explain_zoonotic_risk()),

        _ => None,
    }
}

/// List all known model IDs.
pub fn all_model_ids() -> &'static [&'static str] {
    &[ids::MODEL_FLURONA, ids::MODEL_BACTERIAL]
}

/// List all known metric IDs, in report order.
pub fn all_metric_ids() -> &'static [&'static str] {
    &[
        ids::METRIC_FLU_RISK,
        ids::METRIC_COVID_RISK,
        ids::METRIC_COINFECTION_RISK,
        ids::METRIC_HOSPITAL_BURDEN,
        ids::METRIC_AMR_RISK,
        ids::METRIC_ICU_AMPLIFICATION,
        ids::METRIC_ZOONOTIC_RISK,
    ]
}

// --- Model-level explanations ---

fn explain_flurona() -> Explanation {
    Explanation {
        title: "Flurona Coinfection Model",
        description: "\
Scores simultaneous influenza and COVID-19 circulation from climate, incidence,
population density, mobility, vaccination coverage and hospital capacity.

Inputs:
- temperature (-10..45 C), humidity (0..100 %)
- influenza incidence (0..1000 per 100k), COVID-19 incidence (0..2000 per 100k)
- population density and mobility (Low / Moderate / High)
- influenza and COVID-19 vaccination coverage (0..100 %)
- hospital capacity (Adequate / Strained / Overwhelmed)

Produces: flurona.flu_risk, flurona.covid_risk, flurona.coinfection_risk,
flurona.hospital_burden",
        formula: "\
Categories weigh 0 / 1 / 2 in the order listed above.
See the individual metrics for their formulas.",
        labeling: LABEL_SCALE,
    }
}

fn explain_bacterial() -> Explanation {
    Explanation {
        title: "Bacterial / AMR Model",
        description: "\
Scores antimicrobial-resistance outbreak risk, ICU amplification and zoonotic
spillover from climate, antibiotic usage, ICU capacity and animal contact.

Inputs:
- temperature (0..45 C), humidity (0..100 %)
- antibiotic usage (Low / Moderate / High)
- ICU capacity (Adequate / Limited / Overloaded)
- animal / farm contact (Low / Moderate / High)

Produces: bacterial.amr_risk, bacterial.icu_amplification, bacterial.zoonotic_risk",
        formula: "\
Categories weigh 0 / 1 / 2 in the order listed above.
See the individual metrics for their formulas.",
        labeling: LABEL_SCALE,
    }
}

// --- Metric-level explanations ---

fn explain_flu_risk() -> Explanation {
    Explanation {
        title: "Influenza Risk",
        description: "\
Weighted influenza transmission score. Rises with incidence, humidity, cold and
crowding; falls with vaccination coverage.",
        formula: "\
0.30 * (flu_incidence / 1000)
+ 0.25 * (1 - flu_vaccination / 100)
+ 0.20 * (humidity / 100)
+ 0.15 * (1 - temperature / 45)
+ 0.10 * population_density

Reported capped at 1.0; the uncapped value feeds the coinfection score.",
        labeling: LABEL_SCALE,
    }
}

fn explain_covid_risk() -> Explanation {
    Explanation {
        title: "COVID-19 Risk",
        description: "\
Weighted COVID-19 transmission score. Rises with incidence, mobility, crowding
and hospital strain; falls with vaccination coverage.",
        formula: "\
0.30 * (covid_incidence / 2000)
+ 0.25 * (1 - covid_vaccination / 100)
+ 0.20 * mobility
+ 0.15 * population_density
+ 0.10 * hospital_capacity

Reported capped at 1.0; the uncapped value feeds the coinfection score.",
        labeling: LABEL_SCALE,
    }
}

fn explain_coinfection_risk() -> Explanation {
    Explanation {
        title: "Coinfection Risk Index",
        description: "\
Combined score for influenza and COVID-19 circulating together. Multiplicative,
with an extra boost proportional to influenza risk.",
        formula: "\
min(1, flu_risk * covid_risk * (1 + 0.3 * flu_risk))

flu_risk and covid_risk enter uncapped.",
        labeling: LABEL_SCALE,
    }
}

fn explain_hospital_burden() -> Explanation {
    Explanation {
        title: "Hospital Burden",
        description: "\
Coinfection risk amplified by hospital strain. Not capped: an overwhelmed
hospital system can push it up to 3.0.",
        formula: "coinfection_risk * (1 + hospital_capacity)",
        labeling: "\
The label is looked up from hospital_burden / 2.
LOW below 0.30, MODERATE from 0.30 up to 0.60, HIGH from 0.60.",
    }
}

fn explain_amr_risk() -> Explanation {
    Explanation {
        title: "AMR / Bacterial Outbreak Risk",
        description: "\
Weighted antimicrobial-resistance outbreak score driven mostly by antibiotic
usage, ICU strain and animal contact, with a smaller climate term.",
        formula: "\
min(1,
    0.30 * antibiotic_usage
  + 0.25 * icu_capacity
  + 0.20 * animal_contact
  + 0.15 * (temperature / 45)
  + 0.10 * (humidity / 100))

The uncapped sum can reach 1.75; the cap is the only bound.",
        labeling: LABEL_SCALE,
    }
}

fn explain_icu_amplification() -> Explanation {
    Explanation {
        title: "ICU Amplification Risk",
        description: "\
Interaction between antibiotic pressure and ICU strain. An integer in
{0, 1, 2, 4}.",
        formula: "antibiotic_usage * icu_capacity",
        labeling: "\
The label is looked up from icu_amplification / 4.
LOW below 0.30, MODERATE from 0.30 up to 0.60, HIGH from 0.60.",
    }
}

fn explain_zoonotic_risk() -> Explanation {
    Explanation {
        title: "Zoonotic Spillover Risk",
        description: "\
Animal-to-human transmission score. Zero whenever animal contact is Low.",
        formula: "min(1, animal_contact * (temperature / 45) * (humidity / 100))",
        labeling: LABEL_SCALE,
    }
}
