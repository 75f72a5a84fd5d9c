use crate::model::{BacterialInputs, FluronaInputs, Scenario};
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint over the inputs of a scenario.
///
/// Identity fields, in order:
/// - `flurona` followed by its inputs, if present
/// - `bacterial` followed by its inputs, if present
///
/// The scenario name is not part of the identity.
pub fn fingerprint_for_scenario(scenario: &Scenario) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(f) = &scenario.flurona {
        parts.push("flurona".to_string());
        push_flurona(&mut parts, f);
    }
    if let Some(b) = &scenario.bacterial {
        parts.push("bacterial".to_string());
        push_bacterial(&mut parts, b);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

fn push_flurona(parts: &mut Vec<String>, f: &FluronaInputs) {
    parts.push(format!("temperature_c={}", f.temperature_c));
    parts.push(format!("humidity_pct={}", f.humidity_pct));
    parts.push(format!("flu_incidence={}", f.flu_incidence));
    parts.push(format!("covid_incidence={}", f.covid_incidence));
    parts.push(format!("population_density={}", f.population_density));
    parts.push(format!("mobility={}", f.mobility));
    parts.push(format!("flu_vaccination_pct={}", f.flu_vaccination_pct));
    parts.push(format!("covid_vaccination_pct={}", f.covid_vaccination_pct));
    parts.push(format!("hospital_capacity={}", f.hospital_capacity));
}

fn push_bacterial(parts: &mut Vec<String>, b: &BacterialInputs) {
    parts.push(format!("temperature_c={}", b.temperature_c));
    parts.push(format!("humidity_pct={}", b.humidity_pct));
    parts.push(format!("antibiotic_usage={}", b.antibiotic_usage));
    parts.push(format!("icu_capacity={}", b.icu_capacity));
    parts.push(format!("animal_contact={}", b.animal_contact));
}
