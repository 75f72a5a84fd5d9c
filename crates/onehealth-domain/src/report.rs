use onehealth_types::{Assessment, OneHealthData, RiskLevel};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: RiskLevel,
    pub assessments: Vec<Assessment>,
    pub data: OneHealthData,
}
