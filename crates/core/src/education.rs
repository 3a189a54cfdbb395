//! Static educational content: stroke warning signs, emergency contacts and the modifiable risk
//! factor guide.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{AssessmentError, AssessmentResult};

/// Which group of stroke symptoms to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SymptomType {
    Typical,
    Atypical,
}

impl SymptomType {
    pub fn as_str(self) -> &'static str {
        match self {
            SymptomType::Typical => "typical",
            SymptomType::Atypical => "atypical",
        }
    }
}

impl fmt::Display for SymptomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomType {
    type Err = AssessmentError;

    fn from_str(s: &str) -> AssessmentResult<Self> {
        match s {
            "typical" => Ok(SymptomType::Typical),
            "atypical" => Ok(SymptomType::Atypical),
            _ => Err(AssessmentError::UnknownVariant {
                kind: "symptom type",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EmergencyLevel {
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SymptomItem {
    pub code: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub emergency_level: EmergencyLevel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EducationalContent {
    pub typical_symptoms: Vec<SymptomItem>,
    pub atypical_symptoms: Vec<SymptomItem>,
    pub emergency_contacts: Vec<EmergencyContact>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskFactorInfo {
    pub name: String,
    pub description: String,
    pub impact: String,
    pub control_tips: Vec<String>,
}

fn symptom(
    code: &str,
    title: &str,
    description: &str,
    icon: &str,
    emergency_level: EmergencyLevel,
) -> SymptomItem {
    SymptomItem {
        code: code.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
        emergency_level,
    }
}

fn typical_symptoms() -> Vec<SymptomItem> {
    vec![
        symptom(
            "FAST_F",
            "Face",
            "Facial asymmetry, a drooping corner of the mouth, unable to smile evenly",
            "😐",
            EmergencyLevel::High,
        ),
        symptom(
            "FAST_A",
            "Arms",
            "Weakness or numbness in one arm, unable to raise both arms at the same time",
            "💪",
            EmergencyLevel::High,
        ),
        symptom(
            "FAST_S",
            "Speech",
            "Slurred or confused speech, unable to repeat a simple phrase",
            "🗣️",
            EmergencyLevel::High,
        ),
        symptom(
            "FAST_T",
            "Time",
            "Note when the symptoms started and call emergency services at once",
            "⏱️",
            EmergencyLevel::Critical,
        ),
    ]
}

fn atypical_symptoms() -> Vec<SymptomItem> {
    vec![
        symptom(
            "ATYP_1",
            "Hiccups with nausea",
            "Persistent hiccups together with nausea, more common in women",
            "🤢",
            EmergencyLevel::Medium,
        ),
        symptom(
            "ATYP_2",
            "Sudden aggression or apathy",
            "An abrupt change in behaviour with no obvious cause",
            "😠",
            EmergencyLevel::Medium,
        ),
        symptom(
            "ATYP_3",
            "Sudden loss of vision",
            "Blurred, double or lost vision in one or both eyes",
            "👁️",
            EmergencyLevel::High,
        ),
        symptom(
            "ATYP_4",
            "Sudden severe headache",
            "An unusually intense headache with no known cause",
            "🤕",
            EmergencyLevel::High,
        ),
    ]
}

fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            name: "Ambulance".into(),
            number: "103".into(),
            description: "Single ambulance number".into(),
        },
        EmergencyContact {
            name: "Emergency services".into(),
            number: "112".into(),
            description: "Single number for all emergency services".into(),
        },
    ]
}

/// Educational content, optionally restricted to one symptom group.
///
/// Filtering empties the other symptom list; emergency contacts are always included.
pub fn educational_content(filter: Option<SymptomType>) -> EducationalContent {
    let (typical, atypical) = match filter {
        None => (typical_symptoms(), atypical_symptoms()),
        Some(SymptomType::Typical) => (typical_symptoms(), Vec::new()),
        Some(SymptomType::Atypical) => (Vec::new(), atypical_symptoms()),
    };

    EducationalContent {
        typical_symptoms: typical,
        atypical_symptoms: atypical,
        emergency_contacts: emergency_contacts(),
    }
}

fn factor_info(name: &str, description: &str, impact: &str, tips: &[&str]) -> RiskFactorInfo {
    RiskFactorInfo {
        name: name.to_owned(),
        description: description.to_owned(),
        impact: impact.to_owned(),
        control_tips: tips.iter().map(|tip| (*tip).to_owned()).collect(),
    }
}

/// Guide to the modifiable stroke risk factors.
pub fn risk_factors() -> Vec<RiskFactorInfo> {
    vec![
        factor_info(
            "Blood pressure",
            "Blood pressure above 130/85 mmHg",
            "High",
            &[
                "Measure your blood pressure morning and evening",
                "Limit salt to 5 g a day",
                "Stay physically active",
            ],
        ),
        factor_info(
            "Smoking",
            "Any amount of cigarettes",
            "Very high",
            &[
                "Stop smoking now",
                "Ask your doctor for help",
                "Use nicotine replacement therapy",
            ],
        ),
        factor_info(
            "Diabetes",
            "Fasting blood glucose above 7 mmol/L",
            "High",
            &[
                "Monitor your blood sugar",
                "Follow your diet plan",
                "Take prescribed medication",
            ],
        ),
        factor_info(
            "Obesity",
            "BMI above 30 kg/m²",
            "Medium",
            &[
                "Lose 5-10% of your current weight",
                "Increase physical activity",
                "Eat a balanced diet",
            ],
        ),
        factor_info(
            "Atrial fibrillation",
            "Irregular heartbeat",
            "Very high",
            &[
                "Have regular ECG checks",
                "Take anticoagulants as prescribed",
                "Avoid alcohol and caffeine",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_content_includes_both_groups() {
        let content = educational_content(None);
        assert_eq!(content.typical_symptoms.len(), 4);
        assert_eq!(content.atypical_symptoms.len(), 4);
        assert_eq!(content.emergency_contacts.len(), 2);
    }

    #[test]
    fn test_typical_filter_empties_atypical_list() {
        let content = educational_content(Some(SymptomType::Typical));
        assert!(!content.typical_symptoms.is_empty());
        assert!(content.atypical_symptoms.is_empty());
        assert!(!content.emergency_contacts.is_empty());
    }

    #[test]
    fn test_atypical_filter_empties_typical_list() {
        let content = educational_content(Some(SymptomType::Atypical));
        assert!(content.typical_symptoms.is_empty());
        assert!(content.atypical_symptoms.iter().all(|s| s.code.starts_with("ATYP_")));
    }

    #[test]
    fn test_emergency_numbers() {
        let numbers: Vec<_> = educational_content(None)
            .emergency_contacts
            .into_iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(numbers, vec!["103", "112"]);
    }

    #[test]
    fn test_symptom_type_parses() {
        assert_eq!("typical".parse::<SymptomType>().unwrap(), SymptomType::Typical);
        assert!("other".parse::<SymptomType>().is_err());
    }

    #[test]
    fn test_risk_factor_guide() {
        let factors = risk_factors();
        assert_eq!(factors.len(), 5);
        assert!(factors.iter().all(|f| f.control_tips.len() == 3));
    }

    #[test]
    fn test_emergency_level_serialises_lowercase() {
        let json = serde_json::to_string(&EmergencyLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
