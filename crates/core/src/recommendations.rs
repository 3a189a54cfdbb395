//! Guidance text for an assessed record.
//!
//! Recommendations depend on the tier and on which risk factors the record reports. They never
//! feed back into scoring.

use serde::{Deserialize, Serialize};

use crate::constants::{BMI_OVERWEIGHT_THRESHOLD, LDL_THRESHOLD};
use crate::{Lifestyle, RiskCategory, RiskInput, SmokingStatus};

/// One step the person is advised to take.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActionItem {
    /// 1 is the most important action.
    pub priority: u8,
    pub title: String,
    pub description: String,
    pub frequency: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recommendations {
    pub general: String,
    pub actions: Vec<ActionItem>,
    pub emergency_advice: String,
}

const FAST_REMINDER: &str = "Know the FAST signs: Face drooping, Arm weakness, Speech difficulty. \
If any appear, note the Time and call 103 or 112 immediately.";

fn action(title: &str, description: &str, frequency: &str) -> ActionItem {
    ActionItem {
        priority: 0,
        title: title.to_owned(),
        description: description.to_owned(),
        frequency: frequency.to_owned(),
    }
}

fn general_message(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => {
            "Your estimated six-month stroke risk is low. Keep up your healthy habits and attend \
             routine check-ups."
        }
        RiskCategory::Moderate => {
            "Your estimated six-month stroke risk is moderate. Several of your risk factors can be \
             improved; discuss them with your doctor."
        }
        RiskCategory::High => {
            "Your estimated six-month stroke risk is high. Please arrange a medical assessment soon \
             and work on the risk factors listed below."
        }
    }
}

fn category_action(category: RiskCategory) -> ActionItem {
    match category {
        RiskCategory::Low => action(
            "Routine check-up",
            "Have your blood pressure, cholesterol and blood sugar checked as part of a routine \
             health check.",
            "Once a year",
        ),
        RiskCategory::Moderate => action(
            "See your GP",
            "Book an appointment with your GP to review your risk factors and agree a prevention \
             plan.",
            "Within 3 months",
        ),
        RiskCategory::High => action(
            "Medical assessment",
            "See a doctor for a full cardiovascular assessment, including blood pressure, ECG and \
             blood tests.",
            "Within 2 weeks",
        ),
    }
}

fn factor_actions(input: &RiskInput) -> Vec<ActionItem> {
    let mut actions = Vec::new();

    if input.atrial_fibrillation {
        actions.push(action(
            "Manage atrial fibrillation",
            "Ask your doctor whether anticoagulant treatment is right for you and have regular \
             ECG monitoring.",
            "As prescribed",
        ));
    }
    if input.high_bp {
        actions.push(action(
            "Control blood pressure",
            "Measure your blood pressure morning and evening, limit salt to 5 g a day and take \
             prescribed medication.",
            "Twice daily",
        ));
    }
    if input.smoking == SmokingStatus::Current {
        actions.push(action(
            "Stop smoking",
            "Stop smoking completely. Your doctor can offer support and nicotine replacement \
             therapy.",
            "Starting now",
        ));
    }
    if input.diabetes {
        actions.push(action(
            "Control blood sugar",
            "Monitor your blood glucose, follow your diet plan and take prescribed medication.",
            "Daily",
        ));
    }
    if input.ldl_cholesterol.is_some_and(|ldl| ldl > LDL_THRESHOLD) {
        actions.push(action(
            "Lower cholesterol",
            "Reduce saturated fat in your diet and ask your doctor about cholesterol-lowering \
             treatment.",
            "Recheck every 6 months",
        ));
    }
    if input.bmi() > BMI_OVERWEIGHT_THRESHOLD {
        actions.push(action(
            "Reach a healthier weight",
            "Aim to lose 5-10% of your current weight through balanced eating and regular \
             activity.",
            "Ongoing",
        ));
    }
    if input.lifestyle != Lifestyle::Active {
        actions.push(action(
            "Move more",
            "Build up to at least 150 minutes of moderate activity a week, such as brisk \
             walking.",
            "At least 5 days a week",
        ));
    }

    actions
}

fn emergency_advice(category: RiskCategory) -> String {
    match category {
        RiskCategory::High => format!(
            "Your risk profile needs prompt medical attention. Do not wait for symptoms. {}",
            FAST_REMINDER
        ),
        RiskCategory::Low | RiskCategory::Moderate => FAST_REMINDER.to_owned(),
    }
}

/// Builds guidance for `input` assessed into `category`.
///
/// The tier-level action always comes first; factor-specific actions follow and priorities are
/// numbered from 1 in that order.
pub fn recommend(category: RiskCategory, input: &RiskInput) -> Recommendations {
    let mut actions = vec![category_action(category)];
    actions.extend(factor_actions(input));

    for (index, item) in actions.iter_mut().enumerate() {
        item.priority = u8::try_from(index + 1).unwrap_or(u8::MAX);
    }

    Recommendations {
        general: general_message(category).to_owned(),
        actions,
        emergency_advice: emergency_advice(category),
    }
}
