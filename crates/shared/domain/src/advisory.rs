//! Advisory rules - maps one health record to canned recommendations.
//!
//! Rules are evaluated independently and emitted in a fixed order: heart
//! rate, then step count, then BMI. Input ranges are not validated here; a
//! record with a zero or negative height still goes through the BMI rule.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BMI_OBESE, BMI_OVERWEIGHT, BMI_UNDERWEIGHT, MAX_HEART_RATE, MIN_DAILY_STEPS, MIN_HEART_RATE,
};
use crate::health_record::HealthRecord;

/// One rule outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    LowHeartRate,
    HighHeartRate,
    LowStepCount,
    Overweight,
    Obese,
    Underweight,
}

impl Advisory {
    /// Text stored and shown to the user
    pub fn text(&self) -> &'static str {
        match self {
            Advisory::LowHeartRate => {
                "Your heart rate is lower than the recommended range. \
                 Consider increasing your physical activity to improve your cardiovascular health."
            }
            Advisory::HighHeartRate => {
                "Your heart rate is above the recommended range. \
                 If this is your resting heart rate you should consult your physician."
            }
            Advisory::LowStepCount => {
                "You're not reaching the recommended daily step count. \
                 Try to incorporate more walking or other physical activities into your daily routine."
            }
            Advisory::Overweight => {
                "Your body mass index (BMI) is above the healthy recommended range (18.5 - 25.0). \
                 You should try to incorporate more physical activity into your daily routine."
            }
            Advisory::Obese => {
                "Your body mass index (BMI) is above the healthy recommended range (18.5 - 25.0). \
                 You should consider consulting your physician."
            }
            Advisory::Underweight => {
                "Your body mass index (BMI) is below the healthy recommended range (18.5 - 25.0). \
                 You should consider a change in diet, your physician would be able to help with that."
            }
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Evaluate every rule against `record`.
pub fn evaluate(record: &HealthRecord) -> Vec<Advisory> {
    [
        heart_rate_advisory(record.heart_rate),
        step_advisory(record.steps),
        bmi_advisory(record.bmi()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Texts of [`evaluate`], in rule order.
pub fn evaluate_texts(record: &HealthRecord) -> Vec<String> {
    evaluate(record)
        .into_iter()
        .map(|advisory| advisory.text().to_string())
        .collect()
}

fn heart_rate_advisory(heart_rate: i32) -> Option<Advisory> {
    if heart_rate < MIN_HEART_RATE {
        Some(Advisory::LowHeartRate)
    } else if heart_rate > MAX_HEART_RATE {
        Some(Advisory::HighHeartRate)
    } else {
        None
    }
}

fn step_advisory(steps: i32) -> Option<Advisory> {
    (steps < MIN_DAILY_STEPS).then_some(Advisory::LowStepCount)
}

// NaN fails every comparison and so yields no advisory.
fn bmi_advisory(bmi: f64) -> Option<Advisory> {
    if bmi > BMI_OVERWEIGHT && bmi < BMI_OBESE {
        Some(Advisory::Overweight)
    } else if bmi >= BMI_OBESE {
        Some(Advisory::Obese)
    } else if bmi <= BMI_UNDERWEIGHT {
        Some(Advisory::Underweight)
    } else {
        None
    }
}
