use super::types::*;
use crate::error::ValidationErrors;
use tracing::debug;

/// Inclusive numeric bounds for one form field.
struct NumberRule {
    path: &'static str,
    required: &'static str,
    name: &'static str,
    min: f64,
    max: f64,
    unit: &'static str,
}

const AGE: NumberRule = NumberRule {
    path: "age",
    required: "Age is required",
    name: "Age",
    min: 0.0,
    max: 120.0,
    unit: "",
};

const GLUCOSE: NumberRule = NumberRule {
    path: "avg_glucose_level",
    required: "Average glucose level is required",
    name: "Glucose level",
    min: 50.0,
    max: 400.0,
    unit: " mg/dL",
};

const BMI: NumberRule = NumberRule {
    path: "bmi",
    required: "BMI is required",
    name: "BMI",
    min: 10.0,
    max: 60.0,
    unit: "",
};

const THRESHOLD: NumberRule = NumberRule {
    path: "threshold",
    required: "",
    name: "Threshold",
    min: 0.0,
    max: 1.0,
    unit: "",
};

impl NumberRule {
    fn check(&self, value: f64, errors: &mut ValidationErrors) -> Option<f64> {
        if value.is_nan() {
            errors.add(self.path, format!("{} must be a number", self.name));
            None
        } else if value < self.min {
            errors.add(
                self.path,
                format!("{} must be at least {}{}", self.name, self.min, self.unit),
            );
            None
        } else if value > self.max {
            errors.add(
                self.path,
                format!("{} must be at most {}{}", self.name, self.max, self.unit),
            );
            None
        } else {
            Some(value)
        }
    }

    fn check_value(&self, value: &FieldValue, errors: &mut ValidationErrors) -> Option<f64> {
        match value.as_number() {
            Some(n) => self.check(n, errors),
            None => {
                errors.add(self.path, format!("{} must be a number", self.name));
                None
            }
        }
    }

    fn required(&self, value: Option<&FieldValue>, errors: &mut ValidationErrors) -> Option<f64> {
        match value {
            Some(v) => self.check_value(v, errors),
            None => {
                errors.add(self.path, self.required);
                None
            }
        }
    }

    fn optional(
        &self,
        value: Option<&FieldValue>,
        errors: &mut ValidationErrors,
    ) -> Option<Option<f64>> {
        match value {
            Some(v) => self.check_value(v, errors).map(Some),
            None => Some(None),
        }
    }
}

fn required_choice<T: Choice>(
    path: &'static str,
    name: &str,
    missing: &'static str,
    value: Option<&FieldValue>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let Some(raw) = value else {
        errors.add(path, missing);
        return None;
    };
    let parsed = raw.as_text().and_then(T::from_wire);
    if parsed.is_none() {
        errors.add(
            path,
            format!("{} must be one of {}", name, T::wire_values().join(", ")),
        );
    }
    parsed
}

fn required_flag(
    path: &'static str,
    name: &str,
    missing: &'static str,
    value: Option<&FieldValue>,
    errors: &mut ValidationErrors,
) -> Option<Flag> {
    let Some(raw) = value else {
        errors.add(path, missing);
        return None;
    };
    let parsed = match raw.as_number() {
        Some(n) if n == 0.0 => Some(Flag::No),
        Some(n) if n == 1.0 => Some(Flag::Yes),
        _ => None,
    };
    if parsed.is_none() {
        errors.add(path, format!("{name} must be 0 or 1"));
    }
    parsed
}

/// Values the form uses to mean "no smoking status given".
fn is_unknown_smoking(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("unknown")
}

fn optional_smoking(
    value: Option<&FieldValue>,
    errors: &mut ValidationErrors,
) -> Option<Option<SmokingStatus>> {
    match value {
        None => Some(None),
        Some(FieldValue::Text(raw)) if is_unknown_smoking(raw) => Some(None),
        Some(raw) => match raw.as_text().and_then(SmokingStatus::from_wire) {
            Some(status) => Some(Some(status)),
            None => {
                errors.add(
                    "smoking_status",
                    format!(
                        "Smoking status must be one of {}",
                        SmokingStatus::wire_values().join(", ")
                    ),
                );
                None
            }
        },
    }
}

/// Checks every field of `input` and either builds a [`PredictionRequest`] or
/// reports each offending field by its wire path. Defaults are not applied
/// here; see [`super::apply_defaults`].
pub fn validate(input: &FormInput) -> Result<PredictionRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let gender = required_choice::<Gender>(
        "gender",
        "Gender",
        "Please select a gender",
        input.gender.as_ref(),
        &mut errors,
    );
    let age = AGE.required(input.age.as_ref(), &mut errors);
    let hypertension = required_flag(
        "hypertension",
        "Hypertension",
        "Please select hypertension status",
        input.hypertension.as_ref(),
        &mut errors,
    );
    let heart_disease = required_flag(
        "heart_disease",
        "Heart disease",
        "Please select heart disease status",
        input.heart_disease.as_ref(),
        &mut errors,
    );
    let ever_married = required_choice::<EverMarried>(
        "ever_married",
        "Marital status",
        "Please select marital status",
        input.ever_married.as_ref(),
        &mut errors,
    );
    let work_type = required_choice::<WorkType>(
        "work_type",
        "Work type",
        "Please select work type",
        input.work_type.as_ref(),
        &mut errors,
    );
    let residence_type = required_choice::<ResidenceType>(
        "Residence_type",
        "Residence type",
        "Please select residence type",
        input.residence_type.as_ref(),
        &mut errors,
    );
    let avg_glucose_level = GLUCOSE.required(input.avg_glucose_level.as_ref(), &mut errors);
    let bmi = BMI.required(input.bmi.as_ref(), &mut errors);
    let smoking_status = optional_smoking(input.smoking_status.as_ref(), &mut errors);
    let threshold = THRESHOLD.optional(input.threshold.as_ref(), &mut errors);

    match (
        gender,
        age,
        hypertension,
        heart_disease,
        ever_married,
        work_type,
        residence_type,
        avg_glucose_level,
        bmi,
        smoking_status,
        threshold,
    ) {
        (
            Some(gender),
            Some(age),
            Some(hypertension),
            Some(heart_disease),
            Some(ever_married),
            Some(work_type),
            Some(residence_type),
            Some(avg_glucose_level),
            Some(bmi),
            Some(smoking_status),
            Some(threshold),
        ) if errors.is_empty() => Ok(PredictionRequest {
            gender,
            age,
            hypertension,
            heart_disease,
            ever_married,
            work_type,
            residence_type,
            avg_glucose_level,
            bmi,
            smoking_status,
            threshold,
        }),
        _ => {
            debug!("Form rejected on fields: {:?}", errors.paths());
            Err(errors)
        }
    }
}
