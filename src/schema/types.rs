use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of form options with a wire value and a display label.
pub trait Choice: Sized + Copy + 'static {
    /// Options in the order the form presents them.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    fn wire_values() -> Vec<&'static str> {
        Self::ALL.iter().map(Choice::as_str).collect()
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| {
                    format!(
                        "'{}' is not one of {}",
                        s,
                        Self::wire_values().join(", ")
                    )
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    pub enum Gender {
        Male => ("Male", "Male"),
        Female => ("Female", "Female"),
        Other => ("Other", "Other"),
    }
}

choice_enum! {
    pub enum EverMarried {
        Yes => ("Yes", "Married"),
        No => ("No", "Not Married"),
    }
}

choice_enum! {
    pub enum WorkType {
        Private => ("Private", "Private Sector"),
        SelfEmployed => ("Self-employed", "Self-employed"),
        GovtJob => ("Govt_job", "Government Job"),
        Children => ("children", "Children/Student"),
        NeverWorked => ("Never_worked", "Never Worked"),
    }
}

choice_enum! {
    pub enum ResidenceType {
        Urban => ("Urban", "Urban"),
        Rural => ("Rural", "Rural"),
    }
}

choice_enum! {
    /// Absence of a smoking status means "Unknown".
    pub enum SmokingStatus {
        NeverSmoked => ("never smoked", "Never Smoked"),
        FormerlySmoked => ("formerly smoked", "Former Smoker"),
        Smokes => ("smokes", "Current Smoker"),
    }
}

/// Label shown for an absent smoking status.
pub const UNKNOWN_SMOKING_LABEL: &str = "Unknown";

/// Yes/no condition transmitted as the integer 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Flag {
    No,
    Yes,
}

impl Flag {
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::No),
            1 => Some(Self::Yes),
            _ => None,
        }
    }
}

impl Choice for Flag {
    const ALL: &'static [Self] = &[Self::No, Self::Yes];

    fn as_str(&self) -> &'static str {
        match self {
            Self::No => "0",
            Self::Yes => "1",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }
}

impl TryFrom<u8> for Flag {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_int(i64::from(value)).ok_or_else(|| format!("expected 0 or 1, got {value}"))
    }
}

impl From<Flag> for u8 {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::No => 0,
            Flag::Yes => 1,
        }
    }
}

/// A raw form value as it arrived, before any type check. Wrongly typed
/// values are kept so validation can attribute them to their field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unvalidated form contents. Any field may be missing, wrongly typed or out
/// of range; `schema::validate` decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub gender: Option<FieldValue>,
    #[serde(default)]
    pub age: Option<FieldValue>,
    #[serde(default)]
    pub hypertension: Option<FieldValue>,
    #[serde(default)]
    pub heart_disease: Option<FieldValue>,
    #[serde(default)]
    pub ever_married: Option<FieldValue>,
    #[serde(default)]
    pub work_type: Option<FieldValue>,
    #[serde(default, rename = "Residence_type", alias = "residence_type")]
    pub residence_type: Option<FieldValue>,
    #[serde(default)]
    pub avg_glucose_level: Option<FieldValue>,
    #[serde(default)]
    pub bmi: Option<FieldValue>,
    #[serde(default)]
    pub smoking_status: Option<FieldValue>,
    #[serde(default)]
    pub threshold: Option<FieldValue>,
}

impl FormInput {
    /// Overlays every field that is set in `other` onto `self`.
    pub fn merge(self, other: FormInput) -> Self {
        Self {
            gender: other.gender.or(self.gender),
            age: other.age.or(self.age),
            hypertension: other.hypertension.or(self.hypertension),
            heart_disease: other.heart_disease.or(self.heart_disease),
            ever_married: other.ever_married.or(self.ever_married),
            work_type: other.work_type.or(self.work_type),
            residence_type: other.residence_type.or(self.residence_type),
            avg_glucose_level: other.avg_glucose_level.or(self.avg_glucose_level),
            bmi: other.bmi.or(self.bmi),
            smoking_status: other.smoking_status.or(self.smoking_status),
            threshold: other.threshold.or(self.threshold),
        }
    }
}

/// A request that passed validation, in the exact wire shape the prediction
/// service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub gender: Gender,
    pub age: f64,
    pub hypertension: Flag,
    pub heart_disease: Flag,
    pub ever_married: EverMarried,
    pub work_type: WorkType,
    #[serde(rename = "Residence_type")]
    pub residence_type: ResidenceType,
    pub avg_glucose_level: f64,
    pub bmi: f64,
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl PredictionRequest {
    pub fn smoking_label(&self) -> &'static str {
        self.smoking_status
            .map(|s| s.label())
            .unwrap_or(UNKNOWN_SMOKING_LABEL)
    }
}

impl From<&PredictionRequest> for FormInput {
    fn from(request: &PredictionRequest) -> Self {
        Self {
            gender: Some(request.gender.as_str().into()),
            age: Some(request.age.into()),
            hypertension: Some(i64::from(u8::from(request.hypertension)).into()),
            heart_disease: Some(i64::from(u8::from(request.heart_disease)).into()),
            ever_married: Some(request.ever_married.as_str().into()),
            work_type: Some(request.work_type.as_str().into()),
            residence_type: Some(request.residence_type.as_str().into()),
            avg_glucose_level: Some(request.avg_glucose_level.into()),
            bmi: Some(request.bmi.into()),
            smoking_status: request.smoking_status.map(|s| s.as_str().into()),
            threshold: request.threshold.map(FieldValue::from),
        }
    }
}

/// One selectable field of the form and its options as (wire value, label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    pub field: &'static str,
    pub options: Vec<(&'static str, &'static str)>,
}

fn options_of<T: Choice>(field: &'static str) -> FieldOptions {
    FieldOptions {
        field,
        options: T::ALL.iter().map(|c| (c.as_str(), c.label())).collect(),
    }
}

/// Every dropdown-style field in form order.
pub fn field_options() -> Vec<FieldOptions> {
    let mut smoking = options_of::<SmokingStatus>("smoking_status");
    smoking.options.push(("null", UNKNOWN_SMOKING_LABEL));

    vec![
        options_of::<Gender>("gender"),
        options_of::<EverMarried>("ever_married"),
        options_of::<ResidenceType>("Residence_type"),
        options_of::<WorkType>("work_type"),
        options_of::<Flag>("hypertension"),
        options_of::<Flag>("heart_disease"),
        smoking,
    ]
}
