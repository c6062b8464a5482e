use pretty_assertions::assert_eq;
use rstest::rstest;
use stroke_risk::schema::{FormInput, Gender, WorkType, validate};

mod common;
use common::sample_form;

const SAMPLE_FORM_YAML: &str = r#"
gender: Female
age: 49
hypertension: 0
heart_disease: 0
ever_married: "Yes"
work_type: Self-employed
Residence_type: Rural
avg_glucose_level: 171.23
bmi: 34.4
smoking_status: smokes
threshold: 0.4
"#;

#[test]
fn test_yaml_form_validates() {
    let form: FormInput = serde_yaml::from_str(SAMPLE_FORM_YAML).unwrap();
    let request = validate(&form).unwrap();

    assert_eq!(request.gender, Gender::Female);
    assert_eq!(request.work_type, WorkType::SelfEmployed);
    assert_eq!(request.threshold, Some(0.4));
}

#[test]
fn test_json_form_with_null_smoking_status() {
    let form: FormInput = serde_json::from_str(
        r#"{"gender":"Other","age":5,"hypertension":0,"heart_disease":0,
            "ever_married":"No","work_type":"children","residence_type":"Urban",
            "avg_glucose_level":95.12,"bmi":18.0,"smoking_status":null}"#,
    )
    .unwrap();

    let request = validate(&form).unwrap();
    assert_eq!(request.smoking_status, None);
    assert_eq!(request.smoking_label(), "Unknown");
}

#[test]
fn test_form_file_round_trip_through_tempfile() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("form.yaml");
    std::fs::write(&file, serde_yaml::to_string(&sample_form()).unwrap()).unwrap();

    let loaded: FormInput = serde_yaml::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(loaded, sample_form());
}

#[rstest]
#[case("gender")]
#[case("age")]
#[case("hypertension")]
#[case("heart_disease")]
#[case("ever_married")]
#[case("work_type")]
#[case("Residence_type")]
#[case("avg_glucose_level")]
#[case("bmi")]
fn test_missing_single_field_is_named(#[case] field: &str) {
    let mut form = sample_form();
    match field {
        "gender" => form.gender = None,
        "age" => form.age = None,
        "hypertension" => form.hypertension = None,
        "heart_disease" => form.heart_disease = None,
        "ever_married" => form.ever_married = None,
        "work_type" => form.work_type = None,
        "Residence_type" => form.residence_type = None,
        "avg_glucose_level" => form.avg_glucose_level = None,
        "bmi" => form.bmi = None,
        other => panic!("unexpected field {other}"),
    }

    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.paths(), vec![field]);
}

#[test]
fn test_wrongly_typed_yaml_fields_each_get_a_message() {
    let form: FormInput = serde_yaml::from_str(
        r#"
gender: Male
age: "sixty"
hypertension: "1"
heart_disease: true
ever_married: "No"
work_type: Private
Residence_type: Urban
avg_glucose_level: 90
bmi: 24.1
"#,
    )
    .unwrap();

    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.paths(), vec!["age", "heart_disease", "hypertension"]);
    assert_eq!(errors.get("age"), Some("Age must be a number"));
    assert_eq!(errors.get("hypertension"), Some("Hypertension must be 0 or 1"));
}

#[test]
fn test_quoted_number_in_json_is_not_a_number() {
    let mut form: FormInput = serde_json::from_str(r#"{"age": "67"}"#).unwrap();
    form = sample_form().merge(form);

    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.paths(), vec!["age"]);
    assert_eq!(errors.get("age"), Some("Age must be a number"));
}
