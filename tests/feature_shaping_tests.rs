use modelfront::predict::{EmbarkPort, Score, Sex, SurvivalRequest, iris, survival};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn passenger(sex: Sex, sibsp: u32, parch: u32, embarked: Option<EmbarkPort>) -> SurvivalRequest {
    SurvivalRequest {
        embarked,
        pclass: 2,
        sex,
        age: 30.0,
        sibsp,
        parch,
        fare: 12.0,
    }
}

#[rstest]
#[case(Sex::Male, 0.0)]
#[case(Sex::Female, 1.0)]
fn sex_indicator_tracks_sex(#[case] sex: Sex, #[case] expected: f64) {
    let features = survival::shape_features(&passenger(sex, 0, 0, None)).unwrap();

    assert_eq!(features.len(), 8);
    assert_eq!(features[1], expected);
}

#[rstest]
#[case(0, 0, 1.0, 1.0)]
#[case(1, 0, 2.0, 0.0)]
#[case(0, 2, 3.0, 0.0)]
#[case(3, 4, 8.0, 0.0)]
fn family_size_and_is_alone(
    #[case] sibsp: u32,
    #[case] parch: u32,
    #[case] family_size: f64,
    #[case] is_alone: f64,
) {
    let features = survival::shape_features(&passenger(Sex::Male, sibsp, parch, None)).unwrap();

    assert_eq!(features[6], family_size);
    assert_eq!(features[7], is_alone);
}

#[rstest]
#[case(None, 0.0, 1.0)]
#[case(Some(EmbarkPort::Southampton), 0.0, 1.0)]
#[case(Some(EmbarkPort::Queenstown), 1.0, 0.0)]
#[case(Some(EmbarkPort::Cherbourg), 0.0, 0.0)]
fn embarkation_one_hot(
    #[case] embarked: Option<EmbarkPort>,
    #[case] embarked_q: f64,
    #[case] embarked_s: f64,
) {
    let features = survival::shape_features(&passenger(Sex::Female, 1, 1, embarked)).unwrap();

    assert_eq!(features[4], embarked_q);
    assert_eq!(features[5], embarked_s);
}

#[rstest]
#[case(0)]
#[case(4)]
fn invalid_passenger_class_is_rejected(#[case] pclass: u8) {
    let mut request = passenger(Sex::Male, 0, 0, None);
    request.pclass = pclass;

    assert!(survival::shape_features(&request).is_err());
}

#[test]
fn iris_measurements_keep_training_order() {
    let features = iris::shape_features(&iris::IrisRequest {
        sepal_length: 6.3,
        sepal_width: 2.9,
        petal_length: 5.6,
        petal_width: 1.8,
    });

    assert_eq!(features, [6.3, 2.9, 5.6, 1.8]);
}

#[test]
fn score_serializes_with_provenance_tag() {
    let model = serde_json::to_value(Score::Model(0.82)).unwrap();
    let placeholder = serde_json::to_value(Score::Placeholder(1.0)).unwrap();

    assert_eq!(model, serde_json::json!({ "source": "model", "value": 0.82 }));
    assert_eq!(
        placeholder,
        serde_json::json!({ "source": "placeholder", "value": 1.0 })
    );
}

#[test]
fn score_accessors_ignore_provenance() {
    assert_eq!(Score::Model(0.4).value(), 0.4);
    assert_eq!(Score::Placeholder(0.25).value(), 0.25);
    assert!(Score::Placeholder(0.25).is_placeholder());
    assert!(!Score::Model(0.4).is_placeholder());
}
