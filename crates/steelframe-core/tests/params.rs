use steelframe_core::params::{BuildInput, FrameParams, RoofMaterial, RoofType};

#[test]
fn partial_document_takes_defaults() {
    let input: BuildInput = serde_json::from_str(
        r#"{ "frame": { "length": 20.0, "roof_type": "Gable" }, "foundation": { "show": false } }"#,
    )
    .expect("parse");

    assert_eq!(20.0, input.frame.length);
    assert_eq!(RoofType::Gable, input.frame.roof_type);
    assert_eq!(FrameParams::default().width, input.frame.width);
    assert!(!input.foundation.show);
    assert_eq!(2, input.foundation.rebar_rows);
    assert!(!input.welding.show);
}

#[test]
fn unknown_variant_names_are_preserved() {
    let frame: FrameParams =
        serde_json::from_str(r#"{ "roof_type": "dome", "roof_material": "glass" }"#).expect("parse");
    assert_eq!(RoofType::Other("dome".to_string()), frame.roof_type);
    assert_eq!(RoofMaterial::Other("glass".to_string()), frame.roof_material);

    let json = serde_json::to_value(&frame).expect("serialize");
    assert_eq!("dome", json["roof_type"]);
    assert_eq!("glass", json["roof_material"]);
}

#[test]
fn stations_are_evenly_spaced_and_end_exactly() {
    let frame = FrameParams {
        length: 14.0,
        width: 10.0,
        num_columns: 5,
        truss_count: 3,
        ..FrameParams::default()
    };
    assert_eq!(vec![0.0, 3.5, 7.0, 10.5, 14.0], frame.column_stations());
    assert_eq!(vec![0.0, 5.0, 10.0], frame.truss_rows());
}
