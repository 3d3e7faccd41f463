use steelframe_core::error::FrameError;
use steelframe_core::params::{BuildInput, FoundationParams, FrameParams};
use steelframe_core::validate::{
    validate_arch_height, validate_foundation, validate_frame, validate_input,
};

fn field_of(err: FrameError) -> &'static str {
    match err {
        FrameError::InvalidParameter { field, .. } => field,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn defaults_are_valid() {
    validate_input(&BuildInput::default(), 0.04).expect("defaults validate");
}

#[test]
fn rejects_too_few_columns_and_trusses() {
    let frame = FrameParams {
        num_columns: 1,
        ..FrameParams::default()
    };
    assert_eq!("num_columns", field_of(validate_frame(&frame).unwrap_err()));

    let frame = FrameParams {
        truss_count: 1,
        ..FrameParams::default()
    };
    assert_eq!("truss_count", field_of(validate_frame(&frame).unwrap_err()));
}

#[test]
fn rejects_non_positive_dimensions_and_spacing() {
    for (frame, field) in [
        (FrameParams { length: 0.0, ..FrameParams::default() }, "length"),
        (FrameParams { height: -1.0, ..FrameParams::default() }, "height"),
        (FrameParams { width: f64::NAN, ..FrameParams::default() }, "width"),
        (FrameParams { purlin_spacing: 0.0, ..FrameParams::default() }, "purlin_spacing"),
        (
            FrameParams { truss_min_bay_length: 0.0, ..FrameParams::default() },
            "truss_min_bay_length",
        ),
        (FrameParams { overhang_left: -0.1, ..FrameParams::default() }, "overhang_left"),
        (FrameParams { roof_opacity: 1.5, ..FrameParams::default() }, "roof_opacity"),
    ] {
        assert_eq!(field, field_of(validate_frame(&frame).unwrap_err()));
    }
}

#[test]
fn arch_height_is_left_to_the_resolved_roof() {
    let flat = FrameParams {
        arch_height: Some(-3.0),
        ..FrameParams::default()
    };
    validate_frame(&flat).expect("frame record alone does not check the arch");

    assert_eq!("arch_height", field_of(validate_arch_height(-2.0, 0.02).unwrap_err()));
    assert_eq!("arch_height", field_of(validate_arch_height(0.01, 0.02).unwrap_err()));
    assert_eq!("arch_height", field_of(validate_arch_height(1.5, 2.0).unwrap_err()));
    validate_arch_height(1.5, 0.02).expect("rise above the roof thickness");
}

#[test]
fn foundation_rules() {
    let zero_rows = FoundationParams {
        rebar_rows: 0,
        ..FoundationParams::default()
    };
    assert_eq!("rebar_rows", field_of(validate_foundation(&zero_rows, 0.04).unwrap_err()));

    let thin = FoundationParams {
        slab_thickness: 0.05,
        rebar_rows: 2,
        ..FoundationParams::default()
    };
    assert_eq!("slab_thickness", field_of(validate_foundation(&thin, 0.04).unwrap_err()));

    let single_row = FoundationParams {
        slab_thickness: 0.05,
        rebar_rows: 1,
        ..FoundationParams::default()
    };
    validate_foundation(&single_row, 0.04).expect("one row needs no cover gap");
}

#[test]
fn hidden_foundation_is_not_validated() {
    let mut input = BuildInput::default();
    input.foundation.rebar_rows = 0;
    assert!(validate_input(&input, 0.04).is_err());

    input.foundation.show = false;
    validate_input(&input, 0.04).expect("hidden foundation skipped");
}
