use crate::error::{FrameError, Result};
use crate::params::{BuildInput, FoundationParams, FrameParams, WeldingParams};

/// Checks every record of `input`. Foundation and weld settings are only
/// checked when they are shown, since hidden layers generate nothing.
pub fn validate_input(input: &BuildInput, rebar_cover: f64) -> Result<()> {
    validate_frame(&input.frame)?;
    if input.foundation.show {
        validate_foundation(&input.foundation, rebar_cover)?;
    }
    if input.welding.show {
        validate_welding(&input.welding)?;
    }
    Ok(())
}

pub fn validate_frame(p: &FrameParams) -> Result<()> {
    positive("length", p.length)?;
    positive("width", p.width)?;
    positive("height", p.height)?;
    at_least("num_columns", p.num_columns, 2)?;
    positive("column_size", p.column_size)?;
    positive("tie_beam_size", p.tie_beam_size)?;

    positive("truss_height_left", p.truss_height_left)?;
    positive("truss_height_right", p.truss_height_right)?;
    positive("truss_min_bay_length", p.truss_min_bay_length)?;
    at_least("truss_count", p.truss_count, 2)?;
    positive("truss_section", p.truss_section)?;

    positive("purlin_spacing", p.purlin_spacing)?;
    positive("purlin_width", p.purlin_width)?;
    positive("purlin_height", p.purlin_height)?;

    non_negative("overhang_front", p.overhang_front)?;
    non_negative("overhang_rear", p.overhang_rear)?;
    non_negative("overhang_left", p.overhang_left)?;
    non_negative("overhang_right", p.overhang_right)?;

    finite("roof_opacity", p.roof_opacity)?;
    if !(0.0..=1.0).contains(&p.roof_opacity) {
        return Err(FrameError::invalid(
            "roof_opacity",
            format!("must be within [0, 1], got {}", p.roof_opacity),
        ));
    }
    positive("roof_thickness", p.roof_thickness)
}

/// Checks the rise of an arched roof once it is known, whether it came from
/// the parameters or from the generator default.
pub fn validate_arch_height(arch_height: f64, roof_thickness: f64) -> Result<()> {
    positive("arch_height", arch_height)?;
    if arch_height <= roof_thickness {
        return Err(FrameError::invalid(
            "arch_height",
            format!("must exceed roof_thickness ({roof_thickness}), got {arch_height}"),
        ));
    }
    Ok(())
}

pub fn validate_foundation(p: &FoundationParams, rebar_cover: f64) -> Result<()> {
    positive("slab_thickness", p.slab_thickness)?;
    non_negative("slab_extension", p.slab_extension)?;
    positive("rebar_thickness", p.rebar_thickness)?;
    at_least("rebar_rows", p.rebar_rows, 1)?;
    positive("rebar_spacing", p.rebar_spacing)?;
    non_negative("gravel_thickness", p.gravel_thickness)?;
    non_negative("sand_thickness", p.sand_thickness)?;

    if p.rebar_rows > 1 && p.slab_thickness <= 2.0 * rebar_cover {
        return Err(FrameError::invalid(
            "slab_thickness",
            format!(
                "{} rebar rows need more than {} of slab for cover, got {}",
                p.rebar_rows,
                2.0 * rebar_cover,
                p.slab_thickness
            ),
        ));
    }
    Ok(())
}

pub fn validate_welding(p: &WeldingParams) -> Result<()> {
    positive("weld_size", p.size)
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FrameError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FrameError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(FrameError::invalid(field, format!("must not be negative, got {value}")))
    }
}

fn at_least(field: &'static str, value: usize, min: usize) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(FrameError::invalid(field, format!("must be at least {min}, got {value}")))
    }
}
