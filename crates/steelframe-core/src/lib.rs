//! Data model for parametric steel-frame scenes: parameter records, the scene
//! graph they generate into, material roles and input validation.

pub mod error;
pub mod geom;
pub mod material;
pub mod params;
pub mod report;
pub mod scene;
pub mod validate;

pub use error::{FrameError, Result};
