//! The input side of the prediction form: rendered controls, their HTML
//! markup, and collection of their values into a feature vector.

mod collector;
mod error;
mod fields;
pub mod html;

pub use collector::collect_features;
pub use error::FormError;
pub use fields::{FieldSet, InputControl, INPUT_STEP};
