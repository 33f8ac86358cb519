use super::error::FormError;
use super::fields::{FieldSet, InputControl};
use crate::features::{FeatureVector, FEATURE_COUNT};

/// Reads every control in order and builds the feature vector.
///
/// Stops at the first control that is empty or does not hold a finite
/// number; no partial vector is ever produced.
pub fn collect_features(fields: &FieldSet) -> Result<FeatureVector, FormError> {
    let mut values = [0.0; FEATURE_COUNT];
    for (slot, control) in values.iter_mut().zip(fields.controls()) {
        *slot = parse_control(control)?;
    }

    Ok(FeatureVector::from_validated(values))
}

fn parse_control(control: &InputControl) -> Result<f64, FormError> {
    match control.value().trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::Validation {
            feature: control.feature(),
            label: control.label().to_string(),
        }),
    }
}
