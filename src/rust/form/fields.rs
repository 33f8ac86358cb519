use super::error::FormError;
use crate::features::{format_feature_name, FEATURE_COUNT, FEATURE_NAMES};

/// Increment advertised by every numeric control.
pub const INPUT_STEP: f64 = 0.0001;

/// One labeled numeric input bound to a single feature.
#[derive(Debug, Clone, PartialEq)]
pub struct InputControl {
    feature: &'static str,
    label: String,
    value: String,
}

impl InputControl {
    fn new(feature: &'static str) -> Self {
        Self {
            feature,
            label: format_feature_name(feature),
            value: String::new(),
        }
    }

    /// The stable identifier of the control, equal to its feature name
    pub fn id(&self) -> &'static str {
        self.feature
    }

    pub fn feature(&self) -> &'static str {
        self.feature
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The raw, unparsed text currently entered in the control
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn step(&self) -> f64 {
        INPUT_STEP
    }

    pub fn required(&self) -> bool {
        true
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// The rendered controls of the form, kept in feature order.
///
/// Built once from [`FEATURE_NAMES`]; the controls are held directly so
/// collection never has to look anything up by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    controls: Vec<InputControl>,
}

impl FieldSet {
    /// Renders one control per feature name, in order.
    pub fn render() -> Self {
        let controls: Vec<InputControl> = FEATURE_NAMES.iter().copied().map(InputControl::new).collect();
        log::debug!("Rendered {} input controls", controls.len());
        Self { controls }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn controls(&self) -> &[InputControl] {
        &self.controls
    }

    pub fn control(&self, feature: &str) -> Option<&InputControl> {
        self.controls.iter().find(|c| c.feature == feature)
    }

    /// Sets the text of the control bound to `feature`.
    pub fn set_value(&mut self, feature: &str, value: impl Into<String>) -> Result<(), FormError> {
        let control = self
            .controls
            .iter_mut()
            .find(|c| c.feature == feature)
            .ok_or_else(|| FormError::UnknownField(feature.to_string()))?;
        control.set_value(value);
        Ok(())
    }

    /// Fills every control from `values`, which must hold one entry per feature in order.
    pub fn fill<I, S>(&mut self, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != FEATURE_COUNT {
            return Err(FormError::FieldCount {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }
        for (control, value) in self.controls.iter_mut().zip(values) {
            control.set_value(value);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        for control in &mut self.controls {
            control.value.clear();
        }
    }
}
