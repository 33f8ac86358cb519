use serde::{Serialize, Serializer};

/// Number of measurements the classification service expects per sample.
pub const FEATURE_COUNT: usize = 30;

/// The fixed, ordered set of measurement names.
///
/// The service consumes a bare array of numbers, so the position of each
/// name here is the position of its value on the wire.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "radius_mean", "texture_mean", "perimeter_mean", "area_mean",
    "smoothness_mean", "compactness_mean", "concavity_mean",
    "concave_points_mean", "symmetry_mean", "fractal_dimension_mean",
    "radius_se", "texture_se", "perimeter_se", "area_se",
    "smoothness_se", "compactness_se", "concavity_se",
    "concave_points_se", "symmetry_se", "fractal_dimension_se",
    "radius_worst", "texture_worst", "perimeter_worst", "area_worst",
    "smoothness_worst", "compactness_worst", "concavity_worst",
    "concave_points_worst", "symmetry_worst", "fractal_dimension_worst",
];

/// Turns a feature identifier into its display label.
///
/// # Example
/// ```
/// use prognosis::format_feature_name;
///
/// assert_eq!(format_feature_name("concave_points_worst"), "Concave Points Worst");
/// ```
pub fn format_feature_name(feature: &str) -> String {
    feature
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// An ordered set of 30 finite measurements, one per entry of [`FEATURE_NAMES`].
///
/// Only the collector builds these, so holding one means every value
/// parsed and none is NaN or infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn from_validated(values: [f64; FEATURE_COUNT]) -> Self {
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up a value by feature name.
    pub fn get(&self, feature: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|name| *name == feature)
            .map(|idx| self.values[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.as_slice().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_for_every_feature() {
        for name in FEATURE_NAMES {
            let label = format_feature_name(name);
            assert_eq!(label.to_lowercase().replace(' ', "_"), name);
            for word in label.split(' ') {
                assert!(word.chars().next().unwrap().is_uppercase(), "{label}");
            }
        }
        assert_eq!(format_feature_name("fractal_dimension_se"), "Fractal Dimension Se");
        assert_eq!(format_feature_name("radius_mean"), "Radius Mean");
    }

    #[test]
    fn test_feature_names_are_unique() {
        let mut names = FEATURE_NAMES.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_vector_serializes_as_bare_array() {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = 17.99;
        values[29] = 0.1189;
        let vector = FeatureVector::from_validated(values);

        let json = serde_json::to_value(&vector).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), FEATURE_COUNT);
        assert_eq!(array[0], 17.99);
        assert_eq!(array[29], 0.1189);
        assert_eq!(vector.get("fractal_dimension_worst"), Some(0.1189));
        assert_eq!(vector.get("unknown"), None);
    }
}
