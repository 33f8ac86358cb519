use serde::{Deserialize, Serialize};

/// The classification returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// `1` is benign; every other label is malignant
    pub prediction: i64,
    /// Probability of the predicted class, in `[0, 1]`
    pub confidence: f64,
    /// Name of the model that produced the result, when the service reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
}

impl PredictionResult {
    pub const BENIGN_LABEL: i64 = 1;

    pub fn is_benign(&self) -> bool {
        self.prediction == Self::BENIGN_LABEL
    }

    pub fn diagnosis(&self) -> &'static str {
        if self.is_benign() {
            "Benign (non-cancerous)"
        } else {
            "Malignant (cancerous)"
        }
    }

    /// Confidence as a percentage with two decimals, e.g. `87.34%`.
    pub fn confidence_percent(&self) -> String {
        format!("{}%", round_two_places(self.confidence * 100.0))
    }
}

/// Formats with two decimals, breaking exact ties upwards.
fn round_two_places(value: f64) -> String {
    let hundredths = value * 100.0;
    // An exact tie needs a multiple of 1/8, where the scaling above is exact.
    if (value * 8.0).fract() == 0.0 && hundredths.fract().abs() == 0.5 {
        return format!("{:.2}", hundredths.ceil() / 100.0);
    }
    format!("{:.2}", value)
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Result(PredictionResult),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

/// Visual treatment of the result area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStyle {
    Benign,
    Malignant,
    Error,
}

impl ResultStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            ResultStyle::Benign => "benign",
            ResultStyle::Malignant => "malignant",
            ResultStyle::Error => "error",
        }
    }
}

/// What the result area shows for a given state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Presentation {
    pub style: Option<ResultStyle>,
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl Presentation {
    /// All displayed text, heading first, one entry per line.
    pub fn text(&self) -> String {
        self.heading
            .iter()
            .chain(self.lines.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Projects a state onto the result area. Has no side effects.
pub fn present(state: &UiState) -> Presentation {
    match state {
        UiState::Idle => Presentation::default(),
        UiState::Loading => Presentation {
            style: None,
            heading: None,
            lines: vec!["Analyzing data...".to_string()],
        },
        UiState::Result(result) => Presentation {
            style: Some(if result.is_benign() {
                ResultStyle::Benign
            } else {
                ResultStyle::Malignant
            }),
            heading: Some(format!("Analysis Result: {}", result.diagnosis())),
            lines: vec![format!("Confidence Level: {}", result.confidence_percent())],
        },
        UiState::Error(message) => Presentation {
            style: Some(ResultStyle::Error),
            heading: None,
            lines: vec![format!("Error: {}", message)],
        },
    }
}
