use std::error::Error as StdError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::client::{ClientError, Predictor};
use crate::form::{collect_features, html, FieldSet, FormError};
use crate::presenter::{present, PredictionResult, Presentation, UiState};

/// Any failure of a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Drives the form: owns the rendered fields, the current [`UiState`],
/// and the predictor that submissions are sent to.
///
/// At most one submission is in flight at a time; a second call to
/// [`FormController::submit`] while one is pending fails with
/// [`FormError::Busy`] and leaves the state alone.
pub struct FormController<P> {
    predictor: P,
    fields: Mutex<FieldSet>,
    state: Mutex<UiState>,
    in_flight: AtomicBool,
}

struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // State is always left consistent, so a poisoned lock is still usable.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn error_chain(err: &dyn StdError) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

impl<P: Predictor> FormController<P> {
    /// Renders the fields and starts in [`UiState::Idle`].
    pub fn new(predictor: P) -> Self {
        Self {
            predictor,
            fields: Mutex::new(FieldSet::render()),
            state: Mutex::new(UiState::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn state(&self) -> UiState {
        lock(&self.state).clone()
    }

    pub fn presentation(&self) -> Presentation {
        present(&lock(&self.state))
    }

    /// Whether the trigger accepts a click, i.e. nothing is in flight.
    pub fn trigger_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    pub fn fields(&self) -> FieldSet {
        lock(&self.fields).clone()
    }

    pub fn set_value(&self, feature: &str, value: impl Into<String>) -> Result<(), FormError> {
        lock(&self.fields).set_value(feature, value)
    }

    pub fn fill<I, S>(&self, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lock(&self.fields).fill(values)
    }

    pub fn clear(&self) {
        lock(&self.fields).clear();
    }

    pub fn render_html(&self) -> String {
        html::render_form(&lock(&self.fields), &self.presentation(), self.trigger_enabled())
    }

    fn set_state(&self, state: UiState) {
        *lock(&self.state) = state;
    }

    /// Validates the fields and, if they all hold numbers, sends one
    /// prediction request. The outcome is stored as the new state and
    /// also returned.
    pub async fn submit(&self) -> Result<PredictionResult, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Submission ignored: a prediction is already in progress");
            return Err(FormError::Busy.into());
        }
        let _guard = FlightGuard(&self.in_flight);

        self.set_state(UiState::Loading);
        match self.run_submission().await {
            Ok(result) => {
                log::info!(
                    "Prediction received: label {} with confidence {:.4}",
                    result.prediction,
                    result.confidence
                );
                self.set_state(UiState::Result(result.clone()));
                Ok(result)
            }
            Err(err) => {
                log::error!("Prediction error: {}", error_chain(&err));
                self.set_state(UiState::Error(err.to_string()));
                Err(err)
            }
        }
    }

    async fn run_submission(&self) -> Result<PredictionResult, SubmitError> {
        let features = collect_features(&lock(&self.fields))?;
        log::info!("Submitting {} features", features.len());
        Ok(self.predictor.predict(&features).await?)
    }
}
