//! A form client for a remote breast cancer classification service.
//!
//! The form holds one numeric input per measurement, validates them into a
//! [`FeatureVector`], posts that vector to the service and keeps the outcome
//! as an explicit [`UiState`].
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use prognosis::{ClientConfig, FormController, PredictionClient};
//!
//! let client = PredictionClient::new(ClientConfig::default())?;
//! let form = FormController::new(client);
//!
//! form.fill([
//!     "17.99", "10.38", "122.8", "1001", "0.1184", "0.2776", "0.3001", "0.1471",
//!     "0.2419", "0.07871", "1.095", "0.9053", "8.589", "153.4", "0.006399",
//!     "0.04904", "0.05373", "0.01587", "0.03003", "0.006193", "25.38", "17.33",
//!     "184.6", "2019", "0.1622", "0.6656", "0.7119", "0.2654", "0.4601", "0.1189",
//! ])?;
//!
//! match form.submit().await {
//!     Ok(result) => println!("{}", result.diagnosis()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! println!("{}", form.presentation().text());
//! # Ok(())
//! # }
//! ```
//!
//! # Single-flight submission
//!
//! [`FormController::submit`] takes `&self`, so it can be raced from
//! several futures; only the first one issues a request while the others
//! fail with [`FormError::Busy`].

pub mod client;
pub mod controller;
pub mod features;
pub mod form;
pub mod presenter;

pub use client::{ClientConfig, ClientError, HealthStatus, PredictionClient, Predictor, DEFAULT_ENDPOINT};
pub use controller::{FormController, SubmitError};
pub use features::{format_feature_name, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use form::{collect_features, FieldSet, FormError, InputControl};
pub use presenter::{present, PredictionResult, Presentation, ResultStyle, UiState};

pub fn init_logger() {
    env_logger::init();
}
