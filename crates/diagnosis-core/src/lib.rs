//! Inference and session state for the tumor diagnosis console.
//!
//! - [`ModelBundle`]: fitted scaler plus classifier, validated on load
//! - [`Predictor`]: scale features, classify, map the label to a diagnosis
//! - [`SampleProvider`]: held-out rows converted back to original units
//! - [`Session`]: form state, sample link and the prediction history

pub mod artifacts;
pub mod bundle;
pub mod classifier;
pub mod error;
pub mod export;
pub mod predictor;
pub mod sample;
pub mod scaler;
pub mod session;

pub use artifacts::Artifacts;
pub use bundle::ModelBundle;
pub use classifier::{Activation, Classifier, DenseLayer, sigmoid};
pub use error::{ArtifactError, BundleError, ExportError};
pub use export::{DEFAULT_EXPORT_FILE, HISTORY_HEADERS, history_csv, write_history_csv};
pub use predictor::Predictor;
pub use sample::{DrawnSample, SampleProvider};
pub use scaler::StandardScaler;
pub use session::{FormState, PredictionOutcome, Session};
