#![allow(dead_code)]

use diagnosis_core::{Artifacts, Classifier, ModelBundle, StandardScaler};
use diagnosis_ingest::{HoldoutSet, NumericTable};
use diagnosis_model::{Diagnosis, FEATURE_COUNT};

pub fn scaler() -> StandardScaler {
    StandardScaler {
        mean: (0..FEATURE_COUNT).map(|i| i as f64 + 1.0).collect(),
        scale: (0..FEATURE_COUNT).map(|i| 0.5 + i as f64 * 0.1).collect(),
    }
}

/// Malignant iff the scaled radius mean is positive.
pub fn bundle() -> ModelBundle {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[0] = 1.0;
    ModelBundle {
        scaler: scaler(),
        classifier: Classifier::Logistic {
            coefficients,
            intercept: 0.0,
        },
    }
}

/// Five rows; row `r` holds the scaled value `r - 2` in every column.
pub fn holdout_with_width(width: usize) -> HoldoutSet {
    let headers = (0..width).map(|i| format!("f{i}")).collect();
    let rows = (0..5)
        .map(|r| vec![r as f64 - 2.0; width])
        .collect();
    HoldoutSet::new(
        NumericTable { headers, rows },
        vec![
            Diagnosis::Benign,
            Diagnosis::Malignant,
            Diagnosis::Benign,
            Diagnosis::Malignant,
            Diagnosis::Malignant,
        ],
    )
}

pub fn artifacts() -> Artifacts {
    Artifacts::new(bundle(), holdout_with_width(FEATURE_COUNT))
}

pub fn at(hour: u32, minute: u32, second: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid timestamp")
}
