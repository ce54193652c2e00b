//! Binary classifiers over scaled features.
//!
//! Both variants reduce to a decision value: the log-odds of the malignant
//! class. Label 1 is predicted iff the decision value is positive.

use serde::{Deserialize, Serialize};

use crate::error::BundleError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
    Logistic,
    Identity,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Tanh => x.tanh(),
            Activation::Logistic => sigmoid(x),
            Activation::Identity => x,
        }
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Fully connected layer. `weights[o][i]` connects input `i` to output `o`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

impl DenseLayer {
    pub fn inputs(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    pub fn outputs(&self) -> usize {
        self.biases.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| dot(row, input) + bias)
            .collect()
    }

    fn is_finite(&self) -> bool {
        self.biases.iter().all(|value| value.is_finite())
            && self.weights.iter().flatten().all(|value| value.is_finite())
    }
}

fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs).map(|(a, b)| a * b).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Classifier {
    /// Linear model with a logistic link.
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    /// Feed-forward network. `activation` applies to hidden layers; the last
    /// layer is a single logistic unit.
    Mlp {
        #[serde(default)]
        activation: Activation,
        layers: Vec<DenseLayer>,
    },
}

impl Classifier {
    pub fn model_name(&self) -> &'static str {
        match self {
            Classifier::Logistic { .. } => "logistic regression",
            Classifier::Mlp { .. } => "multilayer perceptron",
        }
    }

    pub fn n_features_in(&self) -> usize {
        match self {
            Classifier::Logistic { coefficients, .. } => coefficients.len(),
            Classifier::Mlp { layers, .. } => layers.first().map_or(0, DenseLayer::inputs),
        }
    }

    pub fn validate(&self) -> Result<(), BundleError> {
        match self {
            Classifier::Logistic {
                coefficients,
                intercept,
            } => {
                if !intercept.is_finite() || coefficients.iter().any(|value| !value.is_finite()) {
                    return Err(BundleError::NonFiniteParameter);
                }
                Ok(())
            }
            Classifier::Mlp { layers, .. } => validate_layers(layers),
        }
    }

    /// Log-odds of the malignant class. `scaled` must already match
    /// [`Classifier::n_features_in`].
    pub fn decision_function(&self, scaled: &[f64]) -> f64 {
        match self {
            Classifier::Logistic {
                coefficients,
                intercept,
            } => dot(coefficients, scaled) + intercept,
            Classifier::Mlp { activation, layers } => {
                let Some((output, hidden)) = layers.split_last() else {
                    return 0.0;
                };
                let mut signal = scaled.to_vec();
                for layer in hidden {
                    signal = layer
                        .forward(&signal)
                        .into_iter()
                        .map(|value| activation.apply(value))
                        .collect();
                }
                output.forward(&signal).first().copied().unwrap_or(0.0)
            }
        }
    }

    /// Raw label in `{0, 1}`.
    pub fn predict_label(&self, scaled: &[f64]) -> u8 {
        u8::from(self.decision_function(scaled) > 0.0)
    }

    pub fn predict_proba(&self, scaled: &[f64]) -> f64 {
        sigmoid(self.decision_function(scaled))
    }
}

fn validate_layers(layers: &[DenseLayer]) -> Result<(), BundleError> {
    let Some(last) = layers.last() else {
        return Err(BundleError::EmptyNetwork);
    };
    let mut expected_inputs = None;
    for (layer_idx, layer) in layers.iter().enumerate() {
        if layer.weights.len() != layer.biases.len() {
            return Err(BundleError::Layer {
                layer: layer_idx,
                message: format!(
                    "{} weight rows but {} biases",
                    layer.weights.len(),
                    layer.biases.len()
                ),
            });
        }
        let inputs = layer.inputs();
        if inputs == 0 || layer.weights.iter().any(|row| row.len() != inputs) {
            return Err(BundleError::Layer {
                layer: layer_idx,
                message: "weight rows must be non-empty and equally long".to_string(),
            });
        }
        if let Some(expected) = expected_inputs
            && expected != inputs
        {
            return Err(BundleError::Layer {
                layer: layer_idx,
                message: format!("takes {inputs} inputs but previous layer has {expected} units"),
            });
        }
        if !layer.is_finite() {
            return Err(BundleError::NonFiniteParameter);
        }
        expected_inputs = Some(layer.outputs());
    }
    if last.outputs() != 1 {
        return Err(BundleError::OutputWidth(last.outputs()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_like() -> Classifier {
        Classifier::Mlp {
            activation: Activation::Relu,
            layers: vec![
                DenseLayer {
                    weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
                    biases: vec![0.0, 0.0],
                },
                DenseLayer {
                    weights: vec![vec![1.0, -1.0]],
                    biases: vec![-0.5],
                },
            ],
        }
    }

    #[test]
    fn logistic_decision_is_affine() {
        let model = Classifier::Logistic {
            coefficients: vec![2.0, -1.0],
            intercept: 0.5,
        };
        assert_eq!(model.decision_function(&[1.0, 1.0]), 1.5);
        assert_eq!(model.predict_label(&[1.0, 1.0]), 1);
        assert_eq!(model.predict_label(&[-1.0, 1.0]), 0);
        assert!((model.predict_proba(&[0.0, 0.5]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mlp_applies_hidden_activation() {
        let model = xor_like();
        assert_eq!(model.n_features_in(), 2);
        // relu clips the negative second unit, so only the first input counts
        assert_eq!(model.decision_function(&[2.0, -3.0]), 1.5);
        assert_eq!(model.predict_label(&[2.0, -3.0]), 1);
        assert_eq!(model.predict_label(&[0.0, 3.0]), 0);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn mlp_shape_errors() {
        let empty = Classifier::Mlp {
            activation: Activation::Tanh,
            layers: vec![],
        };
        assert_eq!(empty.validate(), Err(BundleError::EmptyNetwork));

        let wide_output = Classifier::Mlp {
            activation: Activation::Relu,
            layers: vec![DenseLayer {
                weights: vec![vec![1.0], vec![1.0]],
                biases: vec![0.0, 0.0],
            }],
        };
        assert_eq!(wide_output.validate(), Err(BundleError::OutputWidth(2)));

        let disconnected = Classifier::Mlp {
            activation: Activation::Relu,
            layers: vec![
                DenseLayer {
                    weights: vec![vec![1.0, 1.0]],
                    biases: vec![0.0],
                },
                DenseLayer {
                    weights: vec![vec![1.0, 1.0]],
                    biases: vec![0.0],
                },
            ],
        };
        assert!(matches!(
            disconnected.validate(),
            Err(BundleError::Layer { layer: 1, .. })
        ));
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"{
            "kind": "mlp",
            "activation": "tanh",
            "layers": [{"weights": [[0.5]], "biases": [0.1]}]
        }"#;
        let model: Classifier = serde_json::from_str(json).expect("parse classifier");
        assert_eq!(model.model_name(), "multilayer perceptron");
        assert_eq!(model.n_features_in(), 1);

        let json = r#"{"kind": "logistic", "coefficients": [1.0, 2.0], "intercept": -1.0}"#;
        let model: Classifier = serde_json::from_str(json).expect("parse classifier");
        assert_eq!(model.n_features_in(), 2);
    }
}
