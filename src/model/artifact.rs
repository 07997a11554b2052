//! Model artefact codec
//!
//! Artefacts are JSON documents naming one predictor family through a
//! `"type"` field. Decoding validates the document's structure; checks that
//! depend on the feature vector happen at prediction time.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::value::RawValue;

/// Anything that turns a numeric feature vector into a raw output
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<RawValue>;
}

fn default_threshold() -> f64 {
    0.5
}

/// Serialized predictor definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Always returns the same value
    Constant { value: RawValue },
    /// Linear regressor, `w·x + b`
    Linear { weights: Vec<f64>, bias: f64 },
    /// Binary classifier emitting 0 or 1
    Logistic {
        weights: Vec<f64>,
        bias: f64,
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    /// Linear score banded into classes by ascending cutoffs
    Ordinal {
        weights: Vec<f64>,
        bias: f64,
        cutoffs: Vec<f64>,
    },
    /// Binary decision tree; node 0 is the root
    DecisionTree { nodes: Vec<TreeNode> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go left when `x[feature] <= threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { leaf: RawValue },
}

impl ModelArtifact {
    /// Check structural invariants of a freshly decoded artefact
    pub fn validate(&self) -> Result<()> {
        match self {
            ModelArtifact::Constant { .. } => Ok(()),
            ModelArtifact::Linear { weights, bias } => check_linear(weights, *bias),
            ModelArtifact::Logistic { weights, bias, threshold } => {
                check_linear(weights, *bias)?;
                if !(*threshold > 0.0 && *threshold < 1.0) {
                    return Err(Error::model_load(format!(
                        "logistic threshold must lie in (0, 1), got {}",
                        threshold
                    )));
                }
                Ok(())
            }
            ModelArtifact::Ordinal { weights, bias, cutoffs } => {
                check_linear(weights, *bias)?;
                if cutoffs.is_empty() {
                    return Err(Error::model_load("ordinal model needs at least one cutoff"));
                }
                if cutoffs.iter().any(|c| !c.is_finite()) || cutoffs.windows(2).any(|w| w[0] > w[1]) {
                    return Err(Error::model_load("ordinal cutoffs must be finite and ascending"));
                }
                Ok(())
            }
            ModelArtifact::DecisionTree { nodes } => {
                if nodes.is_empty() {
                    return Err(Error::model_load("decision tree has no nodes"));
                }
                for (idx, node) in nodes.iter().enumerate() {
                    if let TreeNode::Split { left, right, threshold, .. } = node {
                        // children always point forward, so traversal terminates
                        for child in [*left, *right] {
                            if child <= idx || child >= nodes.len() {
                                return Err(Error::model_load(format!(
                                    "tree node {} has invalid child {}",
                                    idx, child
                                )));
                            }
                        }
                        if threshold.is_nan() {
                            return Err(Error::model_load(format!("tree node {} has a NaN threshold", idx)));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn check_linear(weights: &[f64], bias: f64) -> Result<()> {
    if weights.is_empty() {
        return Err(Error::model_load("model has no weights"));
    }
    if weights.iter().any(|w| !w.is_finite()) || !bias.is_finite() {
        return Err(Error::model_load("model coefficients must be finite"));
    }
    Ok(())
}

fn check_input(features: &[f64]) -> Result<()> {
    if features.iter().any(|x| x.is_nan()) {
        return Err(Error::prediction("Input contains NaN"));
    }
    if features.iter().any(|x| x.is_infinite()) {
        return Err(Error::prediction("Input contains infinity"));
    }
    Ok(())
}

fn score(weights: &[f64], bias: f64, features: &[f64]) -> Result<f64> {
    if weights.len() != features.len() {
        return Err(Error::prediction(format!(
            "X has {} features, but model is expecting {} features as input",
            features.len(),
            weights.len()
        )));
    }
    check_input(features)?;
    Ok(weights.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + bias)
}

impl Predictor for ModelArtifact {
    fn predict(&self, features: &[f64]) -> Result<RawValue> {
        match self {
            ModelArtifact::Constant { value } => Ok(value.clone()),
            ModelArtifact::Linear { weights, bias } => {
                Ok(RawValue::Float(score(weights, *bias, features)?))
            }
            ModelArtifact::Logistic { weights, bias, threshold } => {
                let z = score(weights, *bias, features)?;
                let p = 1.0 / (1.0 + (-z).exp());
                Ok(RawValue::Integer(if p >= *threshold { 1 } else { 0 }))
            }
            ModelArtifact::Ordinal { weights, bias, cutoffs } => {
                let z = score(weights, *bias, features)?;
                let class = cutoffs.iter().filter(|c| **c <= z).count();
                Ok(RawValue::Integer(class as i64))
            }
            ModelArtifact::DecisionTree { nodes } => {
                check_input(features)?;
                let mut idx = 0;
                loop {
                    match &nodes[idx] {
                        TreeNode::Leaf { leaf } => return Ok(leaf.clone()),
                        TreeNode::Split { feature, threshold, left, right } => {
                            let x = features.get(*feature).ok_or_else(|| {
                                Error::prediction(format!(
                                    "tree splits on feature {} but only {} features were given",
                                    feature,
                                    features.len()
                                ))
                            })?;
                            idx = if *x <= *threshold { *left } else { *right };
                        }
                    }
                }
            }
        }
    }
}

/// Decode artefact bytes into a ready-to-use predictor
pub fn decode_artifact(bytes: &[u8]) -> Result<Arc<dyn Predictor>> {
    let artifact: ModelArtifact = serde_json::from_slice(bytes)
        .map_err(|e| Error::model_load(format!("invalid model artefact: {}", e)))?;
    artifact.validate()?;
    Ok(Arc::new(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Arc<dyn Predictor>> {
        decode_artifact(json.as_bytes())
    }

    #[test]
    fn test_constant() {
        let model = decode(r#"{"type": "constant", "value": "1"}"#).unwrap();
        assert_eq!(model.predict(&[]).unwrap(), RawValue::from("1"));
    }

    #[test]
    fn test_linear_and_width_mismatch() {
        let model = decode(r#"{"type": "linear", "weights": [2.0, 1.0], "bias": 0.5}"#).unwrap();
        assert_eq!(model.predict(&[1.0, 3.0]).unwrap(), RawValue::Float(5.5));

        let err = model.predict(&[1.0]).unwrap_err();
        assert!(matches!(err, Error::Prediction(_)));
    }

    #[test]
    fn test_logistic_threshold() {
        let model = decode(r#"{"type": "logistic", "weights": [1.0], "bias": 0.0}"#).unwrap();
        assert_eq!(model.predict(&[3.0]).unwrap(), RawValue::Integer(1));
        assert_eq!(model.predict(&[-3.0]).unwrap(), RawValue::Integer(0));

        let strict = decode(r#"{"type": "logistic", "weights": [1.0], "bias": 0.0, "threshold": 0.99}"#).unwrap();
        assert_eq!(strict.predict(&[3.0]).unwrap(), RawValue::Integer(0));
    }

    #[test]
    fn test_ordinal_bands() {
        let model = decode(
            r#"{"type": "ordinal", "weights": [1.0], "bias": 0.0, "cutoffs": [10.0, 20.0]}"#,
        )
        .unwrap();
        assert_eq!(model.predict(&[5.0]).unwrap(), RawValue::Integer(0));
        assert_eq!(model.predict(&[10.0]).unwrap(), RawValue::Integer(1));
        assert_eq!(model.predict(&[25.0]).unwrap(), RawValue::Integer(2));
    }

    #[test]
    fn test_decision_tree() {
        let model = decode(
            r#"{"type": "decision_tree", "nodes": [
                {"feature": 1, "threshold": 0.5, "left": 1, "right": 2},
                {"leaf": false},
                {"leaf": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(model.predict(&[0.0, 0.0]).unwrap(), RawValue::Bool(false));
        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), RawValue::Bool(true));
        assert!(model.predict(&[0.0]).is_err());
    }

    #[test]
    fn test_nan_input_is_rejected() {
        let model = decode(r#"{"type": "linear", "weights": [1.0], "bias": 0.0}"#).unwrap();
        assert!(matches!(model.predict(&[f64::NAN]), Err(Error::Prediction(_))));
    }

    #[test]
    fn test_infinite_input_is_rejected() {
        let linear = decode(r#"{"type": "linear", "weights": [1.0], "bias": 0.0}"#).unwrap();
        let err = linear.predict(&[f64::INFINITY]).unwrap_err();
        assert_eq!(err.to_string(), "Prediction error: Input contains infinity");

        let tree = decode(r#"{"type": "decision_tree", "nodes": [{"leaf": 1}]}"#).unwrap();
        assert!(matches!(tree.predict(&[f64::NEG_INFINITY]), Err(Error::Prediction(_))));
    }

    #[test]
    fn test_malformed_artifacts() {
        let bad = [
            "not json",
            r#"{"type": "svm"}"#,
            r#"{"type": "linear", "weights": [], "bias": 0.0}"#,
            r#"{"type": "logistic", "weights": [1.0], "bias": 0.0, "threshold": 1.5}"#,
            r#"{"type": "ordinal", "weights": [1.0], "bias": 0.0, "cutoffs": [2.0, 1.0]}"#,
            r#"{"type": "decision_tree", "nodes": []}"#,
            r#"{"type": "decision_tree", "nodes": [{"feature": 0, "threshold": 1.0, "left": 0, "right": 1}, {"leaf": 1}]}"#,
        ];
        for json in bad {
            assert!(matches!(decode(json), Err(Error::ModelLoad(_))), "accepted: {}", json);
        }
    }
}
