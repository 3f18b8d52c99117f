//! Prediction model and display mapping
//!
//! A prediction always references exactly one previously uploaded image
//! and is immutable once created; history views only read it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw diagnostic result inside a prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Diagnosis label, e.g. "Melanoma maligno" or "Nevus benigno"
    #[serde(rename = "diagnostico")]
    pub label: String,
    #[serde(rename = "region_afectada", default)]
    pub affected_region: Option<String>,
    /// Model quality metrics, present on newer backend revisions only
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
}

/// Prediction as returned by `/api/predicciones/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    #[serde(rename = "resultado")]
    pub result: DiagnosticResult,
    /// Confidence in the 0..=1 range
    #[serde(rename = "confidence_score")]
    pub confidence: f64,
    #[serde(rename = "fecha")]
    pub recorded_at: DateTime<Utc>,
    #[serde(rename = "usuario")]
    pub user: i64,
    #[serde(rename = "usuario_email", default)]
    pub user_email: Option<String>,
    #[serde(rename = "imagen")]
    pub image_id: i64,
}

/// Prediction creation payload: the backend computes the result from the
/// already uploaded image, so only its identifier is sent.
#[derive(Debug, Clone, Serialize)]
pub struct NewPrediction {
    #[serde(rename = "imagen")]
    pub image_id: i64,
}

/// Model quality metrics for display
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetrics {
    pub precision: f64,
    pub recall: f64,
    pub accuracy: f64,
}

/// Display-ready view of a prediction
#[derive(Debug, Clone)]
pub struct PredictionReport {
    pub label: String,
    /// Derived by case-insensitive substring match on the label
    pub malignant: bool,
    /// Confidence rendered as a rounded percentage
    pub confidence_pct: u8,
    pub affected_region: Option<String>,
    pub metrics: Option<ModelMetrics>,
    pub image_id: i64,
    pub recorded_at: DateTime<Utc>,
}

impl From<Prediction> for PredictionReport {
    fn from(prediction: Prediction) -> Self {
        let malignant = prediction.result.label.to_lowercase().contains("malign");
        let metrics = match (
            prediction.result.precision,
            prediction.result.recall,
            prediction.result.accuracy,
        ) {
            (Some(precision), Some(recall), Some(accuracy)) => Some(ModelMetrics {
                precision,
                recall,
                accuracy,
            }),
            _ => None,
        };

        PredictionReport {
            label: prediction.result.label,
            malignant,
            confidence_pct: (prediction.confidence * 100.0).round().clamp(0.0, 100.0) as u8,
            affected_region: prediction.result.affected_region,
            metrics,
            image_id: prediction.image_id,
            recorded_at: prediction.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn prediction(label: &str, confidence: f64) -> Prediction {
        Prediction {
            id: 1,
            result: DiagnosticResult {
                label: label.to_string(),
                affected_region: Some("brazo izquierdo".to_string()),
                precision: None,
                recall: None,
                accuracy: None,
            },
            confidence,
            recorded_at: Utc::now(),
            user: 1,
            user_email: None,
            image_id: 9,
        }
    }

    #[test]
    fn maligno_label_marks_report_malignant() {
        let report = PredictionReport::from(prediction("maligno", 0.85));
        assert!(report.malignant);
        assert_eq!(report.confidence_pct, 85);
    }

    #[test]
    fn benigno_label_is_not_malignant() {
        let report = PredictionReport::from(prediction("benigno", 0.914));
        assert!(!report.malignant);
        assert_eq!(report.confidence_pct, 91);
    }

    #[test]
    fn mixed_case_labels_still_match() {
        let report = PredictionReport::from(prediction("Melanoma MALIGNO", 1.0));
        assert!(report.malignant);
        assert_eq!(report.confidence_pct, 100);
    }

    #[test]
    fn metrics_require_all_three_fields() {
        let mut p = prediction("benigno", 0.5);
        p.result.precision = Some(0.9);
        p.result.recall = Some(0.8);
        assert!(PredictionReport::from(p.clone()).metrics.is_none());
        p.result.accuracy = Some(0.95);
        let report = PredictionReport::from(p);
        assert_eq!(
            report.metrics,
            Some(ModelMetrics {
                precision: 0.9,
                recall: 0.8,
                accuracy: 0.95
            })
        );
    }

    #[test]
    fn new_prediction_sends_image_id_only() {
        let json = serde_json::to_string(&NewPrediction { image_id: 42 }).unwrap();
        assert_eq!(json, "{\"imagen\":42}");
    }
}
