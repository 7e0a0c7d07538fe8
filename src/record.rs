//! Design records: the JSON shape a finished design is saved in.
//!
//! ```json
//! {
//!   "model": "Sedan",
//!   "ctrlpts": [[-0.4, 0.6], [-0.2, 2.1], ...],
//!   "weights": [1.0, 14.6, ...],
//!   "opacity": 0.3,
//!   "adjective": "cool"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::BODY_DEGREE;
use crate::editor::ShapeEditor;
use crate::error::{RecordError, Result};
use crate::geometry::NurbsCurve;
use crate::math::{pair_from_point, point_from_pair};

/// How a respondent described a design.
///
/// Serialized in English; the Japanese survey labels are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjective {
    #[serde(alias = "かわいい")]
    Cute,
    #[serde(alias = "かっこいい")]
    Cool,
    #[serde(alias = "頑丈そう")]
    Sturdy,
    #[serde(alias = "速そう")]
    Fast,
    #[serde(alias = "高級な")]
    Luxury,
    #[serde(alias = "親しみのある")]
    Familiar,
}

/// One saved car design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub model: String,
    pub ctrlpts: Vec<[f64; 2]>,
    pub weights: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjective: Option<Adjective>,
}

impl DesignRecord {
    /// Captures the editor's current points and weights.
    #[must_use]
    pub fn from_editor(editor: &ShapeEditor) -> Self {
        Self {
            model: editor.model_name().to_owned(),
            ctrlpts: editor.points().iter().map(pair_from_point).collect(),
            weights: editor.weights().to_vec(),
            opacity: None,
            adjective: None,
        }
    }

    /// Sets the fill opacity the design was shown with.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the respondent's adjective.
    #[must_use]
    pub fn with_adjective(mut self, adjective: Adjective) -> Self {
        self.adjective = Some(adjective);
        self
    }

    /// Serializes the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(RecordError::Json)?)
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Json` if the document is not a design record.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(RecordError::Json)?)
    }

    /// Rebuilds the body curve the record describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved points and weights are not a valid curve.
    pub fn curve(&self) -> Result<NurbsCurve> {
        let points = self.ctrlpts.iter().copied().map(point_from_pair).collect();
        NurbsCurve::clamped(BODY_DEGREE, points, self.weights.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::editor::SliderRanges;
    use crate::error::{Constraint, CurveError, SilhouetteError};
    use crate::geometry::Curve;
    use crate::math::Point2;
    use crate::tessellation::SampleParams;

    fn coupe_editor() -> ShapeEditor {
        let model = Catalog::builtin().unwrap().get("Coupe").unwrap();
        ShapeEditor::new(model, SliderRanges::default(), SampleParams::default()).unwrap()
    }

    #[test]
    fn captures_editor_state() {
        let mut editor = coupe_editor();
        editor.set_weight(4, 40.0).unwrap();
        let record = DesignRecord::from_editor(&editor).with_adjective(Adjective::Fast);
        assert_eq!(record.model, "Coupe");
        assert_eq!(record.ctrlpts[0], [0.0, 0.8]);
        assert!((record.weights[4] - 40.0).abs() < 1e-12);
        assert_eq!(record.curve().unwrap(), editor.snapshot().unwrap());
    }

    #[test]
    fn json_uses_array_pairs_and_lowercase_adjective() {
        let record = DesignRecord {
            model: "SUV".into(),
            ctrlpts: vec![[0.0, 0.0], [1.0, 2.0]],
            weights: vec![1.0, 5.0],
            opacity: None,
            adjective: None,
        }
        .with_opacity(0.3)
        .with_adjective(Adjective::Sturdy);
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["ctrlpts"], serde_json::json!([[0.0, 0.0], [1.0, 2.0]]));
        assert_eq!(value["adjective"], "sturdy");
        assert_eq!(value["opacity"], 0.3);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"{"model":"Sedan","ctrlpts":[[0,0],[1,2],[2,0],[4,4]],"weights":[1,1,1,50]}"#;
        let record = DesignRecord::from_json(json).unwrap();
        assert!(record.opacity.is_none());
        assert!(record.adjective.is_none());
        let curve = record.curve().unwrap();
        assert_eq!(curve.evaluate(1.0).unwrap(), Point2::new(4.0, 4.0));
    }

    #[test]
    fn round_trip_preserves_record() {
        let record = DesignRecord::from_editor(&coupe_editor()).with_adjective(Adjective::Cute);
        let back = DesignRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn japanese_survey_labels_decode_to_adjectives() {
        let cases = [
            ("かわいい", Adjective::Cute),
            ("かっこいい", Adjective::Cool),
            ("頑丈そう", Adjective::Sturdy),
            ("速そう", Adjective::Fast),
            ("高級な", Adjective::Luxury),
            ("親しみのある", Adjective::Familiar),
        ];
        for (label, expected) in cases {
            let json = format!(
                r#"{{"model":"SUV","ctrlpts":[],"weights":[],"adjective":"{label}"}}"#
            );
            let record = DesignRecord::from_json(&json).unwrap();
            assert_eq!(record.adjective, Some(expected));
        }
        let saved = DesignRecord::from_json(
            r#"{"model":"SUV","ctrlpts":[],"weights":[],"adjective":"頑丈そう"}"#,
        )
        .unwrap()
        .to_json()
        .unwrap();
        assert!(saved.contains(r#""adjective": "sturdy""#));
    }

    #[test]
    fn unknown_adjective_is_rejected() {
        let json = r#"{"model":"SUV","ctrlpts":[],"weights":[],"adjective":"sleepy"}"#;
        let err = DesignRecord::from_json(json).unwrap_err();
        assert!(matches!(err, SilhouetteError::Record(RecordError::Json(_))));
    }

    #[test]
    fn saved_zero_weight_fails_to_rebuild() {
        let json = r#"{"model":"SUV","ctrlpts":[[0,0],[1,2],[2,0],[4,4]],"weights":[1,1,0,1]}"#;
        let err = DesignRecord::from_json(json).unwrap().curve().unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::Curve(CurveError::InvalidCurveDefinition(
                Constraint::NonPositiveWeight { index: 2, .. }
            ))
        ));
    }
}
