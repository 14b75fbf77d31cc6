//! Translated speech balloon records

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::geometry::{self, GridPoint, NormalizedRect};
use crate::error::Result;
use crate::lenient;

/// Outline shape of a detected balloon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonShape {
    #[default]
    Oval,
    Rectangle,
    Cloud,
    Jagged,
}

impl BalloonShape {
    /// Map a raw shape tag to a variant. Unknown tags read as `Oval`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "OVAL" => BalloonShape::Oval,
            "RECTANGLE" => BalloonShape::Rectangle,
            "CLOUD" => BalloonShape::Cloud,
            "JAGGED" => BalloonShape::Jagged,
            _ => BalloonShape::Oval,
        }
    }
}

/// A translated speech balloon with its position on the detection grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatedBalloon {
    /// Instance identity; fresh for every decoded balloon, never read from
    /// the payload
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Text as recognized on the page
    pub original_text: String,
    /// Translated text to overlay
    #[serde(rename = "italian_translation")]
    pub translated_text: String,
    /// Whether the overlay should replace this balloon's text
    #[serde(default = "lenient::default_true", deserialize_with = "lenient::or_true")]
    pub should_translate: bool,
    /// Balloon outline shape
    #[serde(default, deserialize_with = "shape_or_default")]
    pub shape: BalloonShape,
    /// `[yMin, xMin, yMax, xMax]` on the detection grid
    #[serde(deserialize_with = "grid_quad")]
    pub box_2d: Vec<i64>,
    /// Optional explicit `[y, x]` anchor for the overlay text
    #[serde(default, deserialize_with = "lenient::or_none")]
    pub center_point: Option<Vec<i64>>,
}

impl TranslatedBalloon {
    /// Decode a single balloon record from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a detection payload carrying a list of balloons.
    pub fn list_from_json(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Bounding box mapped onto the unit square.
    pub fn normalized_bounding_box(&self) -> NormalizedRect {
        geometry::normalized_bounding_box(&self.box_2d)
    }

    /// Grid point to anchor the overlay text at.
    pub fn center(&self) -> GridPoint {
        geometry::center(&self.box_2d, self.center_point.as_deref())
    }
}

/// Fallback shape decoding: any non-string or unknown tag reads as the
/// default shape rather than failing the record.
fn shape_or_default<'de, D>(deserializer: D) -> std::result::Result<BalloonShape, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some(tag) => BalloonShape::from_tag(tag),
        None => BalloonShape::default(),
    })
}

/// Strict `[yMin, xMin, yMax, xMax]` decoding; the box is the one piece of
/// geometry a balloon cannot exist without.
fn grid_quad<'de, D>(deserializer: D) -> std::result::Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let quad = Vec::<i64>::deserialize(deserializer)?;
    if quad.len() != 4 {
        return Err(serde::de::Error::invalid_length(
            quad.len(),
            &"a [yMin, xMin, yMax, xMax] quad",
        ));
    }
    Ok(quad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let json = br#"{"original_text": "a", "italian_translation": "b", "box_2d": [100, 200, 300, 400]}"#;

        let balloon = TranslatedBalloon::from_json(json).unwrap();
        assert_eq!(balloon.original_text, "a");
        assert_eq!(balloon.translated_text, "b");
        assert!(balloon.should_translate);
        assert_eq!(balloon.shape, BalloonShape::Oval);
        assert_eq!(balloon.center_point, None);
        assert_eq!(
            balloon.normalized_bounding_box(),
            NormalizedRect {
                x: 0.2,
                y: 0.1,
                width: 0.2,
                height: 0.2
            }
        );
        assert_eq!(balloon.center(), GridPoint { x: 300, y: 200 });
    }

    #[test]
    fn test_explicit_center_point_wins() {
        let json = br#"{
            "original_text": "a",
            "italian_translation": "b",
            "box_2d": [100, 200, 300, 400],
            "center_point": [50, 60]
        }"#;

        let balloon = TranslatedBalloon::from_json(json).unwrap();
        assert_eq!(balloon.center(), GridPoint { x: 60, y: 50 });
    }

    #[test]
    fn test_malformed_center_point_falls_back_to_midpoint() {
        let json = br#"{
            "original_text": "a",
            "italian_translation": "b",
            "box_2d": [100, 200, 300, 400],
            "center_point": "middle"
        }"#;

        let balloon = TranslatedBalloon::from_json(json).unwrap();
        assert_eq!(balloon.center_point, None);
        assert_eq!(balloon.center(), GridPoint { x: 300, y: 200 });
    }

    #[test]
    fn test_shape_tags_match_case_insensitively() {
        for (tag, shape) in [
            ("oval", BalloonShape::Oval),
            ("Rectangle", BalloonShape::Rectangle),
            ("CLOUD", BalloonShape::Cloud),
            ("jagged", BalloonShape::Jagged),
        ] {
            let json = format!(
                r#"{{"original_text": "a", "italian_translation": "b", "box_2d": [0, 0, 10, 10], "shape": "{tag}"}}"#
            );
            let balloon = TranslatedBalloon::from_json(json.as_bytes()).unwrap();
            assert_eq!(balloon.shape, shape, "tag {tag:?}");
        }
    }

    #[test]
    fn test_unknown_shape_reads_as_oval() {
        let json = br#"{
            "original_text": "a",
            "italian_translation": "b",
            "box_2d": [0, 0, 10, 10],
            "shape": "starburst"
        }"#;

        let balloon = TranslatedBalloon::from_json(json).unwrap();
        assert_eq!(balloon.shape, BalloonShape::Oval);
    }

    #[test]
    fn test_non_string_shape_reads_as_oval() {
        let json = br#"{
            "original_text": "a",
            "italian_translation": "b",
            "box_2d": [0, 0, 10, 10],
            "shape": 3
        }"#;

        let balloon = TranslatedBalloon::from_json(json).unwrap();
        assert_eq!(balloon.shape, BalloonShape::Oval);
    }

    #[test]
    fn test_should_translate_false_is_respected() {
        let json = br#"{
            "original_text": "a",
            "italian_translation": "b",
            "box_2d": [0, 0, 10, 10],
            "should_translate": false
        }"#;

        let balloon = TranslatedBalloon::from_json(json).unwrap();
        assert!(!balloon.should_translate);
    }

    #[test]
    fn test_missing_box_is_an_error() {
        let json = br#"{"original_text": "a", "italian_translation": "b"}"#;
        assert!(TranslatedBalloon::from_json(json).is_err());
    }

    #[test]
    fn test_short_box_is_an_error() {
        let json = br#"{"original_text": "a", "italian_translation": "b", "box_2d": [1, 2, 3]}"#;
        assert!(TranslatedBalloon::from_json(json).is_err());
    }

    #[test]
    fn test_missing_translation_is_an_error() {
        let json = br#"{"original_text": "a", "box_2d": [1, 2, 3, 4]}"#;
        assert!(TranslatedBalloon::from_json(json).is_err());
    }

    #[test]
    fn test_each_decode_gets_a_fresh_identity() {
        let json = br#"{"original_text": "a", "italian_translation": "b", "box_2d": [1, 2, 3, 4]}"#;

        let first = TranslatedBalloon::from_json(json).unwrap();
        let second = TranslatedBalloon::from_json(json).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.original_text, second.original_text);
        assert_eq!(first.translated_text, second.translated_text);
        assert_eq!(first.box_2d, second.box_2d);
    }

    #[test]
    fn test_decode_balloon_list() {
        let json = br#"[
            {"original_text": "a", "italian_translation": "b", "box_2d": [0, 0, 10, 10]},
            {"original_text": "c", "italian_translation": "d", "box_2d": [10, 10, 20, 20], "shape": "cloud"}
        ]"#;

        let balloons = TranslatedBalloon::list_from_json(json).unwrap();
        assert_eq!(balloons.len(), 2);
        assert_eq!(balloons[1].shape, BalloonShape::Cloud);
        assert_ne!(balloons[0].id, balloons[1].id);
    }
}
