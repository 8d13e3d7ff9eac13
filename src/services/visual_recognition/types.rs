//! Wire models for the Visual Recognition v3 API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Classify
// =============================================================================

/// Image file payload for `classify` and `detect_faces`.
#[derive(Debug, Clone)]
pub struct ImagesFile {
    pub data: bytes::Bytes,
    pub filename: String,
    pub content_type: String,
}

/// Options for the `classify` operation.
///
/// At least one of `images_file` or `url` must be supplied. Both travel in a
/// multipart form body: the file as a file part, everything else JSON-encoded
/// in a `parameters` text part.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Image file (single image or zip of images, up to 20).
    pub images_file: Option<ImagesFile>,
    /// URL of an image to classify instead of, or in addition to, a file.
    pub url: Option<String>,
    /// Minimum score a class must reach to be returned.
    pub threshold: Option<f64>,
    /// Categories of classifiers to apply (`IBM`, `me`).
    pub owners: Option<Vec<String>>,
    /// Specific classifier IDs; `default` names the prebuilt classifier.
    pub classifier_ids: Option<Vec<String>>,
    /// Language of the returned class names (`Accept-Language` header).
    pub accept_language: Option<String>,
}

/// Options for the `detect_faces` operation. At least one of `images_file`
/// or `url` must be supplied.
#[derive(Debug, Clone, Default)]
pub struct DetectFacesOptions {
    pub images_file: Option<ImagesFile>,
    pub url: Option<String>,
}

/// Response of `classify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    #[serde(default)]
    pub images: Vec<ClassifiedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<WarningInfo>>,
}

/// Classification results for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    #[serde(default)]
    pub classifiers: Vec<ClassifierResult>,
}

/// Results from one classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResult {
    pub name: String,
    pub classifier_id: String,
    #[serde(default)]
    pub classes: Vec<ClassResult>,
}

/// One recognized class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassResult {
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<String>,
}

// =============================================================================
// Detect faces
// =============================================================================

/// Response of `detect_faces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedFaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    #[serde(default)]
    pub images: Vec<ImageWithFaces>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<WarningInfo>>,
}

/// Faces found in one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageWithFaces {
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// One detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Face {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<FaceAge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<FaceGender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_location: Option<FaceLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceAge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceGender {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Bounding box of a face within the source image, in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
}

// =============================================================================
// Shared
// =============================================================================

/// Per-image error carried inside an otherwise-successful response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
}

/// Non-fatal warning attached to a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarningInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_images_parse() {
        let json = r#"{
            "custom_classes": 0,
            "images_processed": 1,
            "images": [
                {
                    "image": "fruitbowl.jpg",
                    "classifiers": [
                        {
                            "name": "default",
                            "classifier_id": "default",
                            "classes": [
                                {"class": "banana", "score": 0.562, "type_hierarchy": "/fruit/banana"},
                                {"class": "fruit", "score": 0.788}
                            ]
                        }
                    ]
                }
            ]
        }"#;
        let response: ClassifiedImages = serde_json::from_str(json).unwrap();
        let classes = &response.images[0].classifiers[0].classes;
        assert_eq!(classes[0].class, "banana");
        assert_eq!(classes[0].type_hierarchy.as_deref(), Some("/fruit/banana"));
        assert_eq!(classes[1].score, Some(0.788));
    }

    #[test]
    fn test_detected_faces_parse() {
        let json = r#"{
            "images_processed": 1,
            "images": [
                {
                    "faces": [
                        {
                            "age": {"min": 23, "max": 26, "score": 0.7},
                            "gender": {"gender": "FEMALE", "score": 0.98},
                            "face_location": {"width": 92, "height": 116, "left": 250, "top": 103}
                        }
                    ],
                    "source_url": "https://example.com/portrait.jpg"
                }
            ]
        }"#;
        let response: DetectedFaces = serde_json::from_str(json).unwrap();
        let face = &response.images[0].faces[0];
        assert_eq!(face.age.as_ref().unwrap().min, Some(23));
        assert_eq!(face.face_location.as_ref().unwrap().left, Some(250.0));
    }
}
