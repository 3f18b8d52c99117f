//! Medical image model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploaded medical image as returned by `/api/imagenes/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalImage {
    pub id: i64,
    /// Server-side reference to the stored image
    #[serde(rename = "imagen")]
    pub image_url: String,
    #[serde(rename = "fecha_subida")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(rename = "subida_por")]
    pub uploaded_by: i64,
    #[serde(rename = "subida_por_email", default)]
    pub uploaded_by_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let json = r#"{
            "id": 12,
            "imagen": "/media/imagenes/lesion.png",
            "fecha_subida": "2024-05-02T10:30:00Z",
            "subida_por": 4,
            "subida_por_email": "med@hospital.example"
        }"#;
        let image: MedicalImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, 12);
        assert_eq!(image.image_url, "/media/imagenes/lesion.png");
        assert_eq!(image.uploaded_by_email.as_deref(), Some("med@hospital.example"));
    }
}
