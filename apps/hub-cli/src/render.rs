//! Plain-text rendering of backend resources

use hub_client::models::{MedicalImage, Prediction, PredictionReport, TrainingRecord, User};

pub fn prediction_report(report: &PredictionReport) {
    let verdict = if report.malignant { "MALIGNANT" } else { "benign" };
    println!("Diagnosis : {}", report.label);
    println!("Verdict   : {verdict}");
    println!("Confidence: {}%", report.confidence_pct);
    if let Some(region) = &report.affected_region {
        println!("Region    : {region}");
    }
    if let Some(metrics) = &report.metrics {
        println!(
            "Metrics   : precision {:.2}  recall {:.2}  accuracy {:.2}",
            metrics.precision, metrics.recall, metrics.accuracy
        );
    }
}

pub fn history(predictions: &[Prediction]) {
    if predictions.is_empty() {
        println!("No predictions yet");
        return;
    }
    println!("{:<6} {:<28} {:<10} {:<8} {}", "id", "diagnosis", "confidence", "image", "date");
    for p in predictions {
        println!(
            "{:<6} {:<28} {:<10} {:<8} {}",
            p.id,
            p.result.label,
            format!("{}%", (p.confidence * 100.0).round()),
            p.image_id,
            p.recorded_at.format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn images(images: &[MedicalImage]) {
    if images.is_empty() {
        println!("No images uploaded yet");
        return;
    }
    println!("{:<6} {:<20} {}", "id", "uploaded", "reference");
    for image in images {
        println!(
            "{:<6} {:<20} {}",
            image.id,
            image.uploaded_at.format("%Y-%m-%d %H:%M"),
            image.image_url
        );
    }
}

pub fn trainings(records: &[TrainingRecord]) {
    if records.is_empty() {
        println!("No training datasets uploaded yet");
        return;
    }
    println!("{:<6} {:<20} {}", "id", "uploaded", "file");
    for record in records {
        println!(
            "{:<6} {:<20} {}",
            record.id,
            record.uploaded_at.format("%Y-%m-%d %H:%M"),
            record.file_url
        );
    }
}

pub fn users(users: &[User]) {
    if users.is_empty() {
        println!("No users");
        return;
    }
    println!(
        "{:<6} {:<14} {:<30} {:<6} {}",
        "id", "cc", "email", "role", "status"
    );
    for user in users {
        println!(
            "{:<6} {:<14} {:<30} {:<6} {}",
            user.id, user.cc, user.email, user.role, user.status
        );
    }
}
