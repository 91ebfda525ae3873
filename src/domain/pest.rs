// SPDX-License-Identifier: MPL-2.0
//! Pest and disease detections.

use std::fmt;

/// How serious a detected problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    /// Parses a provider label such as `"high"`. Unknown labels are `None`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picture shown next to a detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceImage {
    /// The photo the user uploaded.
    Upload,
    /// A remote reference photo.
    Url(String),
}

/// A detection result as displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PestDetection {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub treatment: String,
    pub image: ReferenceImage,
}

/// Fields returned by the vision model. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisionFindings {
    pub name: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub treatment: Option<String>,
}

pub const UNKNOWN_DISEASE: &str = "Unknown disease";
pub const DEFAULT_TREATMENT: &str =
    "Consult local agronomist and follow integrated pest management.";

impl PestDetection {
    /// Builds a detection from model findings, filling gaps with defaults.
    /// Blank strings count as absent.
    #[must_use]
    pub fn from_findings(id: impl Into<String>, findings: VisionFindings) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            id: id.into(),
            name: non_blank(findings.name).unwrap_or_else(|| UNKNOWN_DISEASE.to_string()),
            severity: findings
                .severity
                .as_deref()
                .and_then(Severity::parse)
                .unwrap_or_default(),
            treatment: non_blank(findings.treatment)
                .unwrap_or_else(|| DEFAULT_TREATMENT.to_string()),
            image: ReferenceImage::Upload,
        }
    }
}

/// Local reference list shown when the vision model cannot be reached.
#[must_use]
pub fn reference_detections() -> Vec<PestDetection> {
    vec![
        PestDetection {
            id: "1".to_string(),
            name: "Aphids".to_string(),
            severity: Severity::Medium,
            treatment: "Apply neem oil spray. Mix 5ml neem oil in 1 liter water".to_string(),
            image: ReferenceImage::Url(
                "https://images.pexels.com/photos/6167651/pexels-photo-6167651.jpeg".to_string(),
            ),
        },
        PestDetection {
            id: "2".to_string(),
            name: "Leaf Blight".to_string(),
            severity: Severity::High,
            treatment: "Remove affected leaves and apply copper fungicide".to_string(),
            image: ReferenceImage::Url(
                "https://images.pexels.com/photos/4750309/pexels-photo-4750309.jpeg".to_string(),
            ),
        },
    ]
}
