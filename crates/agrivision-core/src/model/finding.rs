/// The canned findings table used by the simulated analysis.
///
/// Each finding is a fixed (disease, confidence, treatment) triple. The
/// analysis picks one uniformly at random; nothing is inferred from pixels.

/// One entry of the findings table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finding {
    pub disease: &'static str,
    /// Model confidence in `0.0..=1.0`.
    pub confidence: f64,
    pub treatment: &'static str,
}

/// The four fixed findings, in table order.
pub const FINDINGS: [Finding; 4] = [
    Finding {
        disease: "Leaf Blight",
        confidence: 0.92,
        treatment: "Remove affected leaves, improve air circulation, avoid overhead watering, apply a copper-based fungicide as directed.",
    },
    Finding {
        disease: "Powdery Mildew",
        confidence: 0.88,
        treatment: "Increase spacing, water early in the day, use potassium bicarbonate spray, and prune to reduce humidity.",
    },
    Finding {
        disease: "Leaf Rust",
        confidence: 0.90,
        treatment: "Collect and destroy infected debris, rotate crops, and treat with an appropriate fungicide (e.g., triazoles).",
    },
    Finding {
        disease: "Bacterial Leaf Spot",
        confidence: 0.86,
        treatment: "Avoid working with wet plants, sanitize tools, and apply copper sprays. Consider resistant varieties next season.",
    },
];

/// Look up a finding by disease name (exact match).
pub fn finding_by_disease(disease: &str) -> Option<&'static Finding> {
    FINDINGS.iter().find(|f| f.disease == disease)
}

/// Format a `0.0..=1.0` confidence as a whole percentage, e.g. `0.88` → `"88%"`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_four_distinct_diseases() {
        let mut names: Vec<&str> = FINDINGS.iter().map(|f| f.disease).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_confidences_are_in_range() {
        for f in &FINDINGS {
            assert!((0.0..=1.0).contains(&f.confidence), "{}", f.disease);
        }
    }

    #[test]
    fn test_finding_by_disease() {
        let f = finding_by_disease("Leaf Rust").expect("known disease");
        assert_eq!(f.confidence, 0.90);
        assert!(finding_by_disease("Root Rot").is_none());
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.92), "92%");
        assert_eq!(format_confidence(0.9), "90%");
        assert_eq!(format_confidence(0.0), "0%");
    }
}
