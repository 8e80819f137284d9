/// A single completed analysis, as shown in the history and persisted to the store.
use super::finding::{format_confidence, Finding};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one `analyze` call.
///
/// Serialised field order matches the stored JSON layout:
/// `disease, confidence, treatment, date, image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub disease: String,
    pub confidence: f64,
    pub treatment: String,
    /// ISO-8601 UTC timestamp, millisecond precision, `Z` suffix.
    pub date: String,
    /// Data URL of the analysed image, embedded inline.
    pub image: String,
}

impl AnalysisResult {
    /// Build a result from a finding, stamped at `completed_at`.
    pub fn from_finding(finding: &Finding, completed_at: DateTime<Utc>, image_url: &str) -> Self {
        Self {
            disease: finding.disease.to_owned(),
            confidence: finding.confidence,
            treatment: finding.treatment.to_owned(),
            date: format_timestamp(completed_at),
            image: image_url.to_owned(),
        }
    }

    /// Parse `date` back into a timestamp. `None` for foreign or garbled values.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }

    /// Confidence as a whole percentage string.
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }

    /// Completion time in local time for display, falling back to the raw string.
    pub fn local_date_label(&self) -> String {
        match self.completed_at() {
            Some(ts) => ts
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => self.date.clone(),
        }
    }
}

/// Format a timestamp the way results store it, e.g. `2025-03-01T09:15:02.431Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FINDINGS;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 15, 2).unwrap()
            + chrono::Duration::milliseconds(431)
    }

    #[test]
    fn test_from_finding_copies_table_entry() {
        let r =
            AnalysisResult::from_finding(&FINDINGS[1], sample_time(), "data:image/png;base64,AA==");
        assert_eq!(r.disease, "Powdery Mildew");
        assert_eq!(r.confidence, 0.88);
        assert_eq!(r.treatment, FINDINGS[1].treatment);
        assert_eq!(r.image, "data:image/png;base64,AA==");
    }

    #[test]
    fn test_date_format_has_millis_and_z() {
        assert_eq!(format_timestamp(sample_time()), "2025-03-01T09:15:02.431Z");
    }

    #[test]
    fn test_completed_at_parses_own_format() {
        let r = AnalysisResult::from_finding(&FINDINGS[0], sample_time(), "");
        assert_eq!(r.completed_at(), Some(sample_time()));
    }

    #[test]
    fn test_garbled_date_is_shown_raw() {
        let mut r = AnalysisResult::from_finding(&FINDINGS[0], sample_time(), "");
        r.date = "yesterday".into();
        assert!(r.completed_at().is_none());
        assert_eq!(r.local_date_label(), "yesterday");
    }

    #[test]
    fn test_json_field_order() {
        let r = AnalysisResult::from_finding(&FINDINGS[2], sample_time(), "x");
        let json = serde_json::to_string(&r).unwrap();
        let d = json.find("\"disease\"").unwrap();
        let c = json.find("\"confidence\"").unwrap();
        let t = json.find("\"treatment\"").unwrap();
        let dt = json.find("\"date\"").unwrap();
        let i = json.find("\"image\"").unwrap();
        assert!(d < c && c < t && t < dt && dt < i);
    }
}
