//! Class configuration entity

use serde::{Deserialize, Serialize};

/// Identifies which timetable to show and where lunch goes.
///
/// Serialized in the same camelCase shape the browser build persists, so
/// stored values survive across the native and wasm builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConfig {
    pub school: String,
    pub school_code: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_no: String,
    /// Number of periods before the lunch break.
    pub lunch_after: u32,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            school: "목운중학교".to_string(),
            school_code: "7081492".to_string(),
            grade: "3".to_string(),
            class_no: "4".to_string(),
            lunch_after: 4,
        }
    }
}

impl ClassConfig {
    pub fn new(
        school: impl Into<String>,
        school_code: impl Into<String>,
        grade: impl Into<String>,
        class_no: impl Into<String>,
        lunch_after: u32,
    ) -> Self {
        Self {
            school: school.into(),
            school_code: school_code.into(),
            grade: grade.into(),
            class_no: class_no.into(),
            lunch_after,
        }
    }

    /// Key under which teacher notes for this class are stored.
    /// School name and lunch position are not part of the key.
    pub fn annotation_key(&self) -> String {
        format!("{}-{}-{}", self.school_code, self.grade, self.class_no)
    }

    /// Page title shown by the UI.
    pub fn title(&self) -> String {
        format!("{}학년 {}반 시간표 - {}", self.grade, self.class_no, self.school)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassConfig::default();
        assert_eq!(config.school, "목운중학교");
        assert_eq!(config.grade, "3");
        assert_eq!(config.class_no, "4");
        assert_eq!(config.lunch_after, 4);
        assert_eq!(config.annotation_key(), "7081492-3-4");
    }

    #[test]
    fn test_serializes_with_class_field() {
        let json = serde_json::to_value(ClassConfig::default()).unwrap();
        assert_eq!(json["class"], "4");
        assert_eq!(json["schoolCode"], "7081492");
        assert_eq!(json["lunchAfter"], 4);
    }

    #[test]
    fn test_annotation_key_ignores_lunch_and_name() {
        let a = ClassConfig::new("A중학교", "100", "2", "1", 3);
        let b = ClassConfig::new("A중학교(개명)", "100", "2", "1", 5);
        assert_eq!(a.annotation_key(), b.annotation_key());
    }
}
