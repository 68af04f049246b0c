use crate::domain::common::catalog_record::take;
use crate::domain::common::serde_helpers::{lenient_string_list, lenient_text, string_or_number};
use crate::domain::common::{CatalogRecord, FieldValues};
use crate::shared::metadata::{FieldMetadata, Requirement};
use serde::{Deserialize, Serialize};

/// A curriculum chapter as returned by the `curriculum_plans` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumChapter {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    /// Free text, e.g. "10 hours"
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// Ordered lesson titles; the resource spells the key `lessions`
    #[serde(rename = "lessions", default, deserialize_with = "lenient_string_list")]
    pub lessons: Vec<String>,
}

/// Request body for creating or replacing a chapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumChapterDto {
    pub title: String,
    pub duration: String,
    pub description: String,
    #[serde(rename = "lessions")]
    pub lessons: Vec<String>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Chapter title", Requirement::Always)
        .with_placeholder("e.g. Chapter 1 - Getting started with Leptos"),
    FieldMetadata::new("duration", "Duration", Requirement::Always).with_placeholder("e.g. 10 hours"),
    FieldMetadata::new("description", "Description", Requirement::Optional).multiline(),
];

impl CatalogRecord for CurriculumChapter {
    type Draft = CurriculumChapterDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "duration" => Some(&self.duration),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn sub_items(&self) -> &[String] {
        &self.lessons
    }

    fn element_name() -> &'static str {
        "Chapter"
    }

    fn list_name() -> &'static str {
        "Curriculum"
    }

    fn sub_items_label() -> &'static str {
        "Lessons"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn build_draft(fields: &FieldValues, sub_items: Vec<String>) -> Self::Draft {
        CurriculumChapterDto {
            title: take(fields, "title"),
            duration: take(fields, "duration"),
            description: take(fields, "description"),
            lessons: sub_items,
        }
    }

    fn from_draft(id: String, draft: Self::Draft) -> Self {
        Self {
            id,
            title: draft.title,
            duration: draft.duration,
            description: draft.description,
            lessons: draft.lessons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_resource_item() {
        let json = r#"{
            "id": "2",
            "title": "Ch2",
            "duration": "4 hours",
            "description": "",
            "lessions": ["Signals", "Effects"]
        }"#;
        let chapter: CurriculumChapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.id, "2");
        assert_eq!(chapter.lessons, vec!["Signals", "Effects"]);
        assert_eq!(chapter.sub_items().len(), 2);
    }

    #[test]
    fn test_missing_lessons_are_empty() {
        let chapter: CurriculumChapter =
            serde_json::from_str(r#"{"id": "9", "title": "Draft"}"#).unwrap();
        assert!(chapter.lessons.is_empty());
        assert_eq!(chapter.duration, "");
    }

    #[test]
    fn test_draft_body_has_no_id() {
        let mut fields = FieldValues::new();
        fields.insert("title", "Intro".to_string());
        fields.insert("duration", "2 hours".to_string());
        let draft = CurriculumChapter::build_draft(&fields, vec!["Setup".to_string()]);

        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["lessions"], serde_json::json!(["Setup"]));
        assert_eq!(body["description"], "");
    }

    #[test]
    fn test_field_values_follow_metadata() {
        let chapter = CurriculumChapter {
            id: "1".into(),
            title: "Ch1".into(),
            duration: "1h".into(),
            description: "About".into(),
            lessons: vec![],
        };
        let values = chapter.field_values();
        assert_eq!(values.len(), 3);
        assert_eq!(values["title"], "Ch1");
        assert_eq!(values["description"], "About");
        assert_eq!(chapter.field_value("lessions"), None);
    }
}
