use crate::shared::config::ApiConfig;
use crate::shared::remote::HttpCollection;
use contracts::domain::a001_curriculum::aggregate::CurriculumChapter;

pub const DELETE_QUESTION: &str =
    "Delete this chapter? All of its lessons will be lost.";

/// Client for the curriculum resource
pub fn client(api: &ApiConfig) -> HttpCollection<CurriculumChapter> {
    HttpCollection::new(api.curriculum_url())
}

/// "3 lessons", "1 lesson"
pub fn lesson_count_label(count: usize) -> String {
    if count == 1 {
        "1 lesson".to_string()
    } else {
        format!("{} lessons", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_count_label() {
        assert_eq!(lesson_count_label(0), "0 lessons");
        assert_eq!(lesson_count_label(1), "1 lesson");
        assert_eq!(lesson_count_label(12), "12 lessons");
    }
}
