use crate::shared::details::DetailsViewModel;
use contracts::domain::a001_curriculum::aggregate::CurriculumChapter;

/// ViewModel for the chapter editor
pub type ChapterDetailsViewModel = DetailsViewModel<CurriculumChapter>;

pub fn chapter_title(snapshot: Option<&CurriculumChapter>) -> String {
    match snapshot {
        Some(chapter) => format!("Edit chapter: {}", chapter.title),
        None => "New chapter".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_title_names_the_edited_chapter() {
        let chapter = CurriculumChapter {
            id: "2".into(),
            title: "Ownership".into(),
            duration: "3 hours".into(),
            description: String::new(),
            lessons: vec![],
        };
        assert_eq!(chapter_title(Some(&chapter)), "Edit chapter: Ownership");
        assert_eq!(chapter_title(None), "New chapter");
    }
}
