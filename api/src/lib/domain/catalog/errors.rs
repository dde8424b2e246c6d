use thiserror::Error;

/// Error for catalog lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Genre not found: {0}")]
    GenreNotFound(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(i64),

    #[error("Lesson {lesson_id} not found in module {module_id}")]
    LessonNotFound { module_id: i64, lesson_id: i64 },
}
