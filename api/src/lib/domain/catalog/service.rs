use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::Lesson;
use crate::domain::catalog::models::LearningModule;
use crate::domain::catalog::models::Playlist;
use crate::domain::catalog::models::PlaylistTrack;

/// Read-only content catalog.
///
/// Workout playlists, learning modules, and the daily quote are curated
/// content shipped with the backend, not user data. Built once at startup
/// and shared read-only across requests.
pub struct CatalogService {
    playlists: Vec<Playlist>,
    modules: Vec<LearningModule>,
}

fn track(id: i64, title: &str, artist: &str, duration: &str) -> PlaylistTrack {
    PlaylistTrack {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        duration: duration.to_string(),
    }
}

fn lesson(id: i64, title: &str) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
    }
}

impl CatalogService {
    pub fn new() -> Self {
        let playlists = vec![
            Playlist {
                genre: "High Intensity".to_string(),
                tracks: vec![
                    track(1, "Power Up", "Workout Kings", "3:45"),
                    track(2, "Maximum Energy", "Fitness Beats", "4:10"),
                    track(3, "Ultimate Cardio", "Training Mix", "3:55"),
                ],
            },
            Playlist {
                genre: "Cardio".to_string(),
                tracks: vec![
                    track(4, "Running Rhythm", "Cardio Crew", "4:20"),
                    track(5, "Endurance Mix", "Fitness Flow", "3:50"),
                    track(6, "Cardio Blast", "Workout Pros", "4:05"),
                ],
            },
            Playlist {
                genre: "Strength Training".to_string(),
                tracks: vec![
                    track(7, "Power Lift", "Gym Heroes", "3:30"),
                    track(8, "Iron Pumping", "Muscle Mix", "4:15"),
                    track(9, "Strong & Steady", "Weight Warriors", "3:40"),
                ],
            },
            Playlist {
                genre: "Yoga".to_string(),
                tracks: vec![
                    track(10, "Peaceful Flow", "Zen Masters", "5:20"),
                    track(11, "Mindful Movement", "Yoga Vibes", "6:10"),
                    track(12, "Inner Balance", "Meditation Mood", "5:45"),
                ],
            },
            Playlist {
                genre: "Cool Down".to_string(),
                tracks: vec![
                    track(13, "Gentle Recovery", "Cool Beats", "4:30"),
                    track(14, "Stretch & Relax", "Chill Zone", "4:50"),
                    track(15, "Wind Down", "Recovery Rhythm", "4:15"),
                ],
            },
        ];

        let modules = vec![
            LearningModule {
                id: 1,
                title: "Financial Freedom Basics".to_string(),
                description: "Learn the fundamentals of personal finance and wealth building."
                    .to_string(),
                category: "Finance".to_string(),
                duration: "2 hours".to_string(),
                lessons: vec![
                    lesson(1, "Budgeting Basics"),
                    lesson(2, "Saving Strategies"),
                    lesson(3, "Investment Fundamentals"),
                    lesson(4, "Debt Management"),
                ],
            },
            LearningModule {
                id: 2,
                title: "Productivity Mastery".to_string(),
                description: "Master techniques to boost your productivity and achieve more."
                    .to_string(),
                category: "Productivity".to_string(),
                duration: "1.5 hours".to_string(),
                lessons: vec![
                    lesson(1, "Time Management"),
                    lesson(2, "Goal Setting"),
                    lesson(3, "Focus Techniques"),
                ],
            },
        ];

        Self { playlists, modules }
    }

    /// Genre names in catalog order.
    pub fn genres(&self) -> Vec<&str> {
        self.playlists.iter().map(|p| p.genre.as_str()).collect()
    }

    /// Tracks for one genre.
    ///
    /// # Errors
    /// * `GenreNotFound` - No playlist with this genre name
    pub fn playlist(&self, genre: &str) -> Result<&[PlaylistTrack], CatalogError> {
        self.playlists
            .iter()
            .find(|p| p.genre == genre)
            .map(|p| p.tracks.as_slice())
            .ok_or_else(|| CatalogError::GenreNotFound(genre.to_string()))
    }

    /// All learning modules.
    pub fn modules(&self) -> &[LearningModule] {
        &self.modules
    }

    /// One learning module by id.
    ///
    /// # Errors
    /// * `ModuleNotFound` - No module with this id
    pub fn module(&self, module_id: i64) -> Result<&LearningModule, CatalogError> {
        self.modules
            .iter()
            .find(|m| m.id == module_id)
            .ok_or(CatalogError::ModuleNotFound(module_id))
    }

    /// Check that a lesson exists inside a module.
    ///
    /// # Errors
    /// * `ModuleNotFound` - No module with this id
    /// * `LessonNotFound` - Module exists but has no such lesson
    pub fn lesson(&self, module_id: i64, lesson_id: i64) -> Result<&Lesson, CatalogError> {
        self.module(module_id)?
            .lessons
            .iter()
            .find(|l| l.id == lesson_id)
            .ok_or(CatalogError::LessonNotFound {
                module_id,
                lesson_id,
            })
    }

    /// The quote of the day.
    pub fn daily_quote(&self) -> &'static str {
        "Success is not final, failure is not fatal: it is the courage to continue that counts."
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
