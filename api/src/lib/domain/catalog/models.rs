use serde::Serialize;

/// One track inside a workout playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistTrack {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub duration: String,
}

/// A genre with its playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub genre: String,
    pub tracks: Vec<PlaylistTrack>,
}

/// One lesson inside a learning module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
}

/// A self-contained learning module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningModule {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub lessons: Vec<Lesson>,
}
