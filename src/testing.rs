//! Recording collaborators and fixtures shared by the unit tests.

use crate::disk::{TextWriter, WriteError};
use crate::download::{AssetDownloader, DownloadError};
use crate::remote::RemoteSeries;
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Records every download request; references listed in `failing` fail.
#[derive(Default)]
pub(crate) struct RecordingDownloader {
    calls: RefCell<Vec<(String, PathBuf)>>,
    failing: HashSet<String>,
}

impl RecordingDownloader {
    pub fn failing_on(references: &[&str]) -> Self {
        Self {
            calls: RefCell::default(),
            failing: references.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl AssetDownloader for RecordingDownloader {
    fn download(&self, reference: &str, destination: &Path) -> Result<(), DownloadError> {
        self.calls
            .borrow_mut()
            .push((reference.to_string(), destination.to_path_buf()));

        if self.failing.contains(reference) {
            return Err(DownloadError::HttpStatus {
                url: reference.to_string(),
                status: 404,
            });
        }

        Ok(())
    }
}

/// Keeps written descriptors in memory.
#[derive(Default)]
pub(crate) struct RecordingWriter {
    writes: RefCell<Vec<(PathBuf, String)>>,
}

impl RecordingWriter {
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.borrow().clone()
    }
}

impl TextWriter for RecordingWriter {
    fn write_text(&self, path: &Path, content: &str) -> Result<(), WriteError> {
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

/// The "Foo" series: poster and banner art, two poster-style seasons (the
/// first listed twice), one wide season banner and two episodes.
pub(crate) fn foo_series() -> RemoteSeries {
    serde_json::from_value(json!({
        "id": 80379,
        "name": "Foo",
        "rating": 8.5,
        "overview": "A show.",
        "content_rating": "TV-PG",
        "genres": ["Comedy", "Drama"],
        "first_aired": "2010-03-05",
        "network": "ABC",
        "actors": [
            { "name": "Jane Doe", "role": "Alice", "image": "actors/1.jpg" }
        ],
        "episodes": [
            {
                "season_number": 1,
                "episode_number": 1,
                "name": "Pilot",
                "first_aired": "2010-03-05",
                "overview": "The first one.",
                "banner_path": "episodes/80379/1.jpg",
                "writers": ["Writer A"],
                "directors": ["Director A"],
                "guest_stars": ["Guest One", ""]
            },
            {
                "season_number": 1,
                "episode_number": 2,
                "name": "The Second One",
                "first_aired": "2010-03-12",
                "banner_path": "episodes/80379/2.jpg"
            }
        ],
        "season_banners": [
            { "season": 1, "style": "season", "banner_path": "seasons/80379-1.jpg" },
            { "season": 1, "style": "seasonwide", "banner_path": "seasonswide/80379-1.jpg" },
            { "season": 2, "style": "season", "banner_path": "seasons/80379-2.jpg" },
            { "season": 1, "style": "season", "banner_path": "seasons/80379-1-alt.jpg" }
        ],
        "fanart_path": "fanart/original/80379-1.jpg",
        "poster_path": "posters/80379-1.jpg",
        "banner_path": "graphical/80379-g.jpg"
    }))
    .expect("fixture matches the remote record schema")
}
