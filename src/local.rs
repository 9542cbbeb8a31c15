//! Locally known media entities and the episode lookup seam.

use crate::layout;
use std::collections::HashMap;
use std::path::PathBuf;

/// A series as it exists in the local library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSeries {
    /// Identifier of the series within the TV database
    pub series_id: u32,
    /// Display title
    pub title: String,
    /// Root directory holding the series
    pub path: PathBuf,
}

/// A media file on disk, holding one or more episodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEpisodeFile {
    pub episode_file_id: u32,
    pub season_number: u32,
    /// Full path of the media file
    pub path: PathBuf,
}

impl LocalEpisodeFile {
    /// Where the episode descriptor for this file lives.
    pub fn descriptor_path(&self) -> PathBuf {
        layout::sibling_with_extension(&self.path, layout::NFO_EXTENSION)
    }

    /// Where a per-file episode thumbnail lives.
    pub fn thumbnail_path(&self) -> PathBuf {
        layout::sibling_with_extension(&self.path, layout::TBN_EXTENSION)
    }
}

/// An episode known to the local library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEpisode {
    pub episode_id: u32,
    pub season_number: u32,
    pub episode_number: u32,
}

/// Resolves which local episodes are stored in a given media file.
///
/// Implementations return the episodes in a stable order; the first episode
/// is used to pick the representative thumbnail of a multi-episode file.
pub trait EpisodeLookup {
    fn episodes_by_file(&self, episode_file_id: u32) -> Vec<LocalEpisode>;
}

impl EpisodeLookup for HashMap<u32, Vec<LocalEpisode>> {
    fn episodes_by_file(&self, episode_file_id: u32) -> Vec<LocalEpisode> {
        self.get(&episode_file_id).cloned().unwrap_or_default()
    }
}
