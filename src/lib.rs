//! xbmc_metadata - Export media center metadata for TV series
//!
//! This library takes a series or episode file from the local library and the
//! matching TV database record, and produces what XBMC expects next to the
//! media: `tvshow.nfo` and per-file `.nfo` descriptors plus fanart, folder,
//! season and episode artwork.
//!
//! The library performs no network lookups of its own besides fetching
//! artwork; the remote record is handed in by the caller. Every collaborator
//! (artwork download, descriptor persistence, episode lookup, guide URLs and
//! configuration) sits behind a trait, with ready-made implementations for
//! the common case.
//!
//! # Examples
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::path::PathBuf;
//! use xbmc_metadata::{
//!     FsTextWriter, HttpBannerDownloader, LocalEpisode, LocalSeries, MetadataConfig,
//!     RemoteSeries, TvdbEpisodeGuide, XbmcExporter,
//! };
//!
//! let config = MetadataConfig::load().unwrap();
//! let guide = TvdbEpisodeGuide::new(config.tvdb_api_key.clone());
//! let downloader = HttpBannerDownloader::with_base_url(config.banner_base_url.clone());
//! let episodes: HashMap<u32, Vec<LocalEpisode>> = HashMap::new();
//!
//! let exporter = XbmcExporter::new(&config, &guide, &downloader, &FsTextWriter, &episodes);
//!
//! let series = LocalSeries {
//!     series_id: 80379,
//!     title: "The Big Bang Theory".to_string(),
//!     path: PathBuf::from("/tv/The Big Bang Theory"),
//! };
//! let remote: RemoteSeries = serde_json::from_str("{}").unwrap();
//!
//! let report = exporter.export_series(&series, &remote).unwrap();
//! println!("Wrote {}", report.descriptor.display());
//! ```

mod config;
mod disk;
mod download;
mod export;
mod guide;
mod layout;
mod local;
mod nfo;
mod remote;
mod season_assets;

#[cfg(test)]
mod testing;

// Re-export error types
pub use config::ConfigError;
pub use disk::WriteError;
pub use download::DownloadError;
pub use nfo::RenderError;

pub use config::{
    ConfigProvider, DEFAULT_BANNER_BASE_URL, EpisodeThumbnailTarget, MetadataConfig, config_path,
};
pub use disk::{FsTextWriter, TextWriter};
pub use download::{AssetDownloader, HttpBannerDownloader};
pub use export::{
    AssetOutcome, AssetRequest, EpisodeExportReport, MetadataConsumer, SeriesExportReport,
    SkipReason, XbmcExporter,
};
pub use guide::{EpisodeGuide, TvdbEpisodeGuide};
pub use layout::{FANART_JPG, FOLDER_JPG, TVSHOW_NFO, banner_url, season_thumbnail};
pub use local::{EpisodeLookup, LocalEpisode, LocalEpisodeFile, LocalSeries};
pub use nfo::{
    Element, Node, actor_element, episode_details, guest_star_actors, render, series_document,
};
pub use remote::{BannerStyle, CastMember, RemoteEpisode, RemoteSeries, SeasonBanner};
pub use season_assets::select_season_assets;

use thiserror::Error;

/// Errors that abort an export call
///
/// Missing data and failed artwork downloads are not errors; they are
/// reported through [`SeriesExportReport`] and [`EpisodeExportReport`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// The descriptor document could not be rendered
    #[error("Descriptor rendering error: {0}")]
    Render(#[from] RenderError),

    /// The descriptor could not be persisted
    #[error("Descriptor write error: {0}")]
    Write(#[from] WriteError),
}
