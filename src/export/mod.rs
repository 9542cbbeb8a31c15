//! Metadata exporters
//!
//! An exporter turns a local series or episode file plus the matching remote
//! record into the artifacts a media center reads: descriptor files and
//! artwork. Descriptors are always written before any artwork is requested,
//! and artwork requests are issued in a fixed order. A failed download never
//! stops the remaining ones.
mod episode;
mod series;

use crate::ExportError;
use crate::config::ConfigProvider;
use crate::disk::TextWriter;
use crate::download::AssetDownloader;
use crate::guide::EpisodeGuide;
use crate::local::{EpisodeLookup, LocalEpisodeFile, LocalSeries};
use crate::remote::{BannerStyle, RemoteSeries};
use std::path::PathBuf;
use tracing::{debug, warn};

/// A media center format that metadata can be exported for.
///
/// Implementors produce the descriptor files and artwork their media center
/// expects for series and for individual episode files.
pub trait MetadataConsumer {
    /// Human readable name of the media center
    fn name(&self) -> &'static str;

    /// Exports series level metadata and artwork.
    fn for_series(
        &self,
        series: &LocalSeries,
        remote: &RemoteSeries,
    ) -> Result<SeriesExportReport, ExportError>;

    /// Exports metadata for a single media file.
    fn for_episode_file(
        &self,
        episode_file: &LocalEpisodeFile,
        remote: &RemoteSeries,
    ) -> Result<EpisodeExportReport, ExportError>;
}

/// What happened to a single artwork request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    Downloaded,
    /// The remote record has no reference for this asset
    Skipped,
    /// The download failed; the message describes why
    Failed(String),
}

/// An artwork request and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub destination: PathBuf,
    pub outcome: AssetOutcome,
}

/// Why an episode export stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No local episodes are stored in the file
    NoEpisodes,
    /// The remote record has no thumbnail for the file's first episode
    NoThumbnail,
    /// A local episode has no counterpart in the remote record
    MissingRemoteEpisode { season: u32, episode: u32 },
}

/// Result of a series export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesExportReport {
    /// Path of the written series descriptor
    pub descriptor: PathBuf,
    /// The season artwork style that was requested
    pub season_style: BannerStyle,
    /// Artwork requests in the order they were issued
    pub assets: Vec<AssetRequest>,
}

/// Result of an episode file export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeExportReport {
    /// Nothing was written or downloaded
    Skipped(SkipReason),
    /// The thumbnail was requested but no descriptor was written
    Aborted {
        thumbnail: AssetRequest,
        reason: SkipReason,
    },
    Written {
        descriptor: PathBuf,
        thumbnail: AssetRequest,
        episode_count: usize,
    },
}

/// Exports metadata in the layout XBMC expects.
///
/// All collaborators are borrowed, so one set of them can be shared by many
/// exporters and inspected after an export.
pub struct XbmcExporter<'a> {
    config: &'a dyn ConfigProvider,
    guide: &'a dyn EpisodeGuide,
    downloader: &'a dyn AssetDownloader,
    writer: &'a dyn TextWriter,
    episodes: &'a dyn EpisodeLookup,
}

impl<'a> XbmcExporter<'a> {
    pub fn new(
        config: &'a dyn ConfigProvider,
        guide: &'a dyn EpisodeGuide,
        downloader: &'a dyn AssetDownloader,
        writer: &'a dyn TextWriter,
        episodes: &'a dyn EpisodeLookup,
    ) -> Self {
        Self {
            config,
            guide,
            downloader,
            writer,
            episodes,
        }
    }

    /// Requests a single asset, recording instead of propagating failures.
    fn fetch(&self, reference: Option<&str>, destination: PathBuf) -> AssetRequest {
        let outcome = match reference {
            None => {
                debug!(path = %destination.display(), "No asset reference, skipping download");
                AssetOutcome::Skipped
            }
            Some(reference) => match self.downloader.download(reference, &destination) {
                Ok(()) => AssetOutcome::Downloaded,
                Err(e) => {
                    warn!(
                        reference = %reference,
                        path = %destination.display(),
                        error = %e,
                        "Asset download failed"
                    );
                    AssetOutcome::Failed(e.to_string())
                }
            },
        };

        AssetRequest {
            destination,
            outcome,
        }
    }
}

impl MetadataConsumer for XbmcExporter<'_> {
    fn name(&self) -> &'static str {
        "XBMC"
    }

    fn for_series(
        &self,
        series: &LocalSeries,
        remote: &RemoteSeries,
    ) -> Result<SeriesExportReport, ExportError> {
        self.export_series(series, remote)
    }

    fn for_episode_file(
        &self,
        episode_file: &LocalEpisodeFile,
        remote: &RemoteSeries,
    ) -> Result<EpisodeExportReport, ExportError> {
        self.export_episode_file(episode_file, remote)
    }
}
