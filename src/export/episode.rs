use super::{EpisodeExportReport, SkipReason, XbmcExporter};
use crate::ExportError;
use crate::config::EpisodeThumbnailTarget;
use crate::layout::FOLDER_JPG;
use crate::local::{LocalEpisode, LocalEpisodeFile};
use crate::nfo::{Element, episode_details, render};
use crate::remote::{RemoteEpisode, RemoteSeries};
use std::path::PathBuf;
use tracing::{debug, info};

impl XbmcExporter<'_> {
    /// Downloads the episode thumbnail and writes the episode descriptor for
    /// a media file
    ///
    /// Files holding several episodes get one `<episodedetails>` block per
    /// episode, in lookup order. The thumbnail always belongs to the first
    /// episode of the file.
    ///
    /// The export stops without writing anything when the file holds no
    /// known episodes or the first episode has no thumbnail. If any episode
    /// of the file is missing from the remote record, no descriptor is
    /// written at all.
    pub fn export_episode_file(
        &self,
        episode_file: &LocalEpisodeFile,
        remote: &RemoteSeries,
    ) -> Result<EpisodeExportReport, ExportError> {
        let file_id = episode_file.episode_file_id;
        let episodes = self.episodes.episodes_by_file(file_id);

        let Some(first) = episodes.first() else {
            debug!(file_id, "No episodes were found for this episode file");
            return Ok(EpisodeExportReport::Skipped(SkipReason::NoEpisodes));
        };

        let Some(thumbnail) = remote
            .find_episode(episode_file.season_number, first.episode_number)
            .and_then(RemoteEpisode::thumbnail)
        else {
            debug!(file_id, "No thumbnail is available for this episode file");
            return Ok(EpisodeExportReport::Skipped(SkipReason::NoThumbnail));
        };

        let config = self.config.metadata_config();
        let thumbnail_path = match config.episode_thumbnail {
            EpisodeThumbnailTarget::PerFile => episode_file.thumbnail_path(),
            EpisodeThumbnailTarget::SharedFolder => PathBuf::from(FOLDER_JPG),
        };

        debug!(file_id, "Downloading episode thumbnail");
        let thumbnail = self.fetch(Some(thumbnail), thumbnail_path);

        debug!(file_id, "Generating episode descriptor");
        let blocks = match episode_blocks(remote, &episodes, &config.banner_base_url) {
            Ok(blocks) => blocks,
            Err(reason) => {
                debug!(file_id, ?reason, "Unable to find episode in remote record, skipping");
                return Ok(EpisodeExportReport::Aborted { thumbnail, reason });
            }
        };

        let content = render(&blocks)?;
        let descriptor = episode_file.descriptor_path();
        self.writer.write_text(&descriptor, &content)?;
        info!(file_id, path = %descriptor.display(), "Saved episode descriptor");

        Ok(EpisodeExportReport::Written {
            descriptor,
            thumbnail,
            episode_count: blocks.len(),
        })
    }
}

/// Builds one details block per local episode, failing on the first episode
/// the remote record does not know.
fn episode_blocks(
    remote: &RemoteSeries,
    episodes: &[LocalEpisode],
    banner_base_url: &str,
) -> Result<Vec<Element>, SkipReason> {
    episodes
        .iter()
        .map(|local| {
            remote
                .find_episode(local.season_number, local.episode_number)
                .map(|episode| episode_details(remote, episode, banner_base_url))
                .ok_or(SkipReason::MissingRemoteEpisode {
                    season: local.season_number,
                    episode: local.episode_number,
                })
        })
        .collect()
}
