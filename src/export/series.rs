use super::{SeriesExportReport, XbmcExporter};
use crate::ExportError;
use crate::layout::{FANART_JPG, FOLDER_JPG, TVSHOW_NFO, season_thumbnail};
use crate::local::LocalSeries;
use crate::nfo::{render, series_document};
use crate::remote::{BannerStyle, RemoteSeries};
use crate::season_assets::select_season_assets;
use tracing::{debug, info};

impl XbmcExporter<'_> {
    /// Writes `tvshow.nfo` and downloads the series artwork
    ///
    /// Artwork is requested in this order: `fanart.jpg`, `folder.jpg`, then
    /// one `seasonNN.tbn` per season. With `use_banners` enabled the folder
    /// and season art use wide banners, otherwise posters. Only one of the
    /// two styles is ever requested per call.
    ///
    /// # Errors
    ///
    /// Fails if the descriptor cannot be rendered or written. No artwork is
    /// requested in that case. Artwork failures are recorded in the report.
    pub fn export_series(
        &self,
        series: &LocalSeries,
        remote: &RemoteSeries,
    ) -> Result<SeriesExportReport, ExportError> {
        let config = self.config.metadata_config();
        let guide_url = self.guide.guide_url(series.series_id);

        debug!(series = %series.title, "Generating tvshow.nfo");
        let content = render(&[series_document(remote, &guide_url)])?;

        let descriptor = series.path.join(TVSHOW_NFO);
        self.writer.write_text(&descriptor, &content)?;
        info!(series = %series.title, path = %descriptor.display(), "Saved tvshow.nfo");

        let mut assets = Vec::new();

        debug!(series = %series.title, "Downloading fanart");
        assets.push(self.fetch(remote.fanart(), series.path.join(FANART_JPG)));

        let (folder_art, season_style) = if config.use_banners {
            debug!(series = %series.title, "Downloading series banner");
            (remote.banner(), BannerStyle::SeasonWide)
        } else {
            debug!(series = %series.title, "Downloading series poster");
            (remote.poster(), BannerStyle::Season)
        };
        assets.push(self.fetch(folder_art, series.path.join(FOLDER_JPG)));

        for (season, reference) in select_season_assets(remote, season_style) {
            debug!(series = %series.title, season, "Downloading season art");
            assets.push(self.fetch(reference, series.path.join(season_thumbnail(season))));
        }

        Ok(SeriesExportReport {
            descriptor,
            season_style,
            assets,
        })
    }
}
