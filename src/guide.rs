//! Episode guide URLs.

/// Base URL of the TV database API
const TVDB_API_URL: &str = "http://www.thetvdb.com/api";

/// Derives the episode guide URL media centers use to refresh a series.
pub trait EpisodeGuide {
    fn guide_url(&self, series_id: u32) -> String;
}

impl<F> EpisodeGuide for F
where
    F: Fn(u32) -> String,
{
    fn guide_url(&self, series_id: u32) -> String {
        self(series_id)
    }
}

/// Guide URLs pointing at the zipped full-series record of the TV database.
#[derive(Debug, Clone)]
pub struct TvdbEpisodeGuide {
    api_key: String,
}

impl TvdbEpisodeGuide {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl EpisodeGuide for TvdbEpisodeGuide {
    fn guide_url(&self, series_id: u32) -> String {
        format!(
            "{}/{}/series/{}/all/en.zip",
            TVDB_API_URL, self.api_key, series_id
        )
    }
}
