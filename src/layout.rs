//! File naming conventions for exported metadata
//!
//! Media centers find their metadata purely by file name, so every exported
//! artifact has a fixed name relative to the series root or the media file.

use std::path::{Path, PathBuf};

/// Series descriptor, placed in the series root
pub const TVSHOW_NFO: &str = "tvshow.nfo";

/// Series fanart, placed in the series root
pub const FANART_JPG: &str = "fanart.jpg";

/// Folder thumbnail (poster or banner)
pub const FOLDER_JPG: &str = "folder.jpg";

pub const NFO_EXTENSION: &str = "nfo";
pub const TBN_EXTENSION: &str = "tbn";

/// Formats the season thumbnail file name, zero-padding the season number
///
/// ```
/// assert_eq!(xbmc_metadata::season_thumbnail(3), "season03.tbn");
/// ```
pub fn season_thumbnail(season: u32) -> String {
    format!("season{:02}.{}", season, TBN_EXTENSION)
}

/// Replaces the extension of a media file, keeping it in the same directory
///
/// Files without an extension simply get one appended.
pub(crate) fn sibling_with_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Builds the absolute URL of an asset stored on the banner host
pub fn banner_url(base_url: &str, reference: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_thumbnail() {
        assert_eq!(season_thumbnail(0), "season00.tbn");
        assert_eq!(season_thumbnail(1), "season01.tbn");
        assert_eq!(season_thumbnail(12), "season12.tbn");
        assert_eq!(season_thumbnail(100), "season100.tbn");
    }

    #[test]
    fn test_sibling_with_extension() {
        assert_eq!(
            sibling_with_extension(Path::new("/tv/Show/ep.one.avi"), "nfo"),
            Path::new("/tv/Show/ep.one.nfo")
        );
        assert_eq!(
            sibling_with_extension(Path::new("/tv/Show/episode"), "nfo"),
            Path::new("/tv/Show/episode.nfo")
        );
    }

    #[test]
    fn test_banner_url() {
        assert_eq!(
            banner_url("http://www.thetvdb.com/banners/", "episodes/1/2.jpg"),
            "http://www.thetvdb.com/banners/episodes/1/2.jpg"
        );
        assert_eq!(
            banner_url("http://www.thetvdb.com/banners", "/fanart/3.jpg"),
            "http://www.thetvdb.com/banners/fanart/3.jpg"
        );
    }
}
