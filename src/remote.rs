//! Remote TV database records.
//!
//! These structures mirror what the TV database hands us for a series: the
//! show-level fields, its cast, every known episode and the season artwork.
//! Every field the database may leave out is optional, so callers never have
//! to guess whether an empty string means "blank" or "missing".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two mutually exclusive flavours of season artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStyle {
    /// Plain poster-shaped season art
    Season,
    /// Wide banner-shaped season art
    SeasonWide,
}

/// A single season artwork entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonBanner {
    /// The season this artwork belongs to
    pub season: u32,
    /// Which style of artwork this is
    pub style: BannerStyle,
    /// Path of the image relative to the banner host
    #[serde(default)]
    pub banner_path: Option<String>,
}

impl SeasonBanner {
    /// The asset reference, if it is present and not blank.
    pub fn reference(&self) -> Option<&str> {
        non_blank(self.banner_path.as_deref())
    }
}

/// A cast member of the series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
}

/// A single episode as known to the TV database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteEpisode {
    /// The season number this episode belongs to
    pub season_number: u32,
    /// The episode number within the season
    pub episode_number: u32,
    /// The episode title
    pub name: Option<String>,
    /// Original air date
    pub first_aired: Option<NaiveDate>,
    /// Episode specific synopsis
    pub overview: Option<String>,
    /// Path of the episode thumbnail relative to the banner host
    pub banner_path: Option<String>,
    pub writers: Vec<String>,
    pub directors: Vec<String>,
    pub guest_stars: Vec<String>,
}

impl RemoteEpisode {
    /// The thumbnail reference, if it is present and not blank.
    pub fn thumbnail(&self) -> Option<&str> {
        non_blank(self.banner_path.as_deref())
    }

    /// The first credited writer, if there is any.
    pub fn first_writer(&self) -> Option<&str> {
        self.writers.first().map(String::as_str)
    }

    /// The first credited director, if there is any.
    pub fn first_director(&self) -> Option<&str> {
        self.directors.first().map(String::as_str)
    }
}

/// A complete series record from the TV database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSeries {
    /// Identifier of the series within the TV database
    pub id: u32,
    /// The series title
    pub name: Option<String>,
    /// Average community rating
    pub rating: Option<f64>,
    /// Series synopsis
    pub overview: Option<String>,
    /// Content rating, e.g. `TV-14`
    pub content_rating: Option<String>,
    pub genres: Vec<String>,
    pub first_aired: Option<NaiveDate>,
    /// Network or studio which airs the series
    pub network: Option<String>,
    /// Cast in the order the database lists it
    pub actors: Vec<CastMember>,
    pub episodes: Vec<RemoteEpisode>,
    pub season_banners: Vec<SeasonBanner>,
    pub fanart_path: Option<String>,
    pub poster_path: Option<String>,
    pub banner_path: Option<String>,
}

impl RemoteSeries {
    /// Genres joined into the single string media centers display.
    pub fn genre_string(&self) -> String {
        self.genres.join(" / ")
    }

    /// Finds the first episode matching the given season and episode number.
    pub fn find_episode(&self, season_number: u32, episode_number: u32) -> Option<&RemoteEpisode> {
        self.episodes
            .iter()
            .find(|e| e.season_number == season_number && e.episode_number == episode_number)
    }

    pub fn fanart(&self) -> Option<&str> {
        non_blank(self.fanart_path.as_deref())
    }

    pub fn poster(&self) -> Option<&str> {
        non_blank(self.poster_path.as_deref())
    }

    pub fn banner(&self) -> Option<&str> {
        non_blank(self.banner_path.as_deref())
    }
}

/// Treats whitespace-only strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_partial_record() {
        let series: RemoteSeries = serde_json::from_value(json!({
            "id": 42,
            "name": "Foo",
            "first_aired": "2010-03-05",
            "season_banners": [
                { "season": 1, "style": "seasonwide", "banner_path": "seasonswide/1.jpg" },
                { "season": 2, "style": "season" }
            ]
        }))
        .unwrap();

        assert_eq!(series.id, 42);
        assert_eq!(series.rating, None);
        assert_eq!(series.first_aired, NaiveDate::from_ymd_opt(2010, 3, 5));
        assert_eq!(series.season_banners[0].style, BannerStyle::SeasonWide);
        assert_eq!(series.season_banners[1].reference(), None);
        assert!(series.episodes.is_empty());
    }

    #[test]
    fn test_first_credit_accessors_on_empty_lists() {
        let episode = RemoteEpisode::default();
        assert_eq!(episode.first_writer(), None);
        assert_eq!(episode.first_director(), None);

        let episode = RemoteEpisode {
            writers: vec!["Vince Gilligan".to_string(), "Peter Gould".to_string()],
            ..Default::default()
        };
        assert_eq!(episode.first_writer(), Some("Vince Gilligan"));
    }

    #[test]
    fn test_blank_references_are_absent() {
        let series = RemoteSeries {
            fanart_path: Some("   ".to_string()),
            poster_path: Some("posters/1.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(series.fanart(), None);
        assert_eq!(series.poster(), Some("posters/1.jpg"));
        assert_eq!(series.banner(), None);
    }

    #[test]
    fn test_find_episode_returns_first_match() {
        let series = RemoteSeries {
            episodes: vec![
                RemoteEpisode {
                    season_number: 1,
                    episode_number: 2,
                    name: Some("First".to_string()),
                    ..Default::default()
                },
                RemoteEpisode {
                    season_number: 1,
                    episode_number: 2,
                    name: Some("Second".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let found = series.find_episode(1, 2).unwrap();
        assert_eq!(found.name.as_deref(), Some("First"));
        assert!(series.find_episode(2, 2).is_none());
    }

    #[test]
    fn test_genre_string() {
        let series = RemoteSeries {
            genres: vec!["Drama".to_string(), "Crime".to_string()],
            ..Default::default()
        };
        assert_eq!(series.genre_string(), "Drama / Crime");
    }
}
