//! Season artwork selection.

use crate::remote::{BannerStyle, RemoteSeries};
use std::collections::HashSet;

/// Selects one artwork entry per season for the requested style.
///
/// Seasons are yielded in the order they first appear in the record's
/// season banner list. When a season has several entries of the requested
/// style, the first one in list order wins. The asset reference is `None`
/// when the winning entry carries a blank or missing path.
///
/// The returned iterator is lazy and can only be consumed once. A record
/// without artwork of the given style yields nothing.
pub fn select_season_assets(
    series: &RemoteSeries,
    style: BannerStyle,
) -> impl Iterator<Item = (u32, Option<&str>)> + '_ {
    let mut seen = HashSet::new();

    series
        .season_banners
        .iter()
        .filter(move |banner| banner.style == style)
        .filter(move |banner| seen.insert(banner.season))
        .map(|banner| (banner.season, banner.reference()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::SeasonBanner;

    fn banner(season: u32, style: BannerStyle, path: &str) -> SeasonBanner {
        SeasonBanner {
            season,
            style,
            banner_path: Some(path.to_string()),
        }
    }

    fn series_with(banners: Vec<SeasonBanner>) -> RemoteSeries {
        RemoteSeries {
            season_banners: banners,
            ..Default::default()
        }
    }

    #[test]
    fn test_filters_by_style() {
        let series = series_with(vec![
            banner(1, BannerStyle::Season, "s1.jpg"),
            banner(1, BannerStyle::SeasonWide, "w1.jpg"),
            banner(2, BannerStyle::SeasonWide, "w2.jpg"),
        ]);

        let wide: Vec<_> = select_season_assets(&series, BannerStyle::SeasonWide).collect();
        assert_eq!(wide, vec![(1, Some("w1.jpg")), (2, Some("w2.jpg"))]);

        let posters: Vec<_> = select_season_assets(&series, BannerStyle::Season).collect();
        assert_eq!(posters, vec![(1, Some("s1.jpg"))]);
    }

    #[test]
    fn test_first_match_wins_for_duplicate_seasons() {
        let series = series_with(vec![
            banner(2, BannerStyle::Season, "s2-a.jpg"),
            banner(1, BannerStyle::Season, "s1.jpg"),
            banner(2, BannerStyle::Season, "s2-b.jpg"),
            banner(2, BannerStyle::Season, "s2-c.jpg"),
        ]);

        let selected: Vec<_> = select_season_assets(&series, BannerStyle::Season).collect();
        assert_eq!(selected, vec![(2, Some("s2-a.jpg")), (1, Some("s1.jpg"))]);
    }

    #[test]
    fn test_empty_when_style_absent() {
        let series = series_with(vec![banner(1, BannerStyle::Season, "s1.jpg")]);
        assert_eq!(
            select_season_assets(&series, BannerStyle::SeasonWide).count(),
            0
        );
        assert_eq!(
            select_season_assets(&RemoteSeries::default(), BannerStyle::Season).count(),
            0
        );
    }

    #[test]
    fn test_blank_reference_still_claims_season() {
        let series = series_with(vec![
            banner(1, BannerStyle::Season, " "),
            banner(1, BannerStyle::Season, "s1.jpg"),
        ]);

        let selected: Vec<_> = select_season_assets(&series, BannerStyle::Season).collect();
        assert_eq!(selected, vec![(1, None)]);
    }
}
