use super::{Element, actor_element};
use crate::layout::banner_url;
use crate::remote::{RemoteEpisode, RemoteSeries};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds one `<episodedetails>` block.
///
/// The plot and rating come from the series, not the episode. Writer and
/// director credits are omitted when the episode has none. Guest stars and
/// the full series cast follow the fixed fields.
pub fn episode_details(
    series: &RemoteSeries,
    episode: &RemoteEpisode,
    banner_base_url: &str,
) -> Element {
    let mut details = Element::new("episodedetails")
        .with_child(Element::text("title", episode.name.as_deref().unwrap_or_default()))
        .with_child(Element::text("season", episode.season_number.to_string()))
        .with_child(Element::text("episode", episode.episode_number.to_string()))
        .with_child(Element::maybe(
            "aired",
            episode.first_aired.map(|date| date.format(DATE_FORMAT)),
        ))
        .with_child(Element::text("plot", series.overview.as_deref().unwrap_or_default()))
        .with_child(Element::new("displayseason"))
        .with_child(Element::new("displayepisode"))
        .with_child(Element::maybe(
            "thumb",
            episode
                .thumbnail()
                .map(|reference| banner_url(banner_base_url, reference)),
        ))
        .with_child(Element::text("watched", "false"));

    if let Some(writer) = episode.first_writer() {
        details = details.with_child(Element::text("credits", writer));
    }
    if let Some(director) = episode.first_director() {
        details = details.with_child(Element::text("director", director));
    }

    details
        .with_child(Element::maybe("rating", series.rating))
        .with_children(guest_star_actors(episode))
        .with_children(series.actors.iter().map(actor_element))
}

/// Builds name-only `<actor>` blocks for the episode's guest stars, skipping
/// blank names.
pub fn guest_star_actors(episode: &RemoteEpisode) -> impl Iterator<Item = Element> + '_ {
    episode
        .guest_stars
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| Element::new("actor").with_child(Element::text("name", name.as_str())))
}
