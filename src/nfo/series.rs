use super::Element;
use crate::remote::{CastMember, RemoteSeries};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the `tvshow.nfo` document for a series.
///
/// Every element is present even when the record lacks the value. The guide
/// URL appears twice: as trailing text of `<episodeguide>` after an empty
/// `<url/>` child, and again in `<episodeguideurl>`. Both forms must stay.
pub fn series_document(series: &RemoteSeries, guide_url: &str) -> Element {
    Element::new("tvshow")
        .with_child(Element::text("title", series.name.as_deref().unwrap_or_default()))
        .with_child(Element::maybe("rating", series.rating))
        .with_child(Element::text("plot", series.overview.as_deref().unwrap_or_default()))
        .with_child(
            Element::new("episodeguide")
                .with_child(Element::new("url"))
                .with_text(guide_url),
        )
        .with_child(Element::text("episodeguideurl", guide_url))
        .with_child(Element::text(
            "mpaa",
            series.content_rating.as_deref().unwrap_or_default(),
        ))
        .with_child(Element::text("genre", series.genre_string()))
        .with_child(Element::maybe(
            "premiered",
            series.first_aired.map(|date| date.format(DATE_FORMAT)),
        ))
        .with_child(Element::text("studio", series.network.as_deref().unwrap_or_default()))
        .with_children(series.actors.iter().map(actor_element))
}

/// Builds an `<actor>` block for a cast member, blank fields included.
pub fn actor_element(actor: &CastMember) -> Element {
    Element::new("actor")
        .with_child(Element::text("name", actor.name.as_deref().unwrap_or_default()))
        .with_child(Element::text("role", actor.role.as_deref().unwrap_or_default()))
        .with_child(Element::text("thumb", actor.image.as_deref().unwrap_or_default()))
}
