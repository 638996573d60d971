use yew::prelude::*;

use crate::config;
use crate::dom::{slots, Page};
use crate::links;
use crate::models::{Contacts, Track, TracksConfig};

const DEFAULT_SECTION_TITLE: &str = "Program Tracks";
const DEFAULT_SECTION_SUBTITLE: &str = "Pick the path that fits where you are today.";
const DEFAULT_TRACK_TITLE: &str = "Program Track";
const DEFAULT_AUDIENCE: &str = "All levels";
const DEFAULT_HOURS: &str = "Flexible schedule";
const DEFAULT_CTA_TEXT: &str = "Enroll now";

#[derive(Clone, Debug, PartialEq)]
pub struct TrackCard {
    pub image: String,
    pub title: String,
    pub audience: String,
    pub hours: String,
    pub description: String,
    pub href: String,
    pub cta_text: String,
}

pub fn track_cards(tracks: &[Track], tracks_config: &TracksConfig, contacts: &Contacts) -> Vec<TrackCard> {
    let cta_text = tracks_config
        .cta_text
        .clone()
        .unwrap_or_else(|| DEFAULT_CTA_TEXT.to_string());
    tracks
        .iter()
        .map(|track| TrackCard {
            image: track
                .image
                .clone()
                .unwrap_or_else(|| config::TRACK_IMAGE_PLACEHOLDER.to_string()),
            title: track
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TRACK_TITLE.to_string()),
            audience: track
                .audience
                .clone()
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            hours: track.hours.clone().unwrap_or_else(|| DEFAULT_HOURS.to_string()),
            description: track.description.clone().unwrap_or_default(),
            href: links::cta_href(track.link.as_deref(), contacts),
            cta_text: cta_text.clone(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TracksProps {
    pub cards: Vec<TrackCard>,
}

#[function_component(TracksGrid)]
pub fn tracks_grid(props: &TracksProps) -> Html {
    html! {
        <>
            { for props.cards.iter().map(|card| html! {
                <article class="track-card">
                    <img class="track-image" src={card.image.clone()} alt={card.title.clone()} loading="lazy" />
                    <div class="track-body">
                        <h3 class="track-title">{ &card.title }</h3>
                        <ul class="track-meta">
                            <li class="track-audience">{ &card.audience }</li>
                            <li class="track-hours">{ &card.hours }</li>
                        </ul>
                        {
                            if card.description.is_empty() {
                                html! {}
                            } else {
                                html! { <p class="track-description">{ &card.description }</p> }
                            }
                        }
                        <a class="btn track-cta" href={card.href.clone()} target="_blank" rel="noopener">
                            { &card.cta_text }
                        </a>
                    </div>
                </article>
            }) }
        </>
    }
}

pub fn render(page: &Page, tracks: &[Track], tracks_config: &TracksConfig, contacts: &Contacts) {
    page.set_text(
        slots::TRACKS_TITLE,
        tracks_config.title.as_deref().unwrap_or(DEFAULT_SECTION_TITLE),
    );
    page.set_text(
        slots::TRACKS_SUBTITLE,
        tracks_config
            .subtitle
            .as_deref()
            .unwrap_or(DEFAULT_SECTION_SUBTITLE),
    );
    page.mount::<TracksGrid>(
        slots::TRACKS_GRID,
        TracksProps {
            cards: track_cards(tracks, tracks_config, contacts),
        },
    );
}
