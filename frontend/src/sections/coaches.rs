//! Coach profile cards.
//!
//! Every record goes through [`sanitize_coach`] before anything is built from
//! it, so a card can only ever show public fields.

use yew::prelude::*;

use crate::config;
use crate::dom::{slots, Page};
use crate::links;
use crate::models::{Brand, Contacts, RawCoach};
use crate::sanitizer::{sanitize_coach, ProfileLink, PublicCoach};

pub const MAX_SKILL_TAGS: usize = 10;

pub const DEFAULT_SNAPSHOT: [&str; 4] = [
    "Problem Solving, Algorithms & Data Structures",
    "Back-end with Node.js & Express",
    "MongoDB & SQL (design, performance)",
    "Git/GitHub, Code Review & CI basics",
];

pub const PRIVACY_NOTE: &str = "Personal identifiers such as names, phone numbers, \
emails and social accounts are withheld to protect our coaches. \
Reach out through the academy to book a session.";

const CONTACT_LABEL: &str = "Book a session";

#[derive(Clone, Debug, PartialEq)]
pub struct CoachCard {
    pub photo: String,
    pub role: String,
    pub university: String,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub snapshot: Vec<String>,
    pub projects: Vec<String>,
    pub achievements: Vec<String>,
    pub links: Vec<ProfileLink>,
    pub contact_href: String,
}

fn contact_message(brand_name: &str, role: &str) -> String {
    format!("Hello {}, I'd like to book a session with your {}.", brand_name, role)
}

pub fn coach_card(raw: &RawCoach, brand: &Brand, contacts: &Contacts) -> CoachCard {
    let PublicCoach {
        role,
        university,
        education,
        mut skills,
        achievements,
        projects,
        photo,
        snapshot,
        links,
    } = sanitize_coach(raw);

    skills.truncate(MAX_SKILL_TAGS);
    let snapshot = if snapshot.is_empty() {
        DEFAULT_SNAPSHOT.iter().map(|item| item.to_string()).collect()
    } else {
        snapshot
    };
    let brand_name = brand.name.as_deref().unwrap_or(config::DEFAULT_BRAND_NAME);
    let contact_href = links::prefilled_messaging_url(contacts, &contact_message(brand_name, &role))
        .unwrap_or_else(|| config::PLACEHOLDER_HREF.to_string());

    CoachCard {
        photo: photo.unwrap_or_else(|| config::COACH_PHOTO_PLACEHOLDER.to_string()),
        role,
        university,
        education,
        skills,
        snapshot,
        projects,
        achievements,
        links,
        contact_href,
    }
}

pub fn coach_cards(coaches: &[RawCoach], brand: &Brand, contacts: &Contacts) -> Vec<CoachCard> {
    coaches
        .iter()
        .map(|raw| coach_card(raw, brand, contacts))
        .collect()
}

/// Hero portrait: the photo of a page's only coach, otherwise the placeholder.
pub fn hero_photo(cards: &[CoachCard]) -> String {
    match cards {
        [only] => only.photo.clone(),
        _ => config::COACH_PHOTO_PLACEHOLDER.to_string(),
    }
}

fn text_items(items: &[String]) -> Html {
    html! {
        <>
            { for items.iter().map(|item| html! { <li>{ item }</li> }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CoachCardProps {
    pub card: CoachCard,
}

#[function_component(CoachCardView)]
pub fn coach_card_view(props: &CoachCardProps) -> Html {
    let card = &props.card;
    let external = card.contact_href != config::PLACEHOLDER_HREF;
    let target = external.then_some("_blank");
    let rel = external.then_some("noopener");

    html! {
        <article class="coach-card">
            <img class="coach-photo" src={card.photo.clone()} alt={card.role.clone()} loading="lazy" />
            <div class="coach-body">
                <h3 class="coach-role">{ &card.role }</h3>
                {
                    if card.university.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="coach-university">{ &card.university }</p> }
                    }
                }
                <ul class="coach-skills tags">
                    { for card.skills.iter().map(|skill| html! { <li class="tag">{ skill }</li> }) }
                </ul>
                <h4>{"Snapshot"}</h4>
                <ul class="coach-snapshot">{ text_items(&card.snapshot) }</ul>
                {
                    if card.projects.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h4>{"Projects"}</h4>
                                <ul class="coach-projects">{ text_items(&card.projects) }</ul>
                            </>
                        }
                    }
                }
                {
                    if let Some(education) = &card.education {
                        html! {
                            <div class="coach-education">
                                <h4>{"Education"}</h4>
                                <p>{ education }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if card.achievements.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="coach-achievements">
                                <h4>{"Achievements"}</h4>
                                <ul>{ text_items(&card.achievements) }</ul>
                            </div>
                        }
                    }
                }
                {
                    if card.links.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="coach-links">
                                { for card.links.iter().map(|link| html! {
                                    <a href={link.url.clone()} target="_blank" rel="noopener">{ link.label }</a>
                                }) }
                            </div>
                        }
                    }
                }
                <p class="coach-privacy-note">{ PRIVACY_NOTE }</p>
                <a class="btn coach-contact" href={card.contact_href.clone()} target={target} rel={rel}>
                    { CONTACT_LABEL }
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct CoachesProps {
    pub cards: Vec<CoachCard>,
}

#[function_component(CoachesGrid)]
pub fn coaches_grid(props: &CoachesProps) -> Html {
    html! {
        <>
            { for props.cards.iter().map(|card| html! { <CoachCardView card={card.clone()} /> }) }
        </>
    }
}

pub fn render(page: &Page, coaches: &[RawCoach], brand: &Brand, contacts: &Contacts) {
    let cards = coach_cards(coaches, brand, contacts);
    page.set_attribute(slots::COACH_PHOTO_HERO, "src", &hero_photo(&cards));
    page.mount::<CoachesGrid>(slots::COACHES_GRID, CoachesProps { cards });
}
