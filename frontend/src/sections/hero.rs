use yew::prelude::*;

use super::metrics::{stat_views, StatView};
use crate::dom::{slots, Page};
use crate::links;
use crate::models::{Contacts, Hero};

const DEFAULT_EYEBROW: &str = "Coach Academy";
const DEFAULT_TITLE: &str = "Software & Competitive Programming Coaching";
const DEFAULT_SUBLINE: &str = "Practical, project-based mentoring with SWE & CP focus.";
const DEFAULT_CARD: &str = "Small groups, real projects and weekly 1:1 reviews.";
const DEFAULT_CTA_TEXT: &str = "Talk to us";

#[derive(Clone, Debug, PartialEq)]
pub struct HeroView {
    pub eyebrow: String,
    pub title: String,
    pub subline: String,
    pub card: String,
    pub cta_text: String,
    pub cta_href: String,
    pub badges: Vec<StatView>,
}

pub fn hero_view(hero: &Hero, contacts: &Contacts) -> HeroView {
    let or = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };
    HeroView {
        eyebrow: or(&hero.eyebrow, DEFAULT_EYEBROW),
        title: or(&hero.title, DEFAULT_TITLE),
        subline: or(&hero.subline, DEFAULT_SUBLINE),
        card: or(&hero.card, DEFAULT_CARD),
        cta_text: or(&hero.cta_text, DEFAULT_CTA_TEXT),
        cta_href: links::cta_href(hero.cta_link.as_deref(), contacts),
        badges: stat_views(&hero.badges),
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgesProps {
    pub badges: Vec<StatView>,
}

#[function_component(HeroBadges)]
pub fn hero_badges(props: &BadgesProps) -> Html {
    html! {
        <>
            { for props.badges.iter().map(|badge| html! {
                <div class="badge">
                    <div class="badge-value">{ &badge.value }</div>
                    <div>{ &badge.label }</div>
                </div>
            }) }
        </>
    }
}

pub fn render(page: &Page, hero: &Hero, contacts: &Contacts) {
    let view = hero_view(hero, contacts);
    page.set_text(slots::HERO_EYEBROW, &view.eyebrow);
    page.set_text(slots::HERO_TITLE, &view.title);
    page.set_text(slots::HERO_SUBLINE, &view.subline);
    page.set_text(slots::HERO_CARD, &view.card);
    page.set_text(slots::HERO_CTA, &view.cta_text);
    page.set_attribute(slots::HERO_CTA, "href", &view.cta_href);
    page.mount::<HeroBadges>(slots::HERO_BADGES, BadgesProps { badges: view.badges });
}
