use serde_json::{Map, Value};
use yew::prelude::*;

use crate::config;
use crate::dom::{slots, Page};
use crate::links;
use crate::models::{scalar_text, Brand, Contacts, Footer};

const DEFAULT_CTA_TEXT: &str = "Join Now";

const DEFAULT_LINKS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("Tracks", "#tracks"),
    ("Coaches", "#coaches"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactEntry {
    Text(String),
    Link { label: String, href: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterView {
    pub blurb: String,
    pub cta_text: String,
    pub cta_href: String,
    pub links: Vec<NavLink>,
    pub contact: Vec<ContactEntry>,
    pub social: Vec<NavLink>,
    pub hours: String,
    pub copyright: String,
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One link per truthy entry, labelled by its capitalized key.
pub fn social_links(social: &Map<String, Value>) -> Vec<NavLink> {
    social
        .iter()
        .filter_map(|(key, value)| {
            scalar_text(value).map(|href| NavLink {
                label: capitalize(key),
                href,
            })
        })
        .collect()
}

pub fn contact_entries(footer: &Footer, contacts: &Contacts) -> Vec<ContactEntry> {
    let mut entries = Vec::new();
    if let Some(address) = &footer.address {
        entries.push(ContactEntry::Text(address.clone()));
    }
    if let Some(email) = &footer.email_public {
        entries.push(ContactEntry::Link {
            label: email.clone(),
            href: links::mailto(email),
        });
    }
    if let Some(phone) = links::phone_link(contacts) {
        entries.push(ContactEntry::Link {
            label: phone.display,
            href: phone.href,
        });
    }
    entries
}

pub fn footer_view(footer: &Footer, brand: &Brand, contacts: &Contacts, year: i32) -> FooterView {
    let nav = match &footer.links {
        Some(links) => links
            .iter()
            .map(|link| NavLink {
                label: link.label.clone().unwrap_or_default(),
                href: link
                    .href
                    .clone()
                    .unwrap_or_else(|| config::PLACEHOLDER_HREF.to_string()),
            })
            .collect(),
        None => DEFAULT_LINKS
            .iter()
            .map(|(label, href)| NavLink {
                label: label.to_string(),
                href: href.to_string(),
            })
            .collect(),
    };
    let brand_name = brand.name.as_deref().unwrap_or(config::DEFAULT_BRAND_NAME);

    FooterView {
        blurb: footer.blurb.clone().unwrap_or_default(),
        cta_text: footer
            .cta_text
            .clone()
            .unwrap_or_else(|| DEFAULT_CTA_TEXT.to_string()),
        cta_href: links::cta_href(footer.cta_link.as_deref(), contacts),
        links: nav,
        contact: contact_entries(footer, contacts),
        social: social_links(&footer.social),
        hours: footer.hours.clone().unwrap_or_default(),
        copyright: footer
            .copyright
            .clone()
            .unwrap_or_else(|| format!("© {} {} — All rights reserved.", year, brand_name)),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    pub links: Vec<NavLink>,
    #[prop_or_default]
    pub external: bool,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    let target = props.external.then_some("_blank");
    let rel = props.external.then_some("noopener");
    html! {
        <>
            { for props.links.iter().map(|link| html! {
                <li><a href={link.href.clone()} target={target} rel={rel}>{ &link.label }</a></li>
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactListProps {
    pub entries: Vec<ContactEntry>,
}

#[function_component(ContactList)]
pub fn contact_list(props: &ContactListProps) -> Html {
    html! {
        <>
            { for props.entries.iter().map(|entry| match entry {
                ContactEntry::Text(text) => html! { <li>{ text }</li> },
                ContactEntry::Link { label, href } => html! {
                    <li><a href={href.clone()}>{ label }</a></li>
                },
            }) }
        </>
    }
}

pub fn render(page: &Page, footer: &Footer, brand: &Brand, contacts: &Contacts, year: i32) {
    let view = footer_view(footer, brand, contacts, year);
    page.set_text(slots::FOOTER_BLURB, &view.blurb);
    page.set_text(slots::FOOTER_CTA, &view.cta_text);
    page.set_attribute(slots::FOOTER_CTA, "href", &view.cta_href);
    page.mount::<NavLinks>(
        slots::FOOTER_LINKS,
        NavLinksProps {
            links: view.links,
            external: false,
        },
    );
    page.mount::<ContactList>(
        slots::FOOTER_CONTACT,
        ContactListProps {
            entries: view.contact,
        },
    );
    page.mount::<NavLinks>(
        slots::FOOTER_SOCIAL,
        NavLinksProps {
            links: view.social,
            external: true,
        },
    );
    page.set_text(slots::FOOTER_HOURS, &view.hours);
    page.set_text(slots::COPYRIGHT, &view.copyright);
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use super::*;
    use crate::testing::{opening_tags, render_html};
    use serde_json::json;

    fn nav() -> Vec<NavLink> {
        footer_view(&Footer::default(), &Brand::default(), &Contacts::default(), 2026).links
    }

    #[tokio::test]
    async fn page_links_stay_in_the_tab() {
        let html = render_html::<NavLinks>(NavLinksProps {
            links: nav(),
            external: false,
        })
        .await;
        let anchors = opening_tags(&html, "a");
        assert_eq!(anchors.len(), 5);
        assert!(anchors[0].contains("href=\"#home\""));
        assert!(anchors.iter().all(|tag| !tag.contains("target=")));
        assert!(html.contains(">Contact</a>"));
    }

    #[tokio::test]
    async fn social_links_open_a_new_tab() {
        let social = json!({ "facebook": "https://facebook.com/academy", "youtube": 0 });
        let html = render_html::<NavLinks>(NavLinksProps {
            links: social_links(social.as_object().unwrap()),
            external: true,
        })
        .await;
        let anchors = opening_tags(&html, "a");
        assert_eq!(anchors.len(), 1);
        assert!(anchors[0].contains("target=\"_blank\""));
        assert!(anchors[0].contains("rel=\"noopener\""));
        assert!(!html.contains("href=\"0\""));
    }

    #[tokio::test]
    async fn contact_entries_render_as_list_items() {
        let footer = Footer {
            address: Some("Nasr City, Cairo".to_string()),
            email_public: Some("hello@academy.example".to_string()),
            ..Footer::default()
        };
        let html = render_html::<ContactList>(ContactListProps {
            entries: contact_entries(&footer, &Contacts::default()),
        })
        .await;
        assert_eq!(opening_tags(&html, "li").len(), 2);
        assert!(html.contains("<li>Nasr City, Cairo</li>"));
        assert!(html.contains("href=\"mailto:hello@academy.example\""));
    }
}
