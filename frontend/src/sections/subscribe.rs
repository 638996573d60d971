use crate::dom::{slots, Page};
use crate::links;
use crate::models::{Contacts, Subscribe};

const DEFAULT_TITLE: &str = "Ready to start?";
const DEFAULT_TEXT: &str = "Message us and we will help you pick a track.";
const DEFAULT_CTA_TEXT: &str = "Get in touch";

#[derive(Clone, Debug, PartialEq)]
pub struct SubscribeView {
    pub title: String,
    pub text: String,
    pub cta_text: String,
    pub cta_href: String,
}

pub fn subscribe_view(subscribe: &Subscribe, contacts: &Contacts) -> SubscribeView {
    SubscribeView {
        title: subscribe.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        text: subscribe.text.clone().unwrap_or_else(|| DEFAULT_TEXT.to_string()),
        cta_text: subscribe
            .cta_text
            .clone()
            .unwrap_or_else(|| DEFAULT_CTA_TEXT.to_string()),
        cta_href: links::cta_href(subscribe.link.as_deref(), contacts),
    }
}

pub fn render(page: &Page, subscribe: &Subscribe, contacts: &Contacts) {
    let view = subscribe_view(subscribe, contacts);
    page.set_text(slots::SUBSCRIBE_TITLE, &view.title);
    page.set_text(slots::SUBSCRIBE_TEXT, &view.text);
    page.set_text(slots::SUBSCRIBE_CTA, &view.cta_text);
    page.set_attribute(slots::SUBSCRIBE_CTA, "href", &view.cta_href);
}
