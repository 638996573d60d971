//! The pre-existing page template.
//!
//! Containers are owned by the template. Renderers only write text and
//! attributes into them or clear them and mount a component inside.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};
use yew::html::BaseComponent;

/// Element ids the template provides.
pub mod slots {
    pub const NAV_CONTACT: &str = "nav-whatsapp";
    pub const ABOUT_CTA: &str = "about-cta";

    pub const HERO_EYEBROW: &str = "hero-eyebrow";
    pub const HERO_TITLE: &str = "hero-title";
    pub const HERO_SUBLINE: &str = "hero-sub";
    pub const HERO_CARD: &str = "hero-card";
    pub const HERO_CTA: &str = "hero-cta1";
    pub const HERO_BADGES: &str = "hero-badges";
    pub const COACH_PHOTO_HERO: &str = "coach-photo-hero";

    pub const METRICS_GRID: &str = "metrics-grid";
    pub const PARTNERS_ROW: &str = "partners-row";

    pub const TRACKS_TITLE: &str = "tracks-title";
    pub const TRACKS_SUBTITLE: &str = "tracks-sub";
    pub const TRACKS_GRID: &str = "tracks-grid";

    pub const COACHES_GRID: &str = "coaches-grid";

    pub const FAQ_TITLE: &str = "faq-title";
    pub const FAQ_LIST: &str = "faq-list";

    pub const SUBSCRIBE_TITLE: &str = "subscribe-title";
    pub const SUBSCRIBE_TEXT: &str = "subscribe-text";
    pub const SUBSCRIBE_CTA: &str = "subscribe-cta";

    pub const FOOTER_BLURB: &str = "footer-blurb";
    pub const FOOTER_CTA: &str = "footer-cta";
    pub const FOOTER_LINKS: &str = "footer-links";
    pub const FOOTER_CONTACT: &str = "footer-contact";
    pub const FOOTER_SOCIAL: &str = "footer-social";
    pub const FOOTER_HOURS: &str = "footer-hours";
    pub const COPYRIGHT: &str = "copyright";
}

pub struct Page {
    document: Document,
}

impl Page {
    /// The page this module runs in, if there is one.
    pub fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }

    fn slot(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            warn!("template has no #{} element, skipping", id);
        }
        element
    }

    pub fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.slot(id) {
            element.set_text_content(Some(text));
        }
    }

    pub fn set_attribute(&self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.slot(id) {
            if let Err(e) = element.set_attribute(name, value) {
                warn!("could not set {} on #{}: {:?}", name, id, e);
            }
        }
    }

    /// Sets a CSS custom property on the root element.
    pub fn set_css_var(&self, name: &str, value: &str) {
        let root = self
            .document
            .document_element()
            .and_then(|root| root.dyn_into::<HtmlElement>().ok());
        match root {
            Some(root) => {
                if let Err(e) = root.style().set_property(name, value) {
                    warn!("could not set {}: {:?}", name, e);
                }
            }
            None => warn!("document has no root element for {}", name),
        }
    }

    /// Clears the container and renders `C` into it.
    pub fn mount<C: BaseComponent + 'static>(&self, id: &str, props: C::Properties) {
        if let Some(element) = self.slot(id) {
            element.set_inner_html("");
            yew::Renderer::<C>::with_root_and_props(element, props).render();
        }
    }
}
