use chrono::{Datelike, Local};
use log::{error, info, Level};
use wasm_bindgen_futures::spawn_local;

mod config;
mod dom;
mod error;
mod links;
mod loader;
mod models;
mod sanitizer;
mod sections {
    pub mod brand;
    pub mod coaches;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod metrics;
    pub mod partners;
    pub mod subscribe;
    pub mod tracks;
}
#[cfg(all(test, not(target_arch = "wasm32")))]
mod testing;

use dom::Page;
use models::SiteData;
use sections::{brand, coaches, faq, footer, hero, metrics, partners, subscribe, tracks};

/// Fills every section of the template from one snapshot.
fn render_page(page: &Page, data: &SiteData, year: i32) {
    brand::render(page, &data.brand, &data.contacts);

    info!("Rendering hero");
    hero::render(page, &data.hero, &data.contacts);
    metrics::render(page, &data.metrics);
    partners::render(page, &data.partners);

    info!("Rendering {} tracks", data.tracks.len());
    tracks::render(page, &data.tracks, &data.tracks_config, &data.contacts);

    info!("Rendering {} coaches", data.coaches.len());
    coaches::render(page, &data.coaches, &data.brand, &data.contacts);

    faq::render(page, &data.faq);
    subscribe::render(page, &data.subscribe, &data.contacts);
    footer::render(page, &data.footer, &data.brand, &data.contacts, year);
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if let Err(e) = sanitizer::verify_field_lists() {
        error!("refusing to render coach profiles: {}", e);
        return;
    }

    info!("Starting landing page");
    spawn_local(async {
        match loader::load_site_data(config::SITE_DATA_URL).await {
            Ok(data) => match Page::current() {
                Some(page) => render_page(&page, &data, Local::now().year()),
                None => error!("no document to render into"),
            },
            Err(e) => error!("failed to load site data: {}", e),
        }
    });
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use super::*;
    use crate::testing::render_html;

    const SAMPLE: &str = include_str!("../site-data.json");

    /// Markup of every mounted section, in page order.
    async fn mounted_sections(data: &SiteData) -> Vec<String> {
        let hero = hero::hero_view(&data.hero, &data.contacts);
        let footer = footer::footer_view(&data.footer, &data.brand, &data.contacts, 2026);
        vec![
            render_html::<hero::HeroBadges>(hero::BadgesProps { badges: hero.badges }).await,
            render_html::<metrics::MetricsGrid>(metrics::MetricsProps {
                metrics: metrics::stat_views(&data.metrics),
            })
            .await,
            render_html::<partners::PartnersRow>(partners::PartnersProps {
                logos: partners::partner_logos(&data.partners),
            })
            .await,
            render_html::<tracks::TracksGrid>(tracks::TracksProps {
                cards: tracks::track_cards(&data.tracks, &data.tracks_config, &data.contacts),
            })
            .await,
            render_html::<coaches::CoachesGrid>(coaches::CoachesProps {
                cards: coaches::coach_cards(&data.coaches, &data.brand, &data.contacts),
            })
            .await,
            render_html::<faq::FaqList>(faq::FaqProps {
                entries: faq::faq_entries(&data.faq),
            })
            .await,
            render_html::<footer::NavLinks>(footer::NavLinksProps {
                links: footer.links,
                external: false,
            })
            .await,
            render_html::<footer::ContactList>(footer::ContactListProps {
                entries: footer.contact,
            })
            .await,
            render_html::<footer::NavLinks>(footer::NavLinksProps {
                links: footer.social,
                external: true,
            })
            .await,
        ]
    }

    #[tokio::test]
    async fn rendering_twice_gives_identical_markup() {
        let data = SiteData::from_json_str(SAMPLE).unwrap();
        let first = mounted_sections(&data).await;
        let second = mounted_sections(&data).await;
        assert_eq!(first, second);
        assert!(first.iter().all(|html| !html.is_empty()));
    }
}
