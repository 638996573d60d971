use yew::prelude::*;

use crate::config;
use crate::dom::{slots, Page};
use crate::models::Partner;

#[derive(Clone, Debug, PartialEq)]
pub struct PartnerLogo {
    pub name: String,
    pub src: String,
}

pub fn partner_logos(partners: &[Partner]) -> Vec<PartnerLogo> {
    partners
        .iter()
        .map(|partner| PartnerLogo {
            name: partner.name.clone(),
            src: partner
                .logo
                .clone()
                .unwrap_or_else(|| config::PARTNER_LOGO_PLACEHOLDER.to_string()),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PartnersProps {
    pub logos: Vec<PartnerLogo>,
}

#[function_component(PartnersRow)]
pub fn partners_row(props: &PartnersProps) -> Html {
    html! {
        <>
            { for props.logos.iter().map(|logo| html! {
                <img
                    class="partner-logo"
                    src={logo.src.clone()}
                    alt={logo.name.clone()}
                    title={logo.name.clone()}
                    loading="lazy"
                />
            }) }
        </>
    }
}

pub fn render(page: &Page, partners: &[Partner]) {
    page.mount::<PartnersRow>(
        slots::PARTNERS_ROW,
        PartnersProps {
            logos: partner_logos(partners),
        },
    );
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use super::*;
    use crate::models::SiteData;
    use crate::testing::{opening_tags, render_html};
    use serde_json::json;

    #[tokio::test]
    async fn one_img_per_partner_named_by_alt_and_title() {
        let data = SiteData::from_value(&json!({
            "partners": ["Acme", { "name": "Globex", "logo": "assets/globex.svg" }, { "name": "Initech" }]
        }));
        let html = render_html::<PartnersRow>(PartnersProps {
            logos: partner_logos(&data.partners),
        })
        .await;
        let imgs = opening_tags(&html, "img");
        assert_eq!(imgs.len(), 3);
        for (img, name) in imgs.iter().zip(["Acme", "Globex", "Initech"]) {
            assert!(img.contains(&format!("alt=\"{}\"", name)), "{}", img);
            assert!(img.contains(&format!("title=\"{}\"", name)), "{}", img);
        }
        assert!(imgs[0].contains(&format!("src=\"{}\"", config::PARTNER_LOGO_PLACEHOLDER)));
        assert!(imgs[1].contains("src=\"assets/globex.svg\""));
    }

    #[tokio::test]
    async fn no_partners_no_images() {
        let html = render_html::<PartnersRow>(PartnersProps { logos: vec![] }).await;
        assert!(opening_tags(&html, "img").is_empty());
    }
}
