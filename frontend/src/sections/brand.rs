use crate::dom::{slots, Page};
use crate::links;
use crate::models::{Brand, Contacts};

/// Brand colour overrides, as `(custom property, value)` pairs.
pub fn theme_overrides(brand: &Brand) -> Vec<(&'static str, String)> {
    [("--brand", &brand.primary), ("--brand-2", &brand.gradient2)]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|value| (name, value)))
        .collect()
}

/// Applies the theme overrides and points the header contact anchors at the
/// messaging link.
pub fn render(page: &Page, brand: &Brand, contacts: &Contacts) {
    for (name, value) in theme_overrides(brand) {
        page.set_css_var(name, &value);
    }

    let href = links::contact_href(contacts);
    page.set_attribute(slots::NAV_CONTACT, "href", &href);
    page.set_attribute(slots::ABOUT_CTA, "href", &href);
}
