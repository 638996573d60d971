//! Site data snapshot.
//!
//! The document is parsed as plain JSON first and every top-level slice is
//! decoded on its own, so a malformed slice or list entry is dropped without
//! taking the rest of the page down with it.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A coach record exactly as it appears in the data file.
pub type RawCoach = Map<String, Value>;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "text")]
    pub gradient2: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Contacts {
    /// Raw contact number, may contain spaces or a leading `+`.
    #[serde(deserialize_with = "text")]
    pub whatsapp: Option<String>,
}

/// A `{value, label}` pair, used by metrics and hero badges.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "text")]
    pub value: Option<String>,
    #[serde(deserialize_with = "text")]
    pub label: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "text")]
    pub eyebrow: Option<String>,
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "text")]
    pub subline: Option<String>,
    #[serde(deserialize_with = "text")]
    pub card: Option<String>,
    #[serde(deserialize_with = "text")]
    pub cta_text: Option<String>,
    #[serde(deserialize_with = "text")]
    pub cta_link: Option<String>,
    #[serde(deserialize_with = "entries")]
    pub badges: Vec<Stat>,
}

/// Partner entries come either as a bare name or as `{name, logo}`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PartnerEntry {
    Name(String),
    Detailed {
        #[serde(default, deserialize_with = "text")]
        name: Option<String>,
        #[serde(default, deserialize_with = "text")]
        logo: Option<String>,
    },
}

/// Normalized partner, whatever shape it had in the data file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partner {
    pub name: String,
    pub logo: Option<String>,
}

impl From<PartnerEntry> for Partner {
    fn from(entry: PartnerEntry) -> Self {
        match entry {
            PartnerEntry::Name(name) => Partner { name, logo: None },
            PartnerEntry::Detailed { name, logo } => Partner {
                name: name.unwrap_or_default(),
                logo,
            },
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Track {
    #[serde(deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "text")]
    pub audience: Option<String>,
    #[serde(deserialize_with = "text")]
    pub hours: Option<String>,
    #[serde(deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "text")]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TracksConfig {
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "text")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "text")]
    pub cta_text: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FaqItem {
    #[serde(deserialize_with = "text")]
    pub q: Option<String>,
    #[serde(deserialize_with = "text")]
    pub a: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Faq {
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "entries")]
    pub items: Vec<FaqItem>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Subscribe {
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "text")]
    pub cta_text: Option<String>,
    #[serde(deserialize_with = "text")]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FooterLink {
    #[serde(deserialize_with = "text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "text")]
    pub href: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Footer {
    #[serde(deserialize_with = "text")]
    pub blurb: Option<String>,
    #[serde(rename = "ctaText", alias = "cta_text", deserialize_with = "text")]
    pub cta_text: Option<String>,
    #[serde(rename = "ctaLink", alias = "cta_link", deserialize_with = "text")]
    pub cta_link: Option<String>,
    /// `None` when the data file has no link list at all.
    #[serde(deserialize_with = "optional_entries")]
    pub links: Option<Vec<FooterLink>>,
    #[serde(deserialize_with = "text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "text")]
    pub email_public: Option<String>,
    #[serde(deserialize_with = "text")]
    pub hours: Option<String>,
    #[serde(deserialize_with = "object")]
    pub social: Map<String, Value>,
    #[serde(deserialize_with = "text")]
    pub copyright: Option<String>,
}

/// Root of the data file. Every slice is optional and defaults when absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteData {
    pub brand: Brand,
    pub contacts: Contacts,
    pub hero: Hero,
    pub metrics: Vec<Stat>,
    pub partners: Vec<Partner>,
    pub tracks: Vec<Track>,
    pub tracks_config: TracksConfig,
    pub coaches: Vec<RawCoach>,
    pub faq: Faq,
    pub subscribe: Subscribe,
    pub footer: Footer,
}

impl SiteData {
    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    /// Never fails: a root that is not an object yields an all-default page.
    pub fn from_value(root: &Value) -> Self {
        let coaches = match root.get("coaches") {
            Some(list) if !list.is_null() => slice_list::<RawCoach>("coaches", Some(list)),
            // older data files carry a single `coach` object
            _ => slice_item::<RawCoach>("coach", root.get("coach"))
                .into_iter()
                .collect(),
        };

        SiteData {
            brand: slice_item("brand", root.get("brand")).unwrap_or_default(),
            contacts: slice_item("contacts", root.get("contacts")).unwrap_or_default(),
            hero: slice_item("hero", root.get("hero")).unwrap_or_default(),
            metrics: slice_list("metrics", root.get("metrics")),
            partners: slice_list::<PartnerEntry>("partners", root.get("partners"))
                .into_iter()
                .map(Partner::from)
                .collect(),
            tracks: slice_list("tracks", root.get("tracks")),
            tracks_config: slice_item("tracks_config", root.get("tracks_config"))
                .unwrap_or_default(),
            coaches,
            faq: slice_item("faq", root.get("faq")).unwrap_or_default(),
            subscribe: slice_item("subscribe", root.get("subscribe")).unwrap_or_default(),
            footer: slice_item("footer", root.get("footer")).unwrap_or_default(),
        }
    }
}

fn slice_item<T: DeserializeOwned>(name: &str, value: Option<&Value>) -> Option<T> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => match T::deserialize(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("ignoring malformed `{}`: {}", name, e);
                None
            }
        },
    }
}

fn slice_list<T: DeserializeOwned>(name: &str, value: Option<&Value>) -> Vec<T> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| slice_item(&format!("{}[{}]", name, i), Some(item)))
            .collect(),
        Some(_) => {
            warn!("ignoring `{}`: expected a list", name);
            Vec::new()
        }
    }
}

/// Display text of a scalar. Falsy values (blank strings, `0`, `false`,
/// `null`) and containers have none; `true` reads as `"true"`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}

/// Display texts of a list of scalars; anything else is an empty list.
pub fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(slice_list("entries", Some(&value)))
}

fn optional_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(_) => Some(slice_list("entries", Some(&value))),
        _ => None,
    })
}

fn object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_yields_defaults() {
        let data = SiteData::from_json_str("{}").unwrap();
        assert_eq!(data, SiteData::default());
    }

    #[test]
    fn non_object_root_yields_defaults() {
        let data = SiteData::from_json_str("[1, 2, 3]").unwrap();
        assert_eq!(data, SiteData::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SiteData::from_json_str("<html>not json</html>").is_err());
    }

    #[test]
    fn partners_accept_names_and_objects() {
        let data = SiteData::from_value(&json!({
            "partners": [
                "Acme",
                { "name": "Globex", "logo": "assets/globex.png" },
                { "name": "Initech" },
                42
            ]
        }));
        assert_eq!(
            data.partners,
            vec![
                Partner { name: "Acme".into(), logo: None },
                Partner { name: "Globex".into(), logo: Some("assets/globex.png".into()) },
                Partner { name: "Initech".into(), logo: None },
            ]
        );
    }

    #[test]
    fn malformed_slice_is_dropped_alone() {
        let data = SiteData::from_value(&json!({
            "hero": "not an object",
            "metrics": [{ "value": 500, "label": "Students" }, "junk", { "label": "Tracks" }],
            "faq": { "title": "FAQ", "items": { "q": "not a list" } }
        }));
        assert_eq!(data.hero, Hero::default());
        assert_eq!(data.metrics.len(), 2);
        assert_eq!(data.metrics[0].value.as_deref(), Some("500"));
        assert_eq!(data.metrics[1].value, None);
        assert_eq!(data.faq.title.as_deref(), Some("FAQ"));
        assert!(data.faq.items.is_empty());
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let data = SiteData::from_value(&json!({
            "hero": { "title": "   ", "subline": null, "eyebrow": "Academy" }
        }));
        assert_eq!(data.hero.title, None);
        assert_eq!(data.hero.subline, None);
        assert_eq!(data.hero.eyebrow.as_deref(), Some("Academy"));
    }

    #[test]
    fn zero_and_false_are_absent_but_true_is_text() {
        let data = SiteData::from_value(&json!({
            "hero": { "eyebrow": true, "title": false, "subline": 0, "card": 0.0 },
            "metrics": [{ "value": 0, "label": "Dropouts" }, { "value": false, "label": true }]
        }));
        assert_eq!(data.hero.eyebrow.as_deref(), Some("true"));
        assert_eq!(data.hero.title, None);
        assert_eq!(data.hero.subline, None);
        assert_eq!(data.hero.card, None);
        assert_eq!(data.metrics[0].value, None);
        assert_eq!(data.metrics[0].label.as_deref(), Some("Dropouts"));
        assert_eq!(data.metrics[1].value, None);
        assert_eq!(data.metrics[1].label.as_deref(), Some("true"));
        assert_eq!(text_list(&json!([0, 7, false, true, ""])), vec!["7", "true"]);
    }

    #[test]
    fn footer_reads_camel_case_cta_and_missing_links() {
        let data = SiteData::from_value(&json!({
            "footer": { "ctaText": "Enroll", "social": { "facebook": "https://fb.example" } }
        }));
        assert_eq!(data.footer.cta_text.as_deref(), Some("Enroll"));
        assert_eq!(data.footer.links, None);
        assert_eq!(data.footer.social.len(), 1);

        let data = SiteData::from_value(&json!({ "footer": { "links": [] } }));
        assert_eq!(data.footer.links, Some(Vec::new()));
    }

    #[test]
    fn single_coach_is_used_when_list_is_absent() {
        let data = SiteData::from_value(&json!({ "coach": { "role": "Mentor" } }));
        assert_eq!(data.coaches.len(), 1);

        let data = SiteData::from_value(&json!({
            "coach": { "role": "Mentor" },
            "coaches": [{ "role": "A" }, { "role": "B" }, "junk"]
        }));
        assert_eq!(data.coaches.len(), 2);
    }

    #[test]
    fn numeric_contact_number_is_text() {
        let data = SiteData::from_value(&json!({ "contacts": { "whatsapp": 201102919193u64 } }));
        assert_eq!(data.contacts.whatsapp.as_deref(), Some("201102919193"));
    }

    #[test]
    fn sample_data_file_parses() {
        let data = SiteData::from_json_str(include_str!("../site-data.json")).unwrap();
        assert!(!data.coaches.is_empty());
        assert!(!data.partners.is_empty());
        assert!(!data.faq.items.is_empty());
    }
}
