//! Coach profile sanitization.
//!
//! Raw coach records may carry personal identifiers next to the public
//! profile. Before anything reaches the page a record is reduced to the
//! public allow-list: identifying keys are dropped first and unconditionally,
//! public keys are copied, and anything unrecognized is dropped too.

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SanitizeError;
use crate::models::{scalar_text, text_list, RawCoach};

/// Field names that identify a person. Never shown, whatever else says so.
pub const IDENTIFIER_FIELDS: &[&str] = &[
    "name",
    "full_name",
    "first_name",
    "last_name",
    "nickname",
    "phone",
    "phone_number",
    "mobile",
    "whatsapp",
    "telegram",
    "email",
    "personal_email",
    "address",
    "birth_date",
    "date_of_birth",
    "facebook",
    "linkedin",
    "twitter",
    "instagram",
    "tiktok",
    "github",
    "website",
    "national_id",
    "id_number",
    "passport",
    "passport_number",
    "iban",
    "bank_name",
    "bank_account",
    "account_number",
    "card_number",
];

/// Field names allowed on a public coach profile.
pub const PUBLIC_FIELDS: &[&str] = &[
    "role",
    "university",
    "education",
    "skills",
    "achievements",
    "projects",
    "photo",
    "snapshot",
    "links",
];

/// Keys kept from the nested `links` object, with their display labels.
/// Only judge and contest profiles; personal social accounts never pass.
pub const PROFILE_LINKS: &[(&str, &str)] = &[
    ("icpcid", "ICPC ID"),
    ("codeforces", "Codeforces"),
    ("vjudge", "Vjudge"),
];

pub const DEFAULT_ROLE: &str = "Software & Competitive Programming Coach";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileLink {
    pub label: &'static str,
    pub url: String,
}

/// A coach profile that is safe to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicCoach {
    pub role: String,
    pub university: String,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub projects: Vec<String>,
    pub photo: Option<String>,
    pub snapshot: Vec<String>,
    pub links: Vec<ProfileLink>,
}

/// Checks that no public or profile-link key is also an identifier.
pub fn verify_field_lists() -> Result<(), SanitizeError> {
    let link_keys: Vec<&str> = PROFILE_LINKS.iter().map(|(key, _)| *key).collect();
    check_disjoint(PUBLIC_FIELDS, IDENTIFIER_FIELDS)?;
    check_disjoint(&link_keys, IDENTIFIER_FIELDS)
}

pub fn check_disjoint(public: &[&str], identifiers: &[&str]) -> Result<(), SanitizeError> {
    let overlap: Vec<&str> = public
        .iter()
        .copied()
        .filter(|field| identifiers.contains(field))
        .collect();
    if overlap.is_empty() {
        Ok(())
    } else {
        Err(SanitizeError::OverlappingFields {
            fields: overlap.join(", "),
        })
    }
}

/// The public subset of a raw record, keys lowercased. `links` is filtered
/// the same way one level down, keeping only contest profiles.
pub fn public_fields(raw: &RawCoach) -> Map<String, Value> {
    let mut fields = filter_fields(raw, PUBLIC_FIELDS, IDENTIFIER_FIELDS);
    match fields.remove("links") {
        Some(Value::Object(nested)) => {
            let link_keys: Vec<&str> = PROFILE_LINKS.iter().map(|(key, _)| *key).collect();
            let kept = filter_fields(&nested, &link_keys, IDENTIFIER_FIELDS);
            fields.insert("links".to_string(), Value::Object(kept));
        }
        Some(_) => debug!("dropping coach `links`: expected an object"),
        None => {}
    }
    fields
}

pub fn filter_fields(raw: &RawCoach, public: &[&str], identifiers: &[&str]) -> Map<String, Value> {
    let mut kept = Map::new();
    for (key, value) in raw {
        let key = key.to_ascii_lowercase();
        if identifiers.contains(&key.as_str()) {
            debug!("dropping identifying coach field `{}`", key);
            continue;
        }
        if public.contains(&key.as_str()) {
            kept.insert(key, value.clone());
        }
    }
    kept
}

pub fn sanitize_coach(raw: &RawCoach) -> PublicCoach {
    let fields = public_fields(raw);
    let text = |key: &str| fields.get(key).and_then(scalar_text);
    let list = |key: &str| fields.get(key).map(text_list).unwrap_or_default();

    PublicCoach {
        role: text("role").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        university: text("university").unwrap_or_default(),
        education: text("education"),
        skills: list("skills"),
        achievements: list("achievements"),
        projects: list("projects"),
        photo: text("photo"),
        snapshot: list("snapshot"),
        links: fields.get("links").map(profile_links).unwrap_or_default(),
    }
}

fn profile_links(value: &Value) -> Vec<ProfileLink> {
    let Some(links) = value.as_object() else {
        return Vec::new();
    };
    PROFILE_LINKS
        .iter()
        .filter_map(|(key, label)| {
            links
                .get(*key)
                .and_then(scalar_text)
                .map(|url| ProfileLink { label: *label, url })
        })
        .collect()
}
