//! Outbound contact links derived from the shared `contacts` slice.

use crate::config;
use crate::models::Contacts;

/// Digits of the contact number, or `None` if it has none.
pub fn contact_digits(contacts: &Contacts) -> Option<String> {
    let digits: String = contacts
        .whatsapp
        .as_deref()?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    (!digits.is_empty()).then_some(digits)
}

pub fn messaging_url(contacts: &Contacts) -> Option<String> {
    contact_digits(contacts).map(|digits| format!("{}{}", config::MESSAGING_BASE_URL, digits))
}

/// Messaging link that opens the conversation with `message` already typed.
pub fn prefilled_messaging_url(contacts: &Contacts, message: &str) -> Option<String> {
    messaging_url(contacts).map(|url| format!("{}?text={}", url, urlencoding::encode(message)))
}

/// Messaging link, or the placeholder anchor.
pub fn contact_href(contacts: &Contacts) -> String {
    messaging_url(contacts).unwrap_or_else(|| config::PLACEHOLDER_HREF.to_string())
}

/// An explicit link wins over the messaging link, which wins over `#`.
pub fn cta_href(explicit: Option<&str>, contacts: &Contacts) -> String {
    match explicit {
        Some(link) => link.to_string(),
        None => contact_href(contacts),
    }
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneLink {
    pub href: String,
    pub display: String,
}

/// `tel:` link with the two-digit country code split from the rest.
pub fn phone_link(contacts: &Contacts) -> Option<PhoneLink> {
    let digits = contact_digits(contacts)?;
    if digits.len() <= 2 {
        return Some(PhoneLink {
            href: format!("tel:+{}", digits),
            display: format!("+{}", digits),
        });
    }
    let (country, rest) = digits.split_at(2);
    Some(PhoneLink {
        href: format!("tel:+{}-{}", country, rest),
        display: format!("+{} {}", country, rest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts(number: &str) -> Contacts {
        Contacts {
            whatsapp: Some(number.to_string()),
        }
    }

    #[test]
    fn messaging_url_uses_digits_only() {
        assert_eq!(
            messaging_url(&contacts("+20 110-291-9193")).as_deref(),
            Some("https://wa.me/201102919193")
        );
        assert_eq!(messaging_url(&contacts("n/a")), None);
        assert_eq!(messaging_url(&Contacts::default()), None);
    }

    #[test]
    fn cta_prefers_explicit_then_contact_then_placeholder() {
        let with_number = contacts("201102919193");
        assert_eq!(cta_href(Some("/apply"), &with_number), "/apply");
        assert_eq!(cta_href(None, &with_number), "https://wa.me/201102919193");
        assert_eq!(cta_href(None, &Contacts::default()), "#");
    }

    #[test]
    fn prefilled_message_is_encoded() {
        let url = prefilled_messaging_url(&contacts("201102919193"), "Hi there & hello").unwrap();
        assert_eq!(url, "https://wa.me/201102919193?text=Hi%20there%20%26%20hello");
    }

    #[test]
    fn phone_link_splits_country_code() {
        let link = phone_link(&contacts("201102919193")).unwrap();
        assert_eq!(link.href, "tel:+20-1102919193");
        assert_eq!(link.display, "+20 1102919193");
        assert_eq!(phone_link(&Contacts::default()), None);
    }

    #[test]
    fn mailto_trims() {
        assert_eq!(mailto(" hello@academy.example "), "mailto:hello@academy.example");
    }
}
