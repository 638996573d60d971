use yew::prelude::*;

use crate::dom::{slots, Page};
use crate::models::Faq;

const DEFAULT_TITLE: &str = "Frequently Asked Questions";

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub open: bool,
}

/// Only the first entry starts expanded.
pub fn faq_entries(faq: &Faq) -> Vec<FaqEntry> {
    faq.items
        .iter()
        .enumerate()
        .map(|(i, item)| FaqEntry {
            question: item.q.clone().unwrap_or_default(),
            answer: item.a.clone().unwrap_or_default(),
            open: i == 0,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqProps) -> Html {
    html! {
        <>
            { for props.entries.iter().map(|entry| html! {
                <details class="faq-item" open={entry.open}>
                    <summary>{ &entry.question }</summary>
                    <div class="faq-body">{ &entry.answer }</div>
                </details>
            }) }
        </>
    }
}

pub fn render(page: &Page, faq: &Faq) {
    page.set_text(slots::FAQ_TITLE, faq.title.as_deref().unwrap_or(DEFAULT_TITLE));
    page.mount::<FaqList>(
        slots::FAQ_LIST,
        FaqProps {
            entries: faq_entries(faq),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaqItem;

    fn item(q: &str, a: &str) -> FaqItem {
        FaqItem {
            q: Some(q.to_string()),
            a: Some(a.to_string()),
        }
    }

    #[test]
    fn only_first_entry_is_open() {
        let faq = Faq {
            title: None,
            items: vec![
                item("How long is a track?", "Twelve weeks."),
                item("Is it online?", "Yes."),
                item("Do I need experience?", "No."),
            ],
        };
        let entries = faq_entries(&faq);
        assert_eq!(entries.len(), 3);
        assert!(entries[0].open);
        assert!(entries[1..].iter().all(|entry| !entry.open));
        assert_eq!(entries[1].question, "Is it online?");
    }

    #[test]
    fn no_items_no_entries() {
        assert!(faq_entries(&Faq::default()).is_empty());
    }
}
