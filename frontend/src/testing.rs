use yew::html::BaseComponent;

/// Markup `C` produces for `props`, without hydration ids.
pub async fn render_html<C>(props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send + 'static,
{
    yew::ServerRenderer::<C>::with_props(move || props)
        .hydratable(false)
        .render()
        .await
}

/// Opening tags of every `<name ...>` element in `html`, in document order.
pub fn opening_tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let start = format!("<{}", name);
    html.match_indices(&start)
        .filter_map(|(at, _)| {
            let rest = &html[at..];
            let after = rest[start.len()..].chars().next();
            if !matches!(after, Some(' ') | Some('>')) {
                return None;
            }
            rest.find('>').map(|end| &rest[..=end])
        })
        .collect()
}
