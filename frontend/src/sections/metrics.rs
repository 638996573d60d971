use yew::prelude::*;

use crate::dom::{slots, Page};
use crate::models::Stat;

#[derive(Clone, Debug, PartialEq)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

pub fn stat_views(stats: &[Stat]) -> Vec<StatView> {
    stats
        .iter()
        .map(|stat| StatView {
            value: stat.value.clone().unwrap_or_default(),
            label: stat.label.clone().unwrap_or_default(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MetricsProps {
    pub metrics: Vec<StatView>,
}

#[function_component(MetricsGrid)]
pub fn metrics_grid(props: &MetricsProps) -> Html {
    html! {
        <>
            { for props.metrics.iter().map(|metric| html! {
                <div class="metric">
                    <div class="metric-value">{ &metric.value }</div>
                    <div class="metric-label">{ &metric.label }</div>
                </div>
            }) }
        </>
    }
}

pub fn render(page: &Page, metrics: &[Stat]) {
    page.mount::<MetricsGrid>(
        slots::METRICS_GRID,
        MetricsProps {
            metrics: stat_views(metrics),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metrics_render_nothing() {
        assert!(stat_views(&[]).is_empty());
    }

    #[test]
    fn missing_halves_are_blank() {
        let views = stat_views(&[
            Stat {
                value: Some("1200+".to_string()),
                label: Some("Graduates".to_string()),
            },
            Stat {
                value: None,
                label: Some("Partners".to_string()),
            },
        ]);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].value, "1200+");
        assert_eq!(views[1].value, "");
        assert_eq!(views[1].label, "Partners");
    }
}
