//! Metric Card Component
//!
//! Displays a single metric with its value and optional trend.

use leptos::*;
use vicsim::{headline_cards, MetricCardModel, StatsSnapshot, Year};

/// Metric card component
#[component]
pub fn MetricCard(
    /// Pre-formatted card contents
    model: MetricCardModel,
) -> impl IntoView {
    let MetricCardModel {
        label,
        value,
        tone,
        trend,
    } = model;

    view! {
        <div class=format!(
            "glass-panel p-4 rounded-xl flex flex-col gap-1 border-l-4 {}",
            tone.border_class()
        )>
            <span class="text-xs text-gray-400 uppercase tracking-wider">{label}</span>
            <div class="flex items-end justify-between">
                <span class=format!("text-2xl font-bold font-mono {}", tone.text_class())>
                    {value}
                </span>

                // Trend indicator
                {trend.map(|trend| view! {
                    <div class=format!("flex items-center gap-1 text-xs {}", trend.class())>
                        <span>{trend.glyph()}</span>
                        <span>{trend.text()}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Header row with the four headline metrics
#[component]
pub fn HeadlineCards(
    #[prop(into)]
    stats: Signal<Option<StatsSnapshot>>,
    #[prop(into)]
    year: Signal<Year>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-4 gap-4 shrink-0 z-10">
            {move || {
                headline_cards(stats.get().as_ref(), year.get())
                    .into_iter()
                    .map(|model| view! { <MetricCard model=model /> })
                    .collect_view()
            }}
        </div>
    }
}
