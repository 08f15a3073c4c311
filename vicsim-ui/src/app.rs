//! App Root Component
//!
//! Application shell: owns the dashboard state and wires components together.

use leptos::*;
use vicsim::{Action, DashboardConfig, MapView, RegionId, Year};

use crate::components::{HeadlineCards, MapSurface, ScenarioPanel, Timeline};
use crate::state::provide_dashboard;

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let theme_css = config.theme.css_variables();
    let map = MapView::new(config.map.clone());

    // Provide dashboard state to all components
    let ctx = provide_dashboard(config);
    ctx.load_initial();

    let year = ctx.year();
    let playing = ctx.playing();
    let params = ctx.params();
    let stats = ctx.stats();
    let range = ctx.range();

    view! {
        <style>{theme_css}</style>

        <div class="w-screen h-screen bg-void-black text-gray-200 flex overflow-hidden">
            // Sidebar
            <div class="shrink-0 h-full p-4 z-10">
                <ScenarioPanel
                    params=params
                    on_change=move |(key, value): (String, u8)| {
                        ctx.dispatch(Action::SetParam { key, value })
                    }
                />
            </div>

            // Main content
            <div class="flex-1 flex flex-col h-full p-4 gap-4 relative">
                <HeadlineCards stats=stats year=year />

                <div class="flex-1 relative min-h-0">
                    <MapSurface
                        map=map
                        year=year
                        on_select=move |region: RegionId| ctx.dispatch(Action::SelectRegion(region))
                        class="absolute inset-0"
                    />
                </div>

                <div class="shrink-0 z-10">
                    <Timeline
                        year=year
                        range=range
                        playing=playing
                        on_change=move |year: Year| ctx.dispatch(Action::SetYear(year))
                        on_toggle_play=move |_: ()| ctx.dispatch(Action::TogglePlay)
                    />
                </div>
            </div>
        </div>
    }
}
