//! Scenario Panel Component
//!
//! One slider per scenario parameter, in the mapping's order.

use leptos::*;
use vicsim::{display_label, parse_slider_value, ScenarioParams, PARAM_MAX, PARAM_MIN};

/// Scenario parameter sliders
#[component]
pub fn ScenarioPanel(
    #[prop(into)]
    params: Signal<ScenarioParams>,
    /// Emitted per slider tick with `(key, value)`
    #[prop(into)]
    on_change: Callback<(String, u8)>,
) -> impl IntoView {
    view! {
        <div class="glass-panel w-64 p-4 rounded-xl flex flex-col gap-6 h-full">
            <h2 class="text-sm font-bold text-neon-teal uppercase tracking-widest border-b border-gray-700 pb-2">
                "Simulation Variables"
            </h2>

            // Keyed by parameter name so a slider survives its own value changes
            <div class="flex flex-col gap-4 overflow-y-auto">
                <For
                    each=move || params.with(|p| p.keys().map(String::from).collect::<Vec<_>>())
                    key=|key| key.clone()
                    children=move |key: String| {
                        let lookup = key.clone();
                        let value = Signal::derive(move || {
                            params.with(|p| p.get(&lookup).unwrap_or(PARAM_MIN))
                        });
                        view! { <ParamSlider name=key value=value on_change=on_change /> }
                    }
                />
            </div>

            // Not wired to anything yet
            <div class="mt-auto">
                <button class="w-full py-2 bg-neon-teal/10 hover:bg-neon-teal/20 text-neon-teal text-xs uppercase font-bold rounded border border-neon-teal/50 transition-all">
                    "Run Projection"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ParamSlider(
    name: String,
    #[prop(into)]
    value: Signal<u8>,
    on_change: Callback<(String, u8)>,
) -> impl IntoView {
    let label = display_label(&name);

    let on_input = move |ev: ev::Event| {
        if let Some(v) = parse_slider_value(&event_target_value(&ev)) {
            on_change.call((name.clone(), v));
        }
    };

    view! {
        <div class="flex flex-col gap-1">
            <div class="flex justify-between text-xs text-gray-300">
                <span>{label}</span>
                <span class="font-mono text-neon-teal">{move || value.get().to_string()}</span>
            </div>
            <input
                type="range"
                min=PARAM_MIN.to_string()
                max=PARAM_MAX.to_string()
                step="1"
                prop:value=move || value.get().to_string()
                on:input=on_input
                class="w-full h-1 bg-gray-800 rounded-lg appearance-none cursor-pointer accent-stress-amber"
            />
        </div>
    }
}
