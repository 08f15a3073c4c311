//! Timeline Component
//!
//! Year scrubber with a play/pause toggle. Fully controlled by the shell.

use leptos::*;
use vicsim::{Year, YearRange};

/// Timeline scrubber component
#[component]
pub fn Timeline(
    /// Currently selected year
    #[prop(into)]
    year: Signal<Year>,
    /// Scrubber bounds
    range: YearRange,
    /// Whether playback is running
    #[prop(into)]
    playing: Signal<bool>,
    /// Emitted on every drag tick
    #[prop(into)]
    on_change: Callback<Year>,
    /// Emitted when play/pause is pressed
    #[prop(into)]
    on_toggle_play: Callback<()>,
) -> impl IntoView {
    let on_input = move |ev: ev::Event| {
        if let Some(year) = range.parse_input(&event_target_value(&ev)) {
            on_change.call(year);
        }
    };

    view! {
        <div class="flex items-center gap-4 w-full glass-panel p-4 rounded-xl">
            <button
                class="w-10 h-10 rounded-full bg-neon-teal/20 hover:bg-neon-teal/40 text-neon-teal transition-colors"
                title=move || if playing.get() { "Pause" } else { "Play" }
                on:click=move |_| on_toggle_play.call(())
            >
                {move || if playing.get() { "⏸" } else { "▶" }}
            </button>

            <div class="flex-1 flex flex-col gap-1">
                <div class="flex justify-between text-xs text-gray-400 font-mono">
                    <span>{range.min.to_string()}</span>
                    <span class="text-neon-teal text-lg font-bold">
                        {move || year.get().to_string()}
                    </span>
                    <span>{range.max.to_string()}</span>
                </div>
                <input
                    type="range"
                    min=range.min.to_string()
                    max=range.max.to_string()
                    step="1"
                    prop:value=move || year.get().to_string()
                    on:input=on_input
                    class="w-full h-2 bg-gray-700 rounded-lg appearance-none cursor-pointer accent-neon-teal"
                />
            </div>
        </div>
    }
}
