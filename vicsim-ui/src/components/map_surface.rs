//! Map Surface Component
//!
//! Raster basemap with a layer label overlay. Clicking anywhere reports the
//! placeholder region; there is no per-region geometry yet.

use leptos::*;
use vicsim::{MapView, RegionId, Year, TILE_SIZE};

/// Map surface component
#[component]
pub fn MapSurface(
    /// Basemap definition
    map: MapView,
    #[prop(into)]
    year: Signal<Year>,
    /// Emitted on every click
    #[prop(into)]
    on_select: Callback<RegionId>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let tiles = map.tiles();
    let attribution = map.config().attribution.clone();
    let attribution_url = map.config().attribution_url.clone();

    let label_map = map.clone();
    let label = move || label_map.layer_label(year.get());

    let on_click = move |ev: ev::MouseEvent| {
        let region = map.select_at(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        on_select.call(region);
    };

    view! {
        <div
            class=format!(
                "relative w-full h-full rounded-xl overflow-hidden glass-panel border border-gray-700 cursor-crosshair {}",
                class
            )
            on:click=on_click
        >
            // Basemap, positioned around the container center
            <div class="absolute inset-0 bg-cyber-slate">
                {tiles.into_iter().map(|tile| view! {
                    <img
                        src=tile.url
                        alt=""
                        draggable="false"
                        class="map-tile absolute"
                        style=format!(
                            "left: calc(50% + {:.0}px); top: calc(50% + {:.0}px); width: {}px; height: {}px;",
                            tile.offset_x, tile.offset_y, TILE_SIZE, TILE_SIZE
                        )
                    />
                }).collect_view()}
            </div>

            <div class="absolute top-4 right-4 z-[1000] bg-cyber-slate/90 p-2 rounded text-xs text-neon-teal">
                {label}
            </div>

            <div class="absolute bottom-1 right-2 z-[1000] text-[10px] text-gray-400 bg-cyber-slate/70 px-1 rounded">
                <a href=attribution_url target="_blank" rel="noopener noreferrer">{attribution}</a>
            </div>
        </div>
    }
}
