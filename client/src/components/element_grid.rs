//! Clickable element tiles that open the info panel.

use leptos::prelude::*;

use crate::state::panel::InfoPanelState;

/// Tiles shown on the page as `(key, symbol, atomic number)`.
///
/// Not every tile has an info entry; clicking one without an entry does
/// nothing.
const TILES: &[(&str, &str, Option<u8>)] = &[
    ("hydrogen", "H", Some(1)),
    ("carbon", "C", Some(6)),
    ("nitrogen", "N", Some(7)),
    ("oxygen", "O", Some(8)),
    ("fluorine", "F", Some(9)),
    ("sodium", "Na", Some(11)),
    ("magnesium", "Mg", Some(12)),
    ("aluminium", "Al", Some(13)),
    ("sulfur", "S", Some(16)),
    ("chlorine", "Cl", Some(17)),
    ("potassium", "K", Some(19)),
    ("calcium", "Ca", Some(20)),
    ("chromium", "Cr", Some(24)),
    ("iron", "Fe", Some(26)),
    ("copper", "Cu", Some(29)),
    ("zinc", "Zn", Some(30)),
    ("bromine", "Br", Some(35)),
    ("silver", "Ag", Some(47)),
    ("iodine", "I", Some(53)),
    ("barium", "Ba", Some(56)),
    ("lead", "Pb", Some(82)),
    ("halogens", "VIIA", None),
];

/// Grid of element tiles. Each tile carries its key in `data-key`.
#[component]
pub fn ElementGrid() -> impl IntoView {
    let panel = expect_context::<RwSignal<InfoPanelState>>();

    view! {
        <div class="element-grid">
            {TILES
                .iter()
                .map(|&(key, symbol, number)| {
                    let has_info = chemref::lookup_element(key).is_some();
                    view! {
                        <button
                            class="element-tile"
                            class:element-tile--info=has_info
                            data-key=key
                            on:click=move |_| {
                                // Unknown keys must not notify subscribers.
                                let mut next = panel.get_untracked();
                                if next.show(key) {
                                    panel.set(next);
                                }
                            }
                        >
                            <span class="element-tile__number">{number.map(|z| z.to_string())}</span>
                            <span class="element-tile__symbol">{symbol}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
