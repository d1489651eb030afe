//! Item card for the catalog grid.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::image_url;
use crate::models::CatalogItem;

stylance::import_crate_style!(css, "src/components/item_card.module.css");

/// Card showing one dish: image, name, price, and diet type.
#[component]
pub fn ItemCard(item: CatalogItem) -> impl IntoView {
    let price = item.display_price();
    let diet_icon = ic::diet_icon(item.diet_type);
    let diet_label = item.diet_type.label();
    let src = image_url(&item.image_ref);
    let name = item.name;
    let alt = name.clone();
    let label = name.clone();

    // Cart contents are not tracked; the button only logs.
    let on_add = move |_: leptos::ev::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"Add to Dish clicked".into());
    };

    view! {
        <article class=css::card aria-label=label>
            <div class=css::imageFrame>
                <img src=src alt=alt class=css::image />
            </div>
            <div class=css::name>{name}</div>
            <div class=css::meta>
                <span class=css::price>{price}</span>
                <span class=css::diet>
                    <Icon icon=diet_icon />
                    <span>{diet_label}</span>
                </span>
            </div>
            <button class=css::addButton on:click=on_add>
                "Add to Dish"
            </button>
        </article>
    }
}
