//! Home page: nav, category tiles, item grid, cart panel.

use leptos::prelude::*;

use super::{CartPanel, CategoryGrid, ItemCard, Nav};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/home.module.css");

/// Catalog page.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_empty = Signal::derive(move || ctx.visible_items.with(|items| items.is_empty()));

    view! {
        <div class=css::page>
            <Nav />
            <CategoryGrid />

            <Show
                when=move || !is_empty.get()
                fallback=|| view! { <div class=css::empty>"No items found"</div> }
            >
                <div class=css::items>
                    <For
                        each=move || ctx.visible_items.get()
                        key=|item| item.id
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>

            <CartPanel />
        </div>
    }
}
