//! Category tiles shown above the item grid.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::CategoryLabel;

stylance::import_crate_style!(css, "src/components/category_grid.module.css");

/// One tile per category. Not rendered while a search is active.
#[component]
pub fn CategoryGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <Show when=move || ctx.categories_visible.get()>
            <div class=css::grid role="list" aria-label="Categories">
                {ctx
                    .categories
                    .get_value()
                    .into_iter()
                    .map(|category| view! { <CategoryTile category=category /> })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[component]
fn CategoryTile(category: CategoryLabel) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::category_icon(&category.icon_ref);
    let name = category.name;
    let name_for_active = name.clone();
    let name_for_click = name.clone();

    let is_active = Signal::derive(move || ctx.active_category.with(|c| *c == name_for_active));

    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.on_category_selected(name_for_click.clone());
    };

    view! {
        <button
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::tile, css::active)
                } else {
                    css::tile.to_string()
                }
            }
            on:click=on_click
            role="listitem"
            aria-pressed=move || is_active.get().to_string()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span>{name}</span>
        </button>
    }
}
