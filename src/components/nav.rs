//! Top navigation bar: logo, search box, cart button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, SEARCH_PLACEHOLDER};

stylance::import_crate_style!(css, "src/components/nav.module.css");

/// Navigation bar.
///
/// Every keystroke in the search box is sent to the session; the form never
/// submits. The cart button opens the cart panel.
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_input = move |ev: leptos::ev::Event| {
        ctx.on_search_text_changed(event_target_value(&ev));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    let on_cart = move |_: leptos::ev::MouseEvent| {
        ctx.on_cart_icon_clicked();
    };

    view! {
        <nav class=css::nav>
            <div class=css::tile title=APP_NAME>
                <span class=css::logoIcon><Icon icon=ic::LOGO /></span>
            </div>

            <form class=css::searchForm on:submit=on_submit role="search">
                <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    type="text"
                    class=css::searchInput
                    placeholder=SEARCH_PLACEHOLDER
                    aria-label="Search items"
                    prop:value=move || ctx.search_text.get()
                    on:input=on_input
                />
            </form>

            <button
                class=format!("{} {}", css::tile, css::cartButton)
                on:click=on_cart
                title="Open cart"
            >
                // Cart contents are not tracked; the badge always reads 0.
                <span class=css::badge>"0"</span>
                <span class=css::cartIcon><Icon icon=ic::CART /></span>
            </button>
        </nav>
    }
}
