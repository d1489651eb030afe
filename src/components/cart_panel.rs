//! Slide-in cart panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/cart_panel.module.css");

/// Order review panel anchored to the right edge.
///
/// Always mounted; the open flag only toggles the slide-in class so the
/// transition plays in both directions.
#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let panel_class = move || {
        if ctx.cart_open.get() {
            format!("{} {}", css::panel, css::panelOpen)
        } else {
            css::panel.to_string()
        }
    };

    let on_close = move |_: leptos::ev::MouseEvent| {
        ctx.on_cart_close_clicked();
    };

    view! {
        <aside
            class=panel_class
            aria-label="Cart"
            aria-hidden=move || (!ctx.cart_open.get()).to_string()
        >
            <header class=css::header>
                <span class=css::title>"Order items"</span>
                <button class=css::closeButton on:click=on_close title="Close cart">
                    <Icon icon=ic::CLOSE />
                </button>
            </header>
            <p class=css::empty>"Your cart is empty"</p>
        </aside>
    }
}
