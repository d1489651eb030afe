//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::logging;
use leptos::prelude::*;

use crate::components::Home;
use crate::core::error::SessionError;
use crate::core::{CatalogStore, SessionEvent, SessionState};
use crate::models::{CatalogItem, CategoryLabel};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Wraps a single [`SessionState`] in a signal. Components read the derived
/// memos and send events through [`AppContext::dispatch`]; each event is one
/// signal update, so readers never see inputs without their recomputed
/// visible list.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<SessionState>,
    /// Items to render in the grid.
    pub visible_items: Memo<Vec<CatalogItem>>,
    /// Whether the cart panel is shown.
    pub cart_open: Memo<bool>,
    /// Current search box contents.
    pub search_text: Memo<String>,
    /// Recorded category selection (highlighted tile).
    pub active_category: Memo<String>,
    /// False while a search is active; tiles are hidden then.
    pub categories_visible: Memo<bool>,
    /// Category tiles, fixed for the session.
    pub categories: StoredValue<Vec<CategoryLabel>>,
}

impl AppContext {
    /// Creates a new application context for a fresh session over `catalog`.
    pub fn new(catalog: CatalogStore) -> Self {
        let state = SessionState::new(catalog);
        let categories = StoredValue::new(state.categories().to_vec());
        let session = RwSignal::new(state);

        Self {
            session,
            visible_items: Memo::new(move |_| session.with(|s| s.current_visible_items())),
            cart_open: Memo::new(move |_| session.with(|s| s.is_cart_open())),
            search_text: Memo::new(move |_| session.with(|s| s.search_text().to_string())),
            active_category: Memo::new(move |_| {
                session.with(|s| s.active_category().to_string())
            }),
            categories_visible: Memo::new(move |_| session.with(|s| s.categories_visible())),
            categories,
        }
    }

    /// Apply one event to the session.
    pub fn dispatch(&self, event: SessionEvent) -> Result<(), SessionError> {
        match self.session.try_update(|s| s.apply(event)) {
            Some(result) => result,
            None => {
                logging::debug_warn!("dispatch after session was disposed");
                Err(SessionError::SessionClosed)
            }
        }
    }

    pub fn on_search_text_changed(&self, text: String) {
        self.dispatch_logged(SessionEvent::SearchTextChanged(text));
    }

    pub fn on_category_selected(&self, category: String) {
        self.dispatch_logged(SessionEvent::CategorySelected(category));
    }

    pub fn on_cart_icon_clicked(&self) {
        self.dispatch_logged(SessionEvent::CartIconClicked);
    }

    pub fn on_cart_close_clicked(&self) {
        self.dispatch_logged(SessionEvent::CartCloseClicked);
    }

    fn dispatch_logged(&self, event: SessionEvent) {
        let _ = self.dispatch(event);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the bundled catalog and provides the AppContext
/// - Wraps the app in an ErrorBoundary so a bad dataset renders an error page
/// - Renders the Home page
#[component]
pub fn App() -> impl IntoView {
    let page = CatalogStore::bundled().map(|catalog| {
        provide_context(AppContext::new(catalog));
        view! { <Home /> }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #e2e8f0;
                    color: #4b5563;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #ef4444; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="margin-bottom: 1rem;">
                        "The menu could not be loaded."
                    </p>
                    <ul style="color: #ef4444; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {page}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AppContext {
        AppContext::new(CatalogStore::bundled().unwrap())
    }

    #[test]
    fn test_memos_follow_search() {
        let ctx = ctx();
        let total = ctx.visible_items.get().len();
        assert!(ctx.categories_visible.get());

        ctx.on_search_text_changed("pizza".to_string());
        let names: Vec<_> = ctx.visible_items.get().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Margherita Pizza", "Pepperoni Pizza"]);
        assert_eq!(ctx.search_text.get(), "pizza");
        assert!(!ctx.categories_visible.get());

        ctx.on_search_text_changed(String::new());
        assert_eq!(ctx.visible_items.get().len(), total);
        assert_eq!(ctx.active_category.get(), "All");
    }

    #[test]
    fn test_memos_follow_category_and_cart() {
        let ctx = ctx();
        ctx.on_category_selected("Soups".to_string());
        assert_eq!(ctx.active_category.get(), "Soups");
        assert!(ctx.visible_items.get().iter().all(|i| i.category == "Soups"));

        assert!(!ctx.cart_open.get());
        ctx.on_cart_icon_clicked();
        assert!(ctx.cart_open.get());
        ctx.on_cart_close_clicked();
        assert!(!ctx.cart_open.get());
    }

    #[test]
    fn test_dispatch_rejects_unknown_category() {
        let ctx = ctx();
        ctx.on_category_selected("Pasta".to_string());
        let before = ctx.visible_items.get();
        let err = ctx
            .dispatch(SessionEvent::CategorySelected("Snacks".to_string()))
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidCategory("Snacks".to_string()));
        assert_eq!(ctx.visible_items.get(), before);
        assert_eq!(ctx.active_category.get(), "Pasta");
    }

    #[test]
    fn test_dispatch_after_dispose_fails() {
        let ctx = ctx();
        ctx.session.dispose();
        let err = ctx.dispatch(SessionEvent::CartIconClicked).unwrap_err();
        assert_eq!(err, SessionError::SessionClosed);
    }

    #[test]
    fn test_categories_fixed() {
        let ctx = ctx();
        let names: Vec<_> = ctx
            .categories
            .get_value()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("All"));
        assert_eq!(names.len(), 7);
    }
}
