//! Collections page: loads the collection list once and hosts the sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. The page owns the `CollectionsState` signal for
//! its lifetime. In the browser it fetches `/data/raw.json` once after
//! mount; server rendering always emits the loading placeholder.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use leptos::prelude::*;

use crate::components::sidebar::CollectionsSidebar;
use crate::state::collections::{CollectionsEvent, CollectionsState, ViewPhase, error_banner};

/// Placeholder text for the non-ready phases; `None` once the list renders.
fn status_text(phase: &ViewPhase) -> Option<String> {
    match phase {
        ViewPhase::Loading => Some("Loading...".to_owned()),
        ViewPhase::Failed(message) => Some(error_banner(message)),
        ViewPhase::Ready => None,
    }
}

/// Replace the page state with the result of applying `event`.
fn dispatch(state: RwSignal<CollectionsState>, event: CollectionsEvent) {
    state.update(|s| *s = std::mem::take(s).apply(event));
}

/// Collections page — loading placeholder, error line, or the sidebar.
#[component]
pub fn CollectionsPage() -> impl IntoView {
    let state = RwSignal::new(CollectionsState::default());
    let phase = Memo::new(move |_| state.with(CollectionsState::phase));
    let on_event = Callback::new(move |event: CollectionsEvent| dispatch(state, event));

    #[cfg(feature = "hydrate")]
    {
        let load_once = crate::util::lifecycle::OnceGuard::new();
        let mounted = crate::util::lifecycle::MountFlag::new();
        let mounted_task = mounted.clone();
        Effect::new(move || {
            if !load_once.try_claim() {
                return;
            }
            let mounted = mounted_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_collections().await;
                match &result {
                    Ok(collections) => log::debug!("loaded {} collections", collections.len()),
                    Err(e) => leptos::logging::warn!("collections load failed: {e:?}"),
                }
                if !mounted.is_mounted() {
                    log::debug!("page unmounted before load settled; discarding result");
                    return;
                }
                dispatch(state, CollectionsEvent::from_load_result(result));
            });
        });
        on_cleanup(move || mounted.unmount());
    }

    view! {
        <div class="collections-page">
            {move || {
                let current = phase.get();
                let is_error = matches!(current, ViewPhase::Failed(_));
                match status_text(&current) {
                    Some(text) => {
                        view! {
                            <div
                                class="collections-status"
                                class:collections-status--error=is_error
                            >
                                {text}
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <CollectionsSidebar state=state on_event=on_event/> }.into_any(),
                }
            }}
        </div>
    }
}
