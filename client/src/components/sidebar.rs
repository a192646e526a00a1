//! Collections sidebar: header summary plus the scrollable item list.

use leptos::prelude::*;

use crate::components::collection_item::CollectionItem;
use crate::state::collections::{CollectionsEvent, CollectionsState};

/// Sidebar rendered once the collection list has loaded.
#[component]
pub fn CollectionsSidebar(state: RwSignal<CollectionsState>, on_event: Callback<CollectionsEvent>) -> impl IntoView {
    let entries = move || state.with(|s| s.item_ids().into_iter().enumerate().collect::<Vec<_>>());

    view! {
        <nav class="collections-sidebar">
            <div class="collections-sidebar__header">
                <h2>"Collections"</h2>
                <span class="collections-sidebar__summary">{move || state.with(CollectionsState::summary_label)}</span>
            </div>
            <ul class="collections-sidebar__list">
                <For
                    each=entries
                    key=|entry: &(usize, String)| entry.1.clone()
                    children=move |(index, id): (usize, String)| {
                        view! { <CollectionItem id=id index=index state=state on_event=on_event/> }
                    }
                />
            </ul>
        </nav>
    }
}
