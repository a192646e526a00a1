//! A single row of the collections sidebar.
//!
//! DESIGN
//! ======
//! Rows are keyed by collection id and read their flags through a memo, so a
//! hover or click re-renders classes in place instead of recreating the row
//! (which would replay its entrance animation).

use leptos::prelude::*;

use crate::state::collections::{CollectionsEvent, CollectionsState};
use crate::util::animation::EntranceAnimation;

/// Clickable, hoverable collection row.
#[component]
pub fn CollectionItem(
    id: String,
    index: usize,
    state: RwSignal<CollectionsState>,
    on_event: Callback<CollectionsEvent>,
) -> impl IntoView {
    let row = Memo::new({
        let id = id.clone();
        move |_| state.with(|s| s.row(&id))
    });
    let is_active = move || row.get().is_some_and(|r| r.active);
    let is_hovered = move || row.get().is_some_and(|r| r.hovered);

    let click_id = id.clone();
    let enter_id = id.clone();
    let leave_id = id;

    view! {
        <li
            class="collection-item"
            class:collection-item--active=is_active
            style=EntranceAnimation::for_index(index).style()
            on:click=move |_| on_event.run(CollectionsEvent::Clicked(click_id.clone()))
            on:mouseenter=move |_| on_event.run(CollectionsEvent::PointerEntered(enter_id.clone()))
            on:mouseleave=move |_| on_event.run(CollectionsEvent::PointerLeft(leave_id.clone()))
        >
            <Show when=is_hovered>
                <span class="collection-item__indicator" aria-hidden="true"></span>
            </Show>
            <div class="collection-item__name">{move || row.get().map(|r| r.name).unwrap_or_default()}</div>
            <div class="collection-item__count">
                {move || row.get().map(|r| r.count_label()).unwrap_or_default()}
            </div>
        </li>
    }
}
