use gloo::console::{error, log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::fetch::{fetch_people, PEOPLE_URL};
use crate::lifecycle::mount_fetch;
use crate::state::ViewState;
use crate::view::PersonList;

/// Fetches the people list once after the first render and shows the outcome.
#[function_component(PersonListView)]
pub fn person_list_view() -> Html {
    let state = use_reducer(ViewState::default);

    // Fetch once on mount; a late response after unmount is dropped
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let request = async {
                let result = fetch_people(PEOPLE_URL).await;
                match &result {
                    Ok(data) => log!("Received data:", data.to_string()),
                    Err(e) => error!("Error details:", e.to_string()),
                }
                result
            };

            let (task, teardown) = mount_fetch(request, move |settlement| dispatcher.dispatch(settlement));
            spawn_local(async move {
                if !task.await {
                    warn!("People response arrived after unmount; discarded.");
                }
            });

            teardown
        });
    }

    html! { <PersonList state={(*state).clone()} /> }
}
