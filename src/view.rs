//! Markup for the person list. Pure function of `ViewState`.

use yew::prelude::*;

use crate::person::PersonRow;
use crate::state::{Body, ViewState};

#[derive(Properties, PartialEq)]
pub struct PersonListProps {
    pub state: ViewState,
}

fn person_block(row: &PersonRow) -> Html {
    html! {
        <div key={row.key.clone()} class="person">
            <p>{ format!("ID: {}", row.id) }</p>
            <p>{ format!("Name: {}", row.name) }</p>
            <hr />
        </div>
    }
}

#[function_component(PersonList)]
pub fn person_list(props: &PersonListProps) -> Html {
    let state = &props.state;

    let body = match state.body() {
        Body::Records(rows) => html! {
            <div>
                { for rows.iter().map(person_block) }
            </div>
        },
        Body::InvalidFormat => html! { <div><p>{ "Invalid data format" }</p></div> },
        Body::Loading => html! { <p>{ "Loading..." }</p> },
        Body::Empty => html! {},
    };

    html! {
        <div class="App">
            <h1>{ "Person Information" }</h1>
            if let Some(message) = state.error.clone() {
                <p style="color: red;">{ format!("Error: {}", message) }</p>
            }
            { body }
        </div>
    }
}
