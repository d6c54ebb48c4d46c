//! Transient view state held by one mounted list view.

use std::rc::Rc;

use serde_json::Value;
use yew::functional::Reducible;

use crate::fetch::FetchError;
use crate::person::{rows_from, PersonRow};

/// Payload and error slots. Both empty means the request is still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub person: Option<Value>,
    pub error: Option<String>,
}

/// How the single request settled.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Loaded(Value),
    Failed(String),
}

impl From<Result<Value, FetchError>> for Settlement {
    fn from(result: Result<Value, FetchError>) -> Self {
        match result {
            Ok(data) => Settlement::Loaded(data),
            Err(e) => Settlement::Failed(e.to_string()),
        }
    }
}

impl Reducible for ViewState {
    type Action = Settlement;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Settlement::Loaded(data) => next.person = Some(data),
            Settlement::Failed(message) => next.error = Some(message),
        }
        Rc::new(next)
    }
}

/// What goes below the error line.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Records(Vec<PersonRow>),
    InvalidFormat,
    Loading,
    Empty,
}

impl ViewState {
    pub fn body(&self) -> Body {
        match (&self.person, &self.error) {
            (Some(data), _) => rows_from(data).map_or(Body::InvalidFormat, Body::Records),
            (None, None) => Body::Loading,
            (None, Some(_)) => Body::Empty,
        }
    }
}
