//! Person list view: fetches the people roster from the local API once per
//! mount and renders it, an error line, or a loading placeholder.

pub mod app;
pub mod fetch;
pub mod lifecycle;
pub mod person;
pub mod state;
pub mod view;

pub use app::PersonListView;
pub use fetch::FetchError;
pub use state::{Settlement, ViewState};
