use leptos::prelude::LeptosOptions;

use crate::store;

// Shared by the leptos routes, the server functions, and the feed handlers.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: store::Store,
}

// Hand-written so the axum macros feature can stay off.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
