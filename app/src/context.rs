use std::sync::Arc;

use leptos::prelude::LeptosOptions;

use crate::content::Site;

#[derive(Clone, Debug)]
pub struct Context { // Could be called "AppState"
    pub leptos_options: LeptosOptions,
    pub site: Arc<Site>,
}

impl Context {
    /// Makes the site content reachable from components and server functions.
    pub fn provide(&self) {
        leptos::prelude::provide_context(Arc::clone(&self.site));
    }
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
