use leptos::prelude::*;

use crate::components::route_head::RouteHead;
use crate::meta::{MetaArgs, MetaEntry};

pub const TITLE: &str = "Overview of website and it's capabilities";
pub const META_NAME: &str = "preview";
pub const META_CONTENT: &str = "Welcome to the preview";

/// Head entries for the preview route. The route arguments are not consulted.
pub fn meta(_args: &MetaArgs) -> Vec<MetaEntry> {
    vec![
        MetaEntry::title(TITLE),
        MetaEntry::named(META_NAME, META_CONTENT),
    ]
}

/// Router view for `/preview`: head entries, then the page body.
#[component]
pub fn PreviewRoute() -> impl IntoView {
    let args = MetaArgs::from_router();

    view! {
        <RouteHead entries=meta(&args)/>
        <PreviewPage/>
    }
}

#[component]
pub fn PreviewPage() -> impl IntoView {
    view! {
        <main class="flex items-center justify-center pt-16 pb-4">
            <div class="flex-1 flex flex-col items-center gap-16 min-h">"Hello"</div>
        </main>
    }
}
