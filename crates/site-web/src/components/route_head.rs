use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::meta::MetaEntry;

/// Push a page's metadata entries into the document head.
#[component]
pub fn RouteHead(entries: Vec<MetaEntry>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| match entry {
            MetaEntry::Title { title } => view! { <Title text=title/> }.into_any(),
            MetaEntry::Named { name, content } => {
                view! { <Meta name=name content=content/> }.into_any()
            }
        })
        .collect_view()
}
