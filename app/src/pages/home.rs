use leptos::prelude::*;

use crate::components::{Footer, Head, Hero, NavBar};
use crate::content::Site;

#[component]
pub fn Index() -> impl IntoView {
    let site = Resource::new_blocking(|| (), move |_| async { get_site().await });
    let content_ref = NodeRef::<leptos::html::Main>::new();
    let scroll_to_content = Callback::new(move |()| {
        if let Some(content) = content_ref.get_untracked() {
            content.scroll_into_view();
        }
    });

    view! {
        {move || match site.get() {
            None => leptos::either::EitherOf3::A(view! { <p>{"Loading…"}</p> }.into_view()),
            Some(Ok(site)) => leptos::either::EitherOf3::B(view! {
                <Landing site=site scroll_to_content=scroll_to_content content_ref=content_ref />
            }.into_view()),
            Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                <p>{format!("Could not load site: {}", err)}</p>
            }.into_view()),
        }}
    }
}

/// The landing page proper, once the site content is available.
#[component]
pub fn Landing(
    site: Site,
    scroll_to_content: Callback<()>,
    content_ref: NodeRef<leptos::html::Main>,
) -> impl IntoView {
    let Site { config, theme, backgrounds } = site;
    let header = config.header.clone();
    let author = config.author.name.clone();
    let description = config.description.clone();

    view! {
        <Head config=config.clone() />
        <Hero
            scroll_to_content=scroll_to_content
            backgrounds=backgrounds
            theme=theme
            config=config
        />
        <main id="content" class="home" node_ref=content_ref>
            <NavBar header=header />
            <p class="description">{description}</p>
        </main>
        <Footer author=author />
    }
}

#[server(GetSite, "/api", "GetJson", "site")]
pub async fn get_site() -> Result<Site, ServerFnError> {
    let site = use_context::<std::sync::Arc<Site>>()
        .ok_or_else(|| ServerFnError::new("site content is missing from the context"))?;
    Ok(Site::clone(&site))
}
