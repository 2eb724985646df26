use leptos::*;
use leptos_meta::*;
use crate::api::{search_trains, ApiConfig, TrainSearchQuery};
use crate::components::search_form::SearchForm;
use crate::components::train_list::TrainList;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (query, set_query) = create_signal(None::<TrainSearchQuery>);
    let results = create_local_resource(
        move || query.get(),
        |query| async move {
            match query {
                Some(query) => search_trains(&ApiConfig::from_window(), &query).await,
                None => Ok(Vec::new()),
            }
        },
    );
    let trains = Signal::derive(move || results.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <Stylesheet id="leptos" href="/pkg/train_buddy.css"/>
        <Title text="Train Buddy"/>

        <div class="app">
            <SearchForm on_search=Callback::new(move |q| set_query.set(Some(q)))/>
            {move || results.loading().get().then(|| view! {
                <p class="search-status">"Searching..."</p>
            })}
            {move || results.get().and_then(Result::err).map(|e| {
                logging::error!("Train search failed: {e}");
                view! { <p class="search-error">"Could not load trains. Please try again."</p> }
            })}
            <TrainList trains=trains/>
        </div>
    }
}
