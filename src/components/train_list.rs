use leptos::{component, view, For, IntoView, Signal, SignalGet};
use crate::components::train_card::TrainCard;
use crate::models::TrainListing;

#[component]
#[must_use]
pub fn TrainList(#[prop(into)] trains: Signal<Vec<TrainListing>>) -> impl IntoView {
    view! {
        <ul class="train-list">
            <For
                each=move || trains.get()
                key=|train| (train.train_number.clone(), train.train_date.clone())
                children=move |train: TrainListing| view! { <TrainCard train=train /> }
            />
        </ul>
    }
}
