use gloo_timers::future::TimeoutFuture;
use leptos::{
    component, create_effect, create_memo, create_rw_signal, on_cleanup, spawn_local, view, Callable,
    Callback, IntoView, MaybeSignal, RwSignal, Show, Signal, SignalGet, SignalUpdate, SignalWith,
    SignalWithUntracked,
};
use std::cell::Cell;
use std::rc::Rc;
use crate::api::{ApiConfig, HttpUserApi};
use crate::components::class_info::ClassInfo;
use crate::constants::UNLIST_BANNER_DURATION;
use crate::listing::{check_listing, submit_write, CardModel, Footer, ListingError, PendingWrite};
use crate::models::TrainListing;
use crate::session;
use crate::time::{format_duration, today};

fn banner_millis() -> u32 {
    u32::try_from(UNLIST_BANNER_DURATION.as_millis()).unwrap_or(u32::MAX)
}

/// Apply a finished write and, after an unlist, hide the confirmation once
/// [`UNLIST_BANNER_DURATION`] has passed
async fn settle_write(
    model: RwSignal<CardModel>,
    write: PendingWrite,
    result: Result<(), ListingError>,
    alive: Rc<Cell<bool>>,
) {
    if !alive.get() {
        return;
    }
    let Some(Some(generation)) = model.try_update(|m| m.finish_write(&write, result)) else {
        return;
    };

    TimeoutFuture::new(banner_millis()).await;
    if alive.get() {
        model.update(|m| m.clear_unlist_banner(generation));
    }
}

#[component]
#[must_use]
pub fn TrainCard(#[prop(into)] train: MaybeSignal<TrainListing>) -> impl IntoView {
    let train = Signal::derive(move || train.get());
    let model = create_rw_signal(CardModel::new());

    // Responses that land after the card is gone are dropped
    let alive = Rc::new(Cell::new(true));
    {
        let alive = Rc::clone(&alive);
        on_cleanup(move || alive.set(false));
    }

    let reconcile_alive = Rc::clone(&alive);
    create_effect(move |_| {
        let current = train.get();
        model.update(CardModel::reset_for_new_train);

        let alive = Rc::clone(&reconcile_alive);
        spawn_local(async move {
            let api = HttpUserApi::new(ApiConfig::from_window());
            let token = session::stored_token();
            let outcome = check_listing(&api, token.as_deref(), &current, today()).await;

            if !alive.get() || !train.with_untracked(|t| *t == current) {
                return;
            }
            model.update(|m| m.apply_reconciliation(outcome));
        });
    });

    let toggle_alive = Rc::clone(&alive);
    let on_toggle = Callback::new(move |()| {
        let token = session::stored_token();
        let attempt = train.with_untracked(|t| model.try_update(|m| m.begin_toggle(t, token, today())));
        let Some(Ok(write)) = attempt else {
            return;
        };

        let alive = Rc::clone(&toggle_alive);
        spawn_local(async move {
            let api = HttpUserApi::new(ApiConfig::from_window());
            let result = submit_write(&api, &write).await;
            settle_write(model, write, result, alive).await;
        });
    });

    let on_select = Callback::new(move |class: String| model.update(|m| m.select_class(class)));

    let footer = create_memo(move |_| model.with(CardModel::footer));
    let in_flight = Signal::derive(move || model.with(CardModel::is_in_flight));
    let is_listed = Signal::derive(move || model.with(CardModel::is_listed));
    let selected = Signal::derive(move || model.with(|m| m.selected_class().map(str::to_string)));
    let error = Signal::derive(move || model.with(|m| m.error().map(ListingError::message)));

    let button_label = move |idle: &'static str| {
        move || if in_flight.get() { "Processing..." } else { idle }
    };

    view! {
        <li class="train-card">
            <Show when=move || is_listed.get()>
                <div class="listed-ribbon">"You're Listed"</div>
            </Show>

            {move || view! { <TrainSummary train=train.get() /> }}

            <div class="train-card-classes">
                {move || view! {
                    <ClassInfo
                        classes=train.with(TrainListing::travel_classes)
                        selected=selected
                        on_select=on_select
                    />
                }}
            </div>

            <div class="listing-footer">
                {move || match footer.get() {
                    Footer::Listed { class } => view! {
                        <div class="listing-confirmed">
                            <div class="listing-message">
                                "You are listed on this train in "
                                <strong>{class}</strong>
                                " class! Fellow travelers can find you."
                            </div>
                            <button
                                class="unlist-button danger"
                                disabled=move || in_flight.get()
                                on:click=move |_| on_toggle.call(())
                            >
                                {button_label("Unlist Yourself")}
                            </button>
                        </div>
                    }.into_view(),
                    Footer::JustUnlisted => view! {
                        <div class="unlist-confirmation">
                            "You have been unlisted from this train successfully!"
                        </div>
                    }.into_view(),
                    Footer::ReadyToList { .. } => view! {
                        <button
                            class="list-button primary"
                            disabled=move || in_flight.get()
                            on:click=move |_| on_toggle.call(())
                        >
                            {button_label("List Yourself on This Train")}
                        </button>
                    }.into_view(),
                    Footer::Empty => ().into_view(),
                }}
            </div>

            {move || error.get().map(|message| view! {
                <div class="listing-error">{message}</div>
            })}
        </li>
    }
}

#[component]
fn TrainSummary(train: TrainListing) -> impl IntoView {
    let TrainListing {
        train_number,
        train_name,
        from_station,
        to_station,
        departure_time,
        arrival_time,
        train_date,
        duration_minutes,
        distance_km,
        ..
    } = train;

    view! {
        <div class="train-card-header">
            <h3 class="train-title">
                <span class="train-name">{train_name}</span>
                <span class="train-number">"(" {train_number} ")"</span>
            </h3>
            <span class="train-date">{train_date.unwrap_or_default()}</span>
        </div>
        <div class="train-card-route">
            <div class="route-end departure">
                <p class="station">
                    <span class="station-name">{from_station.name}</span>
                    <span class="station-code">"(" {from_station.code} ")"</span>
                </p>
                <p class="time">{departure_time}</p>
            </div>
            <div class="route-middle">
                <div class="duration">{format_duration(duration_minutes)}</div>
                <div class="route-line"></div>
                {distance_km.map(|km| view! { <div class="distance">{format!("{km} km")}</div> })}
            </div>
            <div class="route-end arrival">
                <p class="station">
                    <span class="station-name">{to_station.name}</span>
                    <span class="station-code">"(" {to_station.code} ")"</span>
                </p>
                <p class="time">{arrival_time}</p>
            </div>
        </div>
    }
}
