use leptos::{component, view, Callable, Callback, IntoView, Signal, SignalGet};

/// Travel class picker shown inside a train card
#[component]
#[must_use]
pub fn ClassInfo(
    classes: Vec<String>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="class-info">
            {classes
                .into_iter()
                .map(|class| {
                    let is_selected = {
                        let class = class.clone();
                        move || selected.get().as_deref() == Some(class.as_str())
                    };
                    let value = class.clone();
                    view! {
                        <button
                            type="button"
                            class="class-option"
                            class:selected=is_selected
                            on:click=move |_| on_select.call(value.clone())
                        >
                            {class}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
