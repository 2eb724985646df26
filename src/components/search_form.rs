use leptos::{
    component, create_signal, event_target_value, view, Callable, Callback, IntoView, SignalGet,
    SignalGetUntracked, SignalSet,
};
use crate::api::TrainSearchQuery;
use crate::time::{parse_calendar_date, today};

/// Validate the raw form fields; the date comes from an `<input type="date">` (`YYYY-MM-DD`)
fn build_query(from: &str, to: &str, date: &str) -> Result<TrainSearchQuery, String> {
    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        return Err("Enter both a departure and a destination station".to_string());
    }
    if from.eq_ignore_ascii_case(to) {
        return Err("Departure and destination must be different stations".to_string());
    }
    let date = parse_calendar_date(date).ok_or_else(|| "Pick a travel date".to_string())?;

    Ok(TrainSearchQuery {
        from: from.to_string(),
        to: to.to_string(),
        date,
    })
}

#[component]
#[must_use]
pub fn SearchForm(on_search: Callback<TrainSearchQuery>) -> impl IntoView {
    let (from, set_from) = create_signal(String::new());
    let (to, set_to) = create_signal(String::new());
    let (date, set_date) = create_signal(today().format("%Y-%m-%d").to_string());
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_query(&from.get_untracked(), &to.get_untracked(), &date.get_untracked()) {
            Ok(query) => {
                set_form_error.set(None);
                on_search.call(query);
            }
            Err(e) => set_form_error.set(Some(e)),
        }
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                class="station-input"
                placeholder="From (station code)"
                prop:value=move || from.get()
                on:input=move |ev| set_from.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="station-input"
                placeholder="To (station code)"
                prop:value=move || to.get()
                on:input=move |ev| set_to.set(event_target_value(&ev))
            />
            <input
                type="date"
                class="date-input"
                prop:value=move || date.get()
                on:change=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit" class="primary">"Search"</button>
            {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_query() {
        let query = build_query(" MMCT ", "NDLS", "2024-03-05").expect("valid query");
        assert_eq!(query.from, "MMCT");
        assert_eq!(query.to, "NDLS");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"));
    }

    #[test]
    fn test_build_query_requires_stations() {
        assert!(build_query("", "NDLS", "2024-03-05").is_err());
        assert!(build_query("MMCT", "  ", "2024-03-05").is_err());
        assert!(build_query("ndls", "NDLS", "2024-03-05").is_err());
    }

    #[test]
    fn test_build_query_requires_date() {
        assert_eq!(
            build_query("MMCT", "NDLS", "").map(|q| q.date),
            Err("Pick a travel date".to_string())
        );
    }
}
