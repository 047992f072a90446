//! Building blocks shared by the edit forms: select options, inputs bound
//! to a draft, the labelled field wrapper and the delayed save.

use crate::shared::stores::commit_patch;
use contracts::domain::common::{
    InMemoryStore, Record, StoreError, SubmitGuard, ValidationErrors,
};
use contracts::shared::list_query::Searchable;
use contracts::shared::status::StatusTable;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// `(code, label)` pairs of a status table
pub fn status_options<S: StatusTable>() -> Vec<(String, String)> {
    S::TABLE
        .iter()
        .map(|e| (e.code.to_string(), e.label.to_string()))
        .collect()
}

/// Options of a select; a current value outside the known list is kept as
/// an extra option so editing never silently changes it.
pub fn select_options(known: Vec<(String, String)>, current: &str) -> Vec<(String, String)> {
    let mut options = known;
    if !current.is_empty() && !options.iter().any(|(code, _)| code == current) {
        options.push((current.to_string(), current.to_string()));
    }
    options
}

/// Label, input and the validation message of one form field
#[component]
pub fn FormField(
    label: &'static str,
    /// Field name used by the validation errors, when the field is validated
    #[prop(optional)]
    field: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(into)] errors: Signal<ValidationErrors>,
    children: Children,
) -> impl IntoView {
    let message = move || {
        let field = field?;
        errors.with(|e| e.for_field(field).map(|err| err.to_string()))
    };

    view! {
        <div class="form-group" class:form-group--error=move || message().is_some()>
            <label>
                {label}
                {required.then_some(" *")}
            </label>
            {children()}
            {move || message().map(|m| view! { <span class="field-error">{m}</span> })}
        </div>
    }
}

/// Native `<select>` bound to one string field of a draft
#[component]
pub fn SelectField(
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options.into_iter().map(|(code, label)| {
                let selected_code = code.clone();
                view! {
                    <option value=code selected=move || value.get() == selected_code>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Text input bound to one field of a draft held in `form`
pub fn bound_input<D: Send + Sync + 'static>(
    form: RwSignal<D>,
    input_type: &'static str,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <input
            type=input_type
            class="form-input"
            prop:value=move || form.with(read)
            on:input=move |ev| form.update(|d| write(d, event_target_value(&ev)))
        />
    }
}

pub fn bound_textarea<D: Send + Sync + 'static>(
    form: RwSignal<D>,
    rows: u32,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <textarea
            class="form-textarea"
            rows=rows
            prop:value=move || form.with(read)
            on:input=move |ev| form.update(|d| write(d, event_target_value(&ev)))
        />
    }
}

/// `SelectField` bound to one field of a draft. Options are computed once
/// from the value the form was opened with.
pub fn bound_select<D: Send + Sync + 'static>(
    form: RwSignal<D>,
    known: Vec<(String, String)>,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
) -> impl IntoView {
    let options = select_options(known, &form.with_untracked(read));
    view! {
        <SelectField
            value=Signal::derive(move || form.with(read))
            options=options
            on_change=Callback::new(move |v: String| form.update(|d| write(d, v)))
        />
    }
}

/// Simulated save: wait `delay_ms`, commit the patch and hand the saved
/// record to `on_saved`. Returns false when a save is already running.
pub fn submit_with_delay<T>(
    store: RwSignal<InMemoryStore<T>>,
    guard: RwSignal<SubmitGuard>,
    id: String,
    patch: T::Patch,
    delay_ms: u32,
    on_saved: impl FnOnce(Result<T, StoreError>) + 'static,
) -> bool
where
    T: Record + Searchable + Send + Sync + 'static,
    T::Patch: 'static,
{
    if !guard.try_update(|g| g.try_begin()).unwrap_or(false) {
        return false;
    }

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let result = commit_patch(store, &id, &patch);
        guard.update(|g| g.finish());
        on_saved(result);
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_request::RequestPriority;

    #[test]
    fn test_status_options_follow_table_order() {
        let options = status_options::<RequestPriority>();
        let codes: Vec<&str> = options.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["low", "medium", "high"]);
        assert_eq!(options[2].1, "Alta");
    }

    #[test]
    fn test_unknown_current_value_is_kept() {
        let known = vec![("IT".to_string(), "IT".to_string())];
        let options = select_options(known.clone(), "Compras");
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].0, "Compras");
        assert_eq!(select_options(known.clone(), "IT"), known);
        assert_eq!(select_options(known.clone(), ""), known);
    }
}
