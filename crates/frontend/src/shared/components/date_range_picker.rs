use crate::shared::date_utils::{from_input_value, to_input_value, today};
use crate::shared::icons::icon;
use contracts::shared::list_query::{DatePreset, DateRange};
use leptos::prelude::*;
use thaw::*;

/// DateRangePicker: trigger button plus a dropdown with quick presets and
/// two date inputs ("Desde", "Hasta").
///
/// A range is only reported once it has a start date; a range with only an
/// end date does not filter and is never emitted.
#[component]
pub fn DateRangePicker(
    /// Current range, `None` when the list is not filtered by date
    #[prop(into)]
    value: Signal<Option<DateRange>>,

    /// Callback with the new range (`None` clears the filter)
    on_change: Callback<Option<DateRange>>,

    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Filtrar por fecha".to_string());
    let is_open = RwSignal::new(false);

    // Inputs are edited locally and applied with "Aplicar"
    let draft_from = RwSignal::new(String::new());
    let draft_to = RwSignal::new(String::new());

    let open_picker = move |_| {
        let current = value.get_untracked().unwrap_or_default();
        draft_from.set(to_input_value(current.from));
        draft_to.set(to_input_value(current.to));
        is_open.update(|open| *open = !*open);
    };

    let apply_preset = move |preset: DatePreset| {
        on_change.run(Some(preset.resolve(today())));
        is_open.set(false);
    };

    let apply_custom = move |_| {
        let from = from_input_value(&draft_from.get_untracked());
        let to = from_input_value(&draft_to.get_untracked());
        let range = from.map(|from| DateRange { from: Some(from), to });
        on_change.run(range);
        is_open.set(false);
    };

    let clear = move |_| {
        on_change.run(None);
        is_open.set(false);
    };

    let trigger_label = move || {
        value
            .get()
            .and_then(|r| r.label())
            .unwrap_or_else(|| placeholder.clone())
    };

    view! {
        <div class="date-range-picker">
            <button
                class="date-range-picker__trigger"
                class:date-range-picker__trigger--active=move || value.get().is_some_and(|r| r.is_active())
                on:click=open_picker
            >
                {icon("calendar")}
                <span>{trigger_label}</span>
            </button>

            <Show when=move || is_open.get()>
                <div class="date-range-picker__dropdown">
                    <div class="date-range-picker__presets">
                        {DatePreset::ALL.into_iter().map(|preset| {
                            view! {
                                <button
                                    class="date-range-picker__preset"
                                    on:click=move |_| apply_preset(preset)
                                >
                                    {preset.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="date-range-picker__custom">
                        <div class="form-group">
                            <label>"Desde"</label>
                            <input
                                type="date"
                                class="date-input"
                                prop:value=move || draft_from.get()
                                on:input=move |ev| draft_from.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Hasta"</label>
                            <input
                                type="date"
                                class="date-input"
                                prop:value=move || draft_to.get()
                                on:input=move |ev| draft_to.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button appearance=ButtonAppearance::Secondary on_click=clear>
                            "Limpiar"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=apply_custom>
                            "Aplicar"
                        </Button>
                    </Flex>
                </div>
            </Show>
        </div>
    }
}
