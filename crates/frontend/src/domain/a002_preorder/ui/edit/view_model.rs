use crate::shared::form::submit_with_delay;
use contracts::domain::a002_preorder::{Preorder, PreorderDraft};
use contracts::domain::common::{InMemoryStore, SubmitGuard, ValidationErrors};
use contracts::shared::format::format_money;
use leptos::prelude::*;

/// ViewModel of the preorder edit form
#[derive(Clone, Copy)]
pub struct PreorderEditViewModel {
    pub form: RwSignal<PreorderDraft>,
    pub errors: RwSignal<ValidationErrors>,
    pub save_error: RwSignal<Option<String>>,
    pub guard: RwSignal<SubmitGuard>,
}

impl PreorderEditViewModel {
    pub fn new(preorder: &Preorder) -> Self {
        Self {
            form: RwSignal::new(PreorderDraft::from(preorder)),
            errors: RwSignal::new(ValidationErrors::default()),
            save_error: RwSignal::new(None),
            guard: RwSignal::new(SubmitGuard::default()),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.guard.with(|g| g.is_in_flight())
    }

    /// Total recomputed from the quantity and price being typed
    pub fn total_preview(&self) -> String {
        self.form
            .with(|f| f.preview_total())
            .map(format_money)
            .unwrap_or_else(|| "-".to_string())
    }

    /// Validate the draft and, when valid, start the delayed save.
    /// `on_saved` receives the id of the saved preorder.
    pub fn save_command(
        &self,
        store: RwSignal<InMemoryStore<Preorder>>,
        id: String,
        delay_ms: u32,
        on_saved: Callback<String>,
    ) {
        let patch = match self.form.with_untracked(|f| f.validate()) {
            Ok(patch) => patch,
            Err(errors) => {
                log::debug!("Preorder {} not saved: {}", id, errors);
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(ValidationErrors::default());
        self.save_error.set(None);

        let save_error = self.save_error;
        let started = submit_with_delay(store, self.guard, id, patch, delay_ms, move |result| {
            match result {
                Ok(saved) => {
                    log::info!("Preorder {} saved, total {}", saved.order_number, saved.total_amount);
                    on_saved.run(saved.id);
                }
                Err(e) => {
                    log::error!("Preorder save failed: {}", e);
                    save_error.set(Some(e.to_string()));
                }
            }
        });
        if !started {
            log::debug!("Preorder save already in progress");
        }
    }
}
