use crate::shared::form::submit_with_delay;
use contracts::domain::a001_request::{Request, RequestDraft, DEPARTMENTS, REQUEST_TYPES};
use contracts::domain::common::{InMemoryStore, SubmitGuard, ValidationErrors};
use leptos::prelude::*;

/// `(code, label)` options of the request type select
pub fn type_options() -> Vec<(String, String)> {
    REQUEST_TYPES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

/// Departments are stored by name, so code and label match
pub fn department_options() -> Vec<(String, String)> {
    DEPARTMENTS
        .iter()
        .map(|d| (d.to_string(), d.to_string()))
        .collect()
}

/// ViewModel of the request edit form
#[derive(Clone, Copy)]
pub struct RequestEditViewModel {
    pub form: RwSignal<RequestDraft>,
    pub errors: RwSignal<ValidationErrors>,
    pub save_error: RwSignal<Option<String>>,
    pub guard: RwSignal<SubmitGuard>,
}

impl RequestEditViewModel {
    pub fn new(request: &Request) -> Self {
        Self {
            form: RwSignal::new(RequestDraft::from(request)),
            errors: RwSignal::new(ValidationErrors::default()),
            save_error: RwSignal::new(None),
            guard: RwSignal::new(SubmitGuard::default()),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.guard.with(|g| g.is_in_flight())
    }

    /// Validate the draft and, when valid, start the delayed save.
    /// `on_saved` receives the id of the saved request.
    pub fn save_command(
        &self,
        store: RwSignal<InMemoryStore<Request>>,
        id: String,
        delay_ms: u32,
        on_saved: Callback<String>,
    ) {
        let patch = match self.form.with_untracked(|f| f.validate()) {
            Ok(patch) => patch,
            Err(errors) => {
                log::debug!("Request {} not saved: {}", id, errors);
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
                    log::info!("Request {} saved", saved.id);
                    on_saved.run(saved.id);
                }
                Err(e) => {
                    log::error!("Request save failed: {}", e);
                    save_error.set(Some(e.to_string()));
                }
            }
        });
        if !started {
            log::debug!("Request save already in progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::select_options;

    #[test]
    fn test_type_options_carry_spanish_labels() {
        let options = type_options();
        assert_eq!(options.len(), REQUEST_TYPES.len());
        assert!(options
            .iter()
            .any(|(code, label)| code == "leave" && label == "Vacaciones"));
    }

    #[test]
    fn test_department_options_keep_unknown_current_value() {
        let options = department_options();
        assert_eq!(options.len(), DEPARTMENTS.len());
        assert!(options.iter().all(|(code, label)| code == label));

        let with_current = select_options(options.clone(), "Compras");
        assert_eq!(with_current.len(), options.len() + 1);
        assert_eq!(with_current.last(), Some(&("Compras".to_string(), "Compras".to_string())));
    }
}
