use event_page::form::{FormKind, FormState};
use event_page::SubmitHandler;
use tracing::info;

/// Reports accepted registrations to the browser console.
///
/// Only field names are logged, never values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSubmit;

impl SubmitHandler for ConsoleSubmit {
    fn submit(&self, form: FormKind, state: &FormState) {
        let filled: Vec<&str> = state
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        info!(form = form.id_prefix(), fields = ?filled, "registration submitted");
    }
}
