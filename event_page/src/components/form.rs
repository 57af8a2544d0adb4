//! Registration form component.
//!
//! The form is controlled: every input shows the value held by its
//! [`FormUnit`] and every edit goes back through
//! [`FormUnit::on_field_change`]. Submitting never reloads the page.

use std::sync::Arc;

use leptos::prelude::*;

use super::{Glyph, GLYPH_ARROW, GLYPH_LOCK};
use crate::form::{FieldName, FormKind, FormSchema, FormStatus, FormUnit, SubmitHandler};

/// Context handle for whatever receives successful submissions.
///
/// Without one, submissions stay local ([`crate::form::LocalOnly`]).
#[derive(Clone)]
pub struct SubmitContext(pub Arc<dyn SubmitHandler + Send + Sync>);

impl SubmitContext {
    pub fn new(handler: impl SubmitHandler + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }
}

/// Registration form bound to its own [`FormUnit`].
#[component]
pub fn RegistrationForm(
    kind: FormKind,
    schema: Arc<FormSchema>,
    /// Hero variant: no title, no security note
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let unit = ArcRwSignal::new(FormUnit::new(kind, Arc::clone(&schema)));
    let handler = use_context::<SubmitContext>();

    let on_submit = {
        let unit = unit.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            unit.update(|form| {
                match &handler {
                    Some(SubmitContext(handler)) => form.submit_with(&**handler),
                    None => form.on_submit(),
                };
            });
        }
    };

    let fields = schema
        .fields()
        .iter()
        .cloned()
        .map(|field| {
            let name = field.name;
            let id = format!("{}-{}", kind.id_prefix(), name.as_str());
            let value = {
                let unit = unit.clone();
                move || unit.with(|form| form.value(name).to_string())
            };
            let flagged = {
                let unit = unit.clone();
                move || unit.with(|form| form.is_flagged(name))
            };
            let aria_invalid = {
                let flagged = flagged.clone();
                move || flagged().to_string()
            };
            let class = move || {
                if flagged() {
                    "field-input field-error"
                } else {
                    "field-input"
                }
            };
            let locked = {
                let unit = unit.clone();
                move || unit.with(FormUnit::is_submitted)
            };
            let edit = {
                let unit = unit.clone();
                move |value: String| {
                    unit.update(|form| {
                        form.on_field_change(name, value);
                    });
                }
            };

            let control = if name == FieldName::Role {
                let roles = schema.roles.clone();
                view! {
                    <select
                        id=id.clone()
                        name=name.as_str()
                        required=field.required
                        disabled=locked
                        class=class
                        aria-invalid=aria_invalid
                        prop:value=value
                        on:change=move |ev| edit(event_target_value(&ev))
                    >
                        <option value="">{field.placeholder}</option>
                        {roles.into_iter().map(|role| view! {
                            <option value=role.clone()>{role.clone()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                }
                .into_any()
            } else {
                view! {
                    <input
                        type=name.input_type()
                        id=id.clone()
                        name=name.as_str()
                        placeholder=field.placeholder
                        required=field.required
                        disabled=locked
                        class=class
                        aria-invalid=aria_invalid
                        prop:value=value
                        on:input=move |ev| edit(event_target_value(&ev))
                    />
                }
                .into_any()
            };

            view! {
                <div class="field" data-field=name.as_str()>
                    <label for=id class="field-label">
                        {field.label}
                        {field.required.then_some(" *")}
                    </label>
                    {control}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let status_text = {
        let unit = unit.clone();
        let schema = Arc::clone(&schema);
        move || {
            unit.with(|form| match form.status() {
                FormStatus::Editing => String::new(),
                FormStatus::Blocked(warning) => {
                    let labels: Vec<&str> = warning
                        .missing
                        .iter()
                        .map(|name| schema.field(*name).label.as_str())
                        .collect();
                    format!("Please fill in: {}", labels.join(", "))
                }
                FormStatus::SubmittedLocally => "You're registered. See you there!".to_string(),
            })
        }
    };
    let submitted = {
        let unit = unit.clone();
        move || unit.with(FormUnit::is_submitted)
    };
    let status_class = move || {
        unit.with(|form| match form.status() {
            FormStatus::Editing => "form-status",
            FormStatus::Blocked(_) => "form-status error",
            FormStatus::SubmittedLocally => "form-status success",
        })
    };

    let form_class = if compact {
        "registration-form compact"
    } else {
        "registration-form"
    };
    let title = (!compact).then(|| schema.title.clone());
    let security_note = (!compact).then(|| schema.security_note.clone());

    view! {
        <form class=form_class data-form=kind.id_prefix() novalidate=true on:submit=on_submit>
            {title.map(|title| view! { <h3 class="form-title">{title}</h3> })}
            {fields}
            <button type="submit" class="btn btn-primary btn-block" disabled=submitted>
                {schema.submit_text.clone()}
                <Glyph path=GLYPH_ARROW />
            </button>
            <p class=status_class role="status" aria-live="polite">{status_text}</p>
            {security_note.map(|note| view! {
                <p class="form-note">
                    <Glyph path=GLYPH_LOCK />
                    {note}
                </p>
            })}
        </form>
    }
}
