//! Controlled registration form.
//!
//! A [`FormUnit`] owns the current value of every field. Values only change
//! through [`FormUnit::on_field_change`], which replaces one field and leaves
//! the rest alone. Submitting checks the fields the schema marks as required
//! and either blocks with an [`InputValidationWarning`] or reaches the local
//! "submitted" state and hands the values to a [`SubmitHandler`]. Nothing here
//! talks to the network.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::types::FormContent;

/// The fields a registration form carries, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Business,
    Role,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Business,
        FieldName::Role,
    ];

    /// Key used in content files and as the input `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Business => "business",
            FieldName::Role => "role",
        }
    }

    /// HTML input type; `role` is rendered as a select instead.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldName::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFormField(s.to_string()))
    }
}

/// One validated field declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaField {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

/// Validated form declaration: every [`FieldName`] present, nothing extra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub title: String,
    fields: Vec<SchemaField>,
    pub roles: Vec<String>,
    pub submit_text: String,
    pub security_note: String,
}

impl FormSchema {
    pub fn from_content(content: &FormContent) -> Result<Self, ConfigError> {
        for key in content.fields.keys() {
            key.parse::<FieldName>()?;
        }
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| {
                let spec = content
                    .fields
                    .get(name.as_str())
                    .ok_or(ConfigError::MissingFormField(name.as_str()))?;
                Ok(SchemaField {
                    name,
                    label: spec.label.clone(),
                    placeholder: spec.placeholder.clone(),
                    required: spec.required,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            title: content.title.clone(),
            fields,
            roles: content.roles.clone(),
            submit_text: content.submit_text.clone(),
            security_note: content.security_note.clone(),
        })
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> &SchemaField {
        // from_content guarantees one entry per FieldName, in ALL order
        &self.fields[name as usize]
    }

    pub fn required_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// Current value of every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<FieldName, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::empty()
    }
}

impl FormState {
    /// Every field present and empty.
    pub fn empty() -> Self {
        Self {
            values: FieldName::ALL
                .into_iter()
                .map(|name| (name, String::new()))
                .collect(),
        }
    }

    pub fn get(&self, name: FieldName) -> &str {
        self.values.get(&name).map(String::as_str).unwrap_or_default()
    }

    /// Replace exactly one field.
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Required fields that were empty when submit was attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputValidationWarning {
    /// In form display order.
    pub missing: Vec<FieldName>,
}

impl fmt::Display for InputValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(|name| name.as_str()).collect();
        write!(f, "required fields empty: {}", names.join(", "))
    }
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    SubmittedLocally,
    Blocked(InputValidationWarning),
}

/// Where the form lives on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    HeroInline,
    Register,
}

impl FormKind {
    /// Prefix for element ids, so two forms on one page never collide.
    pub fn id_prefix(self) -> &'static str {
        match self {
            FormKind::HeroInline => "hero",
            FormKind::Register => "register",
        }
    }
}

/// Hand-off point for whatever actually delivers a registration.
pub trait SubmitHandler {
    fn submit(&self, form: FormKind, state: &FormState);
}

/// Default handler: the submission stays local.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalOnly;

impl SubmitHandler for LocalOnly {
    fn submit(&self, form: FormKind, _state: &FormState) {
        debug!(form = form.id_prefix(), "registration submitted locally");
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Blocked(InputValidationWarning),
    SubmittedLocally,
}

/// Field values plus submit status for one form instance.
#[derive(Clone, Debug)]
pub struct FormUnit {
    kind: FormKind,
    schema: Arc<FormSchema>,
    state: FormState,
    status: FormStatus,
}

impl FormUnit {
    pub fn new(kind: FormKind, schema: Arc<FormSchema>) -> Self {
        Self {
            kind,
            schema,
            state: FormState::empty(),
            status: FormStatus::Editing,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.state.get(name)
    }

    /// Whether the last blocked submit flagged this field and it is still untouched.
    pub fn is_flagged(&self, name: FieldName) -> bool {
        match &self.status {
            FormStatus::Blocked(warning) => warning.missing.contains(&name),
            _ => false,
        }
    }

    /// Whether the form reached its terminal submitted state.
    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::SubmittedLocally
    }

    /// Replace one field's value. Editing a flagged field clears its flag.
    ///
    /// Once submitted the values are frozen and edits are ignored.
    pub fn on_field_change(&mut self, name: FieldName, value: impl Into<String>) -> &FormState {
        if self.is_submitted() {
            debug!(form = self.kind.id_prefix(), field = %name, "edit after submit ignored");
            return &self.state;
        }
        self.state.set(name, value);
        if let FormStatus::Blocked(warning) = &mut self.status {
            warning.missing.retain(|missing| *missing != name);
            if warning.missing.is_empty() {
                self.status = FormStatus::Editing;
            }
        }
        &self.state
    }

    /// Submit without any transport.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.submit_with(&LocalOnly)
    }

    /// Validate required fields; on success hand the values to `handler`.
    ///
    /// A blocked submit never touches the field values. After the first
    /// accepted submit further calls are no-ops.
    pub fn submit_with(&mut self, handler: &dyn SubmitHandler) -> SubmitOutcome {
        if self.is_submitted() {
            return SubmitOutcome::SubmittedLocally;
        }
        let missing: Vec<FieldName> = self
            .schema
            .required_fields()
            .filter(|name| self.state.get(*name).trim().is_empty())
            .collect();

        if !missing.is_empty() {
            let warning = InputValidationWarning { missing };
            warn!(form = self.kind.id_prefix(), "{warning}");
            self.status = FormStatus::Blocked(warning.clone());
            return SubmitOutcome::Blocked(warning);
        }

        self.status = FormStatus::SubmittedLocally;
        handler.submit(self.kind, &self.state);
        SubmitOutcome::SubmittedLocally
    }
}
