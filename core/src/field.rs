//! # Field Capabilities
//!
//! Every address field owns a [`FieldBase`] (required flag, messages, extra
//! validators, widget) and implements [`FormField`] on top of it. Only
//! [`FormField::to_value`] differs between field kinds; `clean` and `render`
//! are shared.

use std::fmt;
use std::sync::Arc;

use netforms_common::config::{ErrorCode, FieldConfig};
use netforms_common::html::Attrs;

use crate::error::{ErrorKind, ValidationError};
use crate::input::AddressInput;
use crate::messages::{self, ErrorMessages};
use crate::widget::NetInput;

/// An extra check run by `clean` on every successfully converted value.
pub type Validator<T> = Arc<dyn Fn(&T) -> Result<(), ValidationError> + Send + Sync>;

#[derive(Clone)]
pub struct FieldBase<T> {
    required: bool,
    messages: ErrorMessages,
    validators: Vec<Validator<T>>,
    widget: NetInput,
}

impl<T> FieldBase<T> {
    /// `defaults` are the field kind's own messages; `Required` is always added.
    pub fn new(config: FieldConfig, defaults: &[(ErrorCode, &str)]) -> Self {
        let mut all: Vec<(ErrorCode, &str)> = vec![(ErrorCode::Required, messages::REQUIRED)];
        all.extend_from_slice(defaults);

        Self {
            required: config.required,
            messages: ErrorMessages::new(&all, &config.messages),
            validators: Vec::new(),
            widget: NetInput::default(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn widget(&self) -> &NetInput {
        &self.widget
    }

    pub fn set_widget(&mut self, widget: NetInput) {
        self.widget = widget;
    }

    pub fn push_validator(&mut self, validator: Validator<T>) {
        self.validators.push(validator);
    }

    pub fn run_validators(&self, value: &T) -> Result<(), ValidationError> {
        self.validators.iter().try_for_each(|validator| validator(value))
    }

    /// The configured failure for `code`, with `{value}` filled in.
    pub fn error(&self, kind: ErrorKind, code: ErrorCode, value: &str) -> ValidationError {
        ValidationError::new(kind, self.messages.render(code, value)).with_code(code)
    }
}

impl<T> fmt::Debug for FieldBase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBase")
            .field("required", &self.required)
            .field("messages", &self.messages)
            .field("validators", &self.validators.len())
            .field("widget", &self.widget)
            .finish()
    }
}

pub trait FormField {
    type Value: fmt::Display;

    fn base(&self) -> &FieldBase<Self::Value>;

    fn base_mut(&mut self) -> &mut FieldBase<Self::Value>;

    /// Converts input into a typed value. Blank input yields `Ok(None)`.
    fn to_value(
        &self,
        input: AddressInput<Self::Value>,
    ) -> Result<Option<Self::Value>, ValidationError>;

    /// Attributes this field adds to its widget's markup.
    fn widget_attrs(&self) -> Attrs {
        Attrs::new()
    }

    /// `to_value`, then the required check, then each extra validator.
    fn clean(
        &self,
        input: AddressInput<Self::Value>,
    ) -> Result<Option<Self::Value>, ValidationError> {
        let base = self.base();
        match self.to_value(input)? {
            None if base.is_required() => {
                Err(base.error(ErrorKind::Required, ErrorCode::Required, ""))
            }
            None => Ok(None),
            Some(value) => {
                base.run_validators(&value)?;
                Ok(Some(value))
            }
        }
    }

    fn render(&self, name: &str, value: &AddressInput<Self::Value>, attrs: &Attrs) -> String {
        let mut merged = self.widget_attrs();
        merged.extend(attrs);
        self.base()
            .widget()
            .render(name, value.display_text().as_deref(), &merged)
    }

    fn with_validator<F>(mut self, validator: F) -> Self
    where
        Self: Sized,
        F: Fn(&Self::Value) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.base_mut().push_validator(Arc::new(validator));
        self
    }

    fn with_widget(mut self, widget: NetInput) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_widget(widget);
        self
    }
}
