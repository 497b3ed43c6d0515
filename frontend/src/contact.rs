use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Service,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Service,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Service => "service",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Service => "Service",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Required fields left empty on submit. Shown to the visitor, the form stays
/// open with its values intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in the required fields: {}.", describe(.missing))]
pub struct ValidationError {
    pub missing: Vec<FormField>,
}

fn describe(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Recipient, subject and body handed to the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoIntent {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoIntent {
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// Consultation request modal.
///
/// Field values live for the whole page session: closing the modal, or a
/// successful submit, keeps them so a reopened form shows what was typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    recipient: String,
    brand: String,
    service_options: Option<Vec<String>>,
    fields: ContactFormState,
    is_visible: bool,
}

impl ContactForm {
    /// `service_options` of `None` builds the variant without a service selector.
    pub fn new(
        recipient: impl Into<String>,
        brand: impl Into<String>,
        service_options: Option<Vec<String>>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            brand: brand.into(),
            service_options,
            fields: ContactFormState::default(),
            is_visible: false,
        }
    }

    pub fn open(&mut self) {
        self.is_visible = true;
    }

    pub fn close(&mut self) {
        self.is_visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn has_service_field(&self) -> bool {
        self.service_options.is_some()
    }

    pub fn service_options(&self) -> &[String] {
        self.service_options.as_deref().unwrap_or(&[])
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Company => &self.fields.company,
            FormField::Service => &self.fields.service,
            FormField::Message => &self.fields.message,
        }
    }

    /// Sets one field. A service value on a form without a selector is dropped.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Company => self.fields.company = value,
            FormField::Service if self.has_service_field() => self.fields.service = value,
            FormField::Service => {}
            FormField::Message => self.fields.message = value,
        }
    }

    pub fn required_fields(&self) -> Vec<FormField> {
        let mut required = vec![FormField::Name, FormField::Email];
        if self.has_service_field() {
            required.push(FormField::Service);
        }
        required
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<FormField> = self
            .required_fields()
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    pub fn subject(&self) -> String {
        if self.has_service_field() {
            format!("{} — Consultation Request - {}", self.fields.service, self.brand)
        } else {
            format!("Consultation Request - {}", self.brand)
        }
    }

    // Empty optional fields still get their line.
    pub fn body(&self) -> String {
        let f = &self.fields;
        let mut lines = vec![
            format!("Name: {}", f.name),
            format!("Email: {}", f.email),
            format!("Company: {}", f.company),
        ];
        if self.has_service_field() {
            lines.push(format!("Service: {}", f.service));
        }
        lines.push(String::new());
        lines.push("Message:".to_string());
        lines.push(f.message.clone());
        lines.join("\n")
    }

    /// Validates and builds the mail intent without touching visibility.
    pub fn compose(&self) -> Result<MailtoIntent, ValidationError> {
        self.validate()?;
        Ok(MailtoIntent {
            recipient: self.recipient.clone(),
            subject: self.subject(),
            body: self.body(),
        })
    }

    /// Composes the intent and closes the form. On error nothing changes.
    pub fn submit(&mut self) -> Result<MailtoIntent, ValidationError> {
        let intent = self.compose()?;
        self.close();
        Ok(intent)
    }
}
