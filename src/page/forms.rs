//! Newsletter, contact and demo request forms
//!
//! These forms never fail: the fixture probe only decides which success
//! message is shown. Fields are cleared afterwards.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::validation::FieldInput;
use crate::notify::Notice;

/// Simulated submission latency when the probe succeeds
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimpleFormKind {
    Newsletter,
    Contact,
    DemoRequest,
}

impl SimpleFormKind {
    pub fn success_message(&self, probe_ok: bool) -> &'static str {
        match (self, probe_ok) {
            (Self::Newsletter, true) => "Thank you for subscribing!",
            (Self::Newsletter, false) => "Subscription successful!",
            (Self::Contact, true) => "Thank you for your message! We will get back to you soon.",
            (Self::Contact, false) => "Message sent successfully!",
            (Self::DemoRequest, true) => "Demo request submitted! We will contact you shortly.",
            (Self::DemoRequest, false) => "Demo request submitted successfully!",
        }
    }

    /// Controls on the form, empty
    pub fn blank_fields(&self) -> Vec<FieldInput> {
        match self {
            Self::Newsletter => vec![FieldInput::email("email", "", true)],
            Self::Contact => vec![
                FieldInput::text("name", "", true),
                FieldInput::email("email", "", true),
                FieldInput::text("message", "", true),
            ],
            Self::DemoRequest => vec![
                FieldInput::text("name", "", true),
                FieldInput::email("email", "", true),
                FieldInput::text("company", "", false),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleForm {
    pub kind: SimpleFormKind,
    pub fields: Vec<FieldInput>,
}

impl SimpleForm {
    pub fn new(kind: SimpleFormKind) -> Self {
        Self {
            kind,
            fields: kind.blank_fields(),
        }
    }

    /// Set a field's value; returns false for an unknown field
    pub fn fill(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.value.as_str())
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Record the probe outcome: pick the message and clear the fields
    pub fn complete(&mut self, probe_ok: bool) -> Notice {
        self.reset();
        Notice::success(self.kind.success_message(probe_ok))
    }
}

#[cfg(feature = "runtime")]
mod runtime {
    use super::*;
    use crate::dashboard::FixtureSource;
    use crate::notify::Notifier;

    impl SimpleForm {
        /// Probe the fixture, wait out the simulated latency on success,
        /// then post the success notice.
        pub async fn submit<F, N>(&mut self, probe: &F, notifier: &N) -> Notice
        where
            F: FixtureSource + ?Sized,
            N: Notifier + ?Sized,
        {
            let probe_ok = probe.fetch().await.is_ok();
            if probe_ok {
                tokio::time::sleep(SUBMIT_LATENCY).await;
            }

            let notice = self.complete(probe_ok);
            tracing::info!(form = ?self.kind, probe_ok, "Form submitted");
            notifier.notify(notice.clone());
            notice
        }
    }
}
