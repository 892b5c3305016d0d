// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consolidated post-commit notifications.
//!
//! Notification happens strictly after the batch transaction commits and
//! is fire-and-forget: a gateway failure is logged and never propagated,
//! so a messaging outage can not fail a successful save.
//!
//! Each affected employee receives at most one message per batch, listing
//! every change applied to them. Changes whose destination is a
//! non-notifiable label (cleared or unknown cells) are silent.

use time::macros::format_description;
use tracing::{info, warn};
use turnero::{AppliedBatch, AppliedChange, EmployeeChanges};
use turnero_domain::is_notifiable_label;

/// Errors raised by a message gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The gateway rejected the destination number.
    #[error("invalid destination number '{0}'")]
    InvalidDestination(String),
    /// The gateway could not deliver the message.
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Outbound message transport.
///
/// Implementations deliver one rendered message to one phone number.
/// Delivery is best-effort; the notifier never retries.
pub trait MessageGateway {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be delivered.
    fn send(&self, phone: &str, body: &str) -> Result<(), GatewayError>;
}

/// Where rendered messages are actually delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Deliver to the real recipients.
    Live,
    /// Reroute every message to one test number, with a test prefix.
    ///
    /// This is an explicit configuration switch, never inferred from the
    /// environment.
    RedirectTo(String),
}

/// A standing notification recipient, typically a supervisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stakeholder {
    /// Identifier used by explicit recipient selections.
    pub id: i64,
    /// Display name, for logs.
    pub name: String,
    /// Destination phone number.
    pub phone: String,
}

/// Notifier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Live delivery or test redirection.
    pub mode: DeliveryMode,
    /// The standing recipients for every batch.
    pub stakeholders: Vec<Stakeholder>,
}

/// Renders and dispatches consolidated batch notifications.
pub struct Notifier<G: MessageGateway> {
    config: NotifierConfig,
    gateway: G,
}

/// Prefix applied to every message in redirect mode.
const TEST_PREFIX: &str = "MENSAJE DE PRUEBA";

impl<G: MessageGateway> Notifier<G> {
    /// Creates a notifier.
    pub const fn new(config: NotifierConfig, gateway: G) -> Self {
        Self { config, gateway }
    }

    /// Notifies every affected employee and the configured stakeholders
    /// about an applied batch.
    ///
    /// Returns the number of messages handed to the gateway. Gateway
    /// failures are logged and do not affect the count of remaining
    /// sends.
    pub fn notify_batch(
        &self,
        applied: &AppliedBatch,
        recipient_selection: Option<&[i64]>,
    ) -> usize {
        let mut sent: usize = 0;

        for employee_changes in &applied.employees {
            let Some(body) = render_message(employee_changes) else {
                continue;
            };

            for phone in self.recipients_for(employee_changes, recipient_selection) {
                if self.dispatch(&phone, &body) {
                    sent += 1;
                }
            }
        }

        info!(sent, "Dispatched batch notifications");
        sent
    }

    /// Collects destination numbers for one employee's message: the
    /// employee's own phone plus the selected (or all) stakeholders.
    fn recipients_for(
        &self,
        employee_changes: &EmployeeChanges,
        recipient_selection: Option<&[i64]>,
    ) -> Vec<String> {
        let mut phones: Vec<String> = Vec::new();

        if let Some(phone) = &employee_changes.employee.phone {
            phones.push(phone.clone());
        }

        for stakeholder in &self.config.stakeholders {
            let selected: bool = recipient_selection
                .is_none_or(|selection| selection.contains(&stakeholder.id));
            if selected && !phones.contains(&stakeholder.phone) {
                phones.push(stakeholder.phone.clone());
            }
        }

        phones
    }

    /// Sends one message through the gateway, applying the delivery
    /// mode. Returns whether the gateway accepted it.
    fn dispatch(&self, phone: &str, body: &str) -> bool {
        let (destination, rendered): (&str, String) = match &self.config.mode {
            DeliveryMode::Live => (phone, body.to_string()),
            DeliveryMode::RedirectTo(test_number) => {
                (test_number.as_str(), format!("{TEST_PREFIX}\n{body}"))
            }
        };

        match self.gateway.send(destination, &rendered) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    destination,
                    error = %err,
                    "Notification delivery failed"
                );
                false
            }
        }
    }
}

/// Renders the consolidated message for one employee, or `None` when
/// every change in the batch is silent for them.
#[must_use]
pub fn render_message(employee_changes: &EmployeeChanges) -> Option<String> {
    let notifiable: Vec<&AppliedChange> = employee_changes
        .changes
        .iter()
        .filter(|change| is_notifiable_label(&change.new_label))
        .collect();

    if notifiable.is_empty() {
        return None;
    }

    let mut body: String = format!(
        "Hola {}, se registraron los siguientes cambios de turno:",
        employee_changes.employee.short_name()
    );
    for change in notifiable {
        let day: String = change
            .shift_date
            .format(format_description!("[day]/[month]/[year]"))
            .unwrap_or_else(|_| change.shift_date.to_string());
        body.push_str(&format!(
            "\n- {day} de \"{}\" a \"{}\"",
            change.old_label, change.new_label
        ));
    }

    Some(body)
}
