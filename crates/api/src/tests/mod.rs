// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::cell::RefCell;
use std::rc::Rc;

use turnero_persistence::Persistence;

use crate::notify::{
    DeliveryMode, GatewayError, MessageGateway, Notifier, NotifierConfig, Stakeholder,
};

/// A gateway that records every send for later inspection.
#[derive(Clone)]
struct RecordingGateway {
    sent: Rc<RefCell<Vec<(String, String)>>>,
    fail: bool,
}

impl RecordingGateway {
    fn new() -> (Self, Rc<RefCell<Vec<(String, String)>>>) {
        let sent: Rc<RefCell<Vec<(String, String)>>> = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                sent: Rc::clone(&sent),
                fail: false,
            },
            sent,
        )
    }

    fn failing() -> Self {
        Self {
            sent: Rc::new(RefCell::new(Vec::new())),
            fail: true,
        }
    }
}

impl MessageGateway for RecordingGateway {
    fn send(&self, phone: &str, body: &str) -> Result<(), GatewayError> {
        if self.fail {
            return Err(GatewayError::DeliveryFailed("gateway down".to_string()));
        }
        self.sent
            .borrow_mut()
            .push((phone.to_string(), body.to_string()));
        Ok(())
    }
}

fn supervisor() -> Stakeholder {
    Stakeholder {
        id: 100,
        name: "Jefa de Turno".to_string(),
        phone: "+56900000100".to_string(),
    }
}

fn live_notifier() -> (Notifier<RecordingGateway>, Rc<RefCell<Vec<(String, String)>>>) {
    let (gateway, sent) = RecordingGateway::new();
    let config: NotifierConfig = NotifierConfig {
        mode: DeliveryMode::Live,
        stakeholders: vec![supervisor()],
    };
    (Notifier::new(config, gateway), sent)
}

fn redirect_notifier(
    test_number: &str,
) -> (Notifier<RecordingGateway>, Rc<RefCell<Vec<(String, String)>>>) {
    let (gateway, sent) = RecordingGateway::new();
    let config: NotifierConfig = NotifierConfig {
        mode: DeliveryMode::RedirectTo(test_number.to_string()),
        stakeholders: vec![supervisor()],
    };
    (Notifier::new(config, gateway), sent)
}

fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

fn seed_employee(persistence: &mut Persistence, rut: &str, full_name: &str, phone: &str) -> i64 {
    persistence
        .insert_employee(rut, full_name, Some(phone), 1)
        .expect("employee insert should succeed")
}
