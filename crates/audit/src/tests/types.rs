// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Action, Actor, AuditEvent, AuditLog, StateSnapshot};
use stockroom_domain::{Password, Role, Staff, StaffName, Username};

fn create_test_staff() -> Staff {
    Staff::new(
        Username::new("alice").unwrap(),
        Password::new("s3cret").unwrap(),
        StaffName::new("Alice").unwrap(),
        Role::Admin,
    )
}

#[test]
fn test_actor_from_staff_carries_username_and_role() {
    let actor: Actor = Actor::staff(&create_test_staff());

    assert_eq!(actor.username, Some(Username::new("alice").unwrap()));
    assert_eq!(actor.role, Some(Role::Admin));
    assert!(!actor.is_anonymous());
    assert_eq!(actor.to_string(), "alice (admin)");
}

#[test]
fn test_anonymous_actor() {
    let actor: Actor = Actor::anonymous();

    assert!(actor.is_anonymous());
    assert_eq!(actor.to_string(), "anonymous");
}

#[test]
fn test_action_creation_with_details() {
    let action: Action = Action::new(
        String::from("AddItem"),
        Some(String::from("Added item X-1")),
    );

    assert_eq!(action.name, "AddItem");
    assert_eq!(action.details, Some(String::from("Added item X-1")));
}

#[test]
fn test_audit_log_assigns_contiguous_sequence_numbers() {
    let mut log: AuditLog = AuditLog::new();
    assert!(log.is_empty());

    for name in ["AddItem", "EditItem", "DeleteItem"] {
        log.record(
            Actor::anonymous(),
            Action::new(String::from(name), None),
            StateSnapshot::new(String::from("before")),
            StateSnapshot::new(String::from("after")),
        );
    }

    let sequences: Vec<u64> = log.events().iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    assert_eq!(log.len(), 3);
    assert_eq!(log.last().unwrap().action.name, "DeleteItem");
}

#[test]
fn test_record_returns_the_stored_event() {
    let mut log: AuditLog = AuditLog::new();
    let actor: Actor = Actor::staff(&create_test_staff());

    let recorded: AuditEvent = log
        .record(
            actor.clone(),
            Action::new(String::from("Login"), None),
            StateSnapshot::new(String::from("session=none")),
            StateSnapshot::new(String::from("session=alice")),
        )
        .clone();

    assert_eq!(recorded.actor, actor);
    assert_eq!(recorded.before.data, "session=none");
    assert_eq!(recorded.after.data, "session=alice");
    assert_eq!(log.events()[0], recorded);
}
