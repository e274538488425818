use super::*;

// =====
// Cancellable set
// =====

#[test]
fn fresh_and_accepted_orders_can_be_cancelled() {
    assert!(can_cancel(OrderStatus::Created));
    assert!(can_cancel(OrderStatus::Accepted));
}

#[test]
fn terminal_orders_cannot_be_cancelled() {
    assert!(!can_cancel(OrderStatus::Delivered));
    assert!(!can_cancel(OrderStatus::RejectByCustomer));
    assert!(!can_cancel(OrderStatus::RejectByMerchant));
}

#[test]
fn config_set_and_predicate_agree_for_every_status() {
    for status in OrderStatus::ALL {
        assert_eq!(can_cancel(status), CANCELLABLE_STATUSES.contains(&status));
    }
}

// =====
// Cancel reason
// =====

#[test]
fn blank_reasons_are_refused() {
    assert_eq!(cancel_reason(""), None);
    assert_eq!(cancel_reason("   "), None);
    assert_eq!(cancel_reason("\t\n"), None);
}

#[test]
fn reasons_are_trimmed() {
    assert_eq!(
        cancel_reason("  changed my mind  "),
        Some("changed my mind".to_owned())
    );
}
