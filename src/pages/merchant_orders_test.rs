use super::*;

// =========================================================================
// Dropdown labels
// =========================================================================

#[test]
fn labels_spell_out_reject_statuses() {
    assert_eq!(select_label(OrderStatus::RejectByMerchant), "REJECT BY MERCHANT");
    assert_eq!(select_label(OrderStatus::RejectByCustomer), "REJECT BY CUSTOMER");
}

#[test]
fn every_status_gets_a_distinct_label() {
    let labels: Vec<&str> = OrderStatus::ALL.into_iter().map(select_label).collect();
    for (index, label) in labels.iter().enumerate() {
        assert!(!label.is_empty());
        assert!(
            !labels[index + 1..].contains(label),
            "duplicate dropdown label {label}"
        );
    }
}

// =========================================================================
// Update payloads
// =========================================================================

#[test]
fn merchant_reject_requires_a_reason() {
    assert_eq!(
        build_update(OrderStatus::RejectByMerchant, ""),
        Err("Please provide a reject reason.")
    );
    assert_eq!(
        build_update(OrderStatus::RejectByMerchant, "   "),
        Err("Please provide a reject reason.")
    );
}

#[test]
fn merchant_reject_carries_the_trimmed_reason() {
    let update = build_update(OrderStatus::RejectByMerchant, "  damaged stock  ")
        .expect("reason provided");
    assert_eq!(update.status, OrderStatus::RejectByMerchant);
    assert_eq!(update.reject_reason.as_deref(), Some("damaged stock"));
}

#[test]
fn other_statuses_drop_any_drafted_reason() {
    for status in [
        OrderStatus::Created,
        OrderStatus::Accepted,
        OrderStatus::RejectByCustomer,
        OrderStatus::Delivered,
    ] {
        let update = build_update(status, "left over draft text").expect("no reason needed");
        assert_eq!(update.status, status);
        assert_eq!(update.reject_reason, None);
    }
}
