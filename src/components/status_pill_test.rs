use super::*;

// =====
// Status modifier mapping
// =====

#[test]
fn each_status_gets_a_distinct_modifier() {
    let modifiers: Vec<&str> = OrderStatus::ALL.iter().map(|s| status_modifier(*s)).collect();
    let mut deduped = modifiers.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), modifiers.len());
}

#[test]
fn modifiers_are_css_class_fragments() {
    for status in OrderStatus::ALL {
        let modifier = status_modifier(status);
        assert!(!modifier.is_empty());
        assert!(
            modifier.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "unexpected character in {modifier:?}"
        );
    }
}

#[test]
fn terminal_rejections_read_differently_from_created() {
    assert_eq!(status_modifier(OrderStatus::RejectByCustomer), "cancelled");
    assert_eq!(status_modifier(OrderStatus::RejectByMerchant), "rejected");
    assert_eq!(status_modifier(OrderStatus::Created), "created");
}
