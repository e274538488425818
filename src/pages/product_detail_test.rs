use super::*;

// =====
// Add-to-cart validation
// =====

#[test]
fn zero_stock_always_refuses() {
    assert_eq!(cart_quantity_error(1, 0), Some("Out of stock."));
    assert_eq!(cart_quantity_error(5, 0), Some("Out of stock."));
}

#[test]
fn quantity_below_one_is_rejected() {
    assert_eq!(cart_quantity_error(0, 10), Some("Quantity must be at least 1."));
    assert_eq!(cart_quantity_error(-3, 10), Some("Quantity must be at least 1."));
}

#[test]
fn quantity_beyond_stock_is_rejected() {
    assert_eq!(
        cart_quantity_error(11, 10),
        Some("Not enough stock for that quantity.")
    );
}

#[test]
fn quantity_within_stock_passes() {
    assert_eq!(cart_quantity_error(1, 10), None);
    assert_eq!(cart_quantity_error(10, 10), None);
}

// =====
// Stepper clamping
// =====

#[test]
fn stepper_never_goes_below_one() {
    assert_eq!(step_quantity(1, -1, 10), 1);
    assert_eq!(step_quantity(2, -1, 10), 1);
}

#[test]
fn stepper_never_exceeds_stock() {
    assert_eq!(step_quantity(10, 1, 10), 10);
    assert_eq!(step_quantity(9, 1, 10), 10);
}

#[test]
fn stepper_moves_freely_in_range() {
    assert_eq!(step_quantity(5, 1, 10), 6);
    assert_eq!(step_quantity(5, -1, 10), 4);
}

#[test]
fn zero_stock_pins_the_stepper_at_one() {
    assert_eq!(step_quantity(1, 1, 0), 1);
    assert_eq!(step_quantity(1, -1, 0), 1);
}
