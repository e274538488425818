use super::*;

fn valid() -> Result<ProductRequest, &'static str> {
    validate_listing(Some(3), "  Trail Boots  ", "  Sturdy.  ", " 12.50 ", " 4 ")
}

// =========================================================================
// Happy path
// =========================================================================

#[test]
fn builds_a_trimmed_parsed_request() {
    let request = valid().expect("form is valid");
    assert_eq!(request.category_id, 3);
    assert_eq!(request.name, "Trail Boots");
    assert_eq!(request.details, "Sturdy.");
    assert!((request.price - 12.5).abs() < f64::EPSILON);
    assert_eq!(request.stock_count, 4);
}

#[test]
fn zero_stock_is_a_valid_listing() {
    let request = validate_listing(Some(1), "Boots", "Sold out already", "9.99", "0")
        .expect("zero stock allowed");
    assert_eq!(request.stock_count, 0);
}

// =========================================================================
// Rejections
// =========================================================================

#[test]
fn category_must_be_selected() {
    assert_eq!(
        validate_listing(None, "Boots", "Fine", "9.99", "4"),
        Err("Select a category.")
    );
}

#[test]
fn name_and_details_must_be_non_blank() {
    assert_eq!(
        validate_listing(Some(1), "   ", "Fine", "9.99", "4"),
        Err("Name is required.")
    );
    assert_eq!(
        validate_listing(Some(1), "Boots", "   ", "9.99", "4"),
        Err("Details are required.")
    );
}

#[test]
fn price_must_parse() {
    assert_eq!(
        validate_listing(Some(1), "Boots", "Fine", "twelve", "4"),
        Err("Price must be a number.")
    );
    assert_eq!(
        validate_listing(Some(1), "Boots", "Fine", "", "4"),
        Err("Price must be a number.")
    );
}

#[test]
fn price_must_be_a_positive_finite_amount() {
    for bad in ["0", "-3", "inf", "NaN"] {
        assert_eq!(
            validate_listing(Some(1), "Boots", "Fine", bad, "4"),
            Err("Price must be greater than zero."),
            "price {bad:?} should be rejected"
        );
    }
}

#[test]
fn stock_must_be_a_whole_non_negative_number() {
    assert_eq!(
        validate_listing(Some(1), "Boots", "Fine", "9.99", "2.5"),
        Err("Stock count must be a whole number.")
    );
    assert_eq!(
        validate_listing(Some(1), "Boots", "Fine", "9.99", "-1"),
        Err("Stock count cannot be negative.")
    );
}
