use super::*;

fn make_item(item_id: i64, count: i32, unit: f64, total: f64) -> CartItem {
    CartItem {
        item_id,
        product_id: item_id * 10,
        product_name: format!("Item {item_id}"),
        count,
        price_per_unit: unit,
        total_price: total,
    }
}

// =====
// Grand total
// =====

#[test]
fn empty_cart_totals_zero() {
    assert_eq!(grand_total(&[]), 0.0);
}

#[test]
fn totals_sum_across_lines() {
    let items = vec![
        make_item(1, 2, 5.0, 10.0),
        make_item(2, 1, 3.5, 3.5),
        make_item(3, 4, 1.0, 4.0),
    ];
    let total = grand_total(&items);
    assert!((total - 17.5).abs() < f64::EPSILON);
}

#[test]
fn server_line_totals_win_over_local_arithmetic() {
    // A discounted line: count * unit would say 20, the server says 15.
    let items = vec![make_item(1, 2, 10.0, 15.0)];
    let total = grand_total(&items);
    assert!((total - 15.0).abs() < f64::EPSILON);
}
