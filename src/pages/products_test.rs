use super::*;

fn make_product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        details: Some("plain details".to_owned()),
        price: 10.0,
        stock_count: 10,
        merchant_id: 1,
        merchant_company_name: Some("Acme".to_owned()),
        category_id: Some(1),
        category_name: Some("Gadgets".to_owned()),
        photo_ids: Vec::new(),
        created_at: Some("2025-08-20T10:00:00".to_owned()),
    }
}

fn names(list: &[Product]) -> Vec<&str> {
    list.iter().map(|p| p.name.as_str()).collect()
}

// =====
// Search
// =====

#[test]
fn blank_query_matches_everything() {
    let catalog = vec![make_product(1, "Lamp"), make_product(2, "Desk")];
    let list = filter_and_sort(&catalog, "   ", None, SortOrder::Newest);
    assert_eq!(list.len(), 2);
}

#[test]
fn query_matches_name_case_insensitively() {
    let catalog = vec![make_product(1, "Desk Lamp"), make_product(2, "Chair")];
    let list = filter_and_sort(&catalog, "  LAMP ", None, SortOrder::Newest);
    assert_eq!(names(&list), vec!["Desk Lamp"]);
}

#[test]
fn query_matches_details_and_category() {
    let mut by_details = make_product(1, "Widget");
    by_details.details = Some("Solid walnut finish".to_owned());
    let mut by_category = make_product(2, "Gizmo");
    by_category.category_name = Some("Walnut goods".to_owned());
    let neither = make_product(3, "Doodad");

    let catalog = vec![by_details, by_category, neither];
    let list = filter_and_sort(&catalog, "walnut", None, SortOrder::PriceAsc);
    assert_eq!(list.len(), 2);
}

#[test]
fn query_tolerates_missing_optional_fields() {
    let mut bare = make_product(1, "Bare");
    bare.details = None;
    bare.category_name = None;
    let list = filter_and_sort(&[bare], "bare", None, SortOrder::Newest);
    assert_eq!(list.len(), 1);
}

// =====
// Category filter
// =====

#[test]
fn category_filter_keeps_only_matching_products() {
    let mut in_cat = make_product(1, "Lamp");
    in_cat.category_id = Some(7);
    let mut out_of_cat = make_product(2, "Desk");
    out_of_cat.category_id = Some(8);
    let mut uncategorized = make_product(3, "Chair");
    uncategorized.category_id = None;

    let catalog = vec![in_cat, out_of_cat, uncategorized];
    let list = filter_and_sort(&catalog, "", Some(7), SortOrder::Newest);
    assert_eq!(names(&list), vec!["Lamp"]);
}

// =====
// Sorting
// =====

#[test]
fn newest_sorts_by_created_at_descending() {
    let mut oldest = make_product(1, "Oldest");
    oldest.created_at = Some("2025-08-01T09:00:00".to_owned());
    let mut newest = make_product(2, "Newest");
    newest.created_at = Some("2025-08-22T09:00:00".to_owned());
    let mut middle = make_product(3, "Middle");
    middle.created_at = Some("2025-08-10T09:00:00".to_owned());

    let mut list = vec![oldest, newest, middle];
    sort_products(&mut list, SortOrder::Newest);
    assert_eq!(names(&list), vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn newest_compares_space_and_t_separators_the_same() {
    let mut spaced = make_product(1, "Spaced");
    spaced.created_at = Some("2025-08-21 09:00:00".to_owned());
    let mut t_form = make_product(2, "TForm");
    t_form.created_at = Some("2025-08-20T09:00:00".to_owned());

    let mut list = vec![t_form, spaced];
    sort_products(&mut list, SortOrder::Newest);
    assert_eq!(names(&list), vec!["Spaced", "TForm"]);
}

#[test]
fn newest_puts_undated_listings_last() {
    let mut undated = make_product(9, "Undated");
    undated.created_at = None;
    let dated = make_product(1, "Dated");

    let mut list = vec![undated, dated];
    sort_products(&mut list, SortOrder::Newest);
    assert_eq!(names(&list), vec!["Dated", "Undated"]);
}

#[test]
fn newest_breaks_timestamp_ties_by_id_descending() {
    let first = make_product(1, "First");
    let second = make_product(2, "Second");

    let mut list = vec![first, second];
    sort_products(&mut list, SortOrder::Newest);
    assert_eq!(names(&list), vec!["Second", "First"]);
}

#[test]
fn price_sorts_both_directions() {
    let mut cheap = make_product(1, "Cheap");
    cheap.price = 5.0;
    let mut dear = make_product(2, "Dear");
    dear.price = 50.0;

    let mut list = vec![dear.clone(), cheap.clone()];
    sort_products(&mut list, SortOrder::PriceAsc);
    assert_eq!(names(&list), vec!["Cheap", "Dear"]);

    let mut list = vec![cheap, dear];
    sort_products(&mut list, SortOrder::PriceDesc);
    assert_eq!(names(&list), vec!["Dear", "Cheap"]);
}

#[test]
fn stock_sorts_most_available_first() {
    let mut scarce = make_product(1, "Scarce");
    scarce.stock_count = 2;
    let mut plentiful = make_product(2, "Plentiful");
    plentiful.stock_count = 40;

    let mut list = vec![scarce, plentiful];
    sort_products(&mut list, SortOrder::Stock);
    assert_eq!(names(&list), vec!["Plentiful", "Scarce"]);
}

// =====
// Toolbar plumbing
// =====

#[test]
fn sort_keys_round_trip() {
    for order in SortOrder::ALL {
        assert_eq!(SortOrder::from_key(order.key()), order);
    }
}

#[test]
fn unknown_sort_key_falls_back_to_newest() {
    assert_eq!(SortOrder::from_key("alphabetical"), SortOrder::Newest);
}

#[test]
fn result_count_pluralizes() {
    assert_eq!(result_count_label(0), "0 results");
    assert_eq!(result_count_label(1), "1 result");
    assert_eq!(result_count_label(2), "2 results");
}
