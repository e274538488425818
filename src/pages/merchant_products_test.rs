use super::*;

fn make_product(id: i64, company: Option<&str>) -> Product {
    Product {
        id,
        name: format!("Listing {id}"),
        details: None,
        price: 10.0,
        stock_count: 3,
        merchant_id: 7,
        merchant_company_name: company.map(str::to_owned),
        category_id: None,
        category_name: None,
        photo_ids: Vec::new(),
        created_at: None,
    }
}

#[test]
fn title_uses_the_first_company_name_found() {
    let list = [
        make_product(1, None),
        make_product(2, Some("Acme Outdoors")),
        make_product(3, Some("Someone Else")),
    ];
    assert_eq!(merchant_title(&list), "Acme Outdoors");
}

#[test]
fn title_falls_back_when_no_listing_names_the_company() {
    assert_eq!(merchant_title(&[]), "Merchant");
    assert_eq!(merchant_title(&[make_product(1, None)]), "Merchant");
}
