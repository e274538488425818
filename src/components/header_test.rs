use super::*;
use crate::net::types::AuthRecord;

fn session_for(account_type: AccountType) -> Session {
    Session {
        record: Some(AuthRecord {
            token: "tok".to_owned(),
            token_type: "Bearer".to_owned(),
            username: "sam".to_owned(),
            account_type,
        }),
        loading: false,
    }
}

// =====
// Role-aware nav sets
// =====

#[test]
fn anonymous_sees_login_and_register() {
    let links = nav_links(&Session::default());
    let hrefs: Vec<&str> = links.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/login", "/register"]);
}

#[test]
fn customer_sees_customer_destinations() {
    let links = nav_links(&session_for(AccountType::Customer));
    let hrefs: Vec<&str> = links.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/wishlist", "/cart", "/orders"]);
}

#[test]
fn merchant_sees_merchant_destinations() {
    let links = nav_links(&session_for(AccountType::Merchant));
    let hrefs: Vec<&str> = links.iter().map(|(href, _)| *href).collect();
    assert_eq!(
        hrefs,
        vec!["/merchant", "/merchant/create-product", "/merchant/orders"]
    );
}

#[test]
fn empty_token_is_treated_as_anonymous() {
    let mut session = session_for(AccountType::Merchant);
    if let Some(record) = session.record.as_mut() {
        record.token = "   ".to_owned();
    }
    let hrefs: Vec<&str> = nav_links(&session).iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/login", "/register"]);
}

#[test]
fn loading_session_shows_anonymous_links() {
    let links = nav_links(&Session::loading());
    assert_eq!(links.len(), 2);
}
