use super::*;

// =========================================================================
// Delete error wording
// =========================================================================

#[test]
fn forbidden_delete_names_the_ownership_problem() {
    let error = ApiError::Status {
        status: 403,
        message: None,
    };
    assert_eq!(
        delete_error_message(&error),
        "You cannot delete this product. You are not allowed to delete it."
    );
}

#[test]
fn constraint_violation_becomes_the_orders_explanation() {
    let error = ApiError::Status {
        status: 500,
        message: Some(
            "update or delete on table \"products\" violates foreign key constraint \
             \"fk_order_product\" on table \"orders\""
                .to_owned(),
        ),
    };
    assert_eq!(
        delete_error_message(&error),
        "This product already has orders in the system. \
         Products that are part of orders cannot be deleted."
    );
}

#[test]
fn other_server_messages_pass_through() {
    let error = ApiError::Status {
        status: 500,
        message: Some("something unrelated broke".to_owned()),
    };
    assert_eq!(delete_error_message(&error), "something unrelated broke");
}

#[test]
fn bare_statuses_get_the_generic_wording() {
    let error = ApiError::Status {
        status: 500,
        message: None,
    };
    assert_eq!(delete_error_message(&error), "Delete failed.");
}

#[test]
fn transport_failures_keep_the_shared_wording() {
    let error = ApiError::Network("connection refused".to_owned());
    assert_eq!(
        delete_error_message(&error),
        "Network error. Check your connection and try again."
    );
}
