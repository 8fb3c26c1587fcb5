use super::*;

fn catalog() -> Catalog {
    Catalog::standard()
}

#[test]
fn new_item_within_limits_is_accepted() {
    let req = parse_new_item(br#"{"BasketId": 2, "ProductId": 6, "quantity": 3}"#, &catalog())
        .expect("valid item");
    assert_eq!(
        req,
        NewItemRequest {
            basket_id: 2,
            product_id: 6,
            quantity: 3,
        }
    );
}

#[test]
fn hard_ceiling_applies_before_product_ceiling() {
    let err = parse_new_item(br#"{"BasketId": 2, "ProductId": 1, "quantity": 101}"#, &catalog())
        .expect_err("above hard ceiling");
    assert_eq!(err, RuleViolation::QuantityOutOfRange { quantity: 101 });

    assert_eq!(check_quantity(&catalog(), 2, 100), Ok(100));
    assert_eq!(
        check_quantity(&catalog(), 2, 0),
        Err(RuleViolation::QuantityOutOfRange { quantity: 0 })
    );
}

#[test]
fn product_ceiling_message_names_the_limit() {
    let err = check_quantity(&catalog(), 1, 6).expect_err("above product ceiling");
    assert_eq!(err, RuleViolation::ProductLimit { limit: 5 });
    assert_eq!(
        err.to_string(),
        "You can order only up to 5 items of this product."
    );
    assert_eq!(check_quantity(&catalog(), 1, 5), Ok(5));
}

#[test]
fn unknown_product_is_rejected() {
    assert_eq!(
        check_quantity(&catalog(), 999, 1),
        Err(RuleViolation::UnknownProduct { product_id: 999 })
    );
}

#[test]
fn malformed_bodies_are_rejected() {
    assert!(matches!(
        parse_new_item(b"not json", &catalog()),
        Err(RuleViolation::Malformed(_))
    ));
    assert!(matches!(
        parse_new_item(b"[1, 2]", &catalog()),
        Err(RuleViolation::Malformed(_))
    ));
    assert!(matches!(
        parse_new_item(br#"{"BasketId": 2, "quantity": 1}"#, &catalog()),
        Err(RuleViolation::Malformed(_))
    ));
    assert!(matches!(
        parse_new_item(br#"{"BasketId": 2, "ProductId": 3, "quantity": "1"}"#, &catalog()),
        Err(RuleViolation::Malformed(_))
    ));
}

#[test]
fn patch_may_only_touch_quantity() {
    let err = parse_item_patch(br#"{"BasketId": 42}"#, 9, &catalog(), IMMUTABLE_FIELDS)
        .expect_err("immutable");
    assert_eq!(err, RuleViolation::NoUpdate { field: "BasketId" });
    assert_eq!(
        err.to_string(),
        "null: `BasketId` cannot be updated due `noUpdate` constraint"
    );

    assert_eq!(
        parse_item_patch(
            br#"{"ProductId": 3, "quantity": 2}"#,
            9,
            &catalog(),
            IMMUTABLE_FIELDS
        ),
        Err(RuleViolation::NoUpdate { field: "ProductId" })
    );
    assert_eq!(
        parse_item_patch(br#"{"quantity": 20}"#, 8, &catalog(), IMMUTABLE_FIELDS),
        Ok(ItemPatch {
            basket_id: None,
            quantity: Some(20),
        })
    );
    assert_eq!(
        parse_item_patch(b"{}", 8, &catalog(), IMMUTABLE_FIELDS),
        Ok(ItemPatch::default())
    );
}

#[test]
fn patch_quantity_follows_the_item_product() {
    assert_eq!(
        parse_item_patch(br#"{"quantity": 6}"#, 1, &catalog(), IMMUTABLE_FIELDS),
        Err(RuleViolation::ProductLimit { limit: 5 })
    );
    assert_eq!(
        parse_item_patch(br#"{"quantity": 101}"#, 12, &catalog(), IMMUTABLE_FIELDS),
        Err(RuleViolation::QuantityOutOfRange { quantity: 101 })
    );
}

#[test]
fn lenient_rules_accept_basket_moves_and_large_orders() {
    let lenient = catalog().without_product_limits();
    assert_eq!(
        parse_item_patch(br#"{"BasketId": 42, "quantity": 6}"#, 1, &lenient, &[]),
        Ok(ItemPatch {
            basket_id: Some(42),
            quantity: Some(6),
        })
    );
    // The global ceiling still applies.
    assert_eq!(
        check_quantity(&lenient, 1, 101),
        Err(RuleViolation::QuantityOutOfRange { quantity: 101 })
    );
}

fn stored(id: u64, basket_id: u64, product_id: u64) -> BasketItem {
    BasketItem {
        id,
        basket_id,
        product_id,
        quantity: 1,
        created_at: "2026-01-01T00:00:00Z".to_string(),
        updated_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn basket_holds_one_line_per_product() {
    let existing = [stored(1, 2, 3), stored(2, 3, 6)];
    let req = NewItemRequest {
        basket_id: 2,
        product_id: 3,
        quantity: 1,
    };
    let err = check_unique(&existing, &req).expect_err("duplicate pair");
    assert_eq!(
        err,
        RuleViolation::DuplicateItem {
            basket_id: 2,
            product_id: 3,
        }
    );

    let other_basket = NewItemRequest {
        basket_id: 3,
        product_id: 3,
        quantity: 1,
    };
    assert_eq!(check_unique(&existing, &other_basket), Ok(()));
}
