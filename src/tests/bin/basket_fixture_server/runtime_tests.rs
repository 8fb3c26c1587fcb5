use super::*;

#[test]
fn args_default_to_the_standard_login() {
    let args = Args::try_parse_from(["basket-fixture-server"]).expect("parse args");
    assert_eq!(args.addr, "127.0.0.1:3000".parse::<SocketAddr>().expect("addr"));
    assert!(!args.allow_anonymous);

    let state = build_state(&args);
    assert_eq!(state.login_email, "jim@juice-sh.op");
    assert_eq!(state.login_password, "ncc-1701");
    assert!(state.catalog.get(1).is_some_and(|p| p.limit_per_order == Some(5)));
}

#[test]
fn item_ids_are_allocated_sequentially() {
    let args = Args::try_parse_from(["basket-fixture-server", "--domain", "shop.test"])
        .expect("parse args");
    let state = build_state(&args);
    assert_eq!(state.login_email, "jim@shop.test");
    let first = state.allocate_item_id();
    assert_eq!(state.allocate_item_id(), first + 1);
}

#[test]
fn lenient_rules_relax_ceilings_and_no_update() {
    let strict = build_state(&Args::try_parse_from(["basket-fixture-server"]).expect("parse args"));
    assert_eq!(strict.immutable_fields, IMMUTABLE_FIELDS);

    let args = Args::try_parse_from(["basket-fixture-server", "--lenient-rules"])
        .expect("parse args");
    let state = build_state(&args);
    assert!(state.immutable_fields.is_empty());
    assert!(state.catalog.get(1).is_some_and(|p| p.limit_per_order.is_none()));
}
