use error_trail::{fault, ErrorCode};

#[test]
fn fault_without_code() {
    let name = "orders";
    let err = fault!("table {name} missing");

    assert_eq!(err.message(), "table orders missing");
    assert_eq!(err.code(), &ErrorCode::EMPTY);
}

#[test]
fn fault_with_code() {
    let err = fault!("E_TABLE" => "table {} missing", "users");
    assert_eq!(err.render("C"), "[E_TABLE] table users missing");

    let numeric = fault!(500 => "internal");
    assert_eq!(numeric.code(), &ErrorCode::Number(500));
}
