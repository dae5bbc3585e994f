use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use error_trail::{ContextValue, ErrorBuilder};

#[test]
fn lazy_value_runs_exactly_once_at_terminal_call() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let builder = ErrorBuilder::new().with_lazy("expensive", move || {
        counter.set(counter.get() + 1);
        "computed"
    });
    assert_eq!(calls.get(), 0);

    let err = builder.error("x");
    assert_eq!(calls.get(), 1);
    assert_eq!(err.context_value("expensive"), Some(&ContextValue::from("computed")));

    let _ = err.render("F");
    let _ = err.render("J");
    assert_eq!(calls.get(), 1);
}

#[test]
fn lazy_values_resolve_in_insertion_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let (first, second, third) = (Rc::clone(&order), Rc::clone(&order), Rc::clone(&order));

    let err = ErrorBuilder::new()
        .with_lazy("a", move || {
            first.borrow_mut().push("a");
            "a"
        })
        .with("plain", 1)
        .with_lazy("b", move || {
            second.borrow_mut().push("b");
            "b"
        })
        .with_lazy("c", move || {
            third.borrow_mut().push("c");
            "c"
        })
        .error("x");

    assert_eq!(*order.borrow(), ["a", "b", "c"]);
    assert_eq!(err.context().keys().collect::<Vec<_>>(), vec!["a", "plain", "b", "c"]);
    assert_eq!(err.context_value("a"), Some(&ContextValue::from("a")));
}

#[test]
fn overwritten_lazy_value_is_never_evaluated() {
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);

    let err = ErrorBuilder::new()
        .with_lazy("k", move || {
            flag.set(true);
            "lazy"
        })
        .with("k", "eager")
        .error("x");

    assert!(!called.get());
    assert_eq!(err.context_value("k"), Some(&ContextValue::from("eager")));
}

#[test]
fn lazy_value_replaces_eager_one() {
    let err = ErrorBuilder::new().with("k", 1).with_lazy("k", || 2).error("x");
    assert_eq!(err.context_value("k"), Some(&ContextValue::Integer(2)));
}

#[test]
fn panicking_generator_propagates_from_terminal_call() {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        ErrorBuilder::new()
            .with_lazy("boom", || -> String { panic!("generator failed") })
            .error("never built")
    }));

    let payload = result.expect_err("terminal call must not swallow the panic");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"generator failed"));
}

#[test]
fn dropping_builder_never_runs_generators() {
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);

    drop(ErrorBuilder::new().with_lazy("k", move || {
        flag.set(true);
        1
    }));
    assert!(!called.get());
}
