//! Integration tests for result construction, transformation and extraction
//!
//! - Variant predicates and extraction
//! - Functor and bind laws (proptest)
//! - No-op propagation on `Err`
//! - Aggregates: combine / partition

use paw_result::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::panic;

fn halve(n: i64) -> Result<i64, String> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        Err(format!("{n} is odd"))
    }
}

proptest! {
    #[test]
    fn prop_ok_is_ok(v in any::<i64>()) {
        let r = ok::<_, String>(v);
        prop_assert!(r.is_ok());
        prop_assert!(!r.is_err());
        prop_assert_eq!(r.unwrap_or_raise(), v);
    }

    #[test]
    fn prop_err_is_err(e in ".*") {
        let r = err::<i64, _>(e.clone());
        prop_assert!(r.is_err());
        prop_assert!(!r.is_ok());
        prop_assert_eq!(r.unwrap_err_or_raise(), e);
    }

    #[test]
    fn prop_functor_composition(v in any::<i32>()) {
        let f = |x: i32| i64::from(x) * 3;
        let g = |x: i64| x - 7;
        let stepwise = ok::<_, String>(v).map(f).map(g);
        let composed = ok::<_, String>(v).map(|x| g(f(x)));
        prop_assert_eq!(stepwise, composed);
    }

    #[test]
    fn prop_bind_left_identity(v in any::<i64>()) {
        prop_assert_eq!(ok::<_, String>(v).and_then(halve), halve(v));
    }
}

#[test]
fn test_err_never_invokes_transformers() {
    let called = Cell::new(false);
    let e: Result<i64, &str> = Err("boom");

    assert_eq!(
        e.map(|v| {
            called.set(true);
            v + 1
        }),
        Err("boom")
    );
    assert_eq!(
        e.and_then(|v| {
            called.set(true);
            Ok(v)
        }),
        Err("boom")
    );
    assert!(!called.get());
}

#[test]
fn test_map_err_leaves_ok_alone() {
    let r: Result<u8, &str> = Ok(3);
    assert_eq!(r.map_err(|e| format!("Custom: {e}")), Ok(3));

    let r: Result<u8, &str> = Err("Something went wrong");
    assert_eq!(
        r.map_err(|e| format!("Custom: {e}")),
        Err("Custom: Something went wrong".to_string())
    );
}

#[test]
fn test_fallbacks() {
    let r: Result<&str, Fault> = Err(Fault::error("Something went wrong"));
    assert_eq!(r.clone().unwrap_or("Default value"), "Default value");
    assert_eq!(
        r.unwrap_or_else(|e| if e.message().is_empty() { "none" } else { "computed" }),
        "computed"
    );
}

#[rstest]
#[case(vec![ok(1), ok(2), ok(3)], Ok(vec![1, 2, 3]))]
#[case(vec![ok(1), err("boom"), ok(3)], Err("boom"))]
#[case(vec![err("first"), err("second")], Err("first"))]
fn test_combine(#[case] input: Vec<Result<i32, &'static str>>, #[case] expected: Result<Vec<i32>, &'static str>) {
    assert_eq!(combine(input), expected);
}

#[test]
fn test_combine_never_derives_from_later_elements() {
    let evaluated = Cell::new(0);
    let produce = |i: i32| {
        evaluated.set(evaluated.get() + 1);
        if i == 2 { err("boom") } else { ok(i) }
    };

    assert_eq!(combine((1..=3).map(produce)), Err("boom"));
    assert_eq!(evaluated.get(), 2);
}

#[test]
fn test_partition() {
    let (values, errors) = partition(vec![ok(1), err("x"), ok(3)]);
    assert_eq!(values, vec![1, 3]);
    assert_eq!(errors, vec!["x"]);
}

#[test]
fn test_from_nullable() {
    assert_eq!(from_nullable(None::<&str>, "missing"), Err("missing"));
    assert_eq!(from_nullable(Some("x"), "missing"), Ok("x"));
}

#[test]
fn test_unwrap_on_err_raises_exact_message() {
    let r: Result<u8, Fault> = Err(Fault::error("boom"));
    let payload = panic::catch_unwind(|| r.unwrap_or_raise()).unwrap_err();
    assert_eq!(Fault::from_panic(payload).message(), "boom");
}

#[test]
fn test_unwrap_err_on_ok_raises() {
    let r: Result<u8, Fault> = Ok(1);
    assert!(panic::catch_unwind(|| r.unwrap_err_or_raise()).is_err());
}
