use super::*;
use crate::Table;

#[test]
fn push_get_pop() {
    let mut a = Array::new();
    assert!(a.is_empty());
    a.push(1);
    a.push("two");
    a.push(3.0);
    assert_eq!(a.len(), 3);
    assert_eq!(a.get(1).and_then(Value::as_str), Some("two"));
    assert!(a.get(3).is_none());
    assert_eq!(a.pop(), Some(Value::Float(3.0)));
    assert_eq!(a.len(), 2);
    assert_eq!(a.as_slice()[0], Value::Integer(1));
}

#[test]
fn mutation_through_accessors() {
    let mut a: Array = vec![Value::Integer(1), Value::Integer(2)].into();
    if let Some(Value::Integer(i)) = a.get_mut(0) {
        *i = 10;
    }
    for v in a.iter_mut() {
        if let Value::Integer(i) = v {
            *i += 1;
        }
    }
    if let Some(last) = a.last_mut() {
        *last = Value::Boolean(false);
    }
    assert_eq!(a[0], Value::Integer(11));
    assert_eq!(a[1], Value::Boolean(false));
}

#[test]
fn array_of_tables_detection() {
    assert!(!Array::new().is_array_of_tables());

    let mut a = Array::new();
    a.push(Table::new());
    a.push(Table::new());
    assert!(a.is_array_of_tables());

    a.push(1);
    assert!(!a.is_array_of_tables());
}

#[test]
fn collect_and_iterate() {
    let a: Array = (1..=3).map(|i| i as i64).collect();
    let sum: i64 = a.iter().filter_map(Value::as_integer).sum();
    assert_eq!(sum, 6);

    let mut count = 0;
    for _ in &a {
        count += 1;
    }
    assert_eq!(count, 3);

    let owned: Vec<Value> = a.into_iter().collect();
    assert_eq!(owned.len(), 3);
}

#[test]
fn equality_is_ordered() {
    let a: Array = [1i64, 2].into_iter().collect();
    let b: Array = [2i64, 1].into_iter().collect();
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert_eq!(format!("{a:?}"), "[1, 2]");
}

#[test]
#[should_panic]
fn index_out_of_bounds_panics() {
    let a = Array::with_capacity(4);
    let _ = &a[0];
}
