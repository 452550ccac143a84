use crate::SlideRb;

#[test]
fn clear_resets() {
    let rb = SlideRb::<i32>::new(3);

    rb.push_iter([1, 2]);
    rb.clear();
    assert_eq!(rb.len(), 0);
    assert!(rb.is_empty());

    rb.push(7);
    assert_eq!(rb.try_pop(), Some(7));
    assert_eq!(rb.try_pop(), None);
}

#[test]
fn clear_after_wrap() {
    let rb = SlideRb::<i32>::new(3);

    // Run the indices past the wrap point before clearing.
    rb.push_iter([1, 2, 3, 4, 5]);
    rb.try_pop().unwrap();
    rb.clear();
    assert!(rb.is_empty());

    rb.push_iter([6, 7, 8]);
    assert_eq!(rb.len(), 3);
    assert_eq!(rb.try_pop(), Some(6));
    assert_eq!(rb.try_pop(), Some(7));
    assert_eq!(rb.try_pop(), Some(8));
}

#[test]
fn clear_empty() {
    let rb = SlideRb::<i32>::new(2);
    rb.clear();
    assert!(rb.is_empty());
    assert_eq!(rb.len(), 0);
}
