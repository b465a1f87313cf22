use city_routes::data_structures::Frontier;
use ordered_float::OrderedFloat;

#[test]
fn test_frontier_pops_smallest_first() {
    let mut frontier: Frontier<char, OrderedFloat<f64>> = Frontier::new();
    frontier.push('a', OrderedFloat(10.0));
    frontier.push('b', OrderedFloat(5.0));
    frontier.push('c', OrderedFloat(7.5));
    assert_eq!(frontier.len(), 3);
    assert_eq!(frontier.peek(), Some((&'b', OrderedFloat(5.0))));

    assert_eq!(frontier.pop(), Some(('b', OrderedFloat(5.0))));
    assert_eq!(frontier.pop(), Some(('c', OrderedFloat(7.5))));
    assert_eq!(frontier.pop(), Some(('a', OrderedFloat(10.0))));
    assert_eq!(frontier.pop(), None);
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_ties_pop_in_insertion_order() {
    let mut frontier: Frontier<&str, OrderedFloat<f64>> = Frontier::new();
    frontier.push("z", OrderedFloat(1.0));
    frontier.push("a", OrderedFloat(1.0));
    frontier.push("m", OrderedFloat(0.5));
    frontier.push("b", OrderedFloat(1.0));

    let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).map(|(v, _)| v).collect();
    assert_eq!(order, vec!["m", "z", "a", "b"]);
}

#[test]
fn test_frontier_keeps_stale_entries() {
    let mut frontier: Frontier<u32, OrderedFloat<f64>> = Frontier::new();
    frontier.push(1, OrderedFloat(9.0));
    // A better distance for the same vertex is pushed, not updated in place
    frontier.push(1, OrderedFloat(3.0));

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((1, OrderedFloat(3.0))));
    assert_eq!(frontier.pop(), Some((1, OrderedFloat(9.0))));
}
