use super::*;

enum Nested {
    Leaf,
    Wrap(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf;
    for _ in 0..depth {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

fn measure(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf => 0,
        Nested::Wrap(inner) => measure(inner) + 1,
    })
}

fn teardown(node: Nested) {
    // Iterative drop so the test itself does not overflow on Box's recursive Drop.
    let mut current = node;
    while let Nested::Wrap(inner) = current {
        current = *inner;
    }
}

#[test]
fn test_shallow_structure() {
    let node = build(16);
    assert_eq!(measure(&node), 16);
    teardown(node);
}

#[test]
fn test_deep_structure() {
    // 200k frames would overflow a default 8MB main-thread stack
    let node = build(200_000);
    assert_eq!(measure(&node), 200_000);
    teardown(node);
}

#[test]
fn test_returns_closure_result() {
    let result: Result<&str, ()> = ensure_sufficient_stack(|| Ok("done"));
    assert_eq!(result, Ok("done"));
}
