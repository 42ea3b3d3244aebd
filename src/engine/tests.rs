use super::*;
use crate::chain::Chain;

type Grid = Vec<Vec<i32>>;
type GridStack = <Grid as Chain>::Stack;

fn ragged() -> Grid {
    vec![vec![1, 2], vec![], vec![3]]
}

#[test]
fn leftmost_then_exhaust() {
    let data = ragged();
    let mut stack: GridStack = seat(&data, 0);
    assert_eq!(stack.leaf(&data), Some(&1));
    assert!(stack.increment(&data));
    assert_eq!(stack.leaf(&data), Some(&2));
    assert!(stack.increment(&data));
    assert_eq!(stack.leaf(&data), Some(&3));
    assert_eq!(stack.triplet().current, 2);
    assert!(!stack.increment(&data));
    assert_eq!(
        stack.triplet(),
        &Triplet {
            start: 0,
            current: 3,
            end: 3
        },
    );
    assert_eq!(stack.leaf(&data), None);
    // Exhaustion is sticky.
    assert!(!stack.increment(&data));
    assert!(stack.triplet().is_exhausted());
}

#[test]
fn canonical_end_keeps_last_path() {
    let data = ragged();
    let end: GridStack = seat(&data, 3);
    let inner = end.inner().expect("the last element was not empty");
    assert_eq!(
        inner.triplet(),
        &Triplet {
            start: 0,
            current: 1,
            end: 1
        },
    );

    let mut walked: GridStack = seat(&data, 0);
    assert_eq!(exhaust(&mut walked, &data), 2);
    assert_eq!(walked, end);
}

#[test]
fn empty_last_element_in_end_state() {
    let data: Grid = vec![vec![1], vec![]];
    let end: GridStack = seat(&data, 2);
    // The last element was visited while skipping, so its empty range is what remains.
    assert_eq!(
        end.inner().map(Bottom::triplet),
        Some(&Triplet {
            start: 0,
            current: 0,
            end: 0
        }),
    );
}

#[test]
fn initial_flag_picks_reference_cursor() {
    let data = ragged();
    let mut stack: GridStack = Stack::open(&data);
    <GridStack as Stack<Grid>>::outer_mut(&mut stack).current = 2;

    // Initial construction derives the inner level from the start cursor...
    assert!(stack.initialize(&data, true));
    assert_eq!(stack.inner().map(|inner| inner.triplet().end), Some(2));
    // ...and every later initialization from the current one.
    assert!(stack.initialize(&data, false));
    assert_eq!(stack.inner().map(|inner| inner.triplet().end), Some(1));
}

#[test]
fn failed_initialization_vacates_levels_below() {
    let data: Vec<Vec<Vec<i32>>> = vec![vec![], vec![vec![1]]];
    let mut stack: <Vec<Vec<Vec<i32>>> as Chain>::Stack = Stack::open(&data);
    assert!(!stack.initialize(&data, true));
    let middle = stack.inner().expect("the outer level was not empty");
    assert!(middle.triplet().is_empty());
    assert!(middle.inner().is_none());

    assert!(stack.increment(&data));
    assert_eq!(stack.leaf(&data), Some(&1));
    assert_eq!(stack.triplet().current, 1);
}

#[test]
fn empty_innermost_range() {
    let data: Vec<Vec<Vec<i32>>> = vec![vec![vec![]], vec![vec![1]]];
    let mut stack: <Vec<Vec<Vec<i32>>> as Chain>::Stack = Stack::open(&data);
    assert!(!stack.initialize(&data, true));
    let bottom = stack
        .inner()
        .and_then(Link::inner)
        .expect("the outer levels were not empty");
    assert!(bottom.triplet().is_empty());

    assert!(stack.increment(&data));
    assert_eq!(stack.leaf(&data), Some(&1));
}

#[test]
fn empty_root() {
    let data: Grid = Vec::new();
    let begin: GridStack = seat(&data, 0);
    assert!(begin.inner().is_none());
    assert!(begin.triplet().is_exhausted());
    assert_eq!(begin.leaf(&data), None);
}

#[test]
fn skips_empty_ranges_at_depth() {
    let data: Vec<Vec<Vec<i32>>> = vec![
        vec![vec![], vec![1]],
        vec![],
        vec![vec![], vec![]],
        vec![vec![2, 3]],
    ];
    let mut stack: <Vec<Vec<Vec<i32>>> as Chain>::Stack = seat(&data, 0);
    let mut leaves = Vec::new();
    while let Some(leaf) = stack.leaf(&data) {
        leaves.push(*leaf);
        stack.increment(&data);
    }
    assert_eq!(leaves, [1, 2, 3]);
    assert_eq!(stack, seat(&data, 4));
}

#[test]
fn seat_in_the_middle() {
    let data: Grid = vec![vec![1], vec![], vec![2, 3], vec![4]];
    let at_empty: GridStack = seat(&data, 1);
    assert_eq!(at_empty.leaf(&data), Some(&2));
    assert_eq!(at_empty, seat(&data, 2));

    let flat = [7_u8, 8, 9];
    let bottom: Bottom<usize> = seat(&flat[..], 1);
    assert_eq!(bottom.leaf(&flat[..]), Some(&8));
}

#[test]
fn mutable_leaves() {
    let mut data = ragged();
    let mut stack: GridStack = seat(&data, 0);
    stack.increment(&data);
    if let Some(leaf) = stack.leaf_mut(&mut data) {
        *leaf = 20;
    }
    assert_eq!(data, [vec![1, 20], vec![], vec![3]]);
}

type Cube = Vec<Vec<Vec<i32>>>;
type CubeStack = <Cube as Chain>::Stack;

fn collect_from(data: &Cube, stack: &mut CubeStack) -> Vec<i32> {
    let mut leaves = Vec::new();
    while let Some(leaf) = stack.leaf(data) {
        leaves.push(*leaf);
        stack.increment(data);
    }
    leaves
}

#[test]
fn empty_range_found_while_backtracking() {
    let data: Cube = vec![vec![], vec![vec![], vec![7]]];
    let mut stack: CubeStack = seat(&data, 0);
    assert_eq!(stack.leaf(&data), Some(&7));
    assert_eq!(stack.triplet().current, 1);
    let middle = stack.inner().expect("the second element has leaves");
    assert_eq!(middle.triplet().current, 1);

    assert_eq!(collect_from(&data, &mut stack), [7]);
    assert_eq!(stack, seat(&data, 2));
}

#[test]
fn empty_range_in_the_middle_element() {
    let data: Cube = vec![vec![vec![1]], vec![vec![], vec![2]], vec![vec![3]]];
    let mut stack: CubeStack = seat(&data, 0);
    assert_eq!(collect_from(&data, &mut stack), [1, 2, 3]);
    assert_eq!(stack, seat(&data, 3));

    let mut walked: CubeStack = seat(&data, 0);
    assert_eq!(exhaust(&mut walked, &data), 2);
    assert_eq!(walked, stack);
}

#[test]
fn several_empty_ranges_before_a_leaf() {
    let data: Cube = vec![vec![vec![1], vec![]], vec![vec![], vec![], vec![2]], vec![]];
    let mut stack: CubeStack = seat(&data, 0);
    assert_eq!(collect_from(&data, &mut stack), [1, 2]);
    assert_eq!(stack, seat(&data, 3));

    let from_middle: CubeStack = seat(&data, 1);
    assert_eq!(from_middle.leaf(&data), Some(&2));
}
