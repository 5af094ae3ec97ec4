use ordered_forest::{AvlTree, ForestError};

fn insert_value(tree: &mut AvlTree<i32>, value: i32) -> u32 {
    let idx = tree.insert(value).unwrap();
    if let Err(err) = tree.assert_valid() {
        panic!("invalid AVL tree after insert({value}): {err}\n{}", tree.print());
    }
    idx
}

fn delete_value(tree: &mut AvlTree<i32>, value: i32) {
    assert_eq!(tree.delete(&value), Ok(value));
    if let Err(err) = tree.assert_valid() {
        panic!("invalid AVL tree after delete({value}): {err}\n{}", tree.print());
    }
}

fn root_value(tree: &AvlTree<i32>) -> i32 {
    *tree.value(tree.root().unwrap()).unwrap()
}

#[test]
fn avl_balanced_insert_keeps_shape_matrix() {
    let mut tree = AvlTree::new();
    for v in [5, 3, 8, 1, 4, 7, 9] {
        insert_value(&mut tree, v);
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(root_value(&tree), 5);
    assert_eq!(tree.height(), 2);

    let root = tree.root().unwrap();
    assert_eq!(tree.node_height(root), Some(2));
    assert_eq!(tree.balance_factor(root), Some(0));
    let leaf = tree.search(&1).unwrap();
    assert_eq!(tree.node_height(leaf), Some(0));
    assert_eq!(tree.balance_factor(99), None);
}

#[test]
fn avl_single_and_double_rotations_matrix() {
    for order in [[1, 2, 3], [3, 2, 1], [3, 1, 2], [1, 3, 2]] {
        let mut tree = AvlTree::new();
        for v in order {
            insert_value(&mut tree, v);
        }
        assert_eq!(root_value(&tree), 2, "insertion order {order:?}");
        assert_eq!(tree.height(), 1, "insertion order {order:?}");
        let root = tree.root().unwrap();
        assert_eq!(tree.left(root).and_then(|i| tree.value(i)), Some(&1));
        assert_eq!(tree.right(root).and_then(|i| tree.value(i)), Some(&3));
    }
}

#[test]
fn avl_ascending_ladder_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, i);
        assert_eq!(tree.len(), (i + 1) as usize);
    }
    // The sparsest AVL tree of height 9 already needs 143 nodes.
    assert!(tree.height() <= 8, "height {}", tree.height());

    for i in 0..=100 {
        delete_value(&mut tree, i);
        assert_eq!(tree.len(), (100 - i) as usize);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[test]
fn avl_delete_rebalances_up_to_root_matrix() {
    let mut tree = AvlTree::new();
    for v in [50, 25, 75, 10, 30, 60, 80, 5, 15, 27, 55, 1] {
        insert_value(&mut tree, v);
    }
    for v in [80, 60, 75, 55, 50, 27] {
        delete_value(&mut tree, v);
    }
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec![1, 5, 10, 15, 25, 30]
    );
    assert!(tree.height() <= 3);
}

#[test]
fn avl_duplicates_and_missing_matrix() {
    let mut tree = AvlTree::new();
    for v in [4, 4, 4, 4, 4] {
        insert_value(&mut tree, v);
    }
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.delete(&3), Err(ForestError::EmptyStructure));
    for _ in 0..5 {
        delete_value(&mut tree, 4);
    }
    assert_eq!(tree.delete(&4), Err(ForestError::EmptyStructure));
}

#[test]
fn avl_rejects_external_rotation_matrix() {
    let mut tree = AvlTree::new();
    let a = insert_value(&mut tree, 1);
    insert_value(&mut tree, 2);
    assert_eq!(
        tree.rotate_left(a),
        Err(ForestError::UnsupportedOperation("AVL"))
    );
    assert_eq!(
        tree.rotate_right(a),
        Err(ForestError::UnsupportedOperation("AVL"))
    );
    tree.assert_valid().unwrap();
}

#[test]
fn avl_print_shows_height_and_balance_matrix() {
    let tree = AvlTree::try_from_values([2, 1]).unwrap();
    let printed = tree.print();
    assert!(printed.starts_with("Node[0] [h=1 bf=1] { 2 }"), "{printed}");
    assert!(printed.contains("L=Node[1] [h=0 bf=0] { 1 }"), "{printed}");
}

#[test]
fn avl_rejects_nan_matrix() {
    let mut tree = AvlTree::<f64>::new();
    tree.insert(1.0).unwrap();
    assert!(matches!(
        tree.insert(f64::NAN),
        Err(ForestError::InvalidArgument(_))
    ));
    assert_eq!(tree.len(), 1);
    tree.assert_valid().unwrap();
}
