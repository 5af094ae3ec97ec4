use ordered_forest::{Color, ForestError, RbTree};

fn insert_value(tree: &mut RbTree<i32>, value: i32) -> u32 {
    let idx = tree.insert(value).unwrap();
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after insert({value}): {err}\n{}", tree.print());
    }
    idx
}

fn delete_value(tree: &mut RbTree<i32>, value: i32) {
    if tree.delete(&value).is_ok() {
        if let Err(err) = tree.assert_valid() {
            panic!("invalid red-black tree after delete({value}): {err}\n{}", tree.print());
        }
    }
}

#[test]
fn rb_first_insert_is_black_root_matrix() {
    let mut tree = RbTree::new();
    let root = insert_value(&mut tree, 7);
    assert_eq!(tree.color(root), Some(Color::Black));
    assert_eq!(tree.color(42), None);
}

#[test]
fn rb_ascending_triple_rotates_matrix() {
    let mut tree = RbTree::new();
    let i1 = insert_value(&mut tree, 1);
    let i2 = insert_value(&mut tree, 2);
    let i3 = insert_value(&mut tree, 3);

    assert_eq!(tree.root(), Some(i2));
    assert_eq!(tree.color(i2), Some(Color::Black));
    assert_eq!(tree.left(i2), Some(i1));
    assert_eq!(tree.right(i2), Some(i3));
    assert_eq!(tree.color(i1), Some(Color::Red));
    assert_eq!(tree.color(i3), Some(Color::Red));
}

#[test]
fn rb_red_uncle_recolors_matrix() {
    let mut tree = RbTree::new();
    for v in [2, 1, 3] {
        insert_value(&mut tree, v);
    }
    let i4 = insert_value(&mut tree, 4);
    let root = tree.root().unwrap();
    assert_eq!(tree.value(root), Some(&2));
    assert_eq!(tree.color(tree.left(root).unwrap()), Some(Color::Black));
    assert_eq!(tree.color(tree.right(root).unwrap()), Some(Color::Black));
    assert_eq!(tree.color(i4), Some(Color::Red));
}

#[test]
fn rb_insert_delete_various_numbers_matrix() {
    let mut tree = RbTree::new();
    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut tree, value);
    }
    assert_eq!(tree.len(), 13);

    delete_value(&mut tree, 100);
    assert_eq!(tree.len(), 12);

    delete_value(&mut tree, 33);
    delete_value(&mut tree, 33);
    assert_eq!(tree.len(), 11);

    for (value, len) in [(10, 10), (60, 9), (22, 8), (51, 7), (11, 6)] {
        delete_value(&mut tree, value);
        assert_eq!(tree.len(), len);
    }
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec![12, 25, 50, 55, 59, 88]
    );
}

#[test]
fn rb_numbers_from_0_to_100_matrix() {
    let mut tree = RbTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, i);
        assert_eq!(tree.len(), (i + 1) as usize);
    }
    // 2 * log2(n + 1) bound.
    assert!(tree.height() < 14, "height {}", tree.height());

    for i in 0..=100 {
        delete_value(&mut tree, i);
        assert_eq!(tree.len(), (100 - i) as usize);
    }
    assert_eq!(tree.root(), None);
}

#[test]
fn rb_numbers_deleted_from_the_top_matrix() {
    let mut tree = RbTree::new();
    for i in 0..64 {
        insert_value(&mut tree, (i * 37) % 64);
    }
    for i in (0..64).rev() {
        delete_value(&mut tree, i);
        assert!(!tree.contains(&i));
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_rejects_external_rotation_matrix() {
    let mut tree = RbTree::new();
    let a = insert_value(&mut tree, 1);
    insert_value(&mut tree, 2);
    assert_eq!(
        tree.rotate_left(a),
        Err(ForestError::UnsupportedOperation("red-black"))
    );
    assert_eq!(
        tree.rotate_left(a).unwrap_err().to_string(),
        "red-black trees reject external rotations"
    );
}

#[test]
fn rb_print_shows_colors_matrix() {
    let tree = RbTree::try_from_values([2, 1]).unwrap();
    let printed = tree.print();
    assert!(printed.starts_with("Node[0] [black] { 2 }"), "{printed}");
    assert!(printed.contains("L=Node[1] [red] { 1 }"), "{printed}");
    assert_eq!(Color::Black.to_string(), "black");
}
