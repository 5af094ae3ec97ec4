use log::debug;

use crate::tree::TreeNode;
use crate::util::{rotate_left, rotate_right};

#[inline]
fn height<T>(arena: &[TreeNode<T, i32>], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].meta)
}

#[inline]
fn update_height<T>(arena: &mut [TreeNode<T, i32>], n: u32) {
    let node = &arena[n as usize];
    let h = 1 + height(arena, node.l).max(height(arena, node.r));
    arena[n as usize].meta = h;
}

/// `height(left) - height(right)`, reading the stored heights.
pub fn balance_factor<T>(arena: &[TreeNode<T, i32>], n: u32) -> i32 {
    let node = &arena[n as usize];
    height(arena, node.l) - height(arena, node.r)
}

/// Walks from `curr` up to the root, recomputing heights and rotating every
/// node whose balance factor left the `[-1, 1]` window. Returns the new root.
///
/// The walk never stops early: a deletion can unbalance any ancestor.
pub(crate) fn rebalance<T>(
    arena: &mut [TreeNode<T, i32>],
    mut root: u32,
    mut curr: Option<u32>,
) -> u32 {
    while let Some(n) = curr {
        update_height(arena, n);
        let top = match balance_factor(arena, n) {
            -2 => {
                let r = arena[n as usize].r.expect("right-heavy node has a right child");
                if balance_factor(arena, r) == 1 {
                    let rl = arena[r as usize].l.expect("left-heavy child has a left child");
                    debug!("avl: right-left rotation at node {n}");
                    root = rotate_right(arena, root, r);
                    update_height(arena, r);
                    update_height(arena, rl);
                } else {
                    debug!("avl: left rotation at node {n}");
                }
                let pivot = arena[n as usize].r.expect("right-heavy node has a right child");
                root = rotate_left(arena, root, n);
                update_height(arena, n);
                update_height(arena, pivot);
                pivot
            }
            2 => {
                let l = arena[n as usize].l.expect("left-heavy node has a left child");
                if balance_factor(arena, l) == -1 {
                    let lr = arena[l as usize].r.expect("right-heavy child has a right child");
                    debug!("avl: left-right rotation at node {n}");
                    root = rotate_left(arena, root, l);
                    update_height(arena, l);
                    update_height(arena, lr);
                } else {
                    debug!("avl: right rotation at node {n}");
                }
                let pivot = arena[n as usize].l.expect("left-heavy node has a left child");
                root = rotate_right(arena, root, n);
                update_height(arena, n);
                update_height(arena, pivot);
                pivot
            }
            _ => n,
        };
        curr = arena[top as usize].p;
    }
    root
}

fn checked_height<T>(arena: &[TreeNode<T, i32>], node: Option<u32>) -> Result<i32, String> {
    let Some(i) = node else {
        return Ok(-1);
    };
    let n = &arena[i as usize];
    let lh = checked_height(arena, n.l)?;
    let rh = checked_height(arena, n.r)?;
    let expected = 1 + lh.max(rh);
    if n.meta != expected {
        return Err(format!(
            "Height mismatch at node {i}: expected {expected}, got {}",
            n.meta
        ));
    }
    if !(-1..=1).contains(&(lh - rh)) {
        return Err(format!("AVL balance violated at node {i}"));
    }
    Ok(expected)
}

/// Checks stored heights against the recurrence and the balance window.
pub fn assert_avl_tree<T>(arena: &[TreeNode<T, i32>], root: u32) -> Result<(), String> {
    checked_height(arena, Some(root)).map(|_| ())
}
