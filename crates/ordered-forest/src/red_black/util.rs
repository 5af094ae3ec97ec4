use log::debug;

use crate::tree::TreeNode;
use crate::util::{rotate_left, rotate_right};

use super::Color;

/// Absent nodes count as black.
#[inline]
fn is_black<T>(arena: &[TreeNode<T, Color>], node: Option<u32>) -> bool {
    node.map_or(true, |i| arena[i as usize].meta == Color::Black)
}

#[inline]
fn is_red<T>(arena: &[TreeNode<T, Color>], node: Option<u32>) -> bool {
    !is_black(arena, node)
}

#[inline]
fn paint<T>(arena: &mut [TreeNode<T, Color>], node: u32, color: Color) {
    arena[node as usize].meta = color;
}

/// Restores the red-black invariant after the red leaf `n` was attached.
/// Returns the new root.
pub(crate) fn fix_insert<T>(arena: &mut [TreeNode<T, Color>], mut root: u32, mut n: u32) -> u32 {
    loop {
        let Some(mut p) = arena[n as usize].p else {
            paint(arena, n, Color::Black);
            return root;
        };
        if is_black(arena, Some(p)) {
            return root;
        }
        let g = arena[p as usize].p.expect("red parent is never the root");
        let p_left = arena[g as usize].l == Some(p);
        let u = if p_left {
            arena[g as usize].r
        } else {
            arena[g as usize].l
        };

        if is_red(arena, u) {
            debug!("rb insert: red uncle, recolor at node {g}");
            paint(arena, p, Color::Black);
            if let Some(u) = u {
                paint(arena, u, Color::Black);
            }
            paint(arena, g, Color::Red);
            n = g;
            continue;
        }

        let n_left = arena[p as usize].l == Some(n);
        if n_left != p_left {
            debug!("rb insert: bent path at node {n}, straightening");
            root = if p_left {
                rotate_left(arena, root, p)
            } else {
                rotate_right(arena, root, p)
            };
            n = p;
            p = arena[n as usize].p.expect("rotated node has a parent");
        }

        debug!("rb insert: straight path, rotating grandparent {g}");
        paint(arena, p, Color::Black);
        paint(arena, g, Color::Red);
        return if p_left {
            rotate_right(arena, root, g)
        } else {
            rotate_left(arena, root, g)
        };
    }
}

/// Resolves a black-height deficit at the position `node` under `parent`.
///
/// `node` is `None` when the removed node had no child: the empty slot
/// stands in for it, and its side is the one of `parent` without a child
/// (the sibling always exists while a deficit remains). Returns the new root.
pub(crate) fn fix_deficit<T>(
    arena: &mut [TreeNode<T, Color>],
    mut root: u32,
    mut node: Option<u32>,
    mut parent: Option<u32>,
) -> u32 {
    let mut deficit = true;
    while deficit {
        // Case 1: the deficit reached the root.
        let Some(p) = parent else {
            debug!("rb delete: case 1 at root");
            break;
        };
        let is_left = arena[p as usize].l == node;
        let sibling_of = |arena: &[TreeNode<T, Color>], p: u32| {
            let pn = &arena[p as usize];
            let sibling = if is_left { pn.r } else { pn.l };
            sibling.expect("deficient side has a sibling")
        };
        let mut s = sibling_of(arena, p);

        // Case 2: red sibling; rotate it above the parent.
        if is_red(arena, Some(s)) {
            debug!("rb delete: case 2 at node {p}");
            paint(arena, s, Color::Black);
            paint(arena, p, Color::Red);
            root = if is_left {
                rotate_left(arena, root, p)
            } else {
                rotate_right(arena, root, p)
            };
            s = sibling_of(arena, p);
        }

        let sn = &arena[s as usize];
        let (near, far) = if is_left { (sn.l, sn.r) } else { (sn.r, sn.l) };

        if is_black(arena, near) && is_black(arena, far) {
            paint(arena, s, Color::Red);
            if is_black(arena, Some(p)) {
                // Case 3: push the deficit up to the parent.
                debug!("rb delete: case 3 at node {p}");
                node = Some(p);
                parent = arena[p as usize].p;
            } else {
                // Case 4: a red parent absorbs it.
                debug!("rb delete: case 4 at node {p}");
                paint(arena, p, Color::Black);
                deficit = false;
            }
            continue;
        }

        // Case 5: only the near nephew is red; turn it into the sibling.
        if is_black(arena, far) {
            debug!("rb delete: case 5 at node {s}");
            let near = near.expect("red nephew exists");
            paint(arena, near, Color::Black);
            paint(arena, s, Color::Red);
            root = if is_left {
                rotate_right(arena, root, s)
            } else {
                rotate_left(arena, root, s)
            };
            s = sibling_of(arena, p);
        }

        // Case 6: far nephew is red.
        debug!("rb delete: case 6 at node {p}");
        let sn = &arena[s as usize];
        let far = if is_left { sn.r } else { sn.l };
        let far = far.expect("red far nephew exists");
        let parent_color = arena[p as usize].meta;
        paint(arena, s, parent_color);
        paint(arena, p, Color::Black);
        paint(arena, far, Color::Black);
        root = if is_left {
            rotate_left(arena, root, p)
        } else {
            rotate_right(arena, root, p)
        };
        deficit = false;
    }
    root
}

fn black_height<T>(arena: &[TreeNode<T, Color>], node: Option<u32>) -> Result<usize, String> {
    let Some(i) = node else {
        return Ok(0);
    };
    let n = &arena[i as usize];
    if n.meta == Color::Red {
        if is_red(arena, n.l) {
            return Err(format!("Red node {i} has red left child"));
        }
        if is_red(arena, n.r) {
            return Err(format!("Red node {i} has red right child"));
        }
    }
    let lh = black_height(arena, n.l)?;
    let rh = black_height(arena, n.r)?;
    if lh != rh {
        return Err(format!("Black height mismatch at node {i}: {lh} vs {rh}"));
    }
    Ok(lh + usize::from(n.meta == Color::Black))
}

/// Checks root color, the red-red rule and equal black heights.
pub fn assert_red_black_tree<T>(arena: &[TreeNode<T, Color>], root: u32) -> Result<(), String> {
    if arena[root as usize].meta != Color::Black {
        return Err("Root is not black".to_string());
    }
    black_height(arena, Some(root)).map(|_| ())
}
