//! Arena navigation shared by every tree policy.
//!
//! All functions take the arena as a slice and work with `u32` indices.
//! Functions that can change the root return the new root index.

mod rotate;

use crate::types::Node;

pub(crate) use rotate::{rotate_left, rotate_right};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Replaces `old` with `new` in the child slot of `parent`.
#[inline]
pub(crate) fn replace_child<N: Node>(arena: &mut [N], parent: u32, old: u32, new: Option<u32>) {
    if get_l(arena, parent) == Some(old) {
        set_l(arena, parent, new);
    } else {
        set_r(arena, parent, new);
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Height of the subtree under `node`; an absent subtree has height `-1`.
///
/// Walks level by level, so unbalanced chains do not grow the call stack.
pub fn height<N: Node>(arena: &[N], node: Option<u32>) -> i32 {
    let mut level: Vec<u32> = node.into_iter().collect();
    let mut h = -1;
    while !level.is_empty() {
        h += 1;
        level = level
            .iter()
            .flat_map(|&i| [get_l(arena, i), get_r(arena, i)])
            .flatten()
            .collect();
    }
    h
}

/// Splices `n` out of the tree by promoting its only child (or nothing).
///
/// `n` must have at most one child. Returns the new root, `None` when the
/// tree became empty.
pub(crate) fn unlink<N: Node>(arena: &mut [N], root: u32, n: u32) -> Option<u32> {
    let l = get_l(arena, n);
    let r = get_r(arena, n);
    debug_assert!(l.is_none() || r.is_none(), "unlink needs at most one child");
    let p = get_p(arena, n);
    let c = l.or(r);

    if let Some(c) = c {
        set_p(arena, c, p);
    }
    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);

    match p {
        None => c,
        Some(p) => {
            replace_child(arena, p, n, c);
            Some(root)
        }
    }
}
