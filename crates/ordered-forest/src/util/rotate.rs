use log::trace;

use crate::types::Node;

use super::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Left rotation around `n`; its right child takes its place.
///
/// Returns the new root. Panics if `n` has no right child.
pub(crate) fn rotate_left<N: Node>(arena: &mut [N], root: u32, n: u32) -> u32 {
    let nr = get_r(arena, n).expect("left rotation needs a right child");
    let p = get_p(arena, n);
    let nrl = get_l(arena, nr);
    trace!("rotate left at node {n}, pivot {nr}");

    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_p(arena, nr, p);

    match p {
        None => nr,
        Some(p) => {
            replace_child(arena, p, n, Some(nr));
            root
        }
    }
}

/// Right rotation around `n`; its left child takes its place.
///
/// Returns the new root. Panics if `n` has no left child.
pub(crate) fn rotate_right<N: Node>(arena: &mut [N], root: u32, n: u32) -> u32 {
    let nl = get_l(arena, n).expect("right rotation needs a left child");
    let p = get_p(arena, n);
    let nlr = get_r(arena, nl);
    trace!("rotate right at node {n}, pivot {nl}");

    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_p(arena, nl, p);

    match p {
        None => nl,
        Some(p) => {
            replace_child(arena, p, n, Some(nl));
            root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Links {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for Links {
        fn p(&self) -> Option<u32> {
            self.p
        }
        fn l(&self) -> Option<u32> {
            self.l
        }
        fn r(&self) -> Option<u32> {
            self.r
        }
        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }
        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }
        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }
    }

    // 0 -> r 1 -> l 2, r 3
    fn chain() -> Vec<Links> {
        let mut arena: Vec<Links> = (0..4).map(|_| Links::default()).collect();
        arena[0].r = Some(1);
        arena[1].p = Some(0);
        arena[1].l = Some(2);
        arena[1].r = Some(3);
        arena[2].p = Some(1);
        arena[3].p = Some(1);
        arena
    }

    #[test]
    fn rotate_left_at_root_moves_inner_grandchild() {
        let mut arena = chain();
        let root = rotate_left(&mut arena, 0, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].p, None);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[0].p, Some(1));
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[2].p, Some(0));
    }

    #[test]
    fn rotate_right_then_left_restores_links() {
        let mut arena = chain();
        let root = rotate_right(&mut arena, 0, 1);
        assert_eq!(root, 0);
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[2].r, Some(1));
        assert_eq!(arena[1].p, Some(2));

        let root = rotate_left(&mut arena, root, 2);
        assert_eq!(root, 0);
        assert_eq!(arena[0].r, Some(1));
        assert_eq!(arena[1].l, Some(2));
        assert_eq!(arena[2].p, Some(1));
        assert_eq!(arena[2].r, None);
    }
}
