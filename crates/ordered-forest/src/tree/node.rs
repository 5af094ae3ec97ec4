use crate::types::Node;

/// Arena slot of an ordered tree.
///
/// `meta` is the policy-specific balance tag: `()` for plain trees, the
/// subtree height for AVL trees, the node color for red-black trees. A freed
/// slot holds no value and chains the free list through its parent link.
#[derive(Clone, Debug)]
pub struct TreeNode<T, M> {
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) value: Option<T>,
    pub(crate) meta: M,
}

impl<T, M> TreeNode<T, M> {
    pub(crate) fn new(value: T, meta: M) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value: Some(value),
            meta,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn meta(&self) -> &M {
        &self.meta
    }

    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub(crate) fn element(&self) -> &T {
        self.value.as_ref().expect("live tree node holds a value")
    }
}

impl<T, M> Node for TreeNode<T, M> {
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
