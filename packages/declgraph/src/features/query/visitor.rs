//! Typed, filtered traversal over a built entity tree
//!
//! The tree is read-only after construction, so traversal hands out shared
//! handles; consumers down-cast through the kind accessors on [`Entity`].

use std::sync::Arc;

use crate::features::entity::Entity;

/// Depth-first pre-order visit, root included.
pub fn visit(root: &Arc<Entity>, f: &mut impl FnMut(&Arc<Entity>)) {
    f(root);
    for child in &root.children {
        visit(child, f);
    }
}

/// Collect every reachable entity satisfying the predicate.
pub fn collect_by(root: &Arc<Entity>, predicate: impl Fn(&Entity) -> bool) -> Vec<Arc<Entity>> {
    let mut out = Vec::new();
    visit(root, &mut |entity| {
        if predicate(entity) {
            out.push(Arc::clone(entity));
        }
    });
    out
}

/// All class entities reachable from `root`, in tree order.
pub fn classes(root: &Arc<Entity>) -> Vec<Arc<Entity>> {
    collect_by(root, Entity::is_class)
}
