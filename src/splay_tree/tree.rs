use crate::splay_tree::node::{Node, Side};
use tracing::trace;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn is_equivalent<T, F>(a: &T, b: &T, less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    !less(a, b) && !less(b, a)
}

fn search_side<T, F>(target: &T, value: &T, less: &F) -> Option<Side>
where
    F: Fn(&T, &T) -> bool,
{
    if less(target, value) {
        Some(Side::Left)
    } else if less(value, target) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Descends from the root following `locate` until it returns `None` or the requested child is
/// absent, then rotates the node where the descent stopped up to the root.
///
/// The nodes on the root path are detached and kept on a stack for the duration of the call. The
/// accessed node is then lifted two levels at a time starting from the bottom (zig-zig when it and
/// its parent are children on the same side, zig-zag otherwise), finishing with a single zig if it
/// ends up directly below the root.
pub fn splay_by<T, L>(tree: &mut Tree<T>, mut locate: L)
where
    L: FnMut(&T) -> Option<Side>,
{
    let mut curr = match tree.take() {
        Some(node) => node,
        None => return,
    };

    let mut path: Vec<(Box<Node<T>>, Side)> = Vec::new();
    loop {
        let side = match locate(&curr.value) {
            Some(side) => side,
            None => break,
        };
        let child = match curr.child_mut(side).take() {
            Some(child) => child,
            None => break,
        };
        path.push((curr, side));
        curr = child;
    }

    let depth = path.len();
    while let Some((mut parent, parent_side)) = path.pop() {
        *parent.child_mut(parent_side) = Some(curr);
        match path.pop() {
            Some((mut grandparent, grandparent_side)) => {
                if parent_side == grandparent_side {
                    // zig-zig
                    *grandparent.child_mut(grandparent_side) = Some(parent);
                    grandparent.rotate_up(grandparent_side);
                    grandparent.rotate_up(grandparent_side);
                } else {
                    // zig-zag
                    parent.rotate_up(parent_side);
                    *grandparent.child_mut(grandparent_side) = Some(parent);
                    grandparent.rotate_up(grandparent_side);
                }
                curr = grandparent;
            },
            None => {
                // zig
                parent.rotate_up(parent_side);
                curr = parent;
            },
        }
    }

    trace!(depth, "splayed node to root");
    *tree = Some(curr);
}

pub fn splay<T, F>(tree: &mut Tree<T>, target: &T, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    splay_by(tree, |value| search_side(target, value, less));
}

pub fn insert<T, F>(tree: &mut Tree<T>, value: T, less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    splay(tree, &value, less);
    let mut root = match tree.take() {
        Some(root) => root,
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    let mut new_node = Node::new(value);
    if less(&new_node.value, &root.value) {
        new_node.left = root.left.take();
        new_node.right = Some(root);
    } else if less(&root.value, &new_node.value) {
        new_node.right = root.right.take();
        new_node.left = Some(root);
    } else {
        *tree = Some(root);
        return false;
    }

    trace!("inserted new root");
    *tree = Some(Box::new(new_node));
    true
}

pub fn remove<T, F>(tree: &mut Tree<T>, target: &T, less: &F) -> Option<T>
where
    F: Fn(&T, &T) -> bool,
{
    if !contains(tree, target, less) {
        return None;
    }

    let Node { value, left, right } = *tree.take()?;
    *tree = match left {
        Some(left_child) => {
            let mut left_tree = Some(left_child);
            splay_by(&mut left_tree, |_| Some(Side::Right));
            if let Some(ref mut max_node) = left_tree {
                max_node.right = right;
            }
            left_tree
        },
        None => right,
    };

    trace!("removed root");
    Some(value)
}

pub fn contains<T, F>(tree: &mut Tree<T>, target: &T, less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    splay(tree, target, less);
    tree.as_ref()
        .map_or(false, |root| is_equivalent(target, &root.value, less))
}

pub fn ceil<'a, T, F>(tree: &'a Tree<T>, target: &T, less: &F) -> Option<&'a T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match search_side(target, &node.value, less) {
            Some(Side::Left) => {
                ret = Some(&node.value);
                curr = &node.left;
            },
            Some(Side::Right) => curr = &node.right,
            None => return Some(&node.value),
        }
    }
    ret
}

pub fn floor<'a, T, F>(tree: &'a Tree<T>, target: &T, less: &F) -> Option<&'a T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match search_side(target, &node.value, less) {
            Some(Side::Left) => curr = &node.left,
            Some(Side::Right) => {
                ret = Some(&node.value);
                curr = &node.right;
            },
            None => return Some(&node.value),
        }
    }
    ret
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Empties the tree without recursing on its depth.
pub fn deallocate<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
