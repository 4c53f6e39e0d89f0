use crate::splay_tree::tree::Tree;
use std::mem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub struct Node<T> {
    pub value: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Tree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Lifts the child on `side` into this node's place. Does nothing if that child is absent.
    pub fn rotate_up(&mut self, side: Side) {
        match side {
            Side::Left => self.rotate_right(),
            Side::Right => self.rotate_left(),
        }
    }

    pub fn rotate_left(&mut self) {
        if let Some(mut child) = self.right.take() {
            self.right = child.left.take();
            mem::swap(&mut *child, self);
            self.left = Some(child);
        }
    }

    pub fn rotate_right(&mut self) {
        if let Some(mut child) = self.left.take() {
            self.left = child.right.take();
            mem::swap(&mut *child, self);
            self.right = Some(child);
        }
    }
}
