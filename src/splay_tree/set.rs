use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

fn natural_less<T>(a: &T, b: &T) -> bool
where
    T: Ord,
{
    a < b
}

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed elements are quick to access again. After each insertion, removal, or lookup, the
/// accessed element (or the last element visited while looking for it) is "splayed" to the root
/// of the tree. Operations take amortized logarithmic time.
///
/// Elements are ordered by a `less` predicate supplied at construction time. Two elements are
/// considered the same element of the set when neither is less than the other. The predicate
/// must be a strict weak ordering; otherwise the shape of the tree is unspecified.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.insert("d");
/// set.insert("b");
/// set.insert("a");
/// set.insert("c");
///
/// assert_eq!(set.len(), 4);
/// assert!(set.remove(&"b"));
/// assert!(!set.contains(&"b"));
/// assert_eq!(set.iter().collect::<Vec<&&str>>(), vec![&"a", &"c", &"d"]);
/// ```
pub struct SplaySet<T, F = fn(&T, &T) -> bool> {
    tree: tree::Tree<T>,
    len: usize,
    less: F,
}

impl<T> SplaySet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SplaySet<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet {
            tree: None,
            len: 0,
            less: natural_less::<T>,
        }
    }
}

impl<T, F> SplaySet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Constructs a new, empty `SplaySet<T, F>` ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::with_less(|a: &u32, b: &u32| a > b);
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &1]);
    /// ```
    pub fn with_less(less: F) -> Self {
        SplaySet {
            tree: None,
            len: 0,
            less,
        }
    }

    /// Inserts a value into the set and splays it to the root. Returns `true` if the value was
    /// not already present. If an equivalent value is already present, the stored value is kept
    /// and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let SplaySet {
            ref mut tree,
            ref mut len,
            ref less,
        } = self;
        let inserted = tree::insert(tree, value, less);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes a value from the set. Returns `true` if the value was present. The tree is splayed
    /// even if the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns the stored value equivalent to it, or `None` if
    /// no such value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::with_less(|a: &(u32, char), b: &(u32, char)| a.0 < b.0);
    /// set.insert((1, 'a'));
    /// assert_eq!(set.take(&(1, 'z')), Some((1, 'a')));
    /// assert_eq!(set.take(&(1, 'z')), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let SplaySet {
            ref mut tree,
            ref mut len,
            ref less,
        } = self;
        tree::remove(tree, value, less).map(|value| {
            *len -= 1;
            value
        })
    }

    /// Checks if a value exists in the set. Unlike most lookups, `contains` restructures the tree:
    /// the value, or the last value visited while looking for it, is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn contains(&mut self, value: &T) -> bool {
        tree::contains(&mut self.tree, value, &self.less)
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns `None`
    /// if such a value does not exist. Note that `floor` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        tree::floor(&self.tree, value, &self.less)
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist. Note that `ceil` does not splay the tree in order to
    /// use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        tree::ceil(&self.tree, value, &self.less)
    }
}

impl<T, F> SplaySet<T, F> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::deallocate(&mut self.tree);
        self.len = 0;
    }

    /// Returns the value at the root of the tree, which is the value most recently splayed. Returns
    /// `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.root(), Some(&3));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.value)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty. Note that `min`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty. Note that `max`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal
    /// and does not restructure the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<T> {
        SplaySetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, F> Drop for SplaySet<T, F> {
    fn drop(&mut self) {
        tree::deallocate(&mut self.tree);
    }
}

impl<T, F> IntoIterator for SplaySet<T, F> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, F> IntoIterator for &'a SplaySet<T, F>
where
    T: 'a,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T, F>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct SplaySetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Drop for SplaySetIntoIter<T> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

/// An iterator for `SplaySet<T, F>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Default for SplaySet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

impl<T, F> Extend<T> for SplaySet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, F> fmt::Debug for SplaySet<T, F>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, F, G> PartialEq<SplaySet<T, G>> for SplaySet<T, F>
where
    T: PartialEq,
{
    fn eq(&self, other: &SplaySet<T, G>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, F> Eq for SplaySet<T, F> where T: Eq {}

impl<T, F> Serialize for SplaySet<T, F>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct SplaySetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for SplaySetVisitor<T>
where
    T: Ord + Deserialize<'de>,
{
    type Value = SplaySet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = SplaySet::new();
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for SplaySet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SplaySetVisitor {
            marker: PhantomData,
        })
    }
}
