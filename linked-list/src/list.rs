use crate::error::{ListError, Result};
use crate::iter::{Iter, IterMut};
use std::fmt;
use std::ops::{Index, IndexMut};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Single chain link owning one element and the rest of the chain.
pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) next: Link<T>,
}

/// A singly-linked list with a cached element count.
///
/// The chain is owned through `head`: dropping the list releases every node
/// exactly once, and moving the list transfers the whole chain in O(1). No
/// tail pointer is kept, so `back`, `push_back` and `pop_back` walk the
/// chain.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every element; a no-op on an empty list.
    ///
    /// Nodes are released one link at a time, so a long list cannot
    /// overflow the stack on teardown.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// First element, or [`ListError::Empty`] when there is none. O(1).
    pub fn front(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.elem)
            .ok_or(ListError::Empty)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.elem)
            .ok_or(ListError::Empty)
    }

    /// Last element, or [`ListError::Empty`] when there is none.
    ///
    /// Walks the whole chain; no tail pointer is maintained. O(n).
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(&self.node(self.len - 1).elem)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(&mut self.node_mut(self.len - 1).elem)
    }

    /// Element at `index`, or [`ListError::OutOfRange`] for `index >= len()`.
    /// O(n).
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.node(index).elem)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&mut self.node_mut(index).elem)
    }

    /// Index of the first element equal to `value`, scanning from the
    /// front, or `None` when no element matches. O(n).
    pub fn find_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|elem| elem == value)
    }

    /// Cursor over the first element equal to `value`; equals the end
    /// cursor when no element matches. O(n).
    pub fn find(&self, value: &T) -> Iter<'_, T>
    where
        T: PartialEq,
    {
        let mut it = self.iter();
        while let Some(elem) = it.peek() {
            if elem == value {
                break;
            }
            it.next();
        }
        it
    }

    /// Mutable counterpart of [`find`](LinkedList::find).
    pub fn find_mut(&mut self, value: &T) -> IterMut<'_, T>
    where
        T: PartialEq,
    {
        let mut node = self.head.as_deref_mut();
        loop {
            match node {
                Some(n) if n.elem != *value => node = n.next.as_deref_mut(),
                hit => return IterMut { node: hit },
            }
        }
    }

    /// Prepends `value`; it becomes the element at index 0. O(1).
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            elem: value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Appends `value` after walking to the last link. O(n).
    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(ref mut node) = *link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            elem: value,
            next: None,
        }));
        self.len += 1;
    }

    /// Inserts `value` so it becomes the element at `index`, shifting later
    /// elements back by one position. `index == len()` appends; anything
    /// larger is [`ListError::OutOfRange`], checked before any allocation.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let prev = self.node_mut(index - 1);
        prev.next = Some(Box::new(Node {
            elem: value,
            next: prev.next.take(),
        }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the first element, or [`ListError::Empty`].
    /// O(1).
    pub fn pop_front(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(ListError::Empty)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.elem)
    }

    /// Removes and returns the last element, or [`ListError::Empty`].
    /// Walks to the second-to-last node. O(n).
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len <= 1 {
            // Empty or single-node list ends up empty either way.
            return self.pop_front();
        }
        let prev = self.node_mut(self.len - 2);
        let last = prev.next.take().unwrap();
        self.len -= 1;
        Ok(last.elem)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// forward by one position.
    ///
    /// The valid range is `[0, len())`. An empty list has no valid index,
    /// so erasing from one reports [`ListError::OutOfRange`].
    pub fn erase(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.pop_front();
        }
        let prev = self.node_mut(index - 1);
        let mut removed = prev.next.take().unwrap();
        prev.next = removed.next.take();
        self.len -= 1;
        Ok(removed.elem)
    }

    /// Read-only cursor starting at the first element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    /// Mutable cursor starting at the first element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: self.head.as_deref_mut(),
        }
    }

    /// Walks to the node at `index`. Callers check `index < self.len` first.
    fn node(&self, index: usize) -> &Node<T> {
        let mut node = self.head.as_deref().unwrap();
        for _ in 0..index {
            node = node.next.as_deref().unwrap();
        }
        node
    }

    /// Mutable twin of [`node`](LinkedList::node); same caller contract.
    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        let mut node = self.head.as_deref_mut().unwrap();
        for _ in 0..index {
            node = node.next.as_deref_mut().unwrap();
        }
        node
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every element of `iter`, walking to the tail link once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        while let Some(ref mut node) = *tail {
            tail = &mut node.next;
        }
        for elem in iter {
            tail = &mut tail.insert(Box::new(Node { elem, next: None })).next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// Panicking sugar over [`LinkedList::get`].
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    /// Panicking sugar over [`LinkedList::get_mut`].
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}
