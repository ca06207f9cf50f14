use crate::list::{LinkedList, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

/// Read-only forward cursor over a list's chain.
///
/// A cursor over no node is the end sentinel; [`Iter::default`] builds it
/// without any list. Advancing past the end keeps yielding `None` rather
/// than walking off the chain.
pub struct Iter<'a, T> {
    pub(crate) node: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Current element without advancing; `None` at the end sentinel.
    pub fn peek(&self) -> Option<&'a T> {
        self.node.map(|node| &node.elem)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            self.node = node.next.as_deref();
            &node.elem
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// Unconditionally Copy: the cursor is one shared reference, whatever T is.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Iter<'_, T> {}

impl<T> Default for Iter<'_, T> {
    /// The universal end sentinel, tied to no particular list.
    fn default() -> Self {
        Iter { node: None }
    }
}

/// Cursors are equal when they sit on the same node, or both at the end;
/// element values never enter into it.
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(*self).finish()
    }
}

/// Mutable forward cursor over a list's chain.
pub struct IterMut<'a, T> {
    pub(crate) node: Option<&'a mut Node<T>>,
}

impl<T> IterMut<'_, T> {
    /// Current element without advancing; `None` at the end sentinel.
    pub fn peek(&self) -> Option<&T> {
        self.node.as_deref().map(|node| &node.elem)
    }

    /// Mutable access to the current element without advancing.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.node.as_deref_mut().map(|node| &mut node.elem)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.node.take().map(|node| {
            self.node = node.next.as_deref_mut();
            &mut node.elem
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Default for IterMut<'_, T> {
    /// The universal end sentinel, tied to no particular list.
    fn default() -> Self {
        IterMut { node: None }
    }
}

/// Same node-identity equality as [`Iter`].
impl<T> PartialEq for IterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => ptr::eq(&**a, &**b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = Iter {
            node: self.node.as_deref(),
        };
        f.debug_list().entries(rest).finish()
    }
}

/// Consuming iterator draining the list front to back.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
