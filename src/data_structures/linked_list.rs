use std::fmt::{self, Debug};
use std::ptr::NonNull;

use crate::{Error, Result};

/// A singly linked list with O(1) operations at both the front and the back.
///
/// Backs the graph's adjacency lists and the reconstructed path of a search.
/// The list owns its nodes through a `Box` chain starting at `head`; `tail`
/// is a raw cursor into that chain kept purely so `push_back` stays O(1).
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

// The tail pointer always aliases a node owned by the head chain, so the
// list is as thread-compatible as a fully owned structure.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns true if the list contains no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends an element at the back of the list in O(1)
    pub fn push_back(&mut self, data: T) {
        let mut node = Box::new(Node { data, next: None });
        let ptr = NonNull::from(node.as_mut());
        match self.tail {
            // SAFETY: tail points to the last node of the chain owned by
            // head; we hold &mut self, so no other reference exists.
            Some(mut tail) => unsafe { tail.as_mut() }.next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(ptr);
        self.len += 1;
    }

    /// Pushes an element at the front of the list in O(1)
    pub fn push_front(&mut self, data: T) {
        let mut node = Box::new(Node {
            data,
            next: self.head.take(),
        });
        if self.tail.is_none() {
            self.tail = Some(NonNull::from(node.as_mut()));
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the front element in O(1)
    pub fn pop_front(&mut self) -> Result<T> {
        let node = self
            .head
            .take()
            .ok_or(Error::EmptyContainer("Linked list"))?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.data)
    }

    /// Returns a reference to the front element without removing it
    pub fn front(&self) -> Result<&T> {
        self.head
            .as_ref()
            .map(|node| &node.data)
            .ok_or(Error::EmptyContainer("Linked list"))
    }

    /// Returns a reference to the element at `index`, walking the chain in O(n)
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns an iterator over the list, starting at the current head.
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time instead of letting the Box chain drop
        // recursively, which would overflow the stack on long lists.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_preserves_insertion_order() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn push_front_prepends() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn mixed_front_and_back_operations() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.pop_front().unwrap(), 1);
        assert_eq!(list.pop_front().unwrap(), 2);

        // Tail must still be valid after draining past the old head
        list.push_back(4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn pop_front_on_empty_fails() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.pop_front(), Err(Error::EmptyContainer("Linked list")));
        assert!(list.front().is_err());
    }

    #[test]
    fn drain_to_empty_and_reuse() {
        let mut list = LinkedList::new();
        list.push_back(1);
        assert_eq!(list.pop_front().unwrap(), 1);
        assert!(list.is_empty());

        // push_back into a drained list must re-seed head, not the stale tail
        list.push_back(2);
        assert_eq!(list.front().unwrap(), &2);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn indexed_access() {
        let list: LinkedList<i32> = (0..5).collect();
        assert_eq!(list.get(0), Some(&0));
        assert_eq!(list.get(4), Some(&4));
        assert_eq!(list.get(5), None);
    }

    #[test]
    fn iteration_is_restartable() {
        let list: LinkedList<i32> = (0..3).collect();
        let first: Vec<_> = list.iter().copied().collect();
        let second: Vec<_> = list.iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn clone_and_equality() {
        let list: LinkedList<i32> = (0..4).collect();
        let copy = list.clone();
        assert_eq!(list, copy);
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.push_back(i);
        }
        drop(list);
    }
}
