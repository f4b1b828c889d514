//! A binary min-heap stored in a contiguous `Vec`.
//!
//! The vector is read as a complete binary tree: the element at index `i` has children at
//! `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`. Every element is less than or equal
//! to its children so the minimum always sits at index 0.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `heapify`  | O(n)       |
//! | `enqueue`  | O(log n)   |
//! | `dequeue`  | O(log n)   |
//! | `peek`     | O(1)       |
//!
//! # Examples
//!
//! ```
//! use dsperf::heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.heapify(&[10, 15, 20]);
//!
//! heap.enqueue(5);
//! assert_eq!(heap.peek(), Some(&5));
//!
//! assert_eq!(heap.dequeue(), Some(5));
//! assert_eq!(heap.dequeue(), Some(10));
//! assert_eq!(heap.dequeue(), Some(15));
//! assert_eq!(heap.dequeue(), Some(20));
//! assert_eq!(heap.dequeue(), None);
//! ```

use tracing::trace;

/// A binary min-heap. Equal elements come out in no particular order.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Whether every element of `items` is greater than or equal to its parent, reading the slice
/// as a complete binary tree.
///
/// ```
/// use dsperf::heap::is_min_heap;
///
/// assert!(is_min_heap(&[1, 2, 3, 4]));
/// assert!(!is_min_heap(&[2, 1]));
/// assert!(is_min_heap::<i32>(&[]));
/// ```
pub fn is_min_heap<T: Ord>(items: &[T]) -> bool {
    (1..items.len()).all(|i| items[parent(i)] <= items[i])
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The smallest element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The backing storage in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Replaces the contents of the heap with a copy of `items` and rearranges them into heap
    /// order.
    ///
    /// This sifts down every internal node from the last one back to the root. Most of those
    /// nodes are near the bottom and stop after a step or two so the whole pass is O(n), unlike
    /// enqueueing the elements one at a time.
    pub fn heapify(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.data.clear();
        self.data.extend_from_slice(items);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        trace!(len = self.data.len(), "heapify");
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Adds an element and restores heap order by sifting it up from the end.
    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty.
    ///
    /// The last element takes the root's place and is sifted down.
    pub fn dequeue(&mut self) -> Option<T> {
        match self.data.len() {
            0 => None,
            1 => self.data.pop(),
            _ => {
                let root = self.data.swap_remove(0);
                self.sift_down(0);
                Some(root)
            }
        }
    }

    /// Moves the element at `index` towards the root while it is smaller than its parent.
    /// Indices past the end are ignored.
    pub fn sift_up(&mut self, mut index: usize) {
        if index >= self.data.len() {
            return;
        }
        while index > 0 {
            let parent = parent(index);
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` towards the leaves while one of its children is smaller,
    /// always swapping with the smaller child. Indices past the end are ignored.
    pub fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        if index >= len {
            return;
        }
        loop {
            let left = left_child(index);
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }

    /// Dequeues everything, returning the elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.dequeue() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Takes ownership of the vector and heapifies it in place.
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}
