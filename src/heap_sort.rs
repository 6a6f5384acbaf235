//! In-place heapsort over a sequence of integers.
//!
//! The sorter builds a max heap bottom-up, then repeatedly swaps the root
//! (the current maximum) to the end of the active region and restores the
//! heap over what remains. Both phases run in O(n log n) with O(1) extra
//! space beyond the O(log n) heapify recursion. Heapsort is not stable.

use crate::trace::{Child, Silent, SortEvent, SortObserver};

/// An in-place max-heap sorter that owns its sequence.
///
/// The active length marks the boundary between the heap region
/// `[0, active_len)` and the sorted tail `[active_len, n)`. It only shrinks
/// during extraction and is reset at the start of every sort and whenever a
/// new sequence is bound.
pub struct HeapSorter<O: SortObserver = Silent> {
    seq: Vec<i32>,
    active_len: usize,
    observer: O,
}

impl HeapSorter {
    /// Sorter with no progress reporting.
    pub fn new(seq: Vec<i32>) -> Self {
        Self::with_observer(seq, Silent)
    }
}

impl<O: SortObserver> HeapSorter<O> {
    /// Binds a sequence and an observer; emits the initial-state event.
    pub fn with_observer(seq: Vec<i32>, observer: O) -> Self {
        let mut sorter = HeapSorter {
            active_len: seq.len(),
            seq,
            observer,
        };
        sorter.observer.notify(SortEvent::Initial { seq: &sorter.seq });
        sorter
    }

    /// Rebinds to a new sequence, resetting the active length.
    ///
    /// No state carries over from a prior sort, so a rebound sorter behaves
    /// exactly like a freshly constructed one.
    pub fn set_array(&mut self, seq: Vec<i32>) {
        self.active_len = seq.len();
        self.seq = seq;
        self.observer.notify(SortEvent::Initial { seq: &self.seq });
    }

    /// Sorts the sequence ascending, in place, and returns it.
    pub fn sort(&mut self) -> &[i32] {
        let n = self.seq.len();
        // A previous sort leaves the active region shrunk; every sort works
        // over the whole sequence again.
        self.active_len = n;

        // Build phase: walk the parent indices backwards so every subtree's
        // children are already heaps when their root is heapified.
        for i in (0..n / 2).rev() {
            self.observer.notify(SortEvent::Visit {
                index: i,
                value: self.seq[i],
                left: self.child(2 * i + 1),
                right: self.child(2 * i + 2),
            });
            self.heapify(i);
            self.observer.notify(SortEvent::StepDone { seq: &self.seq });
        }

        self.observer.notify(SortEvent::HeapBuilt { seq: &self.seq });

        // Extraction phase: the root is the maximum of the active region.
        // Move it to the end, shrink the region so the sorted tail is never
        // touched again, and re-heapify from the root.
        for i in (1..n).rev() {
            self.observer.notify(SortEvent::ExtractSwap {
                max: self.seq[0],
                displaced: self.seq[i],
            });
            self.seq.swap(0, i);
            self.active_len = i;

            self.observer.notify(SortEvent::Visit {
                index: 0,
                value: self.seq[0],
                left: self.child(1),
                right: self.child(2),
            });
            self.heapify(0);
            self.observer.notify(SortEvent::StepDone { seq: &self.seq });
        }

        debug_assert!(is_sorted(&self.seq));
        self.observer.notify(SortEvent::Sorted { seq: &self.seq });
        &self.seq
    }

    /// Restores the max-heap property at subtree root `i`, assuming both
    /// child subtrees are already valid heaps within the active region.
    ///
    /// Ties favor the root: only a strictly greater child displaces it.
    fn heapify(&mut self, i: usize) {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        // The active-length guard both bounds the indices and keeps the
        // sorted tail out of reach during extraction.
        if left < self.active_len && self.seq[left] > self.seq[largest] {
            largest = left;
        }
        if right < self.active_len && self.seq[right] > self.seq[largest] {
            largest = right;
        }

        if largest != i {
            self.seq.swap(i, largest);
            self.observer.notify(SortEvent::Swapped {
                promoted: self.seq[i],
                demoted: self.seq[largest],
                seq: &self.seq,
            });
            self.observer.notify(SortEvent::Descend {
                index: largest,
                value: self.seq[largest],
                left: self.child(2 * largest + 1),
                right: self.child(2 * largest + 2),
            });
            // The demoted value may still violate the heap further down.
            self.heapify(largest);
        }
    }

    fn child(&self, index: usize) -> Option<Child> {
        (index < self.active_len).then(|| Child {
            index,
            value: self.seq[index],
        })
    }

    /// Read access to the sequence in its current state.
    pub fn as_slice(&self) -> &[i32] {
        &self.seq
    }

    /// Consumes the sorter and returns the owned sequence.
    pub fn into_inner(self) -> Vec<i32> {
        self.seq
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
