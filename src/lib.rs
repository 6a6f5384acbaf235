//! Interactive heapsort.
//!
//! This crate implements an in-place max-heap heapsort over integer
//! sequences, with progress reporting decoupled behind an observer trait:
//! - **Silent sorting**: [`HeapSorter::new`] plus [`HeapSorter::sort`],
//!   O(n log n), no output.
//! - **Interactive tracing**: [`ConsoleTracer`] renders every build and
//!   extraction step and, in step mode, pauses for acknowledgment after
//!   each one.
//!
//! The binary in `src/main.rs` wires the tracer to a console prompt flow;
//! the criterion benchmark compares the sorter against the standard
//! library's pdqsort.

pub mod heap_sort;
pub mod trace;

pub use heap_sort::{is_sorted, HeapSorter};
pub use trace::{Child, ConsoleTracer, Silent, SortEvent, SortObserver};
