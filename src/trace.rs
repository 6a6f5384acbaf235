//! Progress observation for the heapsort.
//!
//! The sorter core knows nothing about consoles. It reports every mutating
//! step through the [`SortObserver`] trait, and the interactive behavior
//! (trace lines, array snapshots, the blocking "press any key" pause of step
//! mode) lives entirely in [`ConsoleTracer`]. Tests and benchmarks use the
//! zero-cost [`Silent`] observer instead.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// A child node of the subtree currently being worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Child {
    /// Index of the child in the sequence.
    pub index: usize,
    /// Value stored at that index.
    pub value: i32,
}

/// Events emitted by the sorter as the sort progresses.
///
/// Array snapshots borrow the sorter's sequence, so observers that need to
/// keep one must copy it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent<'a> {
    /// A sequence was bound, before any sorting work.
    Initial { seq: &'a [i32] },
    /// Heapify is about to run on the subtree rooted at `index`.
    ///
    /// Emitted once per index during the build phase and once per extraction
    /// (always at the root) after the max has been swapped out. Children
    /// outside the active region are `None`.
    Visit {
        index: usize,
        value: i32,
        left: Option<Child>,
        right: Option<Child>,
    },
    /// Heapify exchanged a root with its larger child.
    ///
    /// `promoted` is the child value that moved up, `demoted` the former
    /// root that moved down.
    Swapped {
        promoted: i32,
        demoted: i32,
        seq: &'a [i32],
    },
    /// After a swap, heapify descends to `index` to re-check the subtree the
    /// demoted value landed in.
    Descend {
        index: usize,
        value: i32,
        left: Option<Child>,
        right: Option<Child>,
    },
    /// One build-phase index or one extraction finished; the sequence is in
    /// a consistent intermediate state.
    StepDone { seq: &'a [i32] },
    /// The build phase completed; the whole sequence is a max heap.
    HeapBuilt { seq: &'a [i32] },
    /// Extraction is about to swap the current max with the element at the
    /// end of the active region.
    ExtractSwap { max: i32, displaced: i32 },
    /// The sort finished; the sequence is in ascending order.
    Sorted { seq: &'a [i32] },
}

/// Receives [`SortEvent`]s from a running sort.
pub trait SortObserver {
    fn notify(&mut self, event: SortEvent<'_>);
}

/// Observer that ignores all events.
///
/// Monomorphization compiles the notification calls away entirely, so a
/// silent sorter pays nothing for the observer seam.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SortObserver for Silent {
    fn notify(&mut self, _event: SortEvent<'_>) {}
}

/// Renders sort progress to a console.
///
/// In step mode every event is rendered and each array-state snapshot blocks
/// on one line of input before the sort continues. Without step mode only
/// the initial array, the built max heap, and the final sorted array are
/// printed.
///
/// The reader and writer are generic so tests can drive the tracer with
/// in-memory buffers; [`ConsoleTracer::stdio`] wires it to the real console.
pub struct ConsoleTracer<R, W> {
    input: R,
    out: W,
    step: bool,
    stopped: bool,
}

impl ConsoleTracer<BufReader<Stdin>, Stdout> {
    /// Tracer attached to the process's stdin and stdout.
    pub fn stdio(step: bool) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), step)
    }
}

impl<R: BufRead, W: Write> ConsoleTracer<R, W> {
    pub fn new(input: R, out: W, step: bool) -> Self {
        ConsoleTracer {
            input,
            out,
            step,
            stopped: false,
        }
    }

    /// Blocks until the user acknowledges with one line of input.
    ///
    /// A zero-byte read means the input closed and no acknowledgment can
    /// ever arrive, so it is an error rather than a free pass.
    fn pause(&mut self) -> io::Result<()> {
        write!(self.out, "\nPress any key to continue: ")?;
        self.out.flush()?;
        let mut ack = String::new();
        if self.input.read_line(&mut ack)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for acknowledgment",
            ));
        }
        writeln!(self.out)
    }

    /// Pause in step mode, blank separator line otherwise.
    fn checkpoint(&mut self) -> io::Result<()> {
        if self.step {
            self.pause()
        } else {
            writeln!(self.out)
        }
    }

    fn render(&mut self, event: SortEvent<'_>) -> io::Result<()> {
        match event {
            SortEvent::Initial { seq } => {
                writeln!(self.out, "\nINITIAL ARRAY: {}", format_array(seq))?;
                self.checkpoint()
            }
            SortEvent::Visit {
                index,
                value,
                left,
                right,
            } if self.step => writeln!(
                self.out,
                "Working on index {} ({}) - Child nodes{}",
                index,
                value,
                children_text(left, right)
            ),
            SortEvent::Swapped {
                promoted,
                demoted,
                seq,
            } if self.step => writeln!(
                self.out,
                "Swapped {} with {}: {}",
                promoted,
                demoted,
                format_array(seq)
            ),
            SortEvent::Descend {
                index,
                value,
                left,
                right,
            } if self.step => writeln!(
                self.out,
                "Check current index {} ({}) childs{}",
                index,
                value,
                children_text(left, right)
            ),
            SortEvent::StepDone { seq } if self.step => {
                writeln!(self.out, "Current array state: {}", format_array(seq))?;
                self.pause()
            }
            SortEvent::HeapBuilt { seq } => {
                writeln!(self.out, "\nMAX HEAP: {}", format_array(seq))?;
                self.checkpoint()
            }
            SortEvent::ExtractSwap { max, displaced } if self.step => {
                writeln!(self.out, "Swapping {} with {}", max, displaced)
            }
            SortEvent::Sorted { seq } => {
                writeln!(self.out, "\nSORTED: {}", format_array(seq))?;
                writeln!(self.out)
            }
            // Per-step detail is suppressed outside of step mode.
            _ => Ok(()),
        }
    }
}

impl<R: BufRead, W: Write> SortObserver for ConsoleTracer<R, W> {
    fn notify(&mut self, event: SortEvent<'_>) {
        if self.stopped {
            return;
        }
        // A console that stopped accepting writes, or an input that closed
        // before an acknowledgment, is not recoverable from here. The trace
        // goes quiet; the sort itself is unaffected.
        if self.render(event).is_err() {
            self.stopped = true;
        }
    }
}

/// Formats a sequence as `[v0 v1 v2 ... vn-1]`.
pub fn format_array(seq: &[i32]) -> String {
    let values: Vec<String> = seq.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(" "))
}

fn children_text(left: Option<Child>, right: Option<Child>) -> String {
    let mut text = String::new();
    if let Some(c) = left {
        text.push_str(&format!(" : Left child index - {} ({})", c.index, c.value));
    }
    if let Some(c) = right {
        text.push_str(&format!(" : Right child index - {} ({})", c.index, c.value));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap_sort::HeapSorter;

    #[test]
    fn test_format_array() {
        assert_eq!(format_array(&[]), "[]");
        assert_eq!(format_array(&[5]), "[5]");
        assert_eq!(format_array(&[7, -8, 5]), "[7 -8 5]");
    }

    #[test]
    fn test_children_text_variants() {
        let left = Some(Child { index: 1, value: 8 });
        let right = Some(Child { index: 2, value: 5 });
        assert_eq!(
            children_text(left, right),
            " : Left child index - 1 (8) : Right child index - 2 (5)"
        );
        assert_eq!(children_text(left, None), " : Left child index - 1 (8)");
        assert_eq!(children_text(None, None), "");
    }

    fn traced_sort(seq: Vec<i32>, step: bool, input: &[u8]) -> String {
        let mut out = Vec::new();
        {
            let tracer = ConsoleTracer::new(input, &mut out, step);
            let mut sorter = HeapSorter::with_observer(seq, tracer);
            sorter.sort();
        }
        String::from_utf8(out).expect("tracer output is valid UTF-8")
    }

    #[test]
    fn test_quiet_mode_prints_only_snapshots() {
        let text = traced_sort(vec![3, 1, 2], false, b"");
        assert!(text.contains("INITIAL ARRAY: [3 1 2]"));
        assert!(text.contains("MAX HEAP: [3 1 2]"));
        assert!(text.contains("SORTED: [1 2 3]"));
        assert!(!text.contains("Working on index"));
        assert!(!text.contains("Press any key"));
    }

    #[test]
    fn test_step_mode_traces_and_pauses() {
        // Plenty of acknowledgment lines for every pause.
        let acks = "\n".repeat(64);
        let text = traced_sort(vec![3, 1, 2], true, acks.as_bytes());
        assert!(text.contains("INITIAL ARRAY: [3 1 2]"));
        assert!(text.contains("Working on index 0 (3)"));
        assert!(text.contains("Current array state:"));
        assert!(text.contains("Swapping 3 with"));
        assert!(text.contains("Press any key to continue:"));
        assert!(text.contains("SORTED: [1 2 3]"));
    }

    #[test]
    fn test_step_mode_records_heapify_swaps() {
        let acks = "\n".repeat(64);
        // Build on [1, 2] visits index 0 and must swap 2 up.
        let text = traced_sort(vec![1, 2], true, acks.as_bytes());
        assert!(text.contains("Swapped 2 with 1: [2 1]"));
        assert!(text.contains("Check current index 1 (1)"));
    }

    #[test]
    fn test_step_mode_stops_when_input_closes() {
        // No acknowledgments available: the first pause hits end of input
        // and the trace must go quiet instead of running free.
        let text = traced_sort(vec![3, 1, 2], true, b"");
        assert!(text.contains("INITIAL ARRAY: [3 1 2]"));
        assert!(text.contains("Press any key to continue:"));
        assert!(!text.contains("MAX HEAP"));
        assert!(!text.contains("SORTED"));
    }

    #[test]
    fn test_empty_sequence_trace() {
        let text = traced_sort(vec![], false, b"");
        assert!(text.contains("INITIAL ARRAY: []"));
        assert!(text.contains("SORTED: []"));
    }
}
