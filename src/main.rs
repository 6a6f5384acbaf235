//! Interactive heapsort console application.
//!
//! Prompts for an array (a built-in default or values typed one by one) and
//! whether to enable stepping, then sorts it while tracing progress. In step
//! mode the sort pauses after every mutating step and waits for a line of
//! input; otherwise only the initial array, the built max heap, and the
//! sorted result are printed.

use std::io::{self, Write};
use std::str::FromStr;

use heapsorter::{ConsoleTracer, HeapSorter};

/// Default array offered at startup, a shuffle of 0..15.
const DEFAULT_ARRAY: [i32; 15] = [7, 8, 5, 10, 3, 12, 1, 14, 0, 13, 2, 11, 4, 9, 6];

fn main() -> io::Result<()> {
    let answer = prompt_line("Use default array with value 0 - 14? (type y to use): ")?;
    let arr = if is_yes(&answer) {
        DEFAULT_ARRAY.to_vec()
    } else {
        read_array()?
    };

    let answer = prompt_line("\nEnable stepping? (type y to enable): ")?;
    let step = is_yes(&answer);

    let mut sorter = HeapSorter::with_observer(arr, ConsoleTracer::stdio(step));
    sorter.sort();

    Ok(())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y' | 'Y'))
}

/// Prints a prompt and reads one trimmed line from stdin.
fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for one value and parses it.
///
/// Malformed input is an `InvalidData` error that unwinds through `main`;
/// there is no retry.
fn prompt_parse<T>(prompt: &str) -> io::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let line = prompt_line(prompt)?;
    line.parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid number {line:?}: {e}"),
        )
    })
}

/// Reads an array length followed by one integer per index.
fn read_array() -> io::Result<Vec<i32>> {
    let len: usize = prompt_parse("Enter the number of length of array: ")?;
    println!();

    let mut arr = Vec::with_capacity(len);
    for i in 0..len {
        arr.push(prompt_parse(&format!("Number on index {i}: "))?);
    }
    Ok(arr)
}
