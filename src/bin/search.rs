//! Load integers from a file, sort them, save the sorted dump, and report
//! where each requested value occurs.
//!
//! Usage: cargo run --bin search -- <input> [--output sorted_data.csv] <value>...

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use linkage::IndexedList;
use linkage::io;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Sorted position search over a file of integers")]
struct Args {
    /// File of whitespace-separated integers.
    input: PathBuf,

    /// Where to write the sorted values.
    #[arg(short, long, default_value = "sorted_data.csv")]
    output: PathBuf,

    /// Values to look up.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("linkage=info".parse()?))
        .init();

    let args = Args::parse();

    let indexed = load_sorted(&args.input, &args.output)?;
    println!("Sorted: {}", indexed.list());

    for value in args.values {
        let Some(first) = indexed.first_occurrence(value) else {
            println!("{}: not found", value);
            continue;
        };
        let last = indexed.last_occurrence(value);
        let positions = indexed.all_positions(value);
        println!(
            "{}: first {}, last {:?}, {} occurrence(s) at {:?}",
            value,
            first,
            last,
            positions.len(),
            positions.as_slice(),
        );
    }
    return Ok(());
}

/// Load and sort `input`, saving the sorted values to `output`.
///
/// A load failure is reported and yields an empty list, and `output` is left
/// untouched so an earlier dump is not truncated.
fn load_sorted(input: &Path, output: &Path) -> linkage::Result<IndexedList> {
    let (list, err) = io::load_or_empty(input);
    let mut indexed = IndexedList::from_list(list);
    if let Some(err) = err {
        eprintln!("{}", err);
        return Ok(indexed);
    }

    indexed.sort_and_save(output)?;
    tracing::info!(count = indexed.len(), output = %output.display(), "sorted data saved");
    return Ok(indexed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sorted_data.csv");
        std::fs::write(&output, "1\n2\n").unwrap();

        let indexed = load_sorted(&dir.path().join("missing.txt"), &output).unwrap();
        assert!(indexed.is_empty());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "1\n2\n");
    }

    #[test]
    fn loaded_input_is_sorted_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        let output = dir.path().join("sorted_data.csv");
        std::fs::write(&input, "3 1\n2\n").unwrap();

        let indexed = load_sorted(&input, &output).unwrap();
        assert_eq!(indexed.list().to_vec(), vec![1, 2, 3]);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "1\n2\n3\n");
    }
}
