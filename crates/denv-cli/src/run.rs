use anyhow::{Context, Result};
use denv_core::{RedactOptions, Redactor, StreamStats, process_stream};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Redact every input in order into a single output.
///
/// Files are separated by one blank line; an error on any file aborts the
/// remaining ones.
pub fn run(
    files: &[PathBuf],
    output: Option<&Path>,
    options: RedactOptions,
) -> Result<StreamStats> {
    if let Some(out_path) = output {
        ensure_not_an_input(files, out_path)?;
    }

    let redactor = Redactor::new(options);
    let mut sink = open_output(output)?;
    let mut total = StreamStats::default();

    if files.is_empty() {
        let stdin = io::stdin();
        total = process_stream(stdin.lock(), &mut sink, &redactor)
            .context("failed to redact standard input")?;
    } else {
        for (i, path) in files.iter().enumerate() {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            let stats = process_stream(BufReader::new(file), &mut sink, &redactor)
                .with_context(|| format!("failed to redact {}", path.display()))?;

            tracing::debug!(
                file = %path.display(),
                lines = stats.lines,
                redacted = stats.redacted,
                dropped = stats.dropped,
                raw = stats.raw,
                "processed file"
            );
            total.merge(stats);

            if i + 1 < files.len() {
                sink.write_all(b"\n").context("failed to write output")?;
            }
        }
    }

    sink.flush().context("failed to write output")?;
    Ok(total)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Refuse to truncate an input by writing the output over it
fn ensure_not_an_input(files: &[PathBuf], output: &Path) -> Result<()> {
    let Ok(out) = output.canonicalize() else {
        return Ok(());
    };

    for path in files {
        if path.canonicalize().is_ok_and(|input| input == out) {
            anyhow::bail!(
                "Output file '{}' is also an input file; refusing to overwrite it.",
                output.display()
            );
        }
    }

    Ok(())
}
