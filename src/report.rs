// src/report.rs

//! Console output of the runner.
//!
//! The relay format is fixed: per sample, a banner line
//! `---------- <name> ----------`, the captured stdout followed by a newline,
//! then the captured stderr followed by a newline. Both streams are written
//! verbatim, so a program that ends its output with `\n` produces a blank
//! line after it.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::exec::Invocation;
use crate::runner::RunRecord;
use crate::samples::Sample;

const BANNER_RULE: &str = "----------";

/// Banner line preceding a sample's relayed output (no trailing newline).
pub fn banner(name: &str) -> String {
    format!("{BANNER_RULE} {name} {BANNER_RULE}")
}

/// Relay one invocation under its banner.
pub fn write_section<W: Write>(out: &mut W, sample: &Sample, invocation: &Invocation) -> io::Result<()> {
    writeln!(out, "{}", banner(&sample.name))?;
    writeln!(out, "{}", invocation.stdout)?;
    writeln!(out, "{}", invocation.stderr)?;
    out.flush()
}

/// Listing printed by `--dry-run`.
pub fn write_dry_run<W: Write>(
    out: &mut W,
    program: &Path,
    samples_dir: &Path,
    samples: &[Sample],
) -> io::Result<()> {
    writeln!(out, "samplerun dry-run")?;
    writeln!(out, "  program = {}", program.display())?;
    writeln!(out, "  samples_dir = {}", samples_dir.display())?;
    writeln!(out)?;
    writeln!(out, "samples ({}):", samples.len())?;
    for sample in samples {
        writeln!(out, "  {}", sample.path.display())?;
    }
    out.flush()
}

/// Timing summary printed by `--timings`.
pub fn write_timings<W: Write>(out: &mut W, records: &[RunRecord]) -> io::Result<()> {
    let total: Duration = records.iter().map(|r| r.elapsed).sum();

    writeln!(out, "timings ({} samples):", records.len())?;
    for record in records {
        writeln!(out, "  {}: {} ms", record.sample.name, format_ms(record.elapsed))?;
    }
    writeln!(out, "  total: {} ms", format_ms(total))?;
    out.flush()
}

fn format_ms(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::exec::ExitState;

    fn sample(name: &str) -> Sample {
        Sample {
            path: PathBuf::from("samples").join(name),
            name: name.to_string(),
        }
    }

    #[test]
    fn banner_has_ten_dashes_each_side() {
        assert_eq!(banner("a.txt"), "---------- a.txt ----------");
    }

    #[test]
    fn section_relays_stdout_then_stderr_even_when_empty() {
        let mut out = Vec::new();
        let inv = Invocation::new("OK", "", ExitState::Success);
        write_section(&mut out, &sample("a.txt"), &inv).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "---------- a.txt ----------\nOK\n\n");
    }

    #[test]
    fn section_keeps_program_newlines_verbatim() {
        let mut out = Vec::new();
        let inv = Invocation::new("1\n2\n", "warn\n", ExitState::Failed(70));
        write_section(&mut out, &sample("b.lox"), &inv).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "---------- b.lox ----------\n1\n2\n\nwarn\n\n"
        );
    }

    #[test]
    fn timings_list_each_sample_and_total() {
        let records = vec![
            RunRecord {
                sample: sample("a.lox"),
                exit: ExitState::Success,
                elapsed: Duration::from_millis(2),
            },
            RunRecord {
                sample: sample("b.lox"),
                exit: ExitState::Success,
                elapsed: Duration::from_micros(1500),
            },
        ];
        let mut out = Vec::new();
        write_timings(&mut out, &records).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "timings (2 samples):\n  a.lox: 2.000 ms\n  b.lox: 1.500 ms\n  total: 3.500 ms\n"
        );
    }

    #[test]
    fn dry_run_lists_paths() {
        let mut out = Vec::new();
        write_dry_run(
            &mut out,
            Path::new("./mkv.out"),
            Path::new("samples"),
            &[sample("a.lox")],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("program = ./mkv.out"));
        assert!(text.contains("samples (1):"));
        assert!(text.ends_with("  samples/a.lox\n"));
    }
}
