//! Command implementations.
//!
//! Every command writes to caller-supplied writers so tests can capture
//! output in memory.

use std::io::Write;

use anyhow::{bail, Context, Result};
use console::style;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use unistyle::{apply, check_limits, StyleRegistry, TextMetrics};

use crate::cli::{PreviewArgs, StylesArgs};
use crate::env::StdinReader;

/// Joins `words` with spaces, or reads piped stdin when there are none.
///
/// A trailing line break from stdin is dropped; inner line breaks are kept.
pub fn read_text<S: StdinReader>(words: &[String], stdin: &S) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if stdin.is_terminal() {
        bail!("no text given; pass it as arguments or pipe it on stdin");
    }

    let content = stdin.read_to_string().context("failed to read stdin")?;
    let content = content
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(content.as_str());
    Ok(content.to_string())
}

/// `unistyle styles`
pub fn styles<W: Write>(registry: &StyleRegistry, args: &StylesArgs, out: &mut W) -> Result<()> {
    let summaries = registry.summaries();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(());
    }

    let id_width = summaries.iter().map(|s| s.id.width()).max().unwrap_or(0);
    let name_width = summaries.iter().map(|s| s.name.width()).max().unwrap_or(0);
    for summary in &summaries {
        writeln!(
            out,
            "{}  {}  {}",
            style(pad(summary.id, id_width)).cyan(),
            pad(summary.name, name_width),
            summary.preview
        )?;
    }
    Ok(())
}

/// `unistyle render`: writes the styled text and returns it.
pub fn render<W: Write, E: Write>(
    registry: &StyleRegistry,
    style_id: &str,
    text: &str,
    limits: bool,
    out: &mut W,
    err: &mut E,
) -> Result<String> {
    let output = registry.transform(text, style_id)?;
    writeln!(out, "{}", output)?;

    if limits {
        write_limits(&output, err)?;
    }
    Ok(output)
}

#[derive(Debug, Serialize)]
struct Rendition<'a> {
    id: &'a str,
    output: String,
}

/// `unistyle preview`
pub fn preview<W: Write>(
    registry: &StyleRegistry,
    args: &PreviewArgs,
    text: &str,
    out: &mut W,
) -> Result<()> {
    let renditions: Vec<Rendition<'_>> = registry
        .list()
        .iter()
        .map(|definition| Rendition {
            id: definition.id,
            output: apply(definition, text),
        })
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &renditions)?;
        writeln!(out)?;
        return Ok(());
    }

    let id_width = renditions.iter().map(|r| r.id.width()).max().unwrap_or(0);
    for rendition in &renditions {
        writeln!(
            out,
            "{}  {}",
            style(pad(rendition.id, id_width)).cyan(),
            rendition.output
        )?;
    }
    Ok(())
}

fn write_limits<E: Write>(output: &str, err: &mut E) -> Result<()> {
    let metrics = TextMetrics::measure(output);
    writeln!(
        err,
        "{} {} (code points {}, columns {})",
        style("Length:").bold(),
        metrics.utf16_units,
        metrics.code_points,
        metrics.display_width
    )?;

    let report = check_limits(output);
    let name_width = report.iter().map(|s| s.name.width()).max().unwrap_or(0);
    for status in report {
        let line = format!(
            "  {}  {}/{}",
            pad(status.name, name_width),
            status.count,
            status.limit
        );
        if status.exceeded {
            writeln!(err, "{}  {}", style(line).red(), style("over").red().bold())?;
        } else {
            writeln!(err, "{}", line)?;
        }
    }
    Ok(())
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
