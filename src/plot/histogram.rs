//! Grouped-bar histogram of vehicles per hour, one bar per junction.
//!
//! Rendered as plain text so it works in any terminal and is deterministic
//! (helpful for golden tests). Each hour is a group of adjacent bars, one
//! per junction, each junction drawn with its own glyph. Every non-zero bar
//! carries its exact count on the row just above its top, so bars are as wide
//! as the largest count.

use crate::domain::{HOURS_PER_DAY, JunctionHourlyTable};

const GLYPHS: [char; 6] = ['#', '=', '*', '+', '%', '@'];
const AXIS_LABEL_WIDTH: usize = 4;

/// Render the histogram for one survey day.
pub fn render_histogram(table: &JunctionHourlyTable, date_label: &str, height: usize) -> String {
    let height = height.max(1);
    let mut out = String::new();
    out.push_str(&format!("Histogram of Vehicle Frequency per Hour ({date_label})\n"));

    let max_count = table.values().map(|c| c.max()).max().unwrap_or(0);
    if max_count == 0 {
        out.push_str("No vehicles recorded for this date.\n");
        return out;
    }

    for (i, junction) in table.keys().enumerate() {
        out.push_str(&format!("  {} {}\n", glyph(i), title_case(junction)));
    }
    out.push('\n');

    let bar_width = max_count.to_string().len();
    let bars_width = table.len() * bar_width;
    // Leave at least one blank column between groups and room for "HH".
    let group_width = (bars_width + 1).max(3);

    // (count, height in rows) per junction per hour.
    let bars: Vec<Vec<(u32, usize)>> = table
        .values()
        .map(|counts| {
            counts
                .iter()
                .map(|(_, count)| (count, scale(count, max_count, height)))
                .collect()
        })
        .collect();

    // One extra row on top holds the counts of full-height bars.
    for level in (1..=height + 1).rev() {
        let label = if level == height {
            max_count.to_string()
        } else {
            String::new()
        };
        let mut line = format!("{label:>width$} |", width = AXIS_LABEL_WIDTH);
        for hour in 0..HOURS_PER_DAY {
            for (j, junction_bars) in bars.iter().enumerate() {
                let (count, rows) = junction_bars[hour];
                if rows >= level {
                    line.extend(std::iter::repeat_n(glyph(j), bar_width));
                } else if count > 0 && rows + 1 == level {
                    line.push_str(&format!("{count:>bar_width$}"));
                } else {
                    line.push_str(&" ".repeat(bar_width));
                }
            }
            line.push_str(&" ".repeat(group_width - bars_width));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let indent = " ".repeat(AXIS_LABEL_WIDTH + 1);
    out.push_str(&format!("{indent}+{}\n", "-".repeat(HOURS_PER_DAY * group_width)));

    let mut labels = String::new();
    for hour in 0..HOURS_PER_DAY {
        labels.push_str(&format!("{:<group_width$}", format!("{hour:02}")));
    }
    out.push_str(&format!("{indent} {}\n", labels.trim_end()));
    out.push_str(&format!("{indent} Hours 00:00 to 24:00\n"));

    out
}

fn glyph(idx: usize) -> char {
    GLYPHS[idx % GLYPHS.len()]
}

/// Bar height in rows; any non-zero count gets at least one row.
fn scale(count: u32, max_count: u32, height: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let rows = (f64::from(count) / f64::from(max_count) * height as f64).ceil() as usize;
    rows.clamp(1, height)
}

/// Upper-case the first letter of every alphabetic run ("elm avenue/rabbit road" -> "Elm Avenue/Rabbit Road").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
