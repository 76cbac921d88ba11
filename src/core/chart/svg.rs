use std::fmt::Write;

use super::geometry::{Axis, Chart, DayRow};

const STYLE: &str = "\
.LegendLine { fill: transparent; stroke: black; stroke-width: 1; }
.HeaderText { font: bold 18px sans-serif; }
.TickText { font: 12px sans-serif; }";

/// Compact number: at most three decimals, no trailing zeros.
fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn write_axis(out: &mut String, axis: &Axis) {
    let mut d = format!(
        "M {} {} h {}",
        num(axis.x_start),
        num(axis.y),
        num(axis.width)
    );
    for t in &axis.ticks {
        let _ = write!(d, " M {} {} V {}", num(t.x), num(t.y_top), num(t.y_bottom));
    }

    let _ = writeln!(out, r#"  <path class="LegendLine" d="{d}"/>"#);

    for t in &axis.ticks {
        let _ = writeln!(
            out,
            r#"  <text class="TickText" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            num(t.x),
            num(t.label_y),
            escape(&t.label)
        );
    }
}

fn write_row(out: &mut String, row: &DayRow) {
    let _ = writeln!(out, r#" <g id="day-{}">"#, row.date.format("%Y-%m-%d"));

    let _ = writeln!(
        out,
        r#"  <text class="HeaderText" x="{}" y="{}" text-anchor="middle">{}</text>"#,
        num(row.header.x),
        num(row.header.y),
        escape(&row.header.text)
    );

    for r in &row.bars {
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(r.x),
            num(r.y),
            num(r.width),
            num(r.height),
            r.fill
        );
    }

    write_axis(out, &row.axis);
    out.push_str(" </g>\n");
}

/// Serialize a laid out chart into a standalone SVG document.
pub fn render_svg(chart: &Chart) -> String {
    let (x, y, w, h) = chart.view_box;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        num(x),
        num(y),
        num(w),
        num(h)
    );
    let _ = writeln!(out, " <style>\n{STYLE}\n </style>");

    for row in &chart.rows {
        write_row(&mut out, row);
    }

    out.push_str("</svg>\n");
    out
}
