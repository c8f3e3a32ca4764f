//! SVG output.
//!
//! Ids and classes follow the usual heat-map conventions
//! (`#x-axis`, `#y-axis`, `#legend`, `.cell` with `data-*` attributes),
//! so the document can be scripted or styled from outside.

use std::{borrow::Cow, fmt::Write};

use crate::{
    axis::{Axis, Orient},
    chart::HeatMap,
};

/// Distance between a tick mark and its label.
const LABEL_GAP: f64 = 3.0;

/// Escape text for use in XML content or attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render the map as a standalone SVG document.
pub fn to_svg(map: &HeatMap) -> String {
    let mut out = String::new();
    write_svg(&mut out, map).expect("writing to a String is infallible");
    out
}

pub(crate) fn write_svg(out: &mut impl Write, map: &HeatMap) -> std::fmt::Result {
    let (width, height) = map.size();
    let (left, top) = map.plot_origin();
    let (_, plot_height) = map.plot_size;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="10">"#
    )?;

    writeln!(
        out,
        r#"<g class="y-axis" id="y-axis" transform="translate({left},{top})">"#
    )?;
    write_axis(out, &map.y_axis)?;
    writeln!(out, "</g>")?;

    writeln!(
        out,
        r#"<g class="x-axis" id="x-axis" transform="translate({left},{})">"#,
        top + plot_height
    )?;
    write_axis(out, &map.x_axis)?;
    writeln!(out, "</g>")?;

    let (lx, ly) = map.legend_origin;
    writeln!(
        out,
        r#"<g class="legend" id="legend" transform="translate({lx},{ly})">"#
    )?;
    writeln!(out, "<g>")?;
    for band in &map.legend.bands {
        writeln!(
            out,
            r#"<rect x="{}" y="0" width="{}" height="{}" style="fill: {}"/>"#,
            band.x, band.width, map.legend.band_height, band.color
        )?;
    }
    writeln!(out, "</g>")?;
    writeln!(
        out,
        r#"<g transform="translate(0,{})">"#,
        map.legend.band_height
    )?;
    write_axis(out, &map.legend.axis)?;
    writeln!(out, "</g>")?;
    writeln!(out, "</g>")?;

    writeln!(
        out,
        r#"<g class="map" transform="translate({left},{top})">"#
    )?;
    for cell in &map.cells {
        writeln!(
            out,
            r#"<rect class="cell" data-month="{}" data-year="{}" data-temp="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" data-tooltip="{}"><title>{}</title></rect>"#,
            cell.month_index(),
            cell.year,
            cell.temperature,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.color,
            escape(&cell.tooltip.html()),
            escape(&cell.tooltip.text()),
        )?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_axis(out: &mut impl Write, axis: &Axis) -> std::fmt::Result {
    let (r0, r1) = axis.range;
    let outer = axis.outer_tick_size;
    let inner = axis.inner_tick_size;
    for tick in &axis.ticks {
        let label = escape(&tick.label);
        let p = tick.position;
        match axis.orient {
            Orient::Left => writeln!(
                out,
                r#"<g class="tick" transform="translate(0,{p})"><line x2="-{inner}" y2="0" stroke="black"/><text x="-{}" y="0" dy=".32em" text-anchor="end">{label}</text></g>"#,
                inner + LABEL_GAP
            )?,
            Orient::Bottom => writeln!(
                out,
                r#"<g class="tick" transform="translate({p},0)"><line x2="0" y2="{inner}" stroke="black"/><text x="0" y="{}" dy=".71em" text-anchor="middle">{label}</text></g>"#,
                inner + LABEL_GAP
            )?,
        }
    }
    let domain = match axis.orient {
        Orient::Left => format!("M-{outer},{r0}H0V{r1}H-{outer}"),
        Orient::Bottom => format!("M{r0},{outer}V0H{r1}V{outer}"),
    };
    writeln!(
        out,
        r#"<path class="domain" d="{domain}" fill="none" stroke="black"/>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chart::ChartSettings, dataset::tests::sample};

    fn svg() -> String {
        let map = HeatMap::build(&sample(), &ChartSettings::default()).unwrap();
        to_svg(&map)
    }

    #[test]
    fn escapes() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"<a href='x'>"&"</a>"#),
            "&lt;a href=&#39;x&#39;&gt;&quot;&amp;&quot;&lt;/a&gt;"
        );
    }

    #[test]
    fn document_structure() {
        let s = svg();
        assert!(s.starts_with("<svg "));
        assert!(s.trim_end().ends_with("</svg>"));
        assert!(s.contains(r#"width="303" height="540""#));
        for id in ["x-axis", "y-axis", "legend"] {
            assert!(s.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        assert_eq!(s.matches(r#"class="cell""#).count(), 25);
    }

    #[test]
    fn cell_attributes() {
        let s = svg();
        let first = s
            .lines()
            .find(|l| l.starts_with(r#"<rect class="cell""#))
            .expect("should have a cell");
        assert!(first.contains(r#"data-month="0" data-year="1753" data-temp="7.29"#));
        assert!(first.contains(r##"x="0" y="0" width="5" height="33" fill="#"##));
        assert!(s.contains("<title>1753 - January\n7.3\u{2103}\n-1.4\u{2103}</title>"));
        assert!(s.contains("data-tooltip=\"&lt;span class=&#39;date&#39;&gt;1753 - January"));
    }

    #[test]
    fn axis_labels() {
        let s = svg();
        assert!(s.contains(">January</text>"));
        assert!(s.contains(">December</text>"));
        assert!(s.contains(">1760</text>"));
        assert!(s.contains(r#"<path class="domain" d="M-1,0H0V396H-1""#));
    }
}
