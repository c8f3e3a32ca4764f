//! A standalone HTML page around the SVG, with a hover tooltip.

use std::fmt::Write;

use super::svg::{escape, write_svg};
use crate::chart::HeatMap;

const STYLE: &str = r#"
body { font-family: sans-serif; text-align: center; }
#graphContainer { display: inline-block; }
.cell:hover { stroke: black; stroke-width: 1; }
#tooltip {
  position: absolute; pointer-events: none; visibility: hidden;
  padding: 6px 10px; border-radius: 4px;
  background: rgba(0, 0, 0, 0.8); color: white; font-size: 12px; line-height: 1.4;
}
"#;

// Shows the hovered cell's tooltip markup just above the pointer.
const SCRIPT: &str = r#"
(function () {
  var tip = document.getElementById('tooltip');
  document.querySelectorAll('#graphContainer .cell').forEach(function (cell) {
    cell.addEventListener('mouseover', function (e) {
      tip.innerHTML = cell.getAttribute('data-tooltip');
      tip.setAttribute('data-year', cell.getAttribute('data-year'));
      tip.style.left = (e.pageX - tip.offsetWidth / 2) + 'px';
      tip.style.top = (e.pageY - tip.offsetHeight - 10) + 'px';
      tip.style.visibility = 'visible';
    });
    cell.addEventListener('mouseout', function () {
      tip.style.visibility = 'hidden';
    });
  });
})();
"#;

/// Render the map as an HTML document.
pub fn to_html(map: &HeatMap) -> String {
    let mut out = String::new();
    write_html(&mut out, map).expect("writing to a String is infallible");
    out
}

fn write_html(out: &mut impl Write, map: &HeatMap) -> std::fmt::Result {
    let title = escape(&map.title);
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta charset="utf-8">"#)?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"<h1 id="title">{title}</h1>"#)?;
    writeln!(
        out,
        r#"<h3 id="description">{}</h3>"#,
        escape(&map.description)
    )?;
    writeln!(out, r#"<div id="graphContainer">"#)?;
    write_svg(out, map)?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div id="tooltip" class="d3-tip"></div>"#)?;
    writeln!(out, "<script>{SCRIPT}</script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chart::ChartSettings, dataset::tests::sample};

    #[test]
    fn page() {
        let map = HeatMap::build(&sample(), &ChartSettings::default()).unwrap();
        let html = to_html(&map);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(
            r#"<h1 id="title">Monthly Global Land-Surface Temperature</h1>"#
        ));
        assert!(html.contains(
            "<h3 id=\"description\">1753 - 1760: base temperature 8.66\u{2103}</h3>"
        ));
        assert!(html.contains(r#"<div id="graphContainer">"#));
        assert!(html.contains(r#"<div id="tooltip""#));
        assert!(html.contains("<svg "));
        assert!(html.contains("addEventListener('mouseover'"));
        assert!(html.contains("tip.innerHTML = cell.getAttribute('data-tooltip');"));
        assert!(html.contains("tip.setAttribute('data-year', cell.getAttribute('data-year'));"));
        assert!(html.contains("addEventListener('mouseout'"));
    }
}
