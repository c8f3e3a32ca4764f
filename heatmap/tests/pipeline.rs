//! Whole-pipeline checks against the fixture in testdata/.

use std::path::PathBuf;

use heatmap::{
    ChartSettings, DatasetSource, Error, FileSource, Format, OutputSettings,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/sample.json")
}

#[test]
fn file_to_svg() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("map.svg");
    let map = heatmap::run(
        &mut FileSource::new(fixture()),
        &ChartSettings::default(),
        Format::Svg,
        &OutputSettings::default(),
        &out,
    )
    .expect("pipeline should succeed");

    // 45 months over four years.
    assert_eq!(map.cells.len(), 45);
    assert_eq!(map.plot_size, (20.0, 396.0));
    let years: Vec<&str> = map.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(years, vec!["2000"]);

    let svg = std::fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches(r#"class="cell""#).count(), 45);
    assert!(svg.contains(r#"data-year="2001""#));
    assert!(svg.contains(r#"data-month="8""#));
    assert!(!svg.contains(r#"data-month="12""#));
}

#[test]
fn extremes_match_legend_ends() {
    let dataset = FileSource::new(fixture()).load().unwrap();
    let (lo, hi) = dataset.temperature_range();
    assert!((lo - 5.16).abs() < 1e-9, "{lo}");
    assert!((hi - 11.91).abs() < 1e-9, "{hi}");

    let map = heatmap::HeatMap::build(&dataset, &ChartSettings::default()).unwrap();
    let coldest = &map.cells[5];
    let hottest = &map.cells[20];
    assert_eq!(coldest.color, map.legend.bands[0].color);
    assert_eq!(hottest.color, map.legend.bands[10].color);
    assert_eq!(coldest.tooltip.date(), "1998 - June");
}

#[test]
fn other_scheme() {
    let dataset = FileSource::new(fixture()).load().unwrap();
    let mut settings = ChartSettings::default();
    settings.scheme = colorbrewer::Scheme::RdBu;
    settings.classes = 5;
    let map = heatmap::HeatMap::build(&dataset, &settings).unwrap();
    assert_eq!(map.legend.bands.len(), 5);
    assert_eq!(map.legend.bands[0].color.hex(), "#0571b0");
    assert_eq!(map.legend.bands[4].color.hex(), "#ca0020");
}

#[test]
fn bad_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, r#"{"baseTemperature": 8.66, "monthlyVariance": ["#).unwrap();
    let out = dir.path().join("map.html");

    let err = heatmap::run(
        &mut FileSource::new(&input),
        &ChartSettings::default(),
        Format::Html,
        &OutputSettings::default(),
        &out,
    )
    .expect_err("truncated JSON");
    assert!(matches!(err, Error::Json(_)), "{err:?}");
    assert!(!out.exists());
}
