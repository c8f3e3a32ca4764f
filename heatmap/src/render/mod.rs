//! Output formats for a laid-out [HeatMap].

use std::{path::Path, str::FromStr};

use crate::{chart::HeatMap, Error};

pub mod html;
#[cfg(feature = "png")]
pub mod png;
pub mod raster;
pub mod svg;

/// File format to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Html,
    Png,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Format::Svg),
            "html" | "htm" => Ok(Format::Html),
            "png" => Ok(Format::Png),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

/// Options that only apply to some formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    /// Pixel scale for raster output.
    pub scale: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

/// Write the map to `path` in the given format.
pub fn write(
    map: &HeatMap,
    format: Format,
    settings: &OutputSettings,
    path: &Path,
) -> Result<(), Error> {
    tracing::info!("writing {:?} to {}", format, path.display());
    match format {
        Format::Svg => std::fs::write(path, svg::to_svg(map))?,
        Format::Html => std::fs::write(path, html::to_html(map))?,
        #[cfg(feature = "png")]
        Format::Png => png::save(map, settings.scale, path)?,
        #[cfg(not(feature = "png"))]
        Format::Png => {
            let _ = settings;
            return Err(Error::Png("built without the png feature".to_owned()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{chart::ChartSettings, dataset::tests::sample};

    #[test]
    fn format_names() {
        assert_eq!("SVG".parse::<Format>().unwrap(), Format::Svg);
        assert_eq!("htm".parse::<Format>().unwrap(), Format::Html);
        let err = "gif".parse::<Format>().expect_err("not supported");
        assert!(matches!(err, Error::UnknownFormat(s) if s == "gif"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(&PathBuf::from("out/map.png")), Some(Format::Png));
        assert_eq!(Format::from_path(&PathBuf::from("index.html")), Some(Format::Html));
        assert_eq!(Format::from_path(&PathBuf::from("map")), None);
        assert_eq!(Format::from_path(&PathBuf::from("map.txt")), None);
    }

    #[test]
    fn writes_files() {
        let map = HeatMap::build(&sample(), &ChartSettings::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        for (format, name) in [(Format::Svg, "map.svg"), (Format::Html, "map.html")] {
            let path = dir.path().join(name);
            write(&map, format, &OutputSettings::default(), &path).expect("should write");
            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains(r#"id="legend""#), "{name}");
        }
    }
}
