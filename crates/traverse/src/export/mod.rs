//! Text serializers for CAD and GIS tools.
//!
//! Every exporter is a pure function of the coordinate list. Output layouts are
//! fixed so downstream importers can rely on them byte for byte.

mod autocad;
mod csv;
mod dxf;
mod esri;
mod kml;

use crate::error::{Result, TraverseError};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use autocad::autocad_script;
pub use csv::coordinates_csv;
pub use dxf::dxf;
pub use esri::esri_traverse;
pub use kml::kml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Dxf,
    Csv,
    EsriTraverse,
    AutocadScript,
    Kml,
}

impl ExportFormat {
    pub const ALL: [Self; 5] = [
        Self::Dxf,
        Self::Csv,
        Self::EsriTraverse,
        Self::AutocadScript,
        Self::Kml,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dxf => "dxf",
            Self::Csv => "csv",
            Self::EsriTraverse => "esri_traverse",
            Self::AutocadScript => "autocad_script",
            Self::Kml => "kml",
        }
    }

    /// Download file name
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Dxf => "deed_plot.dxf",
            Self::Csv => "coordinates.csv",
            Self::EsriTraverse => "traverse.txt",
            Self::AutocadScript => "plot_script.scr",
            Self::Kml => "deed_plot.kml",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Dxf => "application/dxf",
            Self::Csv => "text/csv",
            Self::EsriTraverse | Self::AutocadScript => "text/plain",
            Self::Kml => "application/vnd.google-earth.kml+xml",
        }
    }

    #[must_use]
    pub fn render(self, points: &[Point]) -> String {
        match self {
            Self::Dxf => dxf(points),
            Self::Csv => coordinates_csv(points),
            Self::EsriTraverse => esri_traverse(points),
            Self::AutocadScript => autocad_script(points),
            Self::Kml => kml(points),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportFormat {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| TraverseError::UnsupportedFormat(s.to_string()))
    }
}

/// All five export payloads of one plot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exports {
    pub dxf: String,
    pub csv: String,
    pub esri_traverse: String,
    pub autocad_script: String,
    pub kml: String,
}

impl Exports {
    #[must_use]
    pub fn generate(points: &[Point]) -> Self {
        Self {
            dxf: dxf(points),
            csv: coordinates_csv(points),
            esri_traverse: esri_traverse(points),
            autocad_script: autocad_script(points),
            kml: kml(points),
        }
    }

    #[must_use]
    pub fn get(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Dxf => &self.dxf,
            ExportFormat::Csv => &self.csv,
            ExportFormat::EsriTraverse => &self.esri_traverse,
            ExportFormat::AutocadScript => &self.autocad_script,
            ExportFormat::Kml => &self.kml,
        }
    }

    /// `(format, payload)` pairs in [`ExportFormat::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ExportFormat, &str)> {
        ExportFormat::ALL
            .into_iter()
            .map(move |format| (format, self.get(format)))
    }
}

/// Render one format by key; unknown keys fail before anything is generated
pub fn export_by_key(points: &[Point], key: &str) -> Result<String> {
    let format: ExportFormat = key.parse()?;
    Ok(format.render(points))
}

/// Coordinate text shared by all exporters: `100.0`, `-12.345`, never `-0.0`
pub(crate) fn coord(value: f64) -> String {
    if value == 0.0 {
        "0.0".to_string()
    } else {
        format!("{value:?}")
    }
}
