use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl PageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A3 => "A3",
            PageSize::A4 => "A4",
            PageSize::A5 => "A5",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    In,
    Mm,
    Cm,
}

/// A physical length such as `0.75in`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn inches(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::In,
        }
    }

    pub fn millimeters(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Mm,
        }
    }

    pub fn centimeters(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Cm,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            LengthUnit::In => "in",
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
        };
        write!(f, "{}{}", self.value, unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Margins {
    pub fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}

/// Page geometry and text encoding handed to the rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub page_size: PageSize,
    pub margins: Margins,
    pub encoding: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: Margins::uniform(Length::inches(0.75)),
            encoding: "UTF-8".to_string(),
        }
    }
}

/// Visual style of the report template. Applied uniformly regardless of
/// content length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStyle {
    pub title: String,
    pub font_family: String,
    pub line_height: f64,
    pub text_color: String,
    pub title_color: String,
    pub section_color: String,
    pub subsection_color: String,
    pub section_spacing: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            title: "Financial Report".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            line_height: 1.6,
            text_color: "#333".to_string(),
            title_color: "#2c3e50".to_string(),
            section_color: "#34495e".to_string(),
            subsection_color: "#2980b9".to_string(),
            section_spacing: "20px".to_string(),
        }
    }
}
