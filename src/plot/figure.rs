//! Serializable subset of the Plotly figure schema used by the light chart.

use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub frames: Vec<Frame>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub legendgroup: String,
    pub showlegend: bool,
    pub ids: Vec<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    pub hovertext: Vec<String>,
    pub hovertemplate: String,
    pub textposition: &'static str,
    pub textfont: Font,
    pub marker: Marker,
}

#[derive(Clone, Debug, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub color: String,
    pub size: Vec<f64>,
    pub sizemode: &'static str,
    pub sizeref: f64,
    pub sizemin: f64,
    pub symbol: &'static str,
    pub opacity: f64,
    pub line: MarkerLine,
}

#[derive(Clone, Debug, Serialize)]
pub struct MarkerLine {
    pub width: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub images: Vec<LayoutImage>,
    pub updatemenus: Vec<UpdateMenu>,
    pub sliders: Vec<Slider>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub showgrid: bool,
    pub visible: bool,
    pub zeroline: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct Legend {
    pub title: Title,
    pub itemsizing: &'static str,
    pub tracegroupgap: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct LayoutImage {
    pub source: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub sizex: f64,
    pub sizey: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub sizing: &'static str,
    pub opacity: f64,
    pub layer: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub direction: &'static str,
    pub showactive: bool,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub pad: Pad,
    pub buttons: Vec<Button>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub method: &'static str,
    /// `[target, options]` as passed to `Plotly.animate`.
    pub args: (Value, AnimateOptions),
}

#[derive(Clone, Debug, Serialize)]
pub struct AnimateOptions {
    pub frame: FrameTiming,
    pub mode: &'static str,
    pub fromcurrent: bool,
    pub transition: Transition,
}

impl AnimateOptions {
    pub fn with_duration(duration: u32) -> Self {
        Self {
            frame: FrameTiming {
                duration,
                redraw: false,
            },
            mode: "immediate",
            fromcurrent: true,
            transition: Transition {
                duration,
                easing: "linear",
            },
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FrameTiming {
    pub duration: u32,
    pub redraw: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct Transition {
    pub duration: u32,
    pub easing: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Pad {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Slider {
    pub active: usize,
    pub currentvalue: CurrentValue,
    pub len: f64,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub pad: Pad,
    pub steps: Vec<SliderStep>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CurrentValue {
    pub prefix: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub method: &'static str,
    pub args: (Value, AnimateOptions),
}
