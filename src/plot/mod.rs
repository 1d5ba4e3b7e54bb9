pub mod backdrop;
pub mod figure;

use crate::error::{Error, Result};
use crate::sky::catalog::BODY_COLORS;
use crate::sky::frames::{FrameRow, FrameTable};
use backdrop::Backdrop;
use figure::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt::Write;

pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Clone, Debug)]
pub struct Styling {
    pub colors: HashMap<String, String>,
    pub fallback_color: String,
    pub title: String,
    pub legend_title: String,
    pub distance_label: String,
    pub text_color: String,
    /// Delay between animation frames, in ms.
    pub frame_duration: u32,
    /// Share of the largest distance left free left of the smallest one.
    pub pad_below: f64,
    /// Share of the largest distance left free right of it.
    pub pad_above: f64,
    pub y_range: [f64; 2],
    /// Diameter in px of the largest marker.
    pub size_max: f64,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            colors: BODY_COLORS
                .iter()
                .map(|(name, color)| (name.to_string(), color.to_string()))
                .collect(),
            fallback_color: "#9E9E9E".to_string(),
            title: "<b>Aphelion Distance</b>".to_string(),
            legend_title: "Object".to_string(),
            distance_label: "Distance(km)".to_string(),
            text_color: "white".to_string(),
            frame_duration: 500,
            pad_below: 0.06,
            pad_above: 0.04,
            y_range: [-0.2, 0.25],
            size_max: 20.0,
        }
    }
}

impl Styling {
    fn color_for(&self, name: &str) -> String {
        match self.colors.get(name) {
            Some(color) => color.clone(),
            None => {
                log::warn!(
                    "no color configured for {}, using {}",
                    name,
                    self.fallback_color
                );
                self.fallback_color.clone()
            }
        }
    }
}

/// Builds the animated scatter chart for a frame table.
pub fn render(table: &FrameTable, styling: &Styling, backdrop: Option<&Backdrop>) -> Result<Figure> {
    let (lo, hi) = table.distance_range().ok_or(Error::EmptyFrameTable)?;
    let x_range = [lo - hi * styling.pad_below, hi * (1.0 + styling.pad_above)];
    let sizeref = 2.0 * table.max_area() / (styling.size_max * styling.size_max);
    log::debug!(
        "rendering {} frames, x range [{:.0}, {:.0}] km",
        table.frame_count(),
        x_range[0],
        x_range[1]
    );

    let colors: HashMap<&str, String> = table
        .frame(0)
        .unwrap_or_default()
        .iter()
        .map(|row| (row.object.as_str(), styling.color_for(&row.object)))
        .collect();
    let columns = table.columns();
    let traces_for = |rows: &[FrameRow]| -> Vec<Trace> {
        rows.iter()
            .map(|row| {
                let color = colors
                    .get(row.object.as_str())
                    .cloned()
                    .unwrap_or_else(|| styling.fallback_color.clone());
                trace(row, color, sizeref, styling, &columns.frame)
            })
            .collect()
    };

    let frames: Vec<Frame> = table
        .frames()
        .enumerate()
        .map(|(index, rows)| Frame {
            name: index.to_string(),
            data: traces_for(rows),
        })
        .collect();
    let data = frames.first().map(|f| f.data.clone()).unwrap_or_default();

    let steps = frames
        .iter()
        .map(|frame| SliderStep {
            label: frame.name.clone(),
            method: "animate",
            args: (json!([frame.name]), AnimateOptions::with_duration(0)),
        })
        .collect();

    let layout = Layout {
        title: Title {
            text: styling.title.clone(),
        },
        xaxis: Axis {
            range: x_range,
            title: Some(Title {
                text: styling.distance_label.clone(),
            }),
            showgrid: false,
            visible: true,
            zeroline: false,
        },
        yaxis: Axis {
            range: styling.y_range,
            title: None,
            showgrid: false,
            visible: false,
            zeroline: false,
        },
        legend: Legend {
            title: Title {
                text: styling.legend_title.clone(),
            },
            itemsizing: "constant",
            tracegroupgap: 0.0,
        },
        images: backdrop.into_iter().map(background_image).collect(),
        updatemenus: vec![playback_menu()],
        sliders: vec![Slider {
            active: 0,
            currentvalue: CurrentValue {
                prefix: format!("{}=", columns.frame),
            },
            len: 0.9,
            x: 0.1,
            y: 0.0,
            xanchor: "left",
            yanchor: "top",
            pad: Pad {
                r: None,
                t: Some(60.0),
                b: Some(10.0),
            },
            steps,
        }],
    };

    let mut figure = Figure {
        data,
        layout,
        frames,
    };
    figure.set_frame_duration(styling.frame_duration);
    Ok(figure)
}

fn trace(row: &FrameRow, color: String, sizeref: f64, styling: &Styling, frame_column: &str) -> Trace {
    Trace {
        kind: "scatter",
        mode: "markers+text",
        name: row.object.clone(),
        legendgroup: row.object.clone(),
        showlegend: true,
        ids: vec![row.object.clone()],
        x: vec![row.distance],
        y: vec![row.y],
        text: vec![row.text.clone()],
        hovertext: vec![row.object.clone()],
        hovertemplate: format!(
            "<b>%{{hovertext}}</b><br><br>{}={}<br>{}=%{{x}}<extra></extra>",
            frame_column, row.frame, styling.distance_label
        ),
        textposition: "bottom center",
        textfont: Font {
            color: styling.text_color.clone(),
        },
        marker: Marker {
            color,
            size: vec![row.area],
            sizemode: "area",
            sizeref,
            sizemin: 0.0,
            symbol: "circle",
            opacity: 1.0,
            line: MarkerLine { width: 0.0 },
        },
    }
}

fn background_image(backdrop: &Backdrop) -> LayoutImage {
    LayoutImage {
        source: backdrop.data_uri(),
        xref: "paper",
        yref: "paper",
        x: 0.0,
        y: 1.0,
        sizex: 1.0,
        sizey: 1.0,
        xanchor: "left",
        yanchor: "top",
        sizing: "stretch",
        opacity: 0.99,
        layer: "below",
    }
}

fn playback_menu() -> UpdateMenu {
    UpdateMenu {
        kind: "buttons",
        direction: "left",
        showactive: false,
        x: 0.1,
        y: 0.0,
        xanchor: "right",
        yanchor: "top",
        pad: Pad {
            r: Some(10.0),
            t: Some(70.0),
            b: None,
        },
        buttons: vec![
            Button {
                label: "&#9654;",
                method: "animate",
                args: (Value::Null, AnimateOptions::with_duration(500)),
            },
            Button {
                label: "&#9724;",
                method: "animate",
                args: (json!([null]), AnimateOptions::with_duration(0)),
            },
        ],
    }
}

impl Figure {
    /// Sets the delay of the play button between frames.
    pub fn set_frame_duration(&mut self, duration: u32) {
        if let Some(play) = self
            .layout
            .updatemenus
            .first_mut()
            .and_then(|menu| menu.buttons.first_mut())
        {
            play.args.1.frame.duration = duration;
        }
    }

    pub fn frame_duration(&self) -> Option<u32> {
        self.layout
            .updatemenus
            .first()
            .and_then(|menu| menu.buttons.first())
            .map(|play| play.args.1.frame.duration)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JavaScript that draws the figure into the element with `div_id`.
    pub fn plot_script(&self, div_id: &str) -> Result<String> {
        // "</" would end an inline <script> early.
        let figure = self.to_json()?.replace("</", "<\\/");
        let id = serde_json::to_string(div_id)?;
        Ok(format!(
            "(function () {{\n  var figure = {figure};\n  Plotly.newPlot({id}, figure.data, figure.layout, {{responsive: true}})\n    .then(function () {{ return Plotly.addFrames({id}, figure.frames); }});\n}})();\n"
        ))
    }

    pub fn to_html(&self) -> Result<String> {
        let div_id = "light-minutes";
        let mut page = String::new();
        let _ = writeln!(page, "<!DOCTYPE html>");
        let _ = writeln!(page, "<html>\n<head>\n<meta charset=\"utf-8\">");
        let _ = writeln!(page, "<title>Light travel time</title>");
        let _ = writeln!(page, "<script src=\"{}\"></script>", PLOTLY_JS_URL);
        let _ = writeln!(page, "</head>\n<body style=\"margin:0\">");
        let _ = writeln!(
            page,
            "<div id=\"{}\" style=\"width:100vw;height:100vh\"></div>",
            div_id
        );
        let _ = writeln!(page, "<script>\n{}</script>", self.plot_script(div_id)?);
        let _ = writeln!(page, "</body>\n</html>");
        Ok(page)
    }
}
