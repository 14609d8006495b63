//! Plotly figure builders.
//!
//! Figures are built server side as plain JSON (`{ "data": [...], "layout": {...} }`)
//! and handed to `Plotly.react` unchanged by the page script.

use censusboard_common::config::BarMode;
use censusboard_common::entities::{Category, DerivedRow};
use serde_json::{json, Value};

use crate::selection::DetailView;

/// Plotly's "Bold" qualitative palette.
pub const BOLD: [&str; 11] = [
    "rgb(127, 60, 141)",
    "rgb(17, 165, 121)",
    "rgb(57, 105, 172)",
    "rgb(242, 180, 1)",
    "rgb(231, 63, 116)",
    "rgb(128, 186, 90)",
    "rgb(230, 131, 16)",
    "rgb(0, 134, 149)",
    "rgb(207, 28, 144)",
    "rgb(249, 123, 114)",
    "rgb(165, 170, 153)",
];

pub const OVERVIEW_TITLE: &str = "Population by Race and Ethnicity";
pub const PIE_PLACEHOLDER_TITLE: &str = "Click a state in the bar chart to see the population breakdown.";

const MARGIN: u32 = 40;

fn margin() -> Value {
    json!({ "l": MARGIN, "r": MARGIN, "t": MARGIN, "b": MARGIN })
}

fn centred_title(text: &str, size: u32) -> Value {
    json!({ "text": text, "x": 0.5, "font": { "size": size } })
}

fn white_background() -> Value {
    json!({ "paper_bgcolor": "white", "plot_bgcolor": "white" })
}

fn merge(mut layout: Value, extra: Value) -> Value {
    if let (Some(base), Value::Object(extra)) = (layout.as_object_mut(), extra) {
        base.extend(extra);
    }
    layout
}

/// Overview bar chart: one trace per category across all states.
pub fn overview_figure(rows: &[DerivedRow], barmode: BarMode) -> Value {
    let states: Vec<&str> = rows.iter().map(|r| r.state.as_str()).collect();
    let traces: Vec<Value> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            let values: Vec<u64> = rows.iter().map(|r| r.value(category)).collect();
            json!({
                "type": "bar",
                "name": category.label(),
                "x": states,
                "y": values,
                "marker": { "color": BOLD[i % BOLD.len()] },
                "hovertemplate": format!("{}: %{{y}}<extra></extra>", category.label()),
            })
        })
        .collect();

    let layout = json!({
        "title": centred_title(OVERVIEW_TITLE, 22),
        "barmode": barmode.as_str(),
        "xaxis": { "tickangle": -45, "title": { "text": "" } },
        "yaxis": { "title": { "text": "Population Count" } },
        "hovermode": "x unified",
        "margin": margin(),
        "legend": {
            "title": { "text": "Race/Ethnicity" },
            "yanchor": "top", "y": 0.5,
            "xanchor": "left", "x": 1.05,
        },
        "height": 250,
        "width": 600,
    });

    json!({ "data": traces, "layout": merge(layout, white_background()) })
}

/// Population breakdown pie. Without a selection the figure has no traces and
/// its title prompts the user to click a bar.
pub fn pie_figure(detail: &DetailView) -> Value {
    let title = match &detail.state {
        Some(state) => format!("Population Breakdown for {state}"),
        None => PIE_PLACEHOLDER_TITLE.to_string(),
    };
    let data = if detail.breakdown.is_empty() {
        Vec::new()
    } else {
        let labels: Vec<&str> = detail.breakdown.iter().map(|s| s.category.label()).collect();
        let values: Vec<u64> = detail.breakdown.iter().map(|s| s.value).collect();
        vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "marker": { "colors": &BOLD[..labels.len().min(BOLD.len())] },
            "hovertemplate": "%{label}<br>Population Count: %{value}<extra></extra>",
        })]
    };

    json!({
        "data": data,
        "layout": {
            "title": centred_title(&title, 18),
            "margin": margin(),
            "height": 250,
            "width": 300,
        },
    })
}

/// Enrollment per institution for the selected state, schools first.
pub fn institutions_figure(detail: &DetailView) -> Value {
    let Some(state) = &detail.state else {
        return json!({ "data": [{ "type": "bar", "x": [], "y": [] }], "layout": {} });
    };
    let names: Vec<&str> = detail.institutions.iter().map(|i| i.name.as_str()).collect();
    let students: Vec<u64> = detail.institutions.iter().map(|i| i.students).collect();
    let types: Vec<&str> = detail.institutions.iter().map(|i| i.institution_type.as_str()).collect();

    let layout = json!({
        "title": centred_title(&format!("Total Students in Institutions for {state}"), 22),
        "xaxis": { "tickangle": -45 },
        "yaxis": { "title": { "text": "Total Students" } },
        "hovermode": "x unified",
        "margin": margin(),
        "height": 250,
        "width": 600,
    });

    json!({
        "data": [{
            "type": "bar",
            "x": names,
            "y": students,
            "customdata": types,
            "marker": { "color": BOLD[0] },
            "hovertemplate": "%{customdata}<br>Total Students: %{y}<extra></extra>",
        }],
        "layout": merge(layout, white_background()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alabama, empty_state};
    use crate::projection::project;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overview_has_one_trace_per_category() {
        let rows = project(&[alabama(), empty_state("Alaska")]);
        let fig = overview_figure(&rows, BarMode::Relative);
        let traces = fig["data"].as_array().unwrap();
        assert_eq!(traces.len(), 7);
        assert_eq!(traces[0]["name"], "White");
        assert_eq!(traces[6]["name"], "TwoOrMore");
        assert_eq!(traces[0]["x"], json!(["Alabama", "Alaska"]));
        assert_eq!(traces[1]["y"], json!([1_326_343u64, 10]));
        assert_eq!(fig["layout"]["barmode"], "relative");
        assert_eq!(fig["layout"]["title"]["text"], OVERVIEW_TITLE);
        assert_eq!(fig["layout"]["plot_bgcolor"], "white");
    }

    #[test]
    fn test_overview_group_mode() {
        let fig = overview_figure(&project(&[alabama()]), BarMode::Group);
        assert_eq!(fig["layout"]["barmode"], "group");
    }

    #[test]
    fn test_pie_placeholder_without_selection() {
        let fig = pie_figure(&DetailView::empty());
        assert_eq!(fig["data"], json!([]));
        assert_eq!(fig["layout"]["title"]["text"], PIE_PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_pie_for_selected_state() {
        let fig = pie_figure(&DetailView::for_record(&alabama()));
        assert_eq!(fig["layout"]["title"]["text"], "Population Breakdown for Alabama");
        let trace = &fig["data"][0];
        assert_eq!(trace["labels"][6], "TwoOrMore");
        assert_eq!(trace["values"][0], 3_329_010u64);
    }

    #[test]
    fn test_institutions_figure() {
        let fig = institutions_figure(&DetailView::for_record(&alabama()));
        let trace = &fig["data"][0];
        assert_eq!(trace["x"], json!(["School A", "School B", "College A", "College B"]));
        assert_eq!(trace["y"], json!([500, 300, 1200, 1500]));
        assert_eq!(
            fig["layout"]["title"]["text"],
            "Total Students in Institutions for Alabama"
        );
    }

    #[test]
    fn test_institutions_figure_empty_without_selection() {
        let fig = institutions_figure(&DetailView::empty());
        assert_eq!(fig["data"][0]["x"], json!([]));
    }
}
