use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::trend::PriceTrend;
use crate::utils::chart_path::{PathCommand, PlotArea, dual_series, markers, to_svg_path};

const PETTAH_COLOR: &str = "#2F73FF";
const DAMBULLA_COLOR: &str = "#F59E0B";

/// Draw commands for both wholesale markets.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPaths {
    pub pettah: Vec<PathCommand>,
    pub dambulla: Vec<PathCommand>,
}

/// Maps a trend onto `area`; `None` when there is nothing to draw.
pub fn trend_paths(trend: &PriceTrend, area: PlotArea) -> Option<TrendPaths> {
    if trend.is_empty() {
        return None;
    }

    let (pettah, dambulla) = dual_series(&trend.pettah_series(), &trend.dambulla_series(), area);
    Some(TrendPaths { pettah, dambulla })
}

fn chart_area() -> PlotArea {
    PlotArea::new(
        Config::TREND_CHART_WIDTH,
        Config::TREND_CHART_HEIGHT,
        Config::TREND_CHART_PADDING,
    )
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub trend: Rc<PriceTrend>,
    /// Stroke width
    #[prop_or(3.0)]
    pub stroke_width: f64,
}

fn series_svg(commands: &[PathCommand], color: &'static str, stroke_width: f64) -> Html {
    let dots = markers(commands)
        .into_iter()
        .map(|(x, y)| {
            html! {
                <circle cx={format!("{x:.2}")} cy={format!("{y:.2}")} r="4" fill={color} stroke="#fff" stroke-width="1.5" />
            }
        })
        .collect::<Html>();

    html! {
        <>
            <path
                d={to_svg_path(commands)}
                fill="none"
                stroke={color}
                stroke-width={stroke_width.to_string()}
                stroke-linecap="round"
                stroke-linejoin="round"
                vector-effect="non-scaling-stroke"
            />
            {dots}
        </>
    }
}

/// Pettah and Dambulla wholesale prices over the selected month.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let paths = use_memo(props.trend.clone(), |trend| trend_paths(trend, chart_area()));

    let Some(paths) = &*paths else {
        return html! {
            <p class="trend-empty">{"No trend data for this selection"}</p>
        };
    };

    let change_class = if props.trend.is_rising() {
        "trend-change up"
    } else {
        "trend-change down"
    };
    let viewbox = format!(
        "0 0 {} {}",
        Config::TREND_CHART_WIDTH,
        Config::TREND_CHART_HEIGHT
    );

    html! {
        <div class="trend-chart">
            <div class="trend-header">
                <span class="trend-legend">
                    <span style={format!("color: {PETTAH_COLOR}")}>{"● Pettah"}</span>
                    <span style={format!("color: {DAMBULLA_COLOR}")}>{"● Dambulla"}</span>
                </span>
                <span class={change_class}>{props.trend.change_label()}</span>
            </div>
            <svg viewBox={viewbox} preserveAspectRatio="none" class="trend-svg">
                <rect width="100%" height="100%" fill="#F5F0FF" rx="16" />
                {series_svg(&paths.pettah, PETTAH_COLOR, props.stroke_width)}
                {series_svg(&paths.dambulla, DAMBULLA_COLOR, props.stroke_width)}
            </svg>
            <div class="trend-days">
                { for props.trend.day_labels().into_iter().map(|day| html! { <span>{day.to_string()}</span> }) }
            </div>
        </div>
    }
}
