//! Built-in plans for the federated satellite experiments.

use super::plan::{ComparisonSpec, ExperimentPlan};
use crate::domain::chart::{AxisRange, Axes, ChartOptions, LabelRule, SeriesScheme};
use crate::domain::tradespace::{LinkFilter, Normalization, ValueAxis, ViewFilter, ViewSpec, DEFAULT_SAMPLES};

const COST_LABEL: &str = "Initial Cost ($)";

fn axes(y_label: &str, x: (f64, f64), y: (f64, f64)) -> Axes {
    Axes {
        x_label: COST_LABEL.to_string(),
        y_label: y_label.to_string(),
        x: Some(AxisRange { min: x.0, max: x.1 }),
        y: Some(AxisRange { min: y.0, max: y.1 }),
    }
}

fn single_player(label: &str, satellites: Option<u32>) -> ViewSpec {
    let filter = ViewFilter {
        players: Some(1),
        satellites,
        ..Default::default()
    };
    ViewSpec::new(label, filter, Normalization::Own)
}

/// First player of a multi-player run, valued at its share of the totals.
fn first_player(label: &str, players: u32, satellites: Option<u32>, links: Option<LinkFilter>) -> ViewSpec {
    let filter = ViewFilter {
        players: Some(players),
        player: Some(0),
        satellites,
        links,
        ..Default::default()
    };
    ViewSpec::new(label, filter, Normalization::PerPlayer)
}

/// Experiment 3: ISL versus no ISL, one to four satellites.
pub(super) fn exp3() -> ExperimentPlan {
    let mut views: Vec<ViewSpec> = (1..=4)
        .map(|n| single_player(&format!("1-{}", n), Some(n)))
        .collect();
    views.push(first_player("2-2", 2, None, None));

    ExperimentPlan {
        name: "exp3".to_string(),
        value_axis: ValueAxis::Expected,
        chart: ChartOptions {
            scheme: SeriesScheme::Isl,
            labels: LabelRule::StrictWithinSeries,
            marker_alpha: Some(0.3),
            axes: axes("Expected Value ($)", (0.0, 7500.0), (0.0, 20000.0)),
            ..Default::default()
        },
        views,
        comparisons: Vec::new(),
    }
}

/// Experiment 5: open ground links, net of cost.
pub(super) fn exp5() -> ExperimentPlan {
    let mut views = vec![single_player("1", None)];
    views.extend((1..=4).map(|n| single_player(&format!("1-{}", n), Some(n))));
    views.push(first_player("2", 2, None, None));
    views.extend((2..=6).map(|n| first_player(&format!("2-{}", n), 2, Some(n), None)));
    views.push(first_player("3-3", 3, Some(3), None));
    views.push(first_player("3-6", 3, Some(6), None));

    ExperimentPlan {
        name: "exp5".to_string(),
        value_axis: ValueAxis::Net,
        chart: ChartOptions {
            scheme: SeriesScheme::IslAndGround,
            labels: LabelRule::StrictWithinGroundLinks,
            marker_alpha: Some(0.3),
            axes: axes("Net Expected Value ($)", (1000.0, 5000.0), (-1000.0, 8000.0)),
            ..Default::default()
        },
        views,
        comparisons: Vec::new(),
    }
}

/// Experiment 7: six link architectures, independent versus shared.
pub(super) fn exp7() -> ExperimentPlan {
    const Y_LABEL: &str = "Expected Value over 24 Turns ($)";
    let views = vec![
        first_player("2i", 2, None, Some(LinkFilter::Independent)),
        first_player("2c", 2, None, Some(LinkFilter::Shared)),
    ];

    ExperimentPlan {
        name: "exp7".to_string(),
        value_axis: ValueAxis::Expected,
        chart: ChartOptions {
            scheme: SeriesScheme::Architecture,
            labels: LabelRule::ParetoWithinSeries,
            overall_front: true,
            regression: false,
            legend: true,
            marker_alpha: Some(0.3),
            axes: axes(Y_LABEL, (1000.0, 4000.0), (1000.0, 12000.0)),
        },
        views,
        comparisons: vec![ComparisonSpec {
            label: "2-exp".to_string(),
            independent: "2i".to_string(),
            centralized: "2c".to_string(),
            samples: DEFAULT_SAMPLES,
            axes: axes(Y_LABEL, (1000.0, 4000.0), (1000.0, 12000.0)),
        }],
    }
}

/// Single tradespace of the one-station summary file.
///
/// Labels print the ingestion-order design id, which matches the `Run`
/// column only when runs are numbered from 1 in file order.
pub(super) fn summary() -> ExperimentPlan {
    let filter = ViewFilter {
        stations: Some(1),
        ..Default::default()
    };
    ExperimentPlan {
        name: "summary".to_string(),
        value_axis: ValueAxis::Expected,
        chart: ChartOptions {
            scheme: SeriesScheme::Single,
            labels: LabelRule::StrictWithinSeries,
            axes: axes("Expected Value ($)", (0.0, 8000.0), (0.0, 20000.0)),
            ..Default::default()
        },
        views: vec![ViewSpec::new("tradespace", filter, Normalization::Own)],
        comparisons: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(plan: &ExperimentPlan) -> Vec<&str> {
        plan.views.iter().map(|v| v.label.as_str()).collect()
    }

    #[test]
    fn exp3_views() {
        let plan = exp3();
        assert_eq!(labels(&plan), vec!["1-1", "1-2", "1-3", "1-4", "2-2"]);
        assert_eq!(plan.views[2].filter.satellites, Some(3));
        assert_eq!(plan.views[4].normalization, Normalization::PerPlayer);
        assert_eq!(plan.views[4].filter.player, Some(0));
    }

    #[test]
    fn exp5_views_use_net_value() {
        let plan = exp5();
        assert_eq!(
            labels(&plan),
            vec!["1", "1-1", "1-2", "1-3", "1-4", "2", "2-2", "2-3", "2-4", "2-5", "2-6", "3-3", "3-6"]
        );
        assert_eq!(plan.value_axis, ValueAxis::Net);
        assert_eq!(plan.view("3-6").unwrap().filter.players, Some(3));
        assert_eq!(plan.chart.axes.y.unwrap().min, -1000.0);
    }

    #[test]
    fn exp7_compares_independent_and_shared() {
        let plan = exp7();
        assert_eq!(labels(&plan), vec!["2i", "2c"]);
        assert_eq!(plan.view("2i").unwrap().filter.links, Some(LinkFilter::Independent));
        assert_eq!(plan.view("2c").unwrap().filter.links, Some(LinkFilter::Shared));
        assert_eq!(plan.comparisons[0].label, "2-exp");
        assert!(plan.chart.overall_front);
        assert!(plan.chart.legend);
    }

    #[test]
    fn summary_keeps_single_station_designs() {
        let plan = summary();
        assert_eq!(plan.views[0].filter.stations, Some(1));
        assert_eq!(plan.chart.scheme, SeriesScheme::Single);
    }
}
