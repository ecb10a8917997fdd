//! Chart generation and rendering for the dashboard.
//!
//! This module creates ECharts visualizations for the selected timeframe:
//! - **Period Chart**: Bar chart of spending per day, month or year
//! - **Category Chart**: Doughnut chart of spending per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Pie, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{aggregation::DashboardSummary, html::HeadElement};

/// The ECharts build loaded on the dashboard.
pub(super) const ECHARTS_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Builds the period and category charts for `summary`.
pub(super) fn build_dashboard_charts(summary: &DashboardSummary) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "period-chart",
            options: period_chart(summary).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(summary).to_string(),
        },
    ]
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded bg-white dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Each chart resizes with the window and follows the system dark mode setting.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_json(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Stops user text such as `</script>` from closing the inline script early.
///
/// `\u003c` is still valid JSON and decodes to the same `<`.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn period_chart(summary: &DashboardSummary) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) = summary
        .buckets
        .iter()
        .map(|(label, bucket)| (label.clone(), bucket.total))
        .unzip();

    Chart::new()
        .title(Title::new().text(format!("{}ly Expenses", summary.timeframe.label())))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Expenses").data(values))
}

fn category_chart(summary: &DashboardSummary) -> Chart {
    let data: Vec<(f64, String)> = summary
        .category_totals
        .iter()
        .map(|(category, total)| (*total, category.clone()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().top("bottom"))
        .series(
            Pie::new()
                .name("Category")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
