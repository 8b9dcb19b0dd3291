use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::TrendPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const INCOME_COLOR: RGBColor = RGBColor(34, 197, 94);
const EXPENSE_COLOR: RGBColor = RGBColor(239, 68, 68);
const SAVINGS_COLOR: RGBColor = RGBColor(59, 130, 246);

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub trend: Vec<TrendPoint>,
    pub loading: bool,
}

pub enum Msg {
    Redraw,
}

/// Six-month income/expense/savings trend rendered with plotters on a
/// canvas. Numbers come straight from the analytics API; this component
/// only draws them.
pub struct ChartCard {
    canvas_ref: NodeRef,
}

impl Component for ChartCard {
    type Message = Msg;
    type Properties = ChartCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Redraw => {
                self.draw(&ctx.props().trend);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().trend != old_props.trend {
            self.draw(&ctx.props().trend);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().trend.is_empty() {
            self.draw(&ctx.props().trend);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let trend_empty = ctx.props().trend.is_empty();
        let loading = ctx.props().loading;

        html! {
            <div class="card chart-card">
                <div class="card-header">
                    <h2>{"Monthly Trend"}</h2>
                    <div class="chart-legend">
                        <span class="legend-item income">{"Income"}</span>
                        <span class="legend-item expenses">{"Expenses"}</span>
                        <span class="legend-item savings">{"Savings"}</span>
                    </div>
                </div>

                {if trend_empty && loading {
                    html! { <div class="chart-empty">{"Loading chart data..."}</div> }
                } else if trend_empty {
                    html! { <div class="chart-empty">{"No trend data available yet"}</div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="trend-chart-canvas"
                            width="760"
                            height="320"
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl ChartCard {
    fn draw(&self, trend: &[TrendPoint]) {
        if trend.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(760);
        canvas.set_height(320);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let y_max = trend
            .iter()
            .flat_map(|p| [p.income, p.expenses, p.savings])
            .fold(0.0_f64, f64::max)
            .max(1.0)
            * 1.1;
        let x_max = (trend.len() - 1).max(1) as f64;

        let labels: Vec<String> = trend.iter().map(|p| p.month.clone()).collect();

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("Amount (PKR)")
            .y_label_formatter(&|v| shared::format_number(*v))
            .x_label_formatter(&|v| {
                labels
                    .get(v.round() as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .x_labels(labels.len())
            .y_labels(8)
            .label_style(("sans-serif", 12))
            .axis_style(&RGBColor(230, 230, 230))
            .light_line_style(&RGBColor(248, 248, 248))
            .draw()
            .is_err()
        {
            return;
        }

        for (series, color) in [
            (trend.iter().map(|p| p.income).collect::<Vec<_>>(), INCOME_COLOR),
            (trend.iter().map(|p| p.expenses).collect::<Vec<_>>(), EXPENSE_COLOR),
            (trend.iter().map(|p| p.savings).collect::<Vec<_>>(), SAVINGS_COLOR),
        ] {
            let points: Vec<(f64, f64)> = series
                .iter()
                .enumerate()
                .map(|(i, value)| (i as f64, *value))
                .collect();

            if chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))
                .is_err()
            {
                return;
            }
            for (x, y) in &points {
                let _ = chart.draw_series(std::iter::once(Circle::new(
                    (*x, *y),
                    4,
                    color.filled(),
                )));
            }
        }

        let _ = root.present();
    }
}
