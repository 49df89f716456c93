use super::{NavItem, render_layout};
use crate::dashboard::{DashboardResponse, TimeRange};
use maud::{Markup, html};

pub fn render_dashboard(dashboard: &DashboardResponse, logged_in: bool) -> String {
    let summary = &dashboard.summary;
    let today = &summary.today;
    let trend_class = if summary.steps_change_percent >= 0 {
        "trend-up"
    } else {
        "trend-down"
    };

    let body = html! {
        section.page.dashboard {
            div.page-header {
                div {
                    h1 { "Health Dashboard" }
                    p.subtitle { "Your last seven days at a glance" }
                }
                nav.tabs aria-label="Time range" {
                    @for range in TimeRange::ALL {
                        a.tab.active[dashboard.range == range]
                            href={ "/dashboard?range=" (range.as_str()) } { (range.label()) }
                    }
                }
            }

            div.card {
                h2 { "Today's Summary" }
                div.grid {
                    (stat("Steps", &today.steps.to_string(), Some((
                        format!("{:+}%", summary.steps_change_percent),
                        trend_class,
                    ))))
                    (stat("Calories", &format!("{} kcal", today.calories), None))
                    (stat("Sleep", &format!("{:.1} h", today.sleep_hours), None))
                    (stat("Water", &format!("{:.1} L", today.hydration_liters), None))
                    (stat("Heart Rate", &format!("{} bpm", today.heart_rate), None))
                }
            }

            div.card {
                div.page-header {
                    h2 { "Activity Overview" }
                    div.tabs role="tablist" {
                        button.tab.active type="button" data-metric="steps" { "Steps" }
                        button.tab type="button" data-metric="calories" { "Calories" }
                        button.tab type="button" data-metric="sleep" { "Sleep" }
                    }
                }
                svg.chart id="activity-chart" viewBox="0 0 600 260" role="img" aria-label="Activity chart" {}
            }

            div.grid {
                div.card {
                    h3 { "Heart Rate" }
                    svg.chart.sparkline id="heart-chart" viewBox="0 0 300 100" role="img" aria-label="Heart rate" {}
                    p.hint { "Average " (summary.avg_heart_rate) " bpm this week" }
                }
                div.card {
                    h3 { "Hydration" }
                    div.stat {
                        span.value { (format!("{:.1} / {:.1} L", today.hydration_liters, summary.hydration_goal_liters)) }
                    }
                    div.progress {
                        div.progress-fill style={ "width: " (summary.hydration_percent.min(100)) "%" } {}
                    }
                    p.hint { (summary.hydration_percent) "% of your daily goal" }
                }
                div.card {
                    h3 { "Weight" }
                    svg.chart.sparkline id="weight-chart" viewBox="0 0 300 100" role="img" aria-label="Weight" {}
                    p.hint { (weight_trend(summary.weight_change_kg)) }
                }
            }

            div.card {
                h3 { "Step Goal" }
                div.progress {
                    div.progress-fill style={ "width: " (summary.step_goal_percent.min(100)) "%" } {}
                }
                p.hint { (summary.step_goal_percent) "% of today's step goal" }
            }

            div.status id="status" {}
        }
    };
    render_layout(
        "Dashboard",
        Some(NavItem::Dashboard),
        logged_in,
        body,
        DASHBOARD_JS,
    )
}

fn stat(label: &str, value: &str, trend: Option<(String, &str)>) -> Markup {
    html! {
        div.stat {
            span.label { (label) }
            span.value { (value) }
            @if let Some((text, class)) = trend {
                span class=(class) { (text) " from yesterday" }
            }
        }
    }
}

fn weight_trend(change_kg: f64) -> String {
    if change_kg > 0.0 {
        format!("{change_kg:.1} kg lost this week")
    } else if change_kg < 0.0 {
        format!("{:.1} kg gained this week", -change_kg)
    } else {
        "No change this week".to_string()
    }
}

const DASHBOARD_JS: &str = r#"
    const activityChart = document.getElementById('activity-chart');
    const heartChart = document.getElementById('heart-chart');
    const weightChart = document.getElementById('weight-chart');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('[data-metric]'));

    const metrics = {
      steps: { field: 'steps', kind: 'area', color: '#33c3f0' },
      calories: { field: 'calories', kind: 'bar', color: '#8b5cf6' },
      sleep: { field: 'sleep_hours', kind: 'line', color: '#10b981' }
    };

    let days = [];
    let activeMetric = 'steps';

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderChart = (svg, points, options) => {
      if (!points.length) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const [, , width, height] = svg.getAttribute('viewBox').split(' ').map(Number);
      const paddingX = options.axes ? 44 : 8;
      const paddingY = options.axes ? 34 : 8;
      const top = options.axes ? 24 : 8;

      const values = points.map((point) => point.value);
      let min = options.kind === 'bar' || options.kind === 'area' ? 0 : Math.min(...values);
      let max = Math.max(...values);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      let grid = '';
      if (options.axes) {
        const ticks = 4;
        for (let i = 0; i <= ticks; i += 1) {
          const value = min + (range * i) / ticks;
          const yPos = y(value);
          grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
          grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
        }
        grid += points
          .map((point, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`)
          .join('');
      }

      let shape = '';
      if (options.kind === 'bar') {
        const barWidth = Math.max(8, xStep * 0.5);
        shape = points
          .map((point, index) => `<rect x="${x(index) - barWidth / 2}" y="${y(point.value)}" width="${barWidth}" height="${y(min) - y(point.value)}" rx="4" fill="${options.color}" />`)
          .join('');
      } else {
        const path = points
          .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
          .join(' ');
        if (options.kind === 'area') {
          const area = `${path} L ${x(points.length - 1)} ${y(min)} L ${x(0)} ${y(min)} Z`;
          shape += `<path d="${area}" fill="${options.color}" fill-opacity="0.2" />`;
        }
        shape += `<path d="${path}" fill="none" stroke="${options.color}" stroke-width="${options.axes ? 3 : 2}" />`;
        if (options.axes) {
          shape += points
            .map((point, index) => `<circle cx="${x(index)}" cy="${y(point.value)}" r="4" fill="${options.color}" />`)
            .join('');
        }
      }

      svg.innerHTML = `${grid}${shape}`;
    };

    const series = (field) => days.map((day) => ({ label: day.day, value: day[field] }));

    const renderActivity = () => {
      const metric = metrics[activeMetric];
      renderChart(activityChart, series(metric.field), { kind: metric.kind, color: metric.color, axes: true });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        activeMetric = button.dataset.metric;
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        renderActivity();
      });
    });

    const load = async () => {
      const res = await fetch(`/api/dashboard${window.location.search}`);
      if (!res.ok) {
        throw new Error('Unable to load dashboard data');
      }
      days = (await res.json()).days;
      renderActivity();
      renderChart(heartChart, series('heart_rate'), { kind: 'line', color: '#8b5cf6', axes: false });
      renderChart(weightChart, series('weight_kg'), { kind: 'line', color: '#10b981', axes: false });
    };

    load().catch((err) => {
      statusEl.textContent = err.message;
      statusEl.dataset.type = 'error';
    });
"#;
