//! Statistics rendering: stat cards and a plain bar list over the
//! pre-aggregated `{label, value}` points. No chart library involved.

use common::model::stats::EntityStats;
use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

fn formatted(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Stat cards plus proportional bars for one aggregated snapshot.
pub fn stats_panel(title: &str, stats: &EntityStats) -> Html {
    let points = stats.chart_points();
    let max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1);
    let open_rate = stats.taux_ouverture() * 100.0;

    html! {
        <section class="stats-panel">
            <h3>{ title }</h3>
            <div class="stat-cards" style="display:flex;gap:12px;flex-wrap:wrap;">
                {
                    for points.iter().map(|point| html! {
                        <div class="stat-card" style="border:1px solid #ddd;border-radius:6px;padding:12px;min-width:110px;">
                            <div style="font-size:12px;color:#666;">{ point.label.clone() }</div>
                            <div style="font-size:20px;font-weight:bold;">{ formatted(point.value) }</div>
                        </div>
                    })
                }
                <div class="stat-card" style="border:1px solid #ddd;border-radius:6px;padding:12px;min-width:110px;">
                    <div style="font-size:12px;color:#666;">{"Open rate"}</div>
                    <div style="font-size:20px;font-weight:bold;">{ format!("{open_rate:.1} %") }</div>
                </div>
            </div>
            <div class="stat-bars" style="margin-top:16px;">
                {
                    for points.iter().map(|point| {
                        let width = (point.value as f64 / max as f64 * 100.0).round();
                        html! {
                            <div style="display:flex;align-items:center;gap:8px;margin:4px 0;">
                                <span style="width:90px;font-size:12px;color:#444;">{ point.label.clone() }</span>
                                <div style={format!("background:#1976d2;height:14px;border-radius:3px;width:{width}%;min-width:2px;")} />
                                <span style="font-size:12px;">{ formatted(point.value) }</span>
                            </div>
                        }
                    })
                }
            </div>
        </section>
    }
}
