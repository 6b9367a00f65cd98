//! File-type pie chart for the Insights page

use embedchat_core::DataDistribution;
use leptos::prelude::*;

const CENTER: f64 = 100.0;
const RADIUS: f64 = 90.0;

/// SVG pie chart with a legend
#[component]
pub fn PieChart(distribution: DataDistribution) -> impl IntoView {
    let slices = distribution.slices();

    if slices.is_empty() {
        return view! {
            <div class="text-gray-500">"No files uploaded yet"</div>
        }
        .into_any();
    }

    let legend = slices.clone();

    view! {
        <div class="flex flex-col items-center gap-6">
            <svg viewBox="0 0 200 200" class="w-72 h-72">
                {slices.into_iter().map(|slice| view! {
                    <path d=slice.path(CENTER, CENTER, RADIUS) fill=slice.color stroke="white" stroke-width="1"></path>
                }).collect::<Vec<_>>()}
            </svg>

            <ul class="flex flex-wrap justify-center gap-4 text-sm">
                {legend.into_iter().map(|slice| view! {
                    <li class="flex items-center gap-2">
                        <span class="w-3 h-3 rounded-sm" style=format!("background-color: {}", slice.color)></span>
                        {format!("{}: {} ({:.0}%)", slice.label, slice.count, slice.fraction * 100.0)}
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}
