//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `style.css`. Pass increasing
//! `delay_ms` values to stagger a row of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.28s ease-out {}ms both; {}",
        delay_ms, style
    );

    view! {
        <Card attr:style=full_style.trim_end().to_string()>
            {children()}
        </Card>
    }
}
