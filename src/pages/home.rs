use leptos::prelude::*;

use crate::components::org_chart::AnimatedOrgChart;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="home">
			<header class="hero">
				<h1>"Org Chart"</h1>
				<p class="subtitle">"Create beautiful organization charts with ease"</p>
			</header>
			<AnimatedOrgChart height=300.0 />
		</main>
	}
}
