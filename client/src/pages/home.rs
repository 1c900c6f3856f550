//! Single showcase page: nav + overlay menu over the carousel and features.

use leptos::html;
use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::features::Features;
use crate::components::menu::Menu;

#[component]
pub fn HomePage() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();

    view! {
        <div class="App">
            <Menu container=container_ref/>
            <div class="container" node_ref=container_ref>
                <Carousel/>
                <Features/>
            </div>
        </div>
    }
}
