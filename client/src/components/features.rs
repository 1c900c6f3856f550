//! Static feature highlights rendered below the carousel.

use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features-content">
                <div class="feature-item">
                    <div class="feature-icon">
                        <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5"></path>
                        </svg>
                    </div>
                    <h3>"Innovation"</h3>
                    <p>
                        "Pushing boundaries with cutting-edge digital solutions that transform the way we interact with technology."
                    </p>
                </div>

                <div class="feature-item">
                    <div class="feature-icon">
                        <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="10"></circle>
                            <path d="M8 14s1.5 2 4 2 4-2 4-2"></path>
                            <line x1="9" y1="9" x2="9.01" y2="9"></line>
                            <line x1="15" y1="9" x2="15.01" y2="9"></line>
                        </svg>
                    </div>
                    <h3>"Design"</h3>
                    <p>"Creating intuitive and beautiful interfaces that seamlessly blend form and function."</p>
                </div>

                <div class="feature-item">
                    <div class="feature-icon">
                        <svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z"></path>
                        </svg>
                    </div>
                    <h3>"Performance"</h3>
                    <p>"Optimized solutions that deliver lightning-fast performance and exceptional user experiences."</p>
                </div>
            </div>
        </section>
    }
}
