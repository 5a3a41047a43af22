/// Root component of the client reviews site.
/// Hosts the reviews section: visitor-submitted reviews paged three at a time.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::reviews_section::ReviewsSection;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Client Reviews" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section id="reviews">
            <h2>{ "What Our Clients Say" }</h2>
            <ReviewsSection />
        </section>
    }
}
