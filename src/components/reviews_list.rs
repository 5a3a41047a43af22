use leptos::*;
use crate::presenter::ReviewsView;

/// Renders a prepared [`ReviewsView`]: review cards or the empty placeholder,
/// plus the "See More" button while more reviews are hidden.
#[component]
pub fn ReviewsList(
    #[prop(into)] reviews: Signal<ReviewsView>,
    on_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="reviews-container">
            {move || match reviews.get() {
                ReviewsView::Empty { placeholder } => view! { <p>{ placeholder }</p> }.into_view(),
                ReviewsView::Page { cards, .. } => cards
                    .into_iter()
                    .map(|card| view! {
                        <div class="review-card" data-id=card.id.to_string()>
                            <div class="review-header">
                                <div>
                                    <span class="review-name">{ card.name }</span>
                                    <span class="review-role">{ format!("({})", card.role) }</span>
                                </div>
                                <span class="review-rating">{ card.stars }</span>
                            </div>
                            <p>{ card.text }</p>
                        </div>
                    })
                    .collect_view(),
            }}
        </div>
        <Show when=move || reviews.with(ReviewsView::show_more)>
            <button class="see-more-btn" on:click=move |_| on_more.call(())>
                { "See More" }
            </button>
        </Show>
    }
}
