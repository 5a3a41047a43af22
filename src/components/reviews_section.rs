use leptos::*;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::review::ReviewInput;
use crate::presenter::{build_view, ReviewPresenter};
use crate::store::{LocalStorageSlot, ReviewStore};

/// Visitor reviews kept in this browser: the list, the "See More" control and
/// a toggleable submission form.
#[component]
pub fn ReviewsSection() -> impl IntoView {
    let presenter = store_value(ReviewPresenter::new(ReviewStore::new(
        LocalStorageSlot::default(),
    )));
    // Server render has no local storage; the effect fills the list after hydration.
    let (reviews, set_reviews) = create_signal(build_view(&[], 0));
    let (message, set_message) = create_signal(String::new());
    let (form_open, set_form_open) = create_signal(false);

    create_effect(move |_| {
        set_reviews.set(presenter.with_value(|p| p.render()));
    });

    let on_more = Callback::new(move |_: ()| {
        if let Some(view) = presenter.try_update_value(|p| p.reveal_more()) {
            set_reviews.set(view);
        }
    });

    let on_submit = Callback::new(move |input: ReviewInput| {
        let outcome = presenter.try_update_value(|p| p.submit(&input).map(|msg| (msg, p.render())));
        match outcome {
            Some(Ok((msg, view))) => {
                set_message.set(msg.to_string());
                set_reviews.set(view);
                true
            }
            // The presenter has already logged the cause.
            Some(Err(err)) => {
                set_message.set(err.user_message().to_string());
                false
            }
            None => false,
        }
    });

    view! {
        <div class="reviews">
            <button class="write-review-btn" on:click=move |_| set_form_open.update(|open| *open = !*open)>
                { "Write a Review" }
            </button>
            <Show when=move || form_open.get()>
                <ReviewForm on_submit=on_submit message=message />
            </Show>
            <ReviewsList reviews=reviews on_more=on_more />
        </div>
    }
}
