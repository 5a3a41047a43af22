use leptos::*;
use crate::models::review::{Rating, ReviewInput, Role};

/// Review submission form. `on_submit` reports whether the review was
/// accepted; the fields are cleared only when it was.
#[component]
pub fn ReviewForm(
    on_submit: Callback<ReviewInput, bool>,
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (role, set_role) = create_signal(Role::default());
    let (text, set_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(None::<u8>);

    let submit_review = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let input = ReviewInput {
            name: name.get_untracked(),
            role: role.get_untracked(),
            text: text.get_untracked(),
            rating: rating.get_untracked(),
        };
        if on_submit.call(input) {
            set_name.set(String::new());
            set_role.set(Role::default());
            set_text.set(String::new());
            set_rating.set(None);
        }
    };

    view! {
        <form class="review-form" on:submit=submit_review>
            <h3>{ "Write a Review" }</h3>
            <input
                type="text"
                placeholder="Your name"
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <select
                prop:value=move || role.get().label()
                on:change=move |ev| {
                    if let Some(selected) = Role::from_label(&event_target_value(&ev)) {
                        set_role.set(selected);
                    }
                }
            >
                {Role::ALL.into_iter().map(|option| view! {
                    <option value=option.label()>{ option.label() }</option>
                }).collect_view()}
            </select>
            <textarea
                placeholder="Write your review here"
                prop:value=text
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <div class="rating-options">
                {(Rating::MIN..=Rating::MAX).map(|value| view! {
                    <label>
                        <input
                            type="radio"
                            name="reviewRating"
                            value=value.to_string()
                            prop:checked=move || rating.get() == Some(value)
                            on:change=move |_| set_rating.set(Some(value))
                        />
                        { "⭐".repeat(value as usize) }
                    </label>
                }).collect_view()}
            </div>
            <button type="submit">{ "Submit Review" }</button>
            <p class="review-message">{ move || message.get() }</p>
        </form>
    }
}
