//! Hotel review list.

#[cfg(test)]
#[path = "review_list_test.rs"]
mod review_list_test;

use leptos::prelude::*;

use crate::net::types::Review;
use crate::util::dates::display_date;

/// Five-slot star string for a 1–5 rating; out-of-range values are clamped.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.clamp(1, 5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Mean rating of `reviews`, if any.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = reviews.len() as f64;
    Some(f64::from(total) / count)
}

#[component]
pub fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="review-list__empty">"No reviews yet."</p> }.into_any();
    }
    let items = reviews
        .into_iter()
        .map(|review| {
            let author = review.user_name.clone().unwrap_or_else(|| "Guest".to_owned());
            let when = review.created_at.as_deref().map(display_date).unwrap_or_default();
            view! {
                <li class="review-list__item">
                    <span class="review-list__stars">{stars(review.rating)}</span>
                    <span class="review-list__author">{author}</span>
                    <span class="review-list__date">{when}</span>
                    <p class="review-list__comment">{review.comment}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! { <ul class="review-list">{items}</ul> }.into_any()
}
