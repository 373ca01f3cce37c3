//! Parent reviews of drivers; staff can remove abusive ones.

#[cfg(test)]
#[path = "ratings_test.rs"]
mod ratings_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::Rating;
use wire::resources::Ratings;
use wire::Resource;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, Table};
use crate::components::resource_section::{confirmed_action, list_section};
use crate::net::resources;
use crate::util::format;

/// Score as stars plus the number, e.g. `★★★★☆ 4`.
pub(crate) fn score(rating: &Rating) -> Cell {
    Cell::text(format!("{} {}", format::stars(rating.score), rating.score.clamp(1, 5)))
}

fn columns() -> Vec<Column<Rating>> {
    vec![
        Column::new("Driver", |r: &Rating| Cell::opt(r.driver_name.as_deref().or(r.driver_id.as_deref()))),
        Column::new("Parent", |r: &Rating| Cell::opt(r.parent_name.as_deref())),
        Column::new("Score", score),
        Column::new("Review", |r: &Rating| Cell::opt(r.review.as_deref())),
        Column::new("Date", |r: &Rating| Cell::text(format::date(r.created_at.as_deref()))),
    ]
}

#[component]
pub fn RatingsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Ratings & reviews" allowed=Role::OPERATIONS>
            {ratings_section()}
        </ConsoleLayout>
    }
}

fn ratings_section() -> impl IntoView {
    let (delete, confirm) = confirmed_action::<Rating, _, _>(
        "Delete",
        "Delete review".to_owned(),
        || Ratings::invalidates_with(&[wire::Tag::Driver]),
        resources::delete::<Ratings>,
    );
    let table = Table::new(columns()).with_actions(vec![delete]);
    view! {
        {list_section::<Ratings>(table)}
        {confirm}
    }
}
