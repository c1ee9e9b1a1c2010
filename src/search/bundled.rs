//! Example records shipped with the binary.
//!
//! Used as the initial result list for `--offline` runs.

use crate::search::item::{ItemId, ResultItem};

pub fn framework_items() -> Vec<ResultItem> {
    [
        ("React", "https://reactjs.org/", "Jordan Walke", 3, 4),
        ("Redux", "https://redux.js.org/", "Dan Abramov, Andrew Clark", 2, 5),
        ("Vue.js", "https://vuejs.org/", "Evan You", 4, 3),
        ("Svelte", "https://svelte.dev/", "Rich Harris", 5, 5),
    ]
    .into_iter()
    .zip(0u64..)
    .map(|((title, url, author, comments, points), id)| ResultItem {
        title: title.to_string(),
        url: Some(url.to_string()),
        author: author.to_string(),
        comment_count: comments,
        score: points,
        id: ItemId::from(id),
    })
    .collect()
}
