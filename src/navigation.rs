//! Page URL construction
//!
//! Category tabs rewrite the current page's `category` parameter; the search
//! form submits `query` to the results page.

use std::borrow::Cow;

use reqwest::Url;

pub const CATEGORY_PARAM: &str = "category";
pub const SEARCH_PARAM: &str = "query";

/// `current` with its `category` parameter set to `category`
///
/// The first existing `category` value is replaced in place and any later
/// duplicates are dropped; without one the parameter is appended. Other
/// parameters keep their order.
pub fn category_url(current: &Url, category: &str) -> Url {
    let mut replaced = false;
    let pairs: Vec<(String, String)> = current
        .query_pairs()
        .filter_map(|(key, value)| {
            if key != CATEGORY_PARAM {
                return Some((key.into_owned(), value.into_owned()));
            }
            if replaced {
                return None;
            }
            replaced = true;
            Some((key.into_owned(), category.to_string()))
        })
        .collect();

    let mut url = current.clone();
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if !replaced {
            query.append_pair(CATEGORY_PARAM, category);
        }
    }
    url
}

/// Results page URL for a GET submission of the search form
///
/// Like a browser GET form, the action URL's own query string is replaced
/// by the form fields.
pub fn search_url(action: &Url, query: &str) -> Url {
    let mut url = action.clone();
    url.set_query(None);
    url.query_pairs_mut().append_pair(SEARCH_PARAM, query);
    url
}

/// Current `category` parameter of a page URL
pub fn current_category(page: &Url) -> Option<Cow<'_, str>> {
    page.query_pairs()
        .find(|(key, _)| key == CATEGORY_PARAM)
        .map(|(_, value)| value)
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
