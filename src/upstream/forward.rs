//! Forward-target construction.

use url::Url;

use crate::actions::{Action, ACTION_PARAM};

/// Content type stamped on every forwarded request.
pub const FORWARD_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Build the outbound URL for an action.
///
/// Starts from the configured upstream URL and overwrites (or adds)
/// the `action` query parameter. Query parameters already present on
/// the upstream URL are preserved; parameters from the inbound request
/// are deliberately not carried over.
pub fn forward_target(base: &Url, action: Action) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != ACTION_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut target = base.clone();
    target.set_query(None);
    {
        let mut pairs = target.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(ACTION_PARAM, action.as_str());
    }
    target
}
