//! Console rendering of user records.

use std::collections::BTreeMap;

use common::AppResult;
use domain::User;
use serde_json::Value;

/// Header printed before a listing
pub const LISTING_HEADER: &str = "All users:";

/// `Created user: ` followed by the record as 2-space indented JSON with sorted keys.
pub fn render_created(user: &User) -> AppResult<String> {
    Ok(format!("Created user: {}", to_sorted_json(user)?))
}

/// Listing header followed by one line per user.
pub fn render_listing(users: &[User]) -> String {
    let mut rendered = String::from(LISTING_HEADER);
    for user in users {
        rendered.push('\n');
        rendered.push_str(&user.to_string());
    }
    rendered
}

fn to_sorted_json(user: &User) -> AppResult<String> {
    let sorted: BTreeMap<String, Value> = match serde_json::to_value(user)? {
        Value::Object(fields) => fields.into_iter().collect(),
        other => return Ok(serde_json::to_string_pretty(&other)?),
    };
    Ok(serde_json::to_string_pretty(&sorted)?)
}
