//! Calendar tag validation.
//!
//! A release tag has the form `v<YY><MM>.<digit>` where `YY` and `MM` are
//! the current UTC year and month, and must sort after the latest existing
//! tag.
use chrono::{DateTime, Utc};
use log::*;
use regex::Regex;

use crate::error::Result;

/// Builds the tag pattern anchored to the year and month of `now`.
pub fn tag_pattern(now: DateTime<Utc>) -> Result<Regex> {
    let prefix = now.format("%y%m").to_string();
    let re = Regex::new(&format!(r"^v{prefix}\.[0-9]$"))?;
    Ok(re)
}

/// Checks `candidate` against the current month's pattern and the latest tag.
pub fn validate_tag(candidate: &str, latest: &str) -> Result<bool> {
    validate_tag_at(candidate, latest, Utc::now())
}

/// Clock-injected form of [`validate_tag`].
pub fn validate_tag_at(
    candidate: &str,
    latest: &str,
    now: DateTime<Utc>,
) -> Result<bool> {
    let re = tag_pattern(now)?;

    if !re.is_match(candidate) {
        debug!("tag {candidate} does not match pattern {}", re.as_str());
        return Ok(false);
    }

    if candidate <= latest {
        debug!("tag {candidate} does not sort after latest tag {latest}");
        return Ok(false);
    }

    Ok(true)
}
