use crate::config::DEFAULT_HOLDER;
use crate::error::{Result, UpdaterError};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// A `(c) YYYY` or `(c) YYYY-YYYY` notice found in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyrightNotice {
    pub start_year: i32,
    pub end_year: Option<i32>,
}

impl CopyrightNotice {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let start_year = caps.get(1)?.as_str().parse().ok()?;
        let end_year = caps.get(2).and_then(|m| m.as_str().parse().ok());
        Some(Self {
            start_year,
            end_year,
        })
    }

    pub fn has_range(&self) -> bool {
        self.end_year.is_some()
    }

    /// A single-year notice for the current year stays as written; everything
    /// else is rewritten to a range ending in `current_year`.
    pub fn needs_rewrite(&self, current_year: i32) -> bool {
        self.has_range() || self.start_year != current_year
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeChange {
    pub original: String,
    pub replacement: String,
}

#[derive(Debug, Clone)]
pub struct Rewrite {
    pub content: String,
    pub changes: Vec<NoticeChange>,
    pub notices_found: usize,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

pub struct NoticeRewriter {
    pattern: Regex,
    holder: String,
}

impl NoticeRewriter {
    pub fn new(holder: &str) -> Result<Self> {
        let holder = holder.trim();
        if holder.is_empty() {
            return Err(UpdaterError::Config {
                message: "Copyright holder must not be empty".to_string(),
            });
        }

        // An existing holder (the configured one or the default) is consumed so
        // the rewritten notice carries exactly one holder.
        let mut holders = vec![holder_pattern(holder)];
        if holder != DEFAULT_HOLDER {
            holders.push(holder_pattern(DEFAULT_HOLDER));
        }
        let pattern = Regex::new(&format!(
            r"\(c\) ([0-9]{{4}})(?:-([0-9]{{4}}))?(?:[ \t]+(?:{}))?",
            holders.join("|")
        ))?;

        Ok(Self {
            pattern,
            holder: holder.to_string(),
        })
    }

    pub fn with_default_holder() -> Result<Self> {
        Self::new(DEFAULT_HOLDER)
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn find_notices(&self, content: &str) -> Vec<CopyrightNotice> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| CopyrightNotice::from_captures(&caps))
            .collect()
    }

    pub fn format_notice(&self, start_year: i32, current_year: i32) -> String {
        format!("(c) {}-{} {}", start_year, current_year, self.holder)
    }

    pub fn rewrite(&self, content: &str, current_year: i32) -> Rewrite {
        let mut changes = Vec::new();
        let mut notices_found = 0;

        let updated = self.pattern.replace_all(content, |caps: &Captures<'_>| {
            let original = &caps[0];
            notices_found += 1;

            let Some(notice) = CopyrightNotice::from_captures(caps) else {
                return original.to_string();
            };
            log::debug!("Match is \"{}\"", original);

            if !notice.needs_rewrite(current_year) {
                return original.to_string();
            }

            let replacement = self.format_notice(notice.start_year, current_year);
            if replacement != original {
                log::debug!("Replacing \"{}\" with \"{}\"", original, replacement);
                changes.push(NoticeChange {
                    original: original.to_string(),
                    replacement: replacement.clone(),
                });
            }
            replacement
        });

        Rewrite {
            content: updated.into_owned(),
            changes,
            notices_found,
        }
    }
}

/// Matches `holder` literally; a trailing period is optional.
fn holder_pattern(holder: &str) -> String {
    match holder.strip_suffix('.') {
        Some(stem) => format!(r"{}\.?", regex::escape(stem)),
        None => regex::escape(holder),
    }
}

pub fn validate_year(year: i32) -> Result<i32> {
    if (1000..=9999).contains(&year) {
        Ok(year)
    } else {
        Err(UpdaterError::InvalidYear { year })
    }
}
