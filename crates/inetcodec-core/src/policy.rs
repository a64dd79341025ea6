//! IPv6 zero-run abbreviation policy.
//!
//! Formatting an IPv6 value collapses one run of zero hextets into `::`.
//! Which run is chosen is configurable:
//! - `FirstRun` (default): the first run of one or more zero hextets,
//!   a single zero hextet included.
//! - `LongestRun`: RFC 5952 canonical form. The longest run wins, the
//!   leftmost on ties, and a lone zero hextet is never abbreviated.
//!
//! Both policies produce text that parses back to the same value.

/// Which zero run an IPv6 formatter collapses into `::`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroRunPolicy {
    /// Collapse the first zero run, whatever its length.
    #[default]
    FirstRun,
    /// Collapse the longest zero run of two or more hextets (RFC 5952).
    LongestRun,
}

impl ZeroRunPolicy {
    /// Parse from string (case-insensitive). Unknown names yield `None`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_run" | "first-run" | "compat" | "default" => Some(Self::FirstRun),
            "longest" | "longest_run" | "longest-run" | "rfc5952" | "canonical" => {
                Some(Self::LongestRun)
            }
            _ => None,
        }
    }

    /// Stable lowercase name, as written in fixtures and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstRun => "first_run",
            Self::LongestRun => "longest_run",
        }
    }

    /// Locates the zero run to collapse as `(start, len)`, or `None`.
    #[must_use]
    pub fn select(self, segments: &[u16]) -> Option<(usize, usize)> {
        match self {
            Self::FirstRun => first_zero_run(segments),
            Self::LongestRun => longest_zero_run(segments),
        }
    }
}

fn first_zero_run(segments: &[u16]) -> Option<(usize, usize)> {
    let start = segments.iter().position(|&g| g == 0)?;
    let len = segments[start..].iter().take_while(|&&g| g == 0).count();
    Some((start, len))
}

fn longest_zero_run(segments: &[u16]) -> Option<(usize, usize)> {
    let mut best_start: usize = 0;
    let mut best_len: usize = 0;
    let mut cur_start: usize = 0;
    let mut cur_len: usize = 0;

    for (i, &g) in segments.iter().enumerate() {
        if g == 0 {
            if cur_len == 0 {
                cur_start = i;
            }
            cur_len += 1;
        } else {
            if cur_len > best_len {
                best_start = cur_start;
                best_len = cur_len;
            }
            cur_len = 0;
        }
    }
    if cur_len > best_len {
        best_start = cur_start;
        best_len = cur_len;
    }

    // A single zero group is written out, not abbreviated.
    (best_len > 1).then_some((best_start, best_len))
}
