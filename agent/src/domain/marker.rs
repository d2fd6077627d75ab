//! The installer-marker state machine.
//!
//! A marker file left by the installer/uninstaller encodes install state in
//! three observable properties: existence, last-write age, and leading
//! content bytes. `classify` is the pure half of the decision engine — it
//! maps a sampled observation to one of five dispositions. Sampling the
//! filesystem and acting on the disposition live in
//! `application::services::legacy`.

use std::time::Duration;

/// A marker younger than this was placed by an installer running right now;
/// anything older is the leftover of a previous cycle.
pub const MARKER_FRESH_WINDOW: Duration = Duration::from_secs(10);

/// Content prefixes written by current (controller-aware) installers.
///
/// Opaque provenance sentinels — the two values differ only in which
/// packaging pipeline produced them and carry no further semantics.
pub const MODERN_MARKER_PREFIXES: [&str; 2] = ["argus-setup/", "argus-bundle/"];

/// What was observed about the marker file at sampling time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerSample {
    /// No marker file on disk.
    Absent,
    /// Marker file exists.
    Present {
        /// Time since last write; `None` when the timestamp cannot be read.
        age: Option<Duration>,
        /// First line of the file; `None` when the content cannot be read.
        head: Option<String>,
    },
}

/// Outcome of classifying a marker sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerDisposition {
    /// No marker at all.
    Absent,
    /// Marker exists but its timestamp cannot be read.
    TimestampUnreadable,
    /// Marker older than the freshness window.
    Stale,
    /// Fresh marker written by a controller-aware installer.
    ModernInstaller,
    /// Fresh marker without a recognized prefix: a pre-controller installer.
    PreController,
}

impl MarkerDisposition {
    /// Human-readable reason logged with every decision.
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            MarkerDisposition::Absent => "absent, assume fresh install",
            MarkerDisposition::TimestampUnreadable => "strange, assume bad file",
            MarkerDisposition::Stale => "too old, assume fresh install",
            MarkerDisposition::ModernInstaller => "from 2.1+, not applicable",
            MarkerDisposition::PreController => "from 2.0 or earlier",
        }
    }

    /// Whether this disposition falls through to the shared
    /// create-legacy-file path. Only a modern installer marker does not.
    #[must_use]
    pub fn legacy_eligible(self) -> bool {
        !matches!(self, MarkerDisposition::ModernInstaller)
    }
}

/// Classify a marker sample.
///
/// Pure function; the decision order mirrors how the properties degrade:
/// existence first, then the timestamp, then age, then content. Unreadable
/// content is treated like a pre-controller marker — only a positively
/// recognized modern prefix suppresses legacy mode.
#[must_use]
pub fn classify(sample: &MarkerSample) -> MarkerDisposition {
    let MarkerSample::Present { age, head } = sample else {
        return MarkerDisposition::Absent;
    };
    let Some(age) = age else {
        return MarkerDisposition::TimestampUnreadable;
    };
    if *age > MARKER_FRESH_WINDOW {
        return MarkerDisposition::Stale;
    }
    match head {
        Some(head) if MODERN_MARKER_PREFIXES.iter().any(|p| head.starts_with(p)) => {
            MarkerDisposition::ModernInstaller
        }
        _ => MarkerDisposition::PreController,
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
