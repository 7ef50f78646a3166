// ABOUTME: Capability trait for surfacing transient user-facing messages
// ABOUTME: Severity tags plus a tracing-backed implementation for headless use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tag attached to a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An operation completed as requested
    Success,
    /// Neutral informational message
    Info,
    /// Something degraded but recoverable
    Warning,
    /// An operation failed
    Danger,
}

impl Severity {
    /// Get the severity name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability for surfacing transient messages to the user.
///
/// The formatting core never calls this itself; it is the contract an
/// embedding application injects wherever user feedback is needed, keeping
/// the core independently testable. An implementation owns its entire
/// display lifecycle (queueing, rendering, auto-dismissal) and returns
/// immediately: fire-and-forget, no result to observe.
pub trait Notifier {
    /// Surface `message` to the user with the given severity
    fn notify(&self, message: &str, severity: Severity);
}

/// [`Notifier`] that routes messages to `tracing` events.
///
/// `Success` and `Info` emit at info level, `Warning` at warn, `Danger` at
/// error. Suitable as a default in headless contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => tracing::info!(%severity, "{message}"),
            Severity::Warning => tracing::warn!(%severity, "{message}"),
            Severity::Danger => tracing::error!(%severity, "{message}"),
        }
    }
}
