//! Partner logos shown in the footer.
//!
//! Loading happens in the webview (an `img` per logo); this module only
//! tracks each logo's outcome so a failure can be surfaced inline. It never
//! touches the scenario, so a broken logo cannot affect metrics or charts.

/// A remote logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoAsset {
    pub name: &'static str,
    pub url: &'static str,
}

pub const LOGOS: [LogoAsset; 2] = [
    LogoAsset {
        name: "Sustrend",
        url: "https://drive.google.com/uc?id=1vx_znPU2VfdkzeDtl91dlpw_p9mmu4dd",
    },
    LogoAsset {
        name: "TT GREEN Foods",
        url: "https://drive.google.com/uc?id=1uIQZQywjuQJz6Eokkj6dNSpBroJ8tQf8",
    },
];

/// Display width of each logo, px.
pub const LOGO_WIDTH: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Load outcome per entry of [`LOGOS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoBoard {
    statuses: [LogoStatus; 2],
}

impl LogoBoard {
    pub fn new() -> Self {
        Self {
            statuses: [LogoStatus::Loading, LogoStatus::Loading],
        }
    }

    pub fn status(&self, idx: usize) -> Option<&LogoStatus> {
        self.statuses.get(idx)
    }

    pub fn mark_loaded(&mut self, idx: usize) {
        if let Some(slot) = self.statuses.get_mut(idx) {
            *slot = LogoStatus::Ready;
        }
    }

    pub fn mark_failed(&mut self, idx: usize, reason: impl Into<String>) {
        if let Some(slot) = self.statuses.get_mut(idx) {
            let reason = reason.into();
            tracing::warn!(logo = LOGOS[idx].name, %reason, "logo failed to load");
            *slot = LogoStatus::Failed(reason);
        }
    }

    pub fn is_failed(&self, idx: usize) -> bool {
        matches!(self.status(idx), Some(LogoStatus::Failed(_)))
    }

    /// `(logo, reason)` for every failed logo.
    pub fn failures(&self) -> Vec<(&'static LogoAsset, &str)> {
        LOGOS
            .iter()
            .zip(&self.statuses)
            .filter_map(|(logo, status)| match status {
                LogoStatus::Failed(reason) => Some((logo, reason.as_str())),
                _ => None,
            })
            .collect()
    }

    /// One line naming each failed logo and why, or `None` when nothing failed.
    pub fn error_summary(&self) -> Option<String> {
        let failures = self.failures();
        if failures.is_empty() {
            return None;
        }
        Some(
            failures
                .into_iter()
                .map(|(logo, reason)| format!("{} ({reason}): {}", logo.name, logo.url))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl Default for LogoBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_without_errors() {
        let board = LogoBoard::new();
        assert_eq!(board.status(0), Some(&LogoStatus::Loading));
        assert!(!board.is_failed(0) && !board.is_failed(1));
        assert!(board.error_summary().is_none());
    }

    #[test]
    fn failure_is_reported_with_logo_name() {
        let mut board = LogoBoard::new();
        board.mark_loaded(0);
        board.mark_failed(1, "HTTP 404");
        assert_eq!(board.status(0), Some(&LogoStatus::Ready));
        assert!(board.is_failed(1));
        let summary = board.error_summary().unwrap();
        assert!(summary.contains("TT GREEN Foods"));
        assert!(summary.contains("HTTP 404"));
        assert!(!summary.contains("Sustrend"));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut board = LogoBoard::new();
        board.mark_failed(7, "nope");
        assert!(board.failures().is_empty());
    }
}
