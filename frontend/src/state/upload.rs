//! Upload lifecycle and the progress shown while the server works.

use std::future::Future;

use crate::config::{SCRIPTED_COMPRESS_HOLD_MS, SCRIPTED_REDIRECT_HOLD_MS};
use crate::{AppError, AppResult, JobStatus, ProgressReport};

/// Where the dashboard is in its single upload attempt.
///
/// `Idle → Selecting ⇄ Selecting → Submitting → Progressing → Redirecting`,
/// falling back to `Idle`/`Selecting` on any error.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Selecting,
    Submitting,
    Progressing,
    Redirecting,
}

impl UploadPhase {
    /// Resting phase for a selection of `count` files.
    pub fn for_selection(count: usize) -> Self {
        if count == 0 {
            UploadPhase::Idle
        } else {
            UploadPhase::Selecting
        }
    }

    /// A request is in flight or the page is about to leave.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            UploadPhase::Submitting | UploadPhase::Progressing | UploadPhase::Redirecting
        )
    }
}

/// Progress bar state.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressSnapshot {
    pub percent: u8,
    pub label: String,
}

impl ProgressSnapshot {
    pub fn new(percent: u8, label: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            label: label.into(),
        }
    }

    /// Shown as soon as the request leaves.
    pub fn uploading() -> Self {
        Self::new(20, "Uploading files...")
    }

    pub fn compressing(percent: u8) -> Self {
        Self::new(percent, "Compressing files...")
    }

    pub fn complete() -> Self {
        Self::new(100, "Compression complete! Redirecting...")
    }

    /// CSS width for the progress bar.
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// One step of the legacy progress script: what to show and how long to
/// keep it before the next step.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedStep {
    pub snapshot: ProgressSnapshot,
    pub hold_ms: u32,
}

/// Steps shown after the server accepts an upload that has no progress
/// endpoint. These are timed, not reported: the server may finish earlier
/// or later.
pub fn scripted_progress() -> Vec<ScriptedStep> {
    vec![
        ScriptedStep {
            snapshot: ProgressSnapshot::new(60, "Files uploaded, starting compression..."),
            hold_ms: SCRIPTED_COMPRESS_HOLD_MS,
        },
        ScriptedStep {
            snapshot: ProgressSnapshot::complete(),
            hold_ms: SCRIPTED_REDIRECT_HOLD_MS,
        },
    ]
}

/// What a progress report means for the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum PollOutcome {
    Pending(ProgressSnapshot),
    Done {
        snapshot: ProgressSnapshot,
        redirect_url: Option<String>,
    },
    Failed(AppError),
}

/// Folds progress reports into a bar that only moves forward.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    percent: u8,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self {
            percent: ProgressSnapshot::uploading().percent,
        }
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn apply(&mut self, report: ProgressReport) -> PollOutcome {
        match report.status {
            JobStatus::Processing => {
                let reported = report.progress.unwrap_or(0.0).clamp(0.0, 100.0) as u8;
                // 100 is only shown once the job is done
                self.percent = self.percent.max(reported).min(99);
                PollOutcome::Pending(ProgressSnapshot::compressing(self.percent))
            }
            JobStatus::Completed => {
                self.percent = 100;
                PollOutcome::Done {
                    snapshot: ProgressSnapshot::complete(),
                    redirect_url: report.redirect_url.filter(|u| !u.is_empty()),
                }
            }
            JobStatus::Error => {
                let message = report
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Compression failed".to_string());
                PollOutcome::Failed(AppError::Compression(message))
            }
        }
    }
}

/// Fetches reports until the job settles or `budget` polls are spent.
///
/// `sleep` runs between pending reports. A failed fetch ends the loop with
/// its error. A completed report without a redirect falls back to
/// `fallback_redirect`.
pub async fn poll_until_done<Fetch, FetchFut, Sleep, SleepFut>(
    budget: u32,
    fallback_redirect: String,
    mut fetch: Fetch,
    mut sleep: Sleep,
    show: impl Fn(ProgressSnapshot),
) -> AppResult<String>
where
    Fetch: FnMut() -> FetchFut,
    FetchFut: Future<Output = AppResult<ProgressReport>>,
    Sleep: FnMut() -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let mut tracker = ProgressTracker::new();

    for attempt in 1..=budget {
        let report = fetch().await?;
        match tracker.apply(report) {
            PollOutcome::Pending(snapshot) => {
                log::debug!("Compression at {}% (poll {})", snapshot.percent, attempt);
                show(snapshot);
                sleep().await;
            }
            PollOutcome::Done {
                snapshot,
                redirect_url,
            } => {
                show(snapshot);
                return Ok(redirect_url.unwrap_or(fallback_redirect));
            }
            PollOutcome::Failed(err) => return Err(err),
        }
    }

    log::warn!("No completed report after {} polls", budget);
    Err(AppError::ProgressTimeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    fn report(status: JobStatus, progress: Option<f64>) -> ProgressReport {
        ProgressReport {
            status,
            progress,
            redirect_url: None,
            message: None,
        }
    }

    #[test]
    fn test_phase_for_selection() {
        assert_eq!(UploadPhase::for_selection(0), UploadPhase::Idle);
        assert_eq!(UploadPhase::for_selection(3), UploadPhase::Selecting);
        assert!(!UploadPhase::Selecting.is_busy());
        assert!(UploadPhase::Submitting.is_busy());
        assert!(UploadPhase::Redirecting.is_busy());
    }

    #[test]
    fn test_scripted_sequence() {
        let steps = scripted_progress();
        let percents: Vec<u8> = steps.iter().map(|s| s.snapshot.percent).collect();
        assert_eq!(percents, [60, 100]);

        let total_hold: u32 = steps.iter().map(|s| s.hold_ms).sum();
        assert_eq!(total_hold, 3_000);
        assert_eq!(ProgressSnapshot::uploading().percent, 20);
    }

    #[test]
    fn test_tracker_never_moves_backwards() {
        let mut tracker = ProgressTracker::new();

        assert_eq!(
            tracker.apply(report(JobStatus::Processing, Some(50.0))),
            PollOutcome::Pending(ProgressSnapshot::compressing(50))
        );
        assert_eq!(
            tracker.apply(report(JobStatus::Processing, Some(30.0))),
            PollOutcome::Pending(ProgressSnapshot::compressing(50))
        );
        // absent progress keeps the current value
        tracker.apply(report(JobStatus::Processing, None));
        assert_eq!(tracker.percent(), 50);
    }

    #[test]
    fn test_tracker_holds_below_complete_while_processing() {
        let mut tracker = ProgressTracker::new();
        tracker.apply(report(JobStatus::Processing, Some(250.0)));
        assert_eq!(tracker.percent(), 99);
    }

    #[test]
    fn test_tracker_completed() {
        let mut tracker = ProgressTracker::new();
        let mut done = report(JobStatus::Completed, Some(100.0));
        done.redirect_url = Some("/compression/results/3/".to_string());

        assert_eq!(
            tracker.apply(done),
            PollOutcome::Done {
                snapshot: ProgressSnapshot::complete(),
                redirect_url: Some("/compression/results/3/".to_string()),
            }
        );
        assert_eq!(tracker.percent(), 100);
    }

    #[test]
    fn test_tracker_error_message() {
        let mut tracker = ProgressTracker::new();
        let mut failed = report(JobStatus::Error, None);
        failed.message = Some("File not found".to_string());
        assert_eq!(
            tracker.apply(failed),
            PollOutcome::Failed(AppError::Compression("File not found".to_string()))
        );

        let outcome = tracker.apply(report(JobStatus::Error, None));
        assert_eq!(
            outcome,
            PollOutcome::Failed(AppError::Compression("Compression failed".to_string()))
        );
    }

    /// Runs the poll loop over canned fetch results, counting fetches and
    /// sleeps.
    fn run_polls(
        budget: u32,
        replies: Vec<AppResult<ProgressReport>>,
    ) -> (AppResult<String>, u32, u32, Vec<u8>) {
        let replies = RefCell::new(VecDeque::from(replies));
        let fetches = Cell::new(0);
        let sleeps = Cell::new(0);
        let shown = RefCell::new(Vec::new());

        let result = block_on(poll_until_done(
            budget,
            "/compression/results/1/".to_string(),
            || {
                fetches.set(fetches.get() + 1);
                let reply = replies
                    .borrow_mut()
                    .pop_front()
                    .unwrap_or_else(|| Ok(report(JobStatus::Processing, Some(40.0))));
                async move { reply }
            },
            || {
                sleeps.set(sleeps.get() + 1);
                async {}
            },
            |snapshot| shown.borrow_mut().push(snapshot.percent),
        ));

        (result, fetches.get(), sleeps.get(), shown.into_inner())
    }

    #[test]
    fn test_polls_until_completed() {
        let mut done = report(JobStatus::Completed, None);
        done.redirect_url = Some("/compression/results/9/".to_string());

        let (result, fetches, sleeps, shown) = run_polls(
            10,
            vec![
                Ok(report(JobStatus::Processing, Some(30.0))),
                Ok(report(JobStatus::Processing, Some(70.0))),
                Ok(done),
            ],
        );

        assert_eq!(result, Ok("/compression/results/9/".to_string()));
        assert_eq!(fetches, 3);
        assert_eq!(sleeps, 2);
        assert_eq!(shown, [30, 70, 100]);
    }

    #[test]
    fn test_completed_without_redirect_uses_upload_redirect() {
        let (result, _, _, shown) = run_polls(5, vec![Ok(report(JobStatus::Completed, None))]);
        assert_eq!(result, Ok("/compression/results/1/".to_string()));
        assert_eq!(shown, [100]);
    }

    #[test]
    fn test_poll_budget_exhausted() {
        let (result, fetches, sleeps, _) = run_polls(3, Vec::new());
        assert_eq!(result, Err(AppError::ProgressTimeout));
        assert_eq!(fetches, 3);
        assert_eq!(sleeps, 3);
    }

    #[test]
    fn test_failed_fetch_stops_polling() {
        let (result, fetches, sleeps, shown) = run_polls(
            10,
            vec![
                Ok(report(JobStatus::Processing, Some(50.0))),
                Err(AppError::Network("connection reset".to_string())),
                Ok(report(JobStatus::Completed, None)),
            ],
        );

        assert_eq!(result, Err(AppError::Network("connection reset".to_string())));
        assert_eq!(fetches, 2);
        assert_eq!(sleeps, 1);
        assert_eq!(shown, [50]);
    }

    #[test]
    fn test_job_error_stops_polling() {
        let (result, fetches, _, _) = run_polls(10, vec![Ok(report(JobStatus::Error, None))]);
        assert_eq!(
            result,
            Err(AppError::Compression("Compression failed".to_string()))
        );
        assert_eq!(fetches, 1);
    }
}
