use super::executor::run_pass;
use super::BLOCK_SIZE;
use crate::io::WipeTarget;
use crate::policies::{OverwriteRule, WipePolicy};
use crate::report::ReportLog;
use crate::ui::progress::ProgressBar;
use crate::{WipeError, WipeResult};

/// Session progress through the selected policy.
///
/// `Completed` and `Aborted` are terminal; a failed pass is never retried
/// and an aborted session never resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running { pass: usize },
    Completed,
    Aborted { reason: String },
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Completed | SessionState::Aborted { .. }
        )
    }
}

/// One wipe of one target with one policy, driven to a terminal state.
///
/// Owns the block buffer for the lifetime of the session and emits the
/// chronological audit trail through the report log.
pub struct WipeSession<'a> {
    target: WipeTarget,
    policy: &'static WipePolicy,
    log: &'a mut ReportLog,
    show_progress: bool,
}

impl<'a> WipeSession<'a> {
    pub fn new(
        target: WipeTarget,
        policy: &'static WipePolicy,
        log: &'a mut ReportLog,
    ) -> Self {
        Self {
            target,
            policy,
            log,
            show_progress: false,
        }
    }

    /// Render a per-pass progress bar while writing.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Run every pass of the policy in order.
    ///
    /// Emits the session audit events, syncs the device after the final
    /// pass, and returns the fatal error when the session aborts. A
    /// zero-size target aborts before any write call.
    pub fn run(mut self) -> WipeResult<()> {
        let passes = self.policy.passes();
        let size = self.target.size();
        let mut block = vec![0u8; BLOCK_SIZE];
        let mut failure: Option<WipeError> = None;
        let mut state = SessionState::Idle;

        loop {
            state = match state {
                SessionState::Idle => {
                    self.log.log("wipe session start");
                    self.log
                        .log(format!("policy selected: {}", self.policy.name));
                    self.log.log(format!("passes: {}", passes));
                    self.log
                        .log(format!("target: {}", self.target.path().display()));
                    self.log.log(format!("target size: {} bytes", size));

                    if size == 0 {
                        self.log.log("invalid target size");
                        failure = Some(WipeError::InvalidTargetSize(
                            self.target.path().display().to_string(),
                        ));
                        SessionState::Aborted {
                            reason: "invalid target size".to_string(),
                        }
                    } else {
                        SessionState::Running { pass: 0 }
                    }
                }

                SessionState::Running { pass } => {
                    let rule = &self.policy.rules[pass];

                    if rule.is_random() {
                        self.log.log(format!(
                            "scheduling random overwrite block for pass {}",
                            pass + 1
                        ));
                    } else {
                        self.log.log(format!(
                            "building overwrite block for pass {}",
                            pass + 1
                        ));
                    }
                    self.log
                        .log(format!("pass {}/{}: start", pass + 1, passes));

                    match self.execute_pass(rule, &mut block) {
                        Ok(()) => {
                            self.log
                                .log(format!("pass {}/{}: done", pass + 1, passes));

                            if pass + 1 == passes {
                                // Final pass: push everything down to the
                                // device before declaring completion.
                                match self.target.sync() {
                                    Ok(()) => SessionState::Completed,
                                    Err(e) => {
                                        let reason = e.to_string();
                                        failure = Some(e);
                                        SessionState::Aborted { reason }
                                    }
                                }
                            } else {
                                SessionState::Running { pass: pass + 1 }
                            }
                        }
                        Err(e) => {
                            let reason = e.to_string();
                            failure = Some(e);
                            SessionState::Aborted { reason }
                        }
                    }
                }

                SessionState::Completed => {
                    self.log.log("wipe session done");
                    return Ok(());
                }

                SessionState::Aborted { reason } => {
                    self.log.log(format!("wipe session aborted: {}", reason));
                    return Err(failure.unwrap_or_else(|| {
                        WipeError::Io(std::io::Error::other(reason))
                    }));
                }
            };
        }
    }

    fn execute_pass(
        &mut self,
        rule: &OverwriteRule,
        block: &mut [u8],
    ) -> WipeResult<()> {
        let size = self.target.size();

        if !self.show_progress {
            return run_pass(self.target.device_mut(), size, rule, block, |_| {});
        }

        let mut bar = ProgressBar::new(48);
        let mut last_render = 0u64;
        let result = run_pass(self.target.device_mut(), size, rule, block, |written| {
            // Render every 50MB of progress and at completion.
            if written - last_render >= 50 * 1024 * 1024 || written >= size {
                last_render = written;
                let pct = (written as f64 / size as f64) * 100.0;
                bar.render(pct, Some(written), Some(size));
            }
        });
        if result.is_ok() {
            bar.finish();
        }
        result
    }
}
