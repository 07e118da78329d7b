//! Generation pipeline: fans out icon tasks and collects failures.
//!
//! Platforms run strictly one after another so their console sections stay
//! readable; within a platform every icon renders concurrently. A failed
//! icon never aborts its siblings or later platforms, it is reported and
//! counted in the run report instead.

use tokio::task::JoinHandle;

use crate::cli::OutputManager;
use crate::error::{Error, Result};
use crate::platform::{IconLayer, PlatformKind, PlatformSpec, ResolvedPlatform};
use crate::render::{self, GenerationTask};
use crate::settings::Settings;
use crate::source;

/// One icon that failed to render.
#[derive(Debug)]
pub struct TaskFailure {
    /// Catalog name of the failed icon.
    pub name: String,
    /// What went wrong.
    pub error: Error,
}

/// Outcome of one platform's generation pass.
#[derive(Debug)]
pub struct PlatformReport {
    /// Platform the pass ran for.
    pub kind: PlatformKind,
    /// Number of icons the catalog asked for.
    pub attempted: usize,
    /// Icons that failed, in catalog order.
    pub failures: Vec<TaskFailure>,
}

impl PlatformReport {
    /// Number of icons written successfully.
    pub fn completed(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

/// Outcome of a whole generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-platform outcomes, in generation order.
    pub platforms: Vec<PlatformReport>,
}

impl RunReport {
    /// Total icons attempted across all platforms.
    pub fn attempted(&self) -> usize {
        self.platforms.iter().map(|p| p.attempted).sum()
    }

    /// Total icons written successfully.
    pub fn completed(&self) -> usize {
        self.platforms.iter().map(|p| p.completed()).sum()
    }

    /// Total icons that failed.
    pub fn failed(&self) -> usize {
        self.platforms.iter().map(|p| p.failures.len()).sum()
    }

    /// True when every attempted icon was written.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit code for this run: `0` when clean, `2` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 2 }
    }
}

/// Drives icon generation across every installed platform.
pub struct Pipeline {
    settings: Settings,
    output: OutputManager,
}

impl Pipeline {
    /// Creates a pipeline over the given settings and console.
    pub fn new(settings: Settings, output: OutputManager) -> Self {
        Pipeline { settings, output }
    }

    /// Generates icons for every present platform and reports the outcome.
    ///
    /// Absent platforms are skipped silently; an installed platform with a
    /// broken source still lets the remaining platforms run.
    pub async fn generate_all(&self, platforms: &[ResolvedPlatform]) -> RunReport {
        let mut report = RunReport::default();
        for resolved in platforms {
            if !resolved.is_present {
                log::debug!("skipping {}: platform not added", resolved.spec.kind);
                continue;
            }
            report
                .platforms
                .push(self.generate_platform(&resolved.spec).await);
        }

        if report.is_clean() {
            self.output
                .success(&format!("{} icons generated", report.completed()));
        } else {
            self.output.error(&format!(
                "{} of {} icons failed",
                report.failed(),
                report.attempted()
            ));
        }
        report
    }

    async fn generate_platform(&self, spec: &PlatformSpec) -> PlatformReport {
        self.output
            .section(&format!("Generating Icons for {}", spec.kind));

        let tasks = self.build_tasks(spec).await;
        let attempted = tasks.len();

        // Spawn everything, then collect in catalog order so failures pair
        // with the right names.
        let mut handles: Vec<(String, JoinHandle<Result<()>>)> = Vec::with_capacity(attempted);
        for task in tasks {
            let name = task.icon.name.clone();
            let handle = tokio::spawn(render::generate(task, self.output.clone()));
            handles.push((name, handle));
        }

        let mut failures = Vec::new();
        for (name, handle) in handles {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(Error::TaskFailed(format!("{name}: {join_error}"))),
            };
            if let Err(error) = outcome {
                self.output.error(&format!("{name}: {error}"));
                failures.push(TaskFailure { name, error });
            }
        }

        PlatformReport {
            kind: spec.kind,
            attempted,
            failures,
        }
    }

    /// Expands a platform catalog into concrete tasks with resolved sources.
    ///
    /// Source overrides are resolved once per source kind, not per icon, so
    /// the override check does not hit the filesystem dozens of times.
    async fn build_tasks(&self, spec: &PlatformSpec) -> Vec<GenerationTask> {
        let mut tasks = Vec::with_capacity(spec.task_count());

        let base = source::resolve(&self.settings.icon_file, spec.kind).await;
        for icon in &spec.icons {
            tasks.push(GenerationTask {
                icon: icon.clone(),
                source: base.clone(),
                dest: spec.output_dir.join(&icon.name),
            });
        }

        if !spec.adaptive_icons.is_empty() {
            let background = source::resolve(&self.settings.android_background, spec.kind).await;
            let foreground = source::resolve(&self.settings.android_foreground, spec.kind).await;
            for adaptive in &spec.adaptive_icons {
                let layer_source = match adaptive.layer {
                    IconLayer::Background => background.clone(),
                    IconLayer::Foreground => foreground.clone(),
                };
                tasks.push(GenerationTask {
                    icon: adaptive.icon.clone(),
                    source: layer_source,
                    dest: spec.output_dir.join(&adaptive.icon.name),
                });
            }
        }

        if !spec.notification_icons.is_empty() {
            let notification =
                source::resolve(&self.settings.android_notification, spec.kind).await;
            for icon in &spec.notification_icons {
                tasks.push(GenerationTask {
                    icon: icon.clone(),
                    source: notification.clone(),
                    dest: spec.output_dir.join(&icon.name),
                });
            }
        }

        tasks
    }
}
