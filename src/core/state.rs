#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub ordinal: usize,
    pub name: &'static str,
    pub status: StepStatus,
    pub detail: String,
}

/// Outcome of every step in the order they ran.
#[derive(Debug, Default)]
pub struct RunState {
    pub target: String,
    pub reports: Vec<StepReport>,
}

impl RunState {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            reports: Vec::new(),
        }
    }

    pub fn record(&mut self, report: StepReport) {
        match report.status {
            StepStatus::Succeeded => {
                tracing::info!(
                    "Step {} ({}) succeeded: {}",
                    report.ordinal,
                    report.name,
                    report.detail
                )
            }
            StepStatus::Failed => {
                tracing::info!(
                    "Step {} ({}) failed: {}",
                    report.ordinal,
                    report.name,
                    report.detail
                )
            }
        }
        self.reports.push(report);
    }

    #[cfg(test)]
    pub fn status_of(&self, name: &str) -> Option<StepStatus> {
        self.reports
            .iter()
            .find(|report| report.name == name)
            .map(|report| report.status)
    }

    pub fn succeeded(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.status == StepStatus::Succeeded)
            .count()
    }
}
