use crate::domain::{CompletionSettings, HealthReport};

pub struct CheckHealthUseCase {
    settings: CompletionSettings,
}

impl CheckHealthUseCase {
    pub fn new(settings: CompletionSettings) -> Self {
        Self { settings }
    }

    /// Always healthy; credential state is deliberately not consulted.
    pub fn execute(&self) -> HealthReport {
        HealthReport::healthy(self.settings.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_configured_model() {
        let report = CheckHealthUseCase::new(CompletionSettings::new("gpt-4o")).execute();
        assert_eq!(report.status, "healthy");
        assert_eq!(report.model, "gpt-4o");
    }
}
