use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl CompletionSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bound_output_and_fix_temperature() {
        let settings = CompletionSettings::default();
        assert_eq!(settings.model(), "gpt-4");
        assert_eq!(settings.max_tokens(), 1000);
        assert_eq!(settings.temperature(), 0.7);
    }

    #[test]
    fn new_keeps_fixed_parameters_for_other_models() {
        let settings = CompletionSettings::new("gpt-4o-mini");
        assert_eq!(settings.model(), "gpt-4o-mini");
        assert_eq!(settings.max_tokens(), DEFAULT_MAX_TOKENS);
    }
}
