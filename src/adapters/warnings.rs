use crate::domain::ports::WarningSink;

pub const DEFAULT_MAX_WARNINGS: usize = 10;

/// 頁面警告列的內容，最多保留 `max_warnings` 則
#[derive(Debug, Clone)]
pub struct WarningsData {
    warnings: Vec<String>,
    max_warnings: usize,
}

impl WarningsData {
    pub fn new(max_warnings: usize) -> Self {
        Self {
            warnings: Vec::new(),
            max_warnings,
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn clear(&mut self) {
        self.warnings.clear();
    }
}

impl Default for WarningsData {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WARNINGS)
    }
}

impl WarningSink for WarningsData {
    fn add_warning(&mut self, message: &str) {
        if self.warnings.len() >= self.max_warnings {
            tracing::debug!("Warning limit ({}) reached, dropping: {}", self.max_warnings, message);
            return;
        }
        tracing::warn!("{}", message);
        self.warnings.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_clear() {
        let mut data = WarningsData::default();
        data.add_warning("first");
        data.add_warning("second");
        assert_eq!(data.warnings(), &["first".to_string(), "second".to_string()]);

        data.clear();
        assert!(data.is_empty());
    }

    #[test]
    fn test_limit_drops_extra_warnings() {
        let mut data = WarningsData::new(2);
        for i in 0..5 {
            data.add_warning(&format!("warning {}", i));
        }
        assert_eq!(data.len(), 2);
        assert_eq!(data.warnings()[1], "warning 1");
    }
}
