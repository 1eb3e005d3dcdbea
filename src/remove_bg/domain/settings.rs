use crate::domain::error::DomainError;

pub const DEFAULT_TOLERANCE: u8 = 15;
pub const DEFAULT_SAMPLE_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemovalSettings {
    /// Maximum per-channel distance from the background color, on the 0-255 scale.
    pub tolerance: u8,
    /// Side of the square sampled from the top-left corner.
    pub sample_size: u32,
}

impl RemovalSettings {
    pub fn new(tolerance: u8, sample_size: u32) -> Result<Self, DomainError> {
        if sample_size == 0 {
            return Err(DomainError::InvalidInput(
                "sample size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            sample_size,
        })
    }
}

impl Default for RemovalSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = RemovalSettings::default();
        assert_eq!(settings.tolerance, 15);
        assert_eq!(settings.sample_size, 5);
    }

    #[test]
    fn test_new_rejects_zero_sample_size() {
        let result = RemovalSettings::new(15, 0);
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_new_accepts_custom_values() {
        let settings = RemovalSettings::new(0, 1).unwrap();
        assert_eq!(settings, RemovalSettings { tolerance: 0, sample_size: 1 });
    }
}
