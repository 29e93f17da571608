//! Label feedback for copy activations
//!
//! A control's label cycles between the resting label and a transient
//! acknowledgement. Both clipboard outcomes map to a defined acknowledgement;
//! no outcome is dropped on the floor.

use crate::options::EnhanceOptions;

/// Result of one clipboard write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The write resolved; the text is on the clipboard
    Copied,
    /// The write was rejected or the clipboard is unavailable
    Failed,
}

/// Transient label state applied to a control after a write resolves
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Label to show immediately
    pub label: String,
    /// Delay before reverting to the resting label
    pub revert_after_ms: u32,
}

impl CopyOutcome {
    /// Map this outcome to the acknowledgement the control should display
    pub fn acknowledge(self, options: &EnhanceOptions) -> Acknowledgement {
        let label = match self {
            Self::Copied => {
                tracing::debug!("clipboard write succeeded");
                options.copied_label.clone()
            }
            Self::Failed => {
                tracing::warn!("clipboard write failed");
                options.failed_label.clone()
            }
        };
        Acknowledgement {
            label,
            revert_after_ms: options.revert_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_maps_to_copied_label() {
        let options = EnhanceOptions::new();
        let ack = CopyOutcome::Copied.acknowledge(&options);
        assert_eq!(ack.label, "Copied!");
        assert_eq!(ack.revert_after_ms, 2000);
    }

    #[test]
    fn test_failed_maps_to_failed_label() {
        let options = EnhanceOptions::new();
        let ack = CopyOutcome::Failed.acknowledge(&options);
        assert_eq!(ack.label, "Copy failed");
        assert_eq!(ack.revert_after_ms, 2000);
    }

    #[test]
    fn test_acknowledgement_follows_custom_options() {
        let options = EnhanceOptions::builder()
            .copied_label("In the clipboard")
            .failed_label("Nope")
            .revert_delay_ms(750)
            .build();
        assert_eq!(
            CopyOutcome::Copied.acknowledge(&options),
            Acknowledgement {
                label: "In the clipboard".to_string(),
                revert_after_ms: 750,
            }
        );
        assert_eq!(CopyOutcome::Failed.acknowledge(&options).label, "Nope");
    }
}
