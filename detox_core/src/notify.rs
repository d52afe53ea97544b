//! Best-effort notification sink for treatment outcomes.

use crate::Result;
use serde::Serialize;
use std::fmt;

/// Outcome notice emitted once per treatment pass
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Treatment removed at least one affliction
    DetoxComplete { subject: String, removed: usize },
    /// Treatment ran but found nothing to remove
    NothingToTreat { subject: String },
    /// Treatment was requested for a subject without a health record
    MissingHealthRecord { subject: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DetoxComplete { subject, removed } => write!(
                f,
                "Detox complete for {}: removed {} addiction/withdrawal/tolerance conditions",
                subject, removed
            ),
            Notice::NothingToTreat { subject } => {
                write!(f, "No addictions found on {} during detox cycle", subject)
            }
            Notice::MissingHealthRecord { subject } => {
                write!(f, "Cannot detox {}: no health record", subject)
            }
        }
    }
}

/// Fire-and-forget sink; an `Err` is logged by the caller and otherwise ignored
pub trait Notifier {
    fn notify(&self, notice: &Notice) -> Result<()>;
}

/// Reports notices through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) -> Result<()> {
        match notice {
            Notice::MissingHealthRecord { .. } => tracing::warn!("{}", notice),
            _ => tracing::info!("{}", notice),
        }
        Ok(())
    }
}

/// Deliver a notice, swallowing sink failures
pub(crate) fn deliver(notifier: &dyn Notifier, notice: Notice) {
    if let Err(e) = notifier.notify(&notice) {
        tracing::warn!("Failed to deliver notice {:?}: {}", notice, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<Notice>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: &Notice) -> Result<()> {
            self.0.borrow_mut().push(notice.clone());
            Ok(())
        }
    }

    struct Broken;

    impl Notifier for Broken {
        fn notify(&self, _notice: &Notice) -> Result<()> {
            Err(Error::Notify("sink offline".into()))
        }
    }

    #[test]
    fn test_deliver_reaches_sink() {
        let recorder = Recorder(RefCell::new(Vec::new()));
        deliver(
            &recorder,
            Notice::NothingToTreat {
                subject: "Ada".into(),
            },
        );
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_deliver_swallows_failures() {
        crate::logging::init_test();
        deliver(
            &Broken,
            Notice::MissingHealthRecord {
                subject: "Ada".into(),
            },
        );
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice::DetoxComplete {
            subject: "Ada".into(),
            removed: 3,
        };
        assert!(notice.to_string().contains("removed 3"));
    }
}
