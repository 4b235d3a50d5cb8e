/// Cloneable termination flag shared between the map window and the
/// polling task. A click on the map and a failed poll both trigger it;
/// the window closes on the next frame that observes it set.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    triggered: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl ShutdownSignal {
    #[must_use]
    pub fn new() -> Self {
        ShutdownSignal::default()
    }

    pub fn trigger(&self) {
        self.triggered
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::ShutdownSignal;

    #[test]
    fn when_freshly_created_then_signal_is_not_triggered() {
        assert!(!ShutdownSignal::new().is_triggered());
    }

    #[test]
    fn when_one_clone_triggers_then_all_clones_observe_it() {
        let signal = ShutdownSignal::new();
        let observer = signal.clone();
        signal.trigger();
        assert!(observer.is_triggered());
    }
}
