use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shutdown flag flipped by SIGTERM/SIGINT/SIGHUP and polled by the input
/// thread.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the process signal handlers. Registration failures are
    /// logged and otherwise ignored; keyboard quit still works.
    pub fn install_signal_handlers(&self) {
        for signal in [
            signal_hook::consts::SIGTERM,
            signal_hook::consts::SIGINT,
            signal_hook::consts::SIGHUP,
        ] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&self.flag)) {
                tracing::warn!(signal, error = %err, "failed to register signal handler");
            }
        }
    }

    pub fn signal(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
