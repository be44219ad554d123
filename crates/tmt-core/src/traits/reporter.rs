//! Status reporting trait

use crate::types::ProvisionEvent;

/// Receives the human-readable status of a provisioning run
pub trait ProvisionReporter {
    /// Handle one status event
    fn report(&mut self, event: ProvisionEvent);
}

/// Collects events, mostly useful in tests
impl ProvisionReporter for Vec<ProvisionEvent> {
    fn report(&mut self, event: ProvisionEvent) {
        self.push(event);
    }
}

impl<R: ProvisionReporter + ?Sized> ProvisionReporter for &mut R {
    fn report(&mut self, event: ProvisionEvent) {
        (**self).report(event);
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProvisionReporter for NullReporter {
    fn report(&mut self, _event: ProvisionEvent) {}
}
