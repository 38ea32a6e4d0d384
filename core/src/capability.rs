/// Outcome of a platform capability check. Core logic never queries
/// platform permission APIs directly; an adapter answers through
/// [`CapabilityProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Capability {
    Granted,
    Denied,
    /// The platform does not gate this capability behind a prompt.
    NotNeeded,
}

impl Capability {
    pub fn is_usable(self) -> bool {
        matches!(self, Capability::Granted | Capability::NotNeeded)
    }
}

/// Platform adapter reporting capability state for the inputs the app
/// cares about.
pub trait CapabilityProbe {
    fn camera(&self) -> Capability;
    fn location(&self) -> Capability;
    fn orientation(&self) -> Capability;
}

/// Capability state as checked when the app starts or before entering a
/// capture session. Camera is the only hard requirement; location and
/// orientation merely enrich the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub camera: Capability,
    pub location: Capability,
    pub orientation: Capability,
}

impl CapabilitySnapshot {
    pub fn probe(probe: &impl CapabilityProbe) -> CapabilitySnapshot {
        CapabilitySnapshot {
            camera: probe.camera(),
            location: probe.location(),
            orientation: probe.orientation(),
        }
    }

    pub fn can_continue(&self) -> bool {
        self.camera.is_usable()
    }

    pub fn tilt_input_available(&self) -> bool {
        self.orientation.is_usable()
    }

    pub fn location_available(&self) -> bool {
        self.location.is_usable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(Capability, Capability, Capability);

    impl CapabilityProbe for FixedProbe {
        fn camera(&self) -> Capability {
            self.0
        }
        fn location(&self) -> Capability {
            self.1
        }
        fn orientation(&self) -> Capability {
            self.2
        }
    }

    #[test]
    fn camera_is_the_only_hard_requirement() {
        let snapshot = CapabilitySnapshot::probe(&FixedProbe(
            Capability::Granted,
            Capability::Denied,
            Capability::Denied,
        ));
        assert!(snapshot.can_continue());
        assert!(!snapshot.location_available());
        assert!(!snapshot.tilt_input_available());

        let snapshot = CapabilitySnapshot::probe(&FixedProbe(
            Capability::Denied,
            Capability::Granted,
            Capability::Granted,
        ));
        assert!(!snapshot.can_continue());
    }

    #[test]
    fn not_needed_counts_as_usable() {
        assert!(Capability::NotNeeded.is_usable());
        assert!(Capability::Granted.is_usable());
        assert!(!Capability::Denied.is_usable());
    }
}
