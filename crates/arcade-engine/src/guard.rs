//! Fault containment for user-supplied code.
//!
//! [`guarded`] runs a fallible closure and folds both returned errors and
//! panics into a [`Fault`] value, so the frame loop branches on a result
//! instead of unwinding into the host.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// A contained failure from guarded code.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub message: String,
    pub panicked: bool,
}

/// Runs `f`, converting an `Err` or a panic into a `Fault`.
///
/// The closure is asserted unwind-safe: after a fault the scene freezes and
/// never reads the possibly half-updated state again for simulation.
pub fn guarded<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(Fault { message: format!("{e:#}"), panicked: false }),
        Err(payload) => Err(Fault { message: panic_message(payload.as_ref()), panicked: true }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// Monotonic scene fault flag. Once raised it cannot be lowered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FaultFlag(bool);

impl FaultFlag {
    #[inline]
    pub fn raise(&mut self) {
        self.0 = true;
    }

    #[inline]
    pub fn is_raised(self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_passes_through() {
        assert_eq!(guarded(|| Ok(7)), Ok(7));
    }

    #[test]
    fn error_becomes_fault() {
        let f = guarded::<(), _>(|| Err(anyhow::anyhow!("bad input")).map_err(|e| e.context("update")))
            .unwrap_err();
        assert_eq!(f.message, "update: bad input");
        assert!(!f.panicked);
    }

    #[test]
    fn panic_becomes_fault() {
        let f = guarded::<(), _>(|| panic!("index out of range")).unwrap_err();
        assert_eq!(f.message, "index out of range");
        assert!(f.panicked);
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let n = 3;
        let f = guarded::<(), _>(|| panic!("bad value {n}")).unwrap_err();
        assert_eq!(f.message, "bad value 3");
    }

    #[test]
    fn fault_flag_is_monotonic() {
        let mut flag = FaultFlag::default();
        assert!(!flag.is_raised());
        flag.raise();
        flag.raise();
        assert!(flag.is_raised());
    }
}
