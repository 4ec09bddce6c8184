//! Password monitor - wires input events to the scorer and the debounced
//! breach check.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::breach::{RangeLookup, check_password};
use crate::debounce::Debouncer;
use crate::strength::score_password;
use crate::types::BreachStatus;
use crate::view::View;

/// Reacts to password input events.
///
/// Each event scores the password synchronously and schedules a debounced
/// breach check. Checks that are already in flight run to completion, but a
/// check only renders its result while it is still the latest one: every
/// check claims a ticket from a shared generation counter and stale results
/// are discarded instead of overwriting a newer status.
pub struct PasswordMonitor {
    view: Arc<dyn View>,
    debouncer: Debouncer<SecretString>,
}

impl PasswordMonitor {
    /// Creates a monitor rendering into `view`, checking breaches through
    /// `lookup`, with a trailing-edge debounce of `wait`.
    pub fn new(view: Arc<dyn View>, lookup: Arc<dyn RangeLookup>, wait: Duration) -> Self {
        let generation = Arc::new(AtomicU64::new(0));

        let action = {
            let view = Arc::clone(&view);
            move |password: SecretString| {
                let view = Arc::clone(&view);
                let lookup = Arc::clone(&lookup);
                let generation = Arc::clone(&generation);
                Box::pin(run_breach_check(view, lookup, generation, password))
                    as Pin<Box<dyn Future<Output = ()> + Send>>
            }
        };

        Self {
            view,
            debouncer: Debouncer::new(wait, action),
        }
    }

    /// Handles one input event: renders the strength level immediately and
    /// schedules the breach check with the new value.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&mut self, password: SecretString) {
        self.view.render_strength(score_password(&password));
        self.debouncer.schedule(password);
    }

    /// Handles the visibility checkbox: reveals or masks the input.
    pub fn set_visible(&self, visible: bool) {
        self.view.set_masked(!visible);
    }
}

async fn run_breach_check(
    view: Arc<dyn View>,
    lookup: Arc<dyn RangeLookup>,
    generation: Arc<AtomicU64>,
    password: SecretString,
) {
    let ticket = generation.fetch_add(1, Ordering::SeqCst) + 1;

    // Empty input clears the status without touching the network.
    if password.expose_secret().is_empty() {
        view.render_breach(BreachStatus::Unknown);
        return;
    }

    let status = match check_password(&*lookup, &password).await {
        Ok(verdict) => BreachStatus::from(verdict),
        Err(error) => {
            tracing::error!(%error, "breach check failed");
            BreachStatus::Error
        }
    };

    if generation.load(Ordering::SeqCst) == ticket {
        view.render_breach(status);
    } else {
        tracing::debug!("discarding stale breach result");
    }
}
