//! Password strength metering with k-anonymity breach lookup
//!
//! This library scores password strength locally against four independent
//! rules and checks passwords against the Have I Been Pwned breach corpus
//! through its range API: only the first 5 hex characters of the SHA-1
//! digest are ever transmitted, and the returned suffix range is matched
//! locally.
//!
//! Breach checks are debounced behind a trailing-edge timer so rapid typing
//! issues at most one lookup per quiet period, and stale results are
//! discarded instead of overwriting newer ones.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use pwd_meter::{ConsoleView, HibpClient, PasswordMonitor};
//! use secrecy::SecretString;
//!
//! # async fn run() {
//! let mut monitor = PasswordMonitor::new(
//!     Arc::new(ConsoleView::new()),
//!     Arc::new(HibpClient::new()),
//!     Duration::from_millis(1000),
//! );
//!
//! // One call per input event; the breach check fires after typing pauses.
//! monitor.on_input(SecretString::new("MyP@ssw0rd!".to_string().into()));
//! # }
//! ```

// Internal modules
mod breach;
mod debounce;
mod monitor;
mod rules;
mod strength;
mod types;
mod view;

// Public API
pub use breach::{BreachError, HibpClient, RangeLookup, check_password, hash_prefix_suffix};
pub use debounce::Debouncer;
pub use monitor::PasswordMonitor;
pub use strength::score_password;
pub use types::{BreachStatus, BreachVerdict, StrengthLevel, Tone};
pub use view::{ConsoleView, View};
