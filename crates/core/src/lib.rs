pub mod assertions;
pub mod browser;
pub mod config;
pub mod contract;
pub mod dom;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod form;
pub mod page;
pub mod runner;
pub mod scenario;
pub mod session;
pub mod wait;
#[cfg(feature = "webdriver")]
pub mod webdriver;

pub use browser::{Browser, Launcher};
pub use config::SuiteConfig;
pub use error::{HarnessError, Result};
pub use form::RegistrationInput;
pub use runner::{Runner, ScenarioOutcome, SuiteReport};
pub use scenario::Scenario;
pub use session::Session;

/// Run the given scenarios against a real Chrome through WebDriver.
/// This is the primary entry point for formprobe-core.
#[cfg(feature = "webdriver")]
pub async fn run_suite(config: SuiteConfig, scenarios: &[Scenario]) -> SuiteReport {
    Runner::new(webdriver::ChromeLauncher, config)
        .run_all(scenarios)
        .await
}
