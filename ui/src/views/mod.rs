mod about;
mod simulator;

pub use about::About;
pub use simulator::{use_scenario_session, ScenarioSession, Simulator};
