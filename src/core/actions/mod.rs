pub mod cancellation;
pub mod generate_steps;
pub mod replay_steps;
