pub mod generate_steps;
pub mod generate_steps_batch_rayon;
pub mod ports;
