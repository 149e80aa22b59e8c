pub mod epsilon_greedy;
mod policy;

pub use epsilon_greedy::{greedy_arm, lowest_argmax, EpsilonGreedy};
pub use policy::{Policy, Selection};
