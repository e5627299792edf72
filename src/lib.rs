pub mod fly_weight;
pub mod null_object;
pub mod decorator;
pub mod interpreter;
