pub mod hospital;
pub mod safety;
