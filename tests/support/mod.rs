#![allow(dead_code)]

pub mod architecture;
pub mod invariants;
pub mod model;
pub mod ops;
