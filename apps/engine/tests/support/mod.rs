#![allow(dead_code)]

pub mod ai_doubles;
pub mod rooms;
