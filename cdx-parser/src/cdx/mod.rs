//! Main module for cdx library functionality

pub mod classifying;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod rendering;
pub mod scanning;
pub mod testing;
pub mod token;
pub mod transforms;
