// src/hierarchy/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod parent;

pub use parent::geohash_to_parent;
