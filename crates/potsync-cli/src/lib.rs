#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod commands;
pub mod error;
pub mod pot;
pub mod remote;
pub mod service;
pub mod utils;
