#![allow(dead_code)]

pub mod recording_messenger;
pub mod scripted_source;
