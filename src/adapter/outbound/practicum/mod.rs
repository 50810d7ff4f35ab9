//! Yandex Practicum homework status API.

mod client;

pub use client::PracticumClient;
