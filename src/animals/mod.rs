//! Animal records and the page-side API used to reach them.
//!
//! The page workflow never talks to the upstream service directly; it goes
//! through an [`AnimalsApi`], which is either the HTTP proxy seen from the
//! outside (`HttpAnimalsApi`) or the in-process proxy used by the server-side
//! page (`http::page::ProxyAnimalsApi`).

pub mod client;
pub mod types;

pub use client::{decode_list, expect_ok, AnimalsApi, FetchError, HttpAnimalsApi, ANIMALS_PATH};
pub use types::{Animal, NewAnimal};
