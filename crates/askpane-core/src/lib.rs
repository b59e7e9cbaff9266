//! Interaction logic for the askpane front-end
//!
//! This crate holds everything that does not need a live document: the
//! request/response types for the query backend, the `QueryService`
//! collaborator trait, the `View` binding trait, and the controller that
//! wires user actions to the two HTTP calls. The browser bindings live in
//! `askpane-wasm`.

pub mod controller;
pub mod protocol;
pub mod service;
pub mod view;

// Re-export commonly used types
pub use controller::InteractionController;
pub use protocol::{ChatRequest, ChatResponse, SearchRequest, SearchResponse};
pub use service::{QueryError, QueryService, ServiceConfig};
pub use view::{TranscriptEntry, View};
