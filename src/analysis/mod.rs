//! Analysis shell: request lifecycle state machine and RAG backend client

pub mod http_client;
pub mod rag_client;
pub mod shell;

pub use rag_client::RagClient;
pub use shell::{AnalyzeDecision, RequestState, Selection, Shell};
