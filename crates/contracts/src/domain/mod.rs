pub mod chat;
pub mod knowledge_base;
