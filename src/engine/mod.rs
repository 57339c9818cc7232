pub mod capability;
pub mod driver;
pub mod engine;
pub mod entity_decode;
pub mod error;
pub mod http;
pub mod llm_client;
pub mod node;
pub mod nodes;
pub mod protocol;
pub mod registry;
pub mod sentiment;
pub mod speech_client;
pub mod translate_client;
