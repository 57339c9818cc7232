pub mod node_kind;
pub mod node_output;
pub mod node_status;
pub mod result_view;
pub mod shared_context;
