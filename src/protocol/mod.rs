//! LayerZero protocol types and definitions
//!
//! This module contains protocol-level types shared by the topology and the
//! wiring plan: endpoint identifiers and executor option encoding.

mod endpoint_id;
mod options;

pub use endpoint_id::{EndpointId, InvalidEndpointId, Stage};
pub use options::{
    encode_options, ExecutorOption, EXECUTOR_WORKER_ID, OPTIONS_TYPE_3, OPTION_TYPE_COMPOSE,
    OPTION_TYPE_LZRECEIVE, OPTION_TYPE_ORDERED_EXECUTION,
};
