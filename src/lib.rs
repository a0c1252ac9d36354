//! Crate root module declarations for the Neural Knight engine core.
//!
//! This file exposes the subsystems (board codec, move generation, state
//! transition, lookahead, evaluation, selection, agents) and the three
//! operations outer layers call through `engine_api`.

pub mod board_codec {
    pub mod board;
    pub mod move_tables;
    pub mod piece_codes;
    pub mod render;
    pub mod serialization;
}

pub mod move_generation {
    pub mod legality;
    pub mod move_generator;
    pub mod pseudo_moves;
}

pub mod transition {
    pub mod mutation;
    pub mod position;
}

pub mod lookahead {
    pub mod check_oracle;
    pub mod expander;
}

pub mod evaluation {
    pub mod board_scoring;
    pub mod strategy;
    pub mod weights;
}

pub mod selection {
    pub mod leading_set;
    pub mod worker_pool;
}

pub mod agents {
    pub mod agent_config;
    pub mod agent_trait;
    pub mod registry;
    pub mod weight_agent;
}

pub mod utils {
    pub mod self_play;
}

pub mod chess_errors;
pub mod engine_api;
