pub mod config;
pub mod state;
pub mod store;

pub mod prelude {
    pub use super::{
        config::ServerConfig,
        state::{AppState, IdGenerator},
        store::{InMemoryStore, ReceiptStore},
    };
}
