//! Simulador de memória virtual com paginação por demanda, todo em
//! estruturas comuns de espaço de usuário. A substituição é FIFO, com
//! write-back de páginas sujas no despejo.

pub mod backing_store;
pub mod error;
pub mod frame_store;
pub mod mmu;
pub mod page_loader;
pub mod page_replacer;
pub mod page_table;

pub use error::{VmError, VmResult};
