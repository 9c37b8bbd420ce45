//! Generational slab storage for gridnav nodes and links.
//!
//! Nodes and links never point at each other directly. The grid owns two
//! [`Slab`]s, one per record type, and records refer to each other through
//! typed handles ([`NodeId`](gridnav_core::NodeId),
//! [`LinkId`](gridnav_core::LinkId)).
//!
//! # Handle validity
//!
//! Each slot carries a generation counter that is bumped when its value is
//! removed. A handle resolves only while its generation matches the slot,
//! so a removed node's handle stays dead even after the slot is reused.
//!
//! ```text
//! Slab<K, T>
//! ├── slots: Vec<Slot<T>>   (generation + Option<T>)
//! └── free_list: Vec<u32>   (vacant slot indices, LIFO reuse)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod key;
pub mod slab;

pub use error::ArenaError;
pub use key::SlotKey;
pub use slab::Slab;
