//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `connote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use connote_core::{default_store_path, JsonNotesRepository, SessionStore};

fn main() {
    println!("connote_core version={}", connote_core::core_version());

    let base_dir = std::env::temp_dir().join("connote-smoke");
    let repo = JsonNotesRepository::new(default_store_path(&base_dir));
    let store = SessionStore::open(repo);
    println!("connote_core sessions={}", store.sessions().len());
}
