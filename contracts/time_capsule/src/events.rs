use soroban_sdk::{Address, BytesN, Env, String, Symbol};

/// Emitted once, from the constructor.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The contract owner
pub fn emit_initialized(e: &Env, owner: &Address) {
    let topics = (Symbol::new(e, "initialized"),);
    e.events().publish(topics, owner.clone());
}

/// Emitted when a new capsule is created.
///
/// # Topics
/// * `Symbol` - "capsule_created"
/// * `u64` - The capsule id
///
/// # Data
/// * `Address` - The capsule owner
/// * `u64` - The unlock timestamp
pub fn emit_capsule_created(e: &Env, id: u64, owner: &Address, unlock_time: u64) {
    let topics = (Symbol::new(e, "capsule_created"), id);
    let data = (owner.clone(), unlock_time);
    e.events().publish(topics, data);
}

/// Emitted when the owner reveals a capsule.
///
/// # Topics
/// * `Symbol` - "capsule_revealed"
/// * `u64` - The capsule id
///
/// # Data
/// * `Address` - The capsule owner
/// * `String` - The now public content hash
pub fn emit_capsule_revealed(e: &Env, id: u64, owner: &Address, content_hash: &String) {
    let topics = (Symbol::new(e, "capsule_revealed"), id);
    let data = (owner.clone(), content_hash.clone());
    e.events().publish(topics, data);
}

/// Emitted when contract ownership changes hands.
///
/// # Topics
/// * `Symbol` - "ownership_transferred"
///
/// # Data
/// * `Address` - The previous owner
/// * `Address` - The new owner
pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    let topics = (Symbol::new(e, "ownership_transferred"),);
    let data = (previous.clone(), new_owner.clone());
    e.events().publish(topics, data);
}

/// Emitted right before the contract code is swapped.
///
/// # Topics
/// * `Symbol` - "upgraded"
///
/// # Data
/// * `BytesN<32>` - Hash of the new wasm
/// * `u32` - The new implementation version
pub fn emit_upgraded(e: &Env, new_wasm_hash: &BytesN<32>, version: u32) {
    let topics = (Symbol::new(e, "upgraded"),);
    let data = (new_wasm_hash.clone(), version);
    e.events().publish(topics, data);
}
