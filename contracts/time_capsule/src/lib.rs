//! TimeCapsule Contract
//!
//! Lets any address commit an opaque content hash together with a future
//! unlock time. Once the ledger clock reaches that time the creator may reveal
//! the capsule, after which its content is readable by everyone.
//!
//! ## Key design decisions
//!
//! - **Sequential ids**: capsules are numbered 1, 2, 3 … from a checked counter.
//! - **Owner-only reveal**: `caller.require_auth()` plus a match against the
//!   stored capsule owner.
//! - **Sealed reads**: neither `get_capsule_content` nor `get_capsule` exposes
//!   the hash before reveal.
//! - **Atomic deploy**: the owner is fixed by the constructor, so there is no
//!   window between deployment and initialization.
//! - **In-place upgrades**: `upgrade` swaps the wasm behind the same address;
//!   instance and persistent storage are kept as-is.

#![no_std]

mod errors;
mod events;
mod types;

use errors::*;
pub use types::{Capsule, CapsuleStatus};
use types::DataKey;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};



#[cfg(test)]
mod test_events;

// ─── TTL constants ─────────────────────────────────────────────────────────

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;
/// Instance entries are bumped once they drop a day below the target.
const INSTANCE_BUMP_THRESHOLD: u32 = BUMP_TARGET - BUMP_THRESHOLD;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, BUMP_TARGET);
}

fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn require_owner(e: &Env) -> Address {
    let owner = get_owner(e);
    owner.require_auth();
    owner
}

fn load_capsule(e: &Env, id: u64) -> Capsule {
    let key = DataKey::Capsule(id);
    let storage = e.storage().persistent();
    let capsule: Capsule = storage
        .get(&key)
        .unwrap_or_else(|| panic!("{}", ERR_CAPSULE_NOT_FOUND));
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    capsule
}

fn save_capsule(e: &Env, capsule: &Capsule) {
    let key = DataKey::Capsule(capsule.id);
    let storage = e.storage().persistent();
    storage.set(&key, capsule);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read the id list of `owner` and bump its TTL. Empty if the address never
/// created a capsule.
fn load_owner_capsules(e: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnerCapsules(owner.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, Vec<u64>>(&key) {
        Some(ids) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            ids
        }
        None => Vec::new(e),
    }
}

fn save_owner_capsules(e: &Env, owner: &Address, ids: &Vec<u64>) {
    let key = DataKey::OwnerCapsules(owner.clone());
    let storage = e.storage().persistent();
    storage.set(&key, ids);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn status_at(capsule: &Capsule, now: u64) -> CapsuleStatus {
    if capsule.revealed {
        CapsuleStatus::Revealed
    } else if now >= capsule.unlock_time {
        CapsuleStatus::Unlockable
    } else {
        CapsuleStatus::Locked
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TimeCapsule;

#[contractimpl]
impl TimeCapsule {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// Runs once, as part of deployment. Stores `owner` and starts the id
    /// counter at 0.
    pub fn __constructor(e: Env, owner: Address) {
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::CapsuleCounter, &0_u64);
        e.storage().instance().set(&DataKey::Version, &1_u32);
        bump_instance(&e);

        events::emit_initialized(&e, &owner);
    }

    /// Returns the contract owner.
    pub fn owner(e: Env) -> Address {
        get_owner(&e)
    }

    /// Hand contract ownership to `new_owner`. Current owner only.
    pub fn transfer_ownership(e: Env, new_owner: Address) {
        let previous = require_owner(&e);
        bump_instance(&e);
        e.storage().instance().set(&DataKey::Owner, &new_owner);
        events::emit_ownership_transferred(&e, &previous, &new_owner);
    }

    // ── Upgrades ───────────────────────────────────────────────────────────

    /// Replace the contract code with the already-uploaded wasm `new_wasm_hash`.
    ///
    /// The contract address, owner, counter and every capsule are preserved.
    /// Owner only.
    pub fn upgrade(e: Env, new_wasm_hash: BytesN<32>) {
        require_owner(&e);
        bump_instance(&e);

        let version: u32 = e.storage().instance().get(&DataKey::Version).unwrap_or(1);
        let next = version.checked_add(1).expect(ERR_VERSION_OVERFLOW);
        e.storage().instance().set(&DataKey::Version, &next);

        events::emit_upgraded(&e, &new_wasm_hash, next);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    /// Implementation version: 1 after deploy, +1 per upgrade.
    pub fn version(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::Version)
            .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
    }

    // ── Capsule lifecycle ──────────────────────────────────────────────────

    /// Seal `content_hash` until `unlock_time`.
    ///
    /// Requirements:
    /// - `unlock_time` strictly after the current ledger timestamp
    /// - non-empty `content_hash`
    ///
    /// Returns the new capsule id.
    pub fn create_capsule(e: Env, creator: Address, content_hash: String, unlock_time: u64) -> u64 {
        creator.require_auth();
        bump_instance(&e);

        let now = e.ledger().timestamp();
        if unlock_time <= now {
            panic!("{}", ERR_UNLOCK_TIME_NOT_FUTURE);
        }
        if content_hash.len() == 0 {
            panic!("{}", ERR_EMPTY_CONTENT_HASH);
        }

        let last: u64 = e
            .storage()
            .instance()
            .get(&DataKey::CapsuleCounter)
            .unwrap_or(0);
        let id = last.checked_add(1).expect(ERR_COUNTER_OVERFLOW);
        e.storage().instance().set(&DataKey::CapsuleCounter, &id);

        let capsule = Capsule {
            id,
            owner: creator.clone(),
            content_hash,
            unlock_time,
            created_at: now,
            revealed: false,
        };
        save_capsule(&e, &capsule);

        let mut ids = load_owner_capsules(&e, &creator);
        ids.push_back(id);
        save_owner_capsules(&e, &creator, &ids);

        events::emit_capsule_created(&e, id, &creator, unlock_time);
        id
    }

    /// Reveal capsule `id`, making its content public.
    ///
    /// Panics, in this order, if the capsule does not exist, `caller` is not
    /// its owner, the unlock time has not been reached, or it is already
    /// revealed.
    pub fn reveal_capsule(e: Env, caller: Address, id: u64) {
        let mut capsule = load_capsule(&e, id);

        caller.require_auth();
        if caller != capsule.owner {
            panic!("{}", ERR_NOT_CAPSULE_OWNER);
        }
        if e.ledger().timestamp() < capsule.unlock_time {
            panic!("{}", ERR_NOT_UNLOCKED);
        }
        if capsule.revealed {
            panic!("{}", ERR_ALREADY_REVEALED);
        }

        capsule.revealed = true;
        save_capsule(&e, &capsule);
        bump_instance(&e);

        events::emit_capsule_revealed(&e, id, &capsule.owner, &capsule.content_hash);
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Content hash of a revealed capsule.
    /// Panics while the capsule is still sealed.
    pub fn get_capsule_content(e: Env, id: u64) -> String {
        let capsule = load_capsule(&e, id);
        if !capsule.revealed {
            panic!("{}", ERR_NOT_REVEALED);
        }
        capsule.content_hash
    }

    /// Full capsule record. `content_hash` is empty until the capsule is revealed.
    pub fn get_capsule(e: Env, id: u64) -> Capsule {
        let mut capsule = load_capsule(&e, id);
        if !capsule.revealed {
            capsule.content_hash = String::from_str(&e, "");
        }
        capsule
    }

    /// Where capsule `id` sits in its lifecycle at the current ledger time.
    pub fn get_status(e: Env, id: u64) -> CapsuleStatus {
        let capsule = load_capsule(&e, id);
        status_at(&capsule, e.ledger().timestamp())
    }

    /// Seconds until capsule `id` can be revealed; 0 once unlockable.
    pub fn get_time_remaining(e: Env, id: u64) -> u64 {
        let capsule = load_capsule(&e, id);
        capsule.unlock_time.saturating_sub(e.ledger().timestamp())
    }

    /// Number of capsules created so far.
    pub fn capsule_count(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&DataKey::CapsuleCounter)
            .unwrap_or(0)
    }

    /// Ids of every capsule created by `owner`, oldest first.
    pub fn get_owner_capsules(e: Env, owner: Address) -> Vec<u64> {
        load_owner_capsules(&e, &owner)
    }
}
