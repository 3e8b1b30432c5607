use soroban_sdk::{contracttype, Address, String};

// ─── Capsule state ─────────────────────────────────────────────────────────

/// A committed content hash that stays sealed until `unlock_time`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Capsule {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// The address that created the capsule; the only one allowed to reveal it.
    pub owner: Address,
    /// Opaque content commitment.
    pub content_hash: String,
    /// Ledger timestamp from which the capsule may be revealed.
    pub unlock_time: u64,
    /// Ledger timestamp at the moment the capsule was created.
    pub created_at: u64,
    /// true once the owner has revealed the capsule.
    pub revealed: bool,
}

/// Lifecycle position of a capsule relative to the current ledger time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CapsuleStatus {
    /// Unlock time not reached yet.
    Locked = 0,
    /// Unlock time reached, owner has not revealed.
    Unlockable = 1,
    /// Revealed; content is public.
    Revealed = 2,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract owner, set by the constructor.
    Owner,
    /// Number of capsules created so far (also the last assigned id).
    CapsuleCounter,
    /// Implementation version, bumped on every upgrade.
    Version,
    /// Capsule record by id (persistent).
    Capsule(u64),
    /// Ids of the capsules created by an address (persistent).
    OwnerCapsules(Address),
}
