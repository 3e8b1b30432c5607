/// All panic messages used by the time_capsule contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNLOCK_TIME_NOT_FUTURE: &str = "Unlock time must be in the future";
pub const ERR_EMPTY_CONTENT_HASH: &str = "Content hash must not be empty";
pub const ERR_CAPSULE_NOT_FOUND: &str = "Capsule does not exist";
pub const ERR_NOT_CAPSULE_OWNER: &str = "Only the owner can reveal the capsule";
pub const ERR_NOT_UNLOCKED: &str = "Capsule is not yet unlocked";
pub const ERR_ALREADY_REVEALED: &str = "Capsule already revealed";
pub const ERR_NOT_REVEALED: &str = "Capsule has not been revealed yet";
pub const ERR_COUNTER_OVERFLOW: &str = "capsule counter overflow";
pub const ERR_VERSION_OVERFLOW: &str = "version overflow";
