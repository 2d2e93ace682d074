/// Ownership & authorization policy for track operations.
///
/// The middleware already guarantees a resolved identity by the time these
/// checks run; this module decides what that identity may see and mutate.
use crate::config::PolicySettings;
use aceplay_core::{Track, UserId};

#[derive(Debug, Clone, Copy)]
pub struct TrackPolicy {
    owner_scoped_list: bool,
    owner_scoped_mutations: bool,
}

impl TrackPolicy {
    pub fn new(settings: &PolicySettings) -> Self {
        Self {
            owner_scoped_list: settings.owner_scoped_list,
            owner_scoped_mutations: settings.owner_scoped_mutations,
        }
    }

    /// The owner the track listing should be restricted to, if any.
    pub fn list_scope(&self, caller: UserId) -> Option<UserId> {
        self.owner_scoped_list.then_some(caller)
    }

    /// Whether the caller may mutate (patch/delete) the given track.
    ///
    /// Under unscoped mutations any authenticated caller may mutate any track
    /// by id. Under scoped mutations a track with an owner is mutable only by
    /// that owner; ownerless rows stay mutable by any authenticated caller.
    pub fn may_mutate(&self, caller: UserId, track: &Track) -> bool {
        if !self.owner_scoped_mutations {
            return true;
        }
        match track.user_id {
            Some(owner) => owner == caller,
            None => true,
        }
    }
}
