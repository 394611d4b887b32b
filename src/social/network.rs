//! Friendship-network structure — users plus symmetric adjacency sets.

use std::collections::HashMap;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{GraphError, GraphResult, User, UserId};

/// A social network of users connected by mutual friendships.
///
/// Friendship is symmetric: id A is adjacent to B iff B is adjacent to A.
/// Friendship sets are insertion-ordered, so queries are deterministic for a
/// fixed construction sequence.
pub struct FriendshipNetwork {
    /// All users, indexed by id.
    users: HashMap<UserId, User>,
    /// Adjacency: user id -> insertion-ordered set of friend ids.
    friendships: HashMap<UserId, Vec<UserId>>,
    /// Most recently assigned user id (0 when empty).
    last_id: UserId,
}

impl FriendshipNetwork {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            friendships: HashMap::new(),
            last_id: 0,
        }
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of friendships (each mutual pair counted once).
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Look up a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Iterate over all user ids, in no particular order.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    /// Friend set of a user, in insertion order.
    pub fn friends_of(&self, id: UserId) -> GraphResult<&[UserId]> {
        self.friendships
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownUser(id))
    }

    /// Create a new user with a sequential integer id, starting at 1.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        self.users.insert(self.last_id, User::new(name));
        self.friendships.insert(self.last_id, Vec::new());
        self.last_id
    }

    /// Create a bidirectional friendship between two existing users.
    ///
    /// Self-friendship and an already-existing friendship are reported as
    /// warnings and leave the network unchanged, returning `Ok(false)`; the
    /// random-population loop generates such collisions routinely. A missing
    /// user id is a caller error. Both adjacency sides are updated together.
    pub fn add_friendship(&mut self, user_id: UserId, friend_id: UserId) -> GraphResult<bool> {
        if !self.users.contains_key(&user_id) {
            return Err(GraphError::UnknownUser(user_id));
        }
        if !self.users.contains_key(&friend_id) {
            return Err(GraphError::UnknownUser(friend_id));
        }

        if user_id == friend_id {
            warn!("user {} cannot be friends with themselves", user_id);
            return Ok(false);
        }

        let exists = self
            .friendships
            .get(&user_id)
            .is_some_and(|f| f.contains(&friend_id))
            || self
                .friendships
                .get(&friend_id)
                .is_some_and(|f| f.contains(&user_id));
        if exists {
            warn!(
                "friendship between {} and {} already exists",
                user_id, friend_id
            );
            return Ok(false);
        }

        self.friendships.entry(user_id).or_default().push(friend_id);
        self.friendships.entry(friend_id).or_default().push(user_id);
        Ok(true)
    }

    /// Clear all users and friendships and restart id assignment at 1.
    pub fn reset(&mut self) {
        self.users.clear();
        self.friendships.clear();
        self.last_id = 0;
    }

    /// Reset the network, then create `num_users` users with randomly
    /// distributed friendships averaging `avg_friendships` per user.
    ///
    /// The pseudorandom source is supplied by the caller; a seeded rng
    /// reproduces the exact same network.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        num_users: usize,
        avg_friendships: usize,
        rng: &mut R,
    ) -> GraphResult<()> {
        self.reset();

        for i in 0..num_users {
            self.add_user(format!("User {}", i));
        }

        // Every unordered pair once, smaller id first
        let mut possible: Vec<(UserId, UserId)> = Vec::new();
        for user_id in 1..=self.last_id {
            for friend_id in (user_id + 1)..=self.last_id {
                possible.push((user_id, friend_id));
            }
        }
        possible.shuffle(rng);

        // Each successful add creates two adjacency entries, so half the
        // requested total suffices
        let target = num_users * avg_friendships / 2;
        for &(user_id, friend_id) in possible.iter().take(target) {
            self.add_friendship(user_id, friend_id)?;
        }

        Ok(())
    }
}

impl Default for FriendshipNetwork {
    fn default() -> Self {
        Self::new()
    }
}
