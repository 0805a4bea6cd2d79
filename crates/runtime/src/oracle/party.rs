use game_core::{EntityId, PartyControl};

/// Fixed roster whose first member starts as the avatar.
#[derive(Debug, Clone, Default)]
pub struct PartyRoster {
    members: Vec<EntityId>,
    active: usize,
    rejoins: u32,
}

impl PartyRoster {
    pub fn new(members: Vec<EntityId>) -> Self {
        Self {
            members,
            active: 0,
            rejoins: 0,
        }
    }

    /// How many times the engine pulled the party back together.
    pub fn rejoin_count(&self) -> u32 {
        self.rejoins
    }
}

impl PartyControl for PartyRoster {
    fn avatar(&self) -> EntityId {
        self.members.get(self.active).copied().unwrap_or(EntityId(0))
    }

    fn members(&self) -> Vec<EntityId> {
        self.members.clone()
    }

    fn switch_active(&mut self, member: EntityId) {
        if let Some(index) = self.members.iter().position(|&m| m == member) {
            self.active = index;
        }
    }

    fn force_rejoin(&mut self) {
        self.rejoins += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_to_a_stranger_keeps_the_avatar() {
        let mut roster = PartyRoster::new(vec![EntityId(0), EntityId(1)]);
        roster.switch_active(EntityId(1));
        assert_eq!(roster.avatar(), EntityId(1));
        roster.switch_active(EntityId(9));
        assert_eq!(roster.avatar(), EntityId(1));
    }
}
