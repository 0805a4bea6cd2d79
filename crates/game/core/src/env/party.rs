use crate::state::EntityId;

/// Party surface: who the player controls.
pub trait PartyControl {
    /// Member currently receiving player input.
    fn avatar(&self) -> EntityId;

    /// All party members in roster order, the avatar included.
    fn members(&self) -> Vec<EntityId>;

    fn switch_active(&mut self, member: EntityId);

    /// Pulls members that wandered off on their own back into formation.
    fn force_rejoin(&mut self);
}
