use lutemon_core::{Location, LutemonId};

/// Ordered member lists of the three locations.
///
/// Ids are unique across the table; each list keeps insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LocationTable {
    home: Vec<LutemonId>,
    training: Vec<LutemonId>,
    battle: Vec<LutemonId>,
}

impl LocationTable {
    pub fn members(&self, location: Location) -> &[LutemonId] {
        match location {
            Location::Home => &self.home,
            Location::Training => &self.training,
            Location::Battle => &self.battle,
        }
    }

    fn members_mut(&mut self, location: Location) -> &mut Vec<LutemonId> {
        match location {
            Location::Home => &mut self.home,
            Location::Training => &mut self.training,
            Location::Battle => &mut self.battle,
        }
    }

    pub fn locate(&self, id: LutemonId) -> Option<Location> {
        Location::ALL
            .into_iter()
            .find(|&location| self.members(location).contains(&id))
    }

    pub fn is_full(&self, location: Location) -> bool {
        location
            .capacity()
            .is_some_and(|capacity| self.members(location).len() >= capacity)
    }

    pub fn push(&mut self, location: Location, id: LutemonId) {
        self.members_mut(location).push(id);
    }

    /// Removes `id` from whichever list holds it.
    pub fn remove(&mut self, id: LutemonId) -> Option<Location> {
        let location = self.locate(id)?;
        self.members_mut(location).retain(|&member| member != id);
        Some(location)
    }

    pub fn len(&self) -> usize {
        self.home.len() + self.training.len() + self.battle.len()
    }
}
