//! Staff rotation
//!
//! Kitchen and waiter duty go to whoever has served least. The remainder
//! pool is ordered once per round and both roles draw from its front.

use shared::{Assignment, PersonId, Role};

use super::person::Roster;
use super::state::{RoundState, StaffEntry};
use crate::error::{OrchestratorError, OrchestratorResult};

/// Stable sort of the remainder pool, fewest staff turns first
pub fn order_remainder(state: &mut RoundState, roster: &Roster) -> OrchestratorResult<()> {
    let mut keyed = state
        .remainder
        .iter()
        .map(|id| roster.get(*id).map(|person| (person.times_served, *id)))
        .collect::<OrchestratorResult<Vec<_>>>()?;
    keyed.sort_by_key(|(times_served, _)| *times_served);
    state.remainder = keyed.into_iter().map(|(_, id)| id).collect();
    Ok(())
}

/// Draw `n` people from the front of the remainder pool into `role`
pub fn draw(state: &mut RoundState, roster: &mut Roster, n: usize, role: Role) -> OrchestratorResult<Vec<PersonId>> {
    if state.remainder.len() < n {
        return Err(OrchestratorError::StaffShortage {
            role,
            needed: n,
            available: state.remainder.len(),
        });
    }

    let drawn: Vec<PersonId> = state.remainder.drain(..n).collect();
    for id in &drawn {
        let person = roster.get_mut(*id)?;
        person.current_assignment = Some(Assignment::Staff(role));
        person.times_served += 1;
        state.staff.push(StaffEntry { person: *id, role });
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::person::RosterEntry;

    fn roster_with_turns(turns: &[u32]) -> Roster {
        let entries: Vec<RosterEntry> = (0..turns.len())
            .map(|i| RosterEntry::new(format!("Last{i}"), format!("First{i}")))
            .collect();
        let mut roster = Roster::from_entries(&entries);
        for (person, turns) in roster.iter_mut().zip(turns) {
            person.times_served = *turns;
        }
        roster
    }

    fn state_with_remainder(ids: &[u32]) -> RoundState {
        let mut state = RoundState::new(1, 0);
        state.remainder = ids.iter().map(|id| PersonId(*id)).collect();
        state
    }

    #[test]
    fn test_order_remainder_is_stable_ascending() {
        let roster = roster_with_turns(&[2, 0, 1, 0]);
        let mut state = state_with_remainder(&[1, 2, 3, 4]);

        order_remainder(&mut state, &roster).unwrap();

        let order: Vec<u32> = state.remainder.iter().map(|id| id.value()).collect();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_kitchen_then_waiters_from_same_ordering() {
        let mut roster = roster_with_turns(&[1, 0, 2, 0, 1]);
        let mut state = state_with_remainder(&[1, 2, 3, 4, 5]);
        order_remainder(&mut state, &roster).unwrap();

        let kitchen = draw(&mut state, &mut roster, 2, Role::Kitchen).unwrap();
        let waiters = draw(&mut state, &mut roster, 2, Role::Waiter).unwrap();

        assert_eq!(kitchen, vec![PersonId(2), PersonId(4)]);
        assert_eq!(waiters, vec![PersonId(1), PersonId(5)]);
        assert_eq!(state.remainder, vec![PersonId(3)]);
        assert_eq!(state.staff.len(), 4);
    }

    #[test]
    fn test_draw_updates_label_and_count() {
        let mut roster = roster_with_turns(&[0]);
        let mut state = state_with_remainder(&[1]);

        draw(&mut state, &mut roster, 1, Role::Waiter).unwrap();

        let person = roster.get(PersonId(1)).unwrap();
        assert_eq!(person.times_served, 1);
        assert_eq!(person.current_assignment, Some(Assignment::Staff(Role::Waiter)));
    }

    #[test]
    fn test_draw_zero_is_noop() {
        let mut roster = roster_with_turns(&[0]);
        let mut state = state_with_remainder(&[1]);

        assert!(draw(&mut state, &mut roster, 0, Role::Kitchen).unwrap().is_empty());
        assert_eq!(state.remainder.len(), 1);
    }

    #[test]
    fn test_shortage_is_reported() {
        let mut roster = roster_with_turns(&[0, 0]);
        let mut state = state_with_remainder(&[1, 2]);

        let result = draw(&mut state, &mut roster, 3, Role::Kitchen);
        assert!(matches!(
            result,
            Err(OrchestratorError::StaffShortage { needed: 3, available: 2, .. })
        ));
    }
}
