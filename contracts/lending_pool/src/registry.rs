use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::events::{CollateralizedEvent, UncollateralizedEvent};
use crate::storage::Storage;

/// Insertion-ordered set of participants holding nonzero usable collateral.
pub struct CollateralRegistry;

impl CollateralRegistry {
    /// Append `participant` unless already a member. Returns whether the set changed.
    pub fn ensure_present(env: &Env, participant: &Address) -> bool {
        let mut members = Storage::get_collateralized(env);
        if members.contains(participant) {
            return false;
        }
        members.push_back(participant.clone());
        Storage::set_collateralized(env, &members);

        env.events().publish(
            (Symbol::new(env, "collateralized"), participant.clone()),
            CollateralizedEvent {
                participant: participant.clone(),
            },
        );
        true
    }

    /// Remove `participant` if a member, keeping the order of the rest.
    pub fn ensure_absent(env: &Env, participant: &Address) -> bool {
        let mut members = Storage::get_collateralized(env);
        let Some(index) = members.first_index_of(participant) else {
            return false;
        };
        members.remove(index);
        Storage::set_collateralized(env, &members);

        env.events().publish(
            (Symbol::new(env, "uncollateralized"), participant.clone()),
            UncollateralizedEvent {
                participant: participant.clone(),
            },
        );
        true
    }

    /// Bring membership in line with the participant's usable collateral.
    ///
    /// Must be called after every write to usable collateral.
    pub fn sync(env: &Env, participant: &Address, collateral: i128) -> bool {
        if collateral > 0 {
            Self::ensure_present(env, participant)
        } else {
            Self::ensure_absent(env, participant)
        }
    }

    pub fn contains(env: &Env, participant: &Address) -> bool {
        Storage::get_collateralized(env).contains(participant)
    }

    pub fn snapshot(env: &Env) -> Vec<Address> {
        Storage::get_collateralized(env)
    }
}
