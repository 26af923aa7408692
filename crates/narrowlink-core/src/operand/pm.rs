//! Direct-message operands: `<id>,<id>,...-<slug>`.

use crate::directory::UserDirectory;

use super::leading_int;

/// Resolves the participant ids of a `pm-with` operand to email addresses.
///
/// Only the text before the first `-` carries ids. Fails as a whole if any
/// id is malformed or missing from `users`.
pub fn parse_pm_operand<D: UserDirectory + ?Sized>(operand: &str, users: &D) -> Option<Vec<String>> {
    let ids = operand.split('-').next().unwrap_or_default();
    ids.split(',')
        .map(|raw| {
            let Some(id) = leading_int(raw) else {
                tracing::debug!(raw, "malformed user id in pm operand");
                return None;
            };
            match users.user(id) {
                Some(user) => Some(user.email.clone()),
                None => {
                    tracing::debug!(user_id = id, "user id not in directory");
                    None
                }
            }
        })
        .collect()
}
